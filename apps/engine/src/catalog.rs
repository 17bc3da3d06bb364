//! Decoding of data-layer payloads into engine inputs.
//!
//! The backend answers either with a bare JSON array or with its response envelope
//! `{ "exito": bool, "datos": [...] }`. Both shapes are accepted. An envelope with
//! `exito: false` decodes as an empty list. Anything else is an error: a payload that is
//! not JSON, has the wrong top-level shape, or is an object carrying no list under
//! `datos` / `resultados` / `carreras`. Per-item gaps (like a career without a
//! requirement vector) decode fine and are dealt with by the ranking engine.

use serde::de::{DeserializeOwned, Error as _};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::errors::EngineError;
use crate::matching::normalizer::normalize;
use crate::models::career::CareerCandidate;
use crate::models::knowledge::KnowledgeAreaResult;
use crate::models::profile::ProfileVector;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Payload<T> {
    Bare(Vec<T>),
    Envelope {
        #[serde(default = "default_exito")]
        exito: bool,
        // None when the object carries no list at all
        #[serde(alias = "resultados", alias = "carreras")]
        datos: Option<Vec<T>>,
    },
}

fn default_exito() -> bool {
    true
}

fn decode_list<T: DeserializeOwned>(json: &str, what: &str) -> Result<Vec<T>, EngineError> {
    match serde_json::from_str::<Payload<T>>(json) {
        Ok(Payload::Bare(items)) => Ok(items),
        Ok(Payload::Envelope { exito: false, .. }) => {
            tracing::warn!("{what} payload reported failure; treating as empty");
            Ok(Vec::new())
        }
        Ok(Payload::Envelope { datos: Some(items), .. }) => Ok(items),
        Ok(Payload::Envelope { datos: None, .. }) => Err(EngineError::Catalog(
            serde_json::Error::custom(format!(
                "{what} payload is an object without a `datos`, `resultados` or `carreras` list"
            )),
        )),
        // untagged errors are opaque; re-run as a plain array for a useful message
        Err(_) => Ok(serde_json::from_str::<Vec<T>>(json)?),
    }
}

/// Decodes the career catalog.
pub fn parse_catalog(json: &str) -> Result<Vec<CareerCandidate>, EngineError> {
    decode_list(json, "career catalog")
}

/// Decodes the knowledge-test results.
pub fn parse_knowledge_results(json: &str) -> Result<Vec<KnowledgeAreaResult>, EngineError> {
    decode_list(json, "knowledge results")
}

/// Decodes a raw aptitude map. Any JSON object is accepted and normalized; a payload
/// that is not an object is an error.
pub fn parse_profile(json: &str) -> Result<ProfileVector, EngineError> {
    let raw: Map<String, Value> = serde_json::from_str(json)?;
    Ok(normalize(&raw))
}
