// Engine data model: aptitude profile, career catalog entries, knowledge-test results.
// All types are plain values; nothing here holds shared or global state.

pub mod career;
pub mod knowledge;
pub mod profile;
