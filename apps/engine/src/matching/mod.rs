// Career matching pipeline.
// normalize → rank (injected sub-score strategy) → classify → select top N → summarise.
// Everything here is pure and synchronous; no shared state between calls.

pub mod ikigai;
pub mod normalizer;
pub mod ranking;
pub mod selector;
pub mod sub_scores;
pub mod summary;
