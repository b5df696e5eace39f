// Deterministic matching primitives: taxonomy, skill extraction, similarity, gap analysis.
// Nothing in here touches the database or the embedding model.

pub mod extractor;
pub mod gap;
pub mod profile;
pub mod similarity;
pub mod taxonomy;
