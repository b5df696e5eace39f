// Résumé-vs-role analysis: orchestration, role embedding cache, history persistence.
// Embedding work runs on the blocking pool; the orchestrator itself holds no mutable state.

pub mod cache;
pub mod handlers;
pub mod orchestrator;
pub mod store;
