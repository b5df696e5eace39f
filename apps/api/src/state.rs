use std::sync::Arc;

use sqlx::PgPool;

use crate::analysis::orchestrator::AnalysisOrchestrator;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Owns the skill extractor, the embedding model and the recommendation tables.
    pub orchestrator: Arc<AnalysisOrchestrator>,
}
