mod analysis;
mod config;
mod db;
mod embedding;
mod errors;
mod matching;
mod models;
mod recommendation;
mod resumes;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::cache::PgEmbeddingCache;
use crate::analysis::orchestrator::AnalysisOrchestrator;
use crate::config::Config;
use crate::db::{create_pool, init_schema};
use crate::embedding::{Embedder, MiniLmEmbedder};
use crate::matching::extractor::SkillExtractor;
use crate::matching::taxonomy::SkillTaxonomy;
use crate::recommendation::curriculum::Curriculum;
use crate::recommendation::RecommendationEngine;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JobFit API v{}", env!("CARGO_PKG_VERSION"));

    // Static data tables
    let taxonomy = SkillTaxonomy::load(config.skill_taxonomy_path.as_deref())?;
    let extractor = Arc::new(SkillExtractor::new(&taxonomy)?);
    info!(
        "Skill taxonomy loaded: {} categories, {} skills",
        taxonomy.categories().len(),
        taxonomy.skill_count()
    );

    let curriculum = Curriculum::load(config.curriculum_path.as_deref())?;
    info!("Curriculum loaded: {} skills", curriculum.len());

    // Embedding model (fatal if it cannot be loaded; may download on first start)
    let cache_dir = config.embedding_cache_dir.clone();
    let embedder = tokio::task::spawn_blocking(move || MiniLmEmbedder::new(cache_dir))
        .await
        .context("embedding model loader panicked")?
        .context("embedding model is required to start")?;
    info!(
        "Embedding model ready: {} ({} dims)",
        embedder.model_name(),
        embedder.dimension()
    );

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;
    init_schema(&db).await?;

    let orchestrator = AnalysisOrchestrator::new(
        extractor,
        Arc::new(embedder),
        RecommendationEngine::new(curriculum),
        Arc::new(PgEmbeddingCache::new(db.clone())),
    );

    // Build app state
    let state = AppState {
        db,
        config: config.clone(),
        orchestrator: Arc::new(orchestrator),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the frontend host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
