//! Résumé ingestion: document text → skills, education, experience, embedding → stored row.

pub mod document;
pub mod handlers;
pub mod store;

use serde::Serialize;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::analysis::orchestrator::{AnalysisOrchestrator, CandidateInput, StoredCandidate};
use crate::errors::AppError;
use crate::models::resume::ResumeRow;

#[derive(Debug, Serialize)]
pub struct ResumeIngestResponse {
    pub resume_id: Uuid,
    pub skills: Vec<String>,
    pub skill_count: usize,
    pub education: Vec<String>,
    pub experience: Vec<String>,
}

/// Processes extracted résumé text and persists the result.
pub async fn ingest_resume(
    pool: &PgPool,
    orchestrator: &AnalysisOrchestrator,
    user_id: Uuid,
    file_name: &str,
    text: &str,
) -> Result<ResumeIngestResponse, AppError> {
    let profile = orchestrator.extractor().profile(text);
    let embedding = orchestrator.encode(&profile.text).await?;

    let resume_id =
        store::insert_resume(pool, user_id, file_name, &profile, &embedding.to_bytes()).await?;

    info!(
        %resume_id,
        %user_id,
        skills = profile.skills.len(),
        "resume processed"
    );

    Ok(ResumeIngestResponse {
        resume_id,
        skill_count: profile.skills.len(),
        skills: profile.skills,
        education: profile.education,
        experience: profile.experience,
    })
}

impl From<ResumeRow> for CandidateInput {
    fn from(row: ResumeRow) -> Self {
        CandidateInput::Stored(StoredCandidate {
            text: row.parsed_text,
            skills: row.skills,
            cached_embedding: row.resume_embedding,
        })
    }
}
