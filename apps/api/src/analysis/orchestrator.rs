//! Analysis Orchestrator: one résumé vs one role, end to end.
//!
//! Flow: skills (extract or stored) + embeddings (encode or cached, in parallel)
//!       → match score → skill gap → roadmap → `AnalysisResult`.
//!
//! Stored roles get their description embedding computed on first use and written
//! back through `EmbeddingCache`. Free-text roles are never cached or persisted.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::analysis::cache::EmbeddingCache;
use crate::embedding::{Embedder, EmbeddingVector};
use crate::errors::AppError;
use crate::matching::extractor::SkillExtractor;
use crate::matching::gap::analyze_gap;
use crate::matching::similarity::match_score;
use crate::recommendation::{RecommendationEngine, RecommendationPlan};

/// Role name reported for analyses against free-form job descriptions.
pub const FREE_TEXT_ROLE_NAME: &str = "User-defined role";

// ────────────────────────────────────────────────────────────────────────────
// Inputs
// ────────────────────────────────────────────────────────────────────────────

/// A résumé that was already processed and persisted.
#[derive(Debug, Clone)]
pub struct StoredCandidate {
    pub text: String,
    pub skills: Vec<String>,
    pub cached_embedding: Option<Vec<u8>>,
}

#[derive(Debug, Clone)]
pub enum CandidateInput {
    /// Raw résumé text; skills and embedding are computed now.
    Text(String),
    Stored(StoredCandidate),
}

/// A catalogued role. `cached_embedding` is `None` until the first analysis.
#[derive(Debug, Clone)]
pub struct RoleProfile {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// In declaration order; drives the order of matched and missing skills.
    pub required_skills: Vec<String>,
    pub cached_embedding: Option<Vec<u8>>,
}

#[derive(Debug, Clone)]
pub enum RoleInput {
    Stored(RoleProfile),
    /// Free-form job description; required skills are extracted from it.
    Text(String),
}

// ────────────────────────────────────────────────────────────────────────────
// Output
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(rename = "job_match_score")]
    pub score: f32,
    pub role_name: String,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub recommendations: RecommendationPlan,
}

// ────────────────────────────────────────────────────────────────────────────
// Orchestrator
// ────────────────────────────────────────────────────────────────────────────

pub struct AnalysisOrchestrator {
    extractor: Arc<SkillExtractor>,
    embedder: Arc<dyn Embedder>,
    recommender: RecommendationEngine,
    cache: Arc<dyn EmbeddingCache>,
}

impl AnalysisOrchestrator {
    pub fn new(
        extractor: Arc<SkillExtractor>,
        embedder: Arc<dyn Embedder>,
        recommender: RecommendationEngine,
        cache: Arc<dyn EmbeddingCache>,
    ) -> Self {
        Self {
            extractor,
            embedder,
            recommender,
            cache,
        }
    }

    pub fn extractor(&self) -> &SkillExtractor {
        &self.extractor
    }

    /// Encodes `text` on the blocking pool.
    pub async fn encode(&self, text: &str) -> Result<EmbeddingVector, AppError> {
        let embedder = Arc::clone(&self.embedder);
        let text = text.to_string();
        tokio::task::spawn_blocking(move || embedder.encode(&text))
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("embedding task failed: {e}")))?
            .map_err(AppError::from)
    }

    pub async fn run_analysis(
        &self,
        candidate: CandidateInput,
        role: RoleInput,
    ) -> Result<AnalysisResult, AppError> {
        let candidate_skills = match &candidate {
            CandidateInput::Text(text) => self.extractor.extract(text),
            CandidateInput::Stored(stored) => stored.skills.clone(),
        };
        let (role_name, required_skills) = match &role {
            RoleInput::Stored(profile) => (profile.name.clone(), profile.required_skills.clone()),
            RoleInput::Text(text) => (FREE_TEXT_ROLE_NAME.to_string(), self.extractor.extract(text)),
        };

        let (candidate_embedding, role_embedding) = tokio::try_join!(
            self.candidate_embedding(&candidate),
            self.role_embedding(&role),
        )?;

        let score = match_score(&candidate_embedding, &role_embedding);
        let gap = analyze_gap(&candidate_skills, &required_skills);
        let recommendations = self.recommender.recommend(&gap.missing, score);

        info!(
            role = %role_name,
            score,
            matched = gap.matched.len(),
            missing = gap.missing.len(),
            "analysis complete"
        );

        Ok(AnalysisResult {
            score,
            role_name,
            matched_skills: gap.matched,
            missing_skills: gap.missing,
            recommendations,
        })
    }

    async fn candidate_embedding(
        &self,
        candidate: &CandidateInput,
    ) -> Result<EmbeddingVector, AppError> {
        match candidate {
            CandidateInput::Text(text) => self.encode(text).await,
            CandidateInput::Stored(stored) => {
                if let Some(vector) = self.decode_cached(stored.cached_embedding.as_deref()) {
                    return Ok(vector);
                }
                warn!("stored résumé embedding missing or unreadable; re-encoding résumé text");
                self.encode(&stored.text).await
            }
        }
    }

    async fn role_embedding(&self, role: &RoleInput) -> Result<EmbeddingVector, AppError> {
        let profile = match role {
            RoleInput::Text(text) => return self.encode(text).await,
            RoleInput::Stored(profile) => profile,
        };

        if let Some(vector) = self.decode_cached(profile.cached_embedding.as_deref()) {
            debug!(role_id = %profile.id, "role embedding cache hit");
            return Ok(vector);
        }

        debug!(role_id = %profile.id, "role embedding cache miss; encoding description");
        let vector = self.encode(&profile.description).await?;

        // A failed write-back only costs a recomputation next time.
        if let Err(e) = self.cache.store(profile.id, &vector.to_bytes()).await {
            warn!(role_id = %profile.id, "failed to cache role embedding: {e}");
        }
        Ok(vector)
    }

    /// Decodes cached bytes, treating absent or corrupt blobs as a miss.
    fn decode_cached(&self, bytes: Option<&[u8]>) -> Option<EmbeddingVector> {
        let bytes = bytes?;
        match EmbeddingVector::from_bytes_with_dimension(bytes, self.embedder.dimension()) {
            Ok(vector) => Some(vector),
            Err(e) => {
                warn!("discarding cached embedding: {e}");
                None
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
