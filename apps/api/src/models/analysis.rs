use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted stored-role analysis, joined with the role name.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AnalysisHistoryRow {
    pub analysis_id: Uuid,
    pub user_id: Uuid,
    pub resume_id: Uuid,
    pub role_id: Uuid,
    pub role_name: String,
    pub job_match_score: f32,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub recommendations: Value,
    pub created_at: DateTime<Utc>,
}
