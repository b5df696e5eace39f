use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A processed résumé. `resume_embedding` holds little-endian f32 bytes.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub resume_id: Uuid,
    pub user_id: Uuid,
    pub file_name: String,
    pub parsed_text: String,
    pub skills: Vec<String>,
    pub education: Vec<String>,
    pub experience: Vec<String>,
    #[serde(skip)]
    pub resume_embedding: Option<Vec<u8>>,
    pub created_at: DateTime<Utc>,
}
