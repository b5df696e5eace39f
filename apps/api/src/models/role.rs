use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::analysis::orchestrator::RoleProfile;

/// A catalogued job role. `jd_embedding` is filled lazily on first analysis.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobRoleRow {
    pub role_id: Uuid,
    pub role_name: String,
    pub job_description: String,
    pub required_skills: Vec<String>,
    #[serde(skip)]
    pub jd_embedding: Option<Vec<u8>>,
    pub industry: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<JobRoleRow> for RoleProfile {
    fn from(row: JobRoleRow) -> Self {
        RoleProfile {
            id: row.role_id,
            name: row.role_name,
            description: row.job_description,
            required_skills: row.required_skills,
            cached_embedding: row.jd_embedding,
        }
    }
}

/// Catalogue listing entry.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobRoleSummary {
    pub role_id: Uuid,
    pub role_name: String,
    pub industry: Option<String>,
}
