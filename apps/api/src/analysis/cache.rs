use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;

/// Byte-level write access to the role embedding cache, keyed by role id.
///
/// The cached value is read from the role record itself; this trait only covers
/// the write-back. Writes are plain overwrites: concurrent first-use requests
/// may each store the same deterministic vector and the last write wins.
#[async_trait]
pub trait EmbeddingCache: Send + Sync {
    async fn store(&self, role_id: Uuid, bytes: &[u8]) -> Result<(), AppError>;
}

/// Writes to `job_roles.jd_embedding`.
pub struct PgEmbeddingCache {
    pool: PgPool,
}

impl PgEmbeddingCache {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmbeddingCache for PgEmbeddingCache {
    async fn store(&self, role_id: Uuid, bytes: &[u8]) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE job_roles SET jd_embedding = $1 WHERE role_id = $2")
            .bind(bytes)
            .bind(role_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Job role {role_id} not found")));
        }
        Ok(())
    }
}
