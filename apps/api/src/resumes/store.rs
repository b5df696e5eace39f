use sqlx::PgPool;
use uuid::Uuid;

use crate::matching::profile::ExtractedProfile;
use crate::models::resume::ResumeRow;

pub async fn insert_resume(
    pool: &PgPool,
    user_id: Uuid,
    file_name: &str,
    profile: &ExtractedProfile,
    embedding: &[u8],
) -> sqlx::Result<Uuid> {
    let resume_id = Uuid::new_v4();

    sqlx::query(
        r#"
        INSERT INTO resumes
            (resume_id, user_id, file_name, parsed_text, skills, education, experience, resume_embedding)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        "#,
    )
    .bind(resume_id)
    .bind(user_id)
    .bind(file_name)
    .bind(&profile.text)
    .bind(&profile.skills)
    .bind(&profile.education)
    .bind(&profile.experience)
    .bind(embedding)
    .execute(pool)
    .await?;

    Ok(resume_id)
}

/// Fetches a résumé only if it belongs to `user_id`.
pub async fn fetch_resume(
    pool: &PgPool,
    user_id: Uuid,
    resume_id: Uuid,
) -> sqlx::Result<Option<ResumeRow>> {
    sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE resume_id = $1 AND user_id = $2")
        .bind(resume_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
}
