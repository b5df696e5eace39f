use anyhow::{Context, Result};
use serde::Deserialize;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

const DEFAULT_ROLES: &str = include_str!("../data/default_roles.json");

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS resumes (
        resume_id        UUID PRIMARY KEY,
        user_id          UUID NOT NULL,
        file_name        TEXT NOT NULL,
        parsed_text      TEXT NOT NULL,
        skills           TEXT[] NOT NULL DEFAULT '{}',
        education        TEXT[] NOT NULL DEFAULT '{}',
        experience       TEXT[] NOT NULL DEFAULT '{}',
        resume_embedding BYTEA,
        created_at       TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS job_roles (
        role_id         UUID PRIMARY KEY,
        role_name       TEXT UNIQUE NOT NULL,
        job_description TEXT NOT NULL,
        required_skills TEXT[] NOT NULL DEFAULT '{}',
        jd_embedding    BYTEA,
        industry        TEXT,
        created_at      TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS analysis_history (
        analysis_id     UUID PRIMARY KEY,
        user_id         UUID NOT NULL,
        resume_id       UUID NOT NULL REFERENCES resumes(resume_id) ON DELETE CASCADE,
        role_id         UUID NOT NULL REFERENCES job_roles(role_id) ON DELETE CASCADE,
        job_match_score REAL NOT NULL,
        matched_skills  TEXT[] NOT NULL DEFAULT '{}',
        missing_skills  TEXT[] NOT NULL DEFAULT '{}',
        recommendations JSONB NOT NULL,
        created_at      TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_resumes_user_id ON resumes(user_id)",
    "CREATE INDEX IF NOT EXISTS idx_analysis_history_user_id ON analysis_history(user_id, created_at DESC)",
];

#[derive(Debug, Deserialize)]
struct SeedRole {
    role_name: String,
    job_description: String,
    required_skills: Vec<String>,
    industry: String,
}

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Creates tables if missing and seeds the role catalogue on first start.
pub async fn init_schema(pool: &PgPool) -> Result<()> {
    for statement in SCHEMA {
        sqlx::query(statement)
            .execute(pool)
            .await
            .context("failed to apply schema")?;
    }

    let role_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM job_roles")
        .fetch_one(pool)
        .await?;
    if role_count > 0 {
        return Ok(());
    }

    let roles = default_roles()?;
    for role in &roles {
        sqlx::query(
            r#"
            INSERT INTO job_roles (role_id, role_name, job_description, required_skills, industry)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (role_name) DO NOTHING
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&role.role_name)
        .bind(&role.job_description)
        .bind(&role.required_skills)
        .bind(&role.industry)
        .execute(pool)
        .await?;
    }

    info!("Seeded {} default job roles", roles.len());
    Ok(())
}

fn default_roles() -> Result<Vec<SeedRole>> {
    serde_json::from_str(DEFAULT_ROLES).context("built-in default roles are malformed")
}
