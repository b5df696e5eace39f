//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::analysis::orchestrator::{AnalysisResult, CandidateInput, RoleInput};
use crate::analysis::store::{delete_user_data, fetch_role, insert_analysis, latest_analysis, list_roles};
use crate::errors::AppError;
use crate::models::role::JobRoleSummary;
use crate::resumes::store::fetch_resume;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRoleRequest {
    pub user_id: Option<Uuid>,
    pub resume_id: Option<Uuid>,
    pub role_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeTextRequest {
    pub user_id: Option<Uuid>,
    pub resume_id: Option<Uuid>,
    #[serde(default)]
    pub job_description: String,
}

/// Analysis result plus the history id (`null` for free-text analyses).
#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub analysis_id: Option<Uuid>,
    #[serde(flatten)]
    pub result: AnalysisResult,
}

#[derive(Debug, Serialize)]
pub struct JobRolesResponse {
    pub roles: Vec<JobRoleSummary>,
}

#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct LatestAnalysisResponse {
    pub analysis_id: Uuid,
    pub job_match_score: f32,
    pub role_name: String,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub recommendations: Value,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct ClearDataRequest {
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct ClearDataResponse {
    pub message: String,
    pub resumes_deleted: u64,
    pub analyses_deleted: u64,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/job-roles
pub async fn handle_list_roles(
    State(state): State<AppState>,
) -> Result<Json<JobRolesResponse>, AppError> {
    let roles = list_roles(&state.db).await?;
    Ok(Json(JobRolesResponse { roles }))
}

/// POST /api/v1/analyze-role
///
/// Stored résumé vs catalogued role. Caches the role embedding on first use and
/// records the analysis in history.
pub async fn handle_analyze_role(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRoleRequest>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let (Some(user_id), Some(resume_id), Some(role_id)) =
        (request.user_id, request.resume_id, request.role_id)
    else {
        return Err(AppError::Validation("Missing required fields".to_string()));
    };

    let resume = fetch_resume(&state.db, user_id, resume_id).await?;
    let role = fetch_role(&state.db, role_id).await?;
    let (Some(resume), Some(role)) = (resume, role) else {
        return Err(AppError::NotFound("Resume or job role not found".to_string()));
    };

    let result = state
        .orchestrator
        .run_analysis(CandidateInput::from(resume), RoleInput::Stored(role.into()))
        .await?;

    let analysis_id = insert_analysis(&state.db, user_id, resume_id, role_id, &result).await?;
    info!(%analysis_id, %user_id, %role_id, "analysis recorded");

    Ok(Json(AnalysisResponse {
        analysis_id: Some(analysis_id),
        result,
    }))
}

/// POST /api/v1/analyze-text
///
/// Stored résumé vs a pasted job description. Nothing is cached or recorded.
pub async fn handle_analyze_text(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeTextRequest>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let job_text = request.job_description.trim();
    let (Some(user_id), Some(resume_id)) = (request.user_id, request.resume_id) else {
        return Err(AppError::Validation("Missing fields".to_string()));
    };
    if job_text.is_empty() {
        return Err(AppError::Validation("job_description cannot be empty".to_string()));
    }

    let resume = fetch_resume(&state.db, user_id, resume_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Resume not found".to_string()))?;

    let result = state
        .orchestrator
        .run_analysis(
            CandidateInput::from(resume),
            RoleInput::Text(job_text.to_string()),
        )
        .await?;

    Ok(Json(AnalysisResponse {
        analysis_id: None,
        result,
    }))
}

/// GET /api/v1/analysis/latest?user_id=
pub async fn handle_latest_analysis(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<LatestAnalysisResponse>, AppError> {
    let user_id = params
        .user_id
        .ok_or_else(|| AppError::Validation("User ID required".to_string()))?;

    let latest = latest_analysis(&state.db, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("No analysis found".to_string()))?;

    Ok(Json(LatestAnalysisResponse {
        analysis_id: latest.analysis_id,
        job_match_score: latest.job_match_score,
        role_name: latest.role_name,
        matched_skills: latest.matched_skills,
        missing_skills: latest.missing_skills,
        recommendations: latest.recommendations,
        timestamp: latest.created_at,
    }))
}

/// POST /api/v1/clear-data
pub async fn handle_clear_data(
    State(state): State<AppState>,
    Json(request): Json<ClearDataRequest>,
) -> Result<Json<ClearDataResponse>, AppError> {
    let user_id = request
        .user_id
        .ok_or_else(|| AppError::Validation("User ID required".to_string()))?;

    let deleted = delete_user_data(&state.db, user_id).await?;
    info!(
        %user_id,
        resumes = deleted.resumes,
        analyses = deleted.analyses,
        "user data cleared"
    );

    Ok(Json(ClearDataResponse {
        message: "All data cleared".to_string(),
        resumes_deleted: deleted.resumes,
        analyses_deleted: deleted.analyses,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::RecommendationPlan;

    #[test]
    fn test_analysis_response_flattens_result() {
        let response = AnalysisResponse {
            analysis_id: None,
            result: AnalysisResult {
                score: 72.4,
                role_name: "Data Analyst".to_string(),
                matched_skills: vec!["SQL".to_string()],
                missing_skills: vec!["Tableau".to_string()],
                recommendations: RecommendationPlan {
                    short_term: vec![],
                    medium_term: vec![],
                    long_term: vec![],
                },
            },
        };

        let json = serde_json::to_value(&response).unwrap();
        assert!(json["analysis_id"].is_null());
        assert_eq!(json["role_name"], "Data Analyst");
        assert_eq!(json["missing_skills"][0], "Tableau");
        assert!(json.get("result").is_none());
    }

    #[test]
    fn test_analyze_role_request_tolerates_missing_fields() {
        let request: AnalyzeRoleRequest = serde_json::from_str(r#"{"user_id": null}"#).unwrap();
        assert!(request.resume_id.is_none());
    }
}
