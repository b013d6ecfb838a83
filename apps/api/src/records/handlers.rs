//! Axum route handlers for stored candidates.

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::jobs::handlers::resolve_job_text;
use crate::models::analysis::AnalysisResult;
use crate::models::candidate::CandidateRecord;
use crate::records::projection::{project_to_analysis, project_to_content};
use crate::review::ReviewContext;
use crate::rewrite::handlers::{run_rewrite, RewriteResponse};
use crate::rewrite::options::RewriteOptions;
use crate::screening::prompts::CANDIDATE_KEY;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CandidateListResponse {
    pub count: usize,
    pub candidates: Vec<CandidateRecord>,
}

#[derive(Debug, Serialize)]
pub struct CandidateDetailResponse {
    pub record: Value,
    pub candidate_markdown: String,
    /// Résumé-like rendering used as rewrite input.
    pub content: String,
    pub analysis: AnalysisResult,
}

#[derive(Debug, Default, Deserialize)]
pub struct CandidateRewriteRequest {
    pub job_text: Option<String>,
    #[serde(default)]
    pub options: RewriteOptions,
}

/// GET /api/v1/candidates
pub async fn handle_list_candidates(
    State(state): State<AppState>,
) -> Result<Json<CandidateListResponse>, AppError> {
    let candidates = state.records.lock().await.load_candidates()?;
    Ok(Json(CandidateListResponse {
        count: candidates.len(),
        candidates,
    }))
}

/// GET /api/v1/candidates.json
///
/// The record store file as stored on disk.
pub async fn handle_export_candidates(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let raw = state
        .records
        .lock()
        .await
        .raw()?
        .ok_or_else(|| AppError::NotFound("No candidates have been stored".to_string()))?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/json; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"candidates.json\"",
            ),
        ],
        raw,
    ))
}

async fn find_candidate(state: &AppState, name: &str) -> Result<(Value, CandidateRecord), AppError> {
    let record = state
        .records
        .lock()
        .await
        .find(CANDIDATE_KEY, name)?
        .ok_or_else(|| AppError::NotFound(format!("Candidate '{name}' not found")))?;
    let candidate = CandidateRecord::from_value(record.clone())
        .map_err(|e| AppError::UnprocessableEntity(format!("Stored record is malformed: {e}")))?;
    Ok((record, candidate))
}

/// GET /api/v1/candidates/:name
pub async fn handle_get_candidate(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<CandidateDetailResponse>, AppError> {
    let (record, candidate) = find_candidate(&state, &name).await?;
    Ok(Json(CandidateDetailResponse {
        record,
        candidate_markdown: candidate.to_markdown(),
        content: project_to_content(&candidate),
        analysis: project_to_analysis(&candidate),
    }))
}

/// POST /api/v1/candidates/:name/rewrite
///
/// Rewrites a stored candidate from its projections. No analysis call is made.
pub async fn handle_rewrite_candidate(
    State(state): State<AppState>,
    Path(name): Path<String>,
    request: Option<Json<CandidateRewriteRequest>>,
) -> Result<Json<RewriteResponse>, AppError> {
    let request = request.map(|Json(r)| r).unwrap_or_default();
    let (_, candidate) = find_candidate(&state, &name).await?;
    let job_text = resolve_job_text(&state, request.job_text).await?;

    let ctx = ReviewContext::from_record(&candidate, job_text, request.options);
    let response = run_rewrite(&state, &ctx, Some(candidate.name.as_str())).await?;
    Ok(Json(response))
}
