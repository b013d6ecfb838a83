//! Axum route handlers for the analysis API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::analysis::agent::analyze;
use crate::errors::AppError;
use crate::jobs::handlers::resolve_job_text;
use crate::models::analysis::AnalysisResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub resume_text: String,
    /// Defaults to the active job posting.
    pub job_text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    /// `None` when the model answer could not be read as an analysis.
    pub analysis: Option<AnalysisResult>,
}

/// POST /api/v1/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation("resume_text cannot be empty".to_string()));
    }
    let job_text = resolve_job_text(&state, request.job_text).await?;

    let analysis = analyze(state.llm.as_ref(), &request.resume_text, &job_text).await?;
    Ok(Json(AnalyzeResponse { analysis }))
}
