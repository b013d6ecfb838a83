//! Axum route handlers for the job log.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::job::JobPosting;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ActiveJobResponse {
    pub job: JobPosting,
    /// The posting as the agents see it.
    pub job_text: String,
}

impl From<JobPosting> for ActiveJobResponse {
    fn from(job: JobPosting) -> Self {
        let job_text = job.render();
        Self { job, job_text }
    }
}

/// POST /api/v1/jobs
///
/// Appends a posting to the job log. It becomes the active posting.
pub async fn handle_save_job(
    State(state): State<AppState>,
    Json(job): Json<JobPosting>,
) -> Result<(StatusCode, Json<ActiveJobResponse>), AppError> {
    if job.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }
    if job.description.trim().is_empty() && job.details.trim().is_empty() {
        return Err(AppError::Validation(
            "description and details cannot both be empty".to_string(),
        ));
    }

    state.jobs.lock().await.append(&job)?;
    Ok((StatusCode::CREATED, Json(job.into())))
}

/// GET /api/v1/jobs/active
pub async fn handle_active_job(
    State(state): State<AppState>,
) -> Result<Json<ActiveJobResponse>, AppError> {
    let job = state.jobs.lock().await.active()?;
    job.map(|job| Json(job.into()))
        .ok_or_else(|| AppError::NotFound("No job posting has been saved".to_string()))
}

/// Job text for an agent call: the caller's own text when given, the active posting otherwise.
pub async fn resolve_job_text(
    state: &AppState,
    explicit: Option<String>,
) -> Result<String, AppError> {
    if let Some(text) = explicit.filter(|t| !t.trim().is_empty()) {
        return Ok(text);
    }
    let active = state.jobs.lock().await.active()?;
    active.map(|job| job.render()).ok_or_else(|| {
        AppError::UnprocessableEntity(
            "No job_text given and no job posting has been saved".to_string(),
        )
    })
}
