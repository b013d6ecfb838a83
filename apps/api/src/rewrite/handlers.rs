//! Axum route handlers for the rewrite API and exported files.

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;
use crate::jobs::handlers::resolve_job_text;
use crate::models::analysis::AnalysisResult;
use crate::review::ReviewContext;
use crate::rewrite::export;
use crate::rewrite::options::RewriteOptions;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RewriteRequest {
    pub resume_text: String,
    /// Defaults to the active job posting.
    pub job_text: Option<String>,
    /// An analysis from an earlier `/analyze` call. A fresh one is requested when absent.
    pub analysis: Option<AnalysisResult>,
    #[serde(default)]
    pub options: RewriteOptions,
    /// Used to name the exported file.
    pub candidate_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RewriteResponse {
    pub rewritten: String,
    pub analysis: Option<AnalysisResult>,
    pub options: RewriteOptions,
    /// Language the résumé was rewritten in.
    pub target_language: String,
    /// File name under `/api/v1/exports/`. Absent if the export could not be written.
    pub export_file: Option<String>,
    pub generated_at: DateTime<Utc>,
}

/// POST /api/v1/rewrite
pub async fn handle_rewrite(
    State(state): State<AppState>,
    Json(request): Json<RewriteRequest>,
) -> Result<Json<RewriteResponse>, AppError> {
    let job_text = resolve_job_text(&state, request.job_text).await?;

    let mut ctx = ReviewContext::new(request.resume_text, job_text, request.options);
    match request.analysis {
        Some(analysis) => ctx = ctx.with_analysis(analysis),
        None if !ctx.resume_text.trim().is_empty() => {
            ctx.analyze(state.llm.as_ref()).await?;
        }
        None => {}
    }

    let response = run_rewrite(&state, &ctx, request.candidate_name.as_deref()).await?;
    Ok(Json(response))
}

/// Rewrites through `ctx` and exports the result. A failed export is logged only.
pub async fn run_rewrite(
    state: &AppState,
    ctx: &ReviewContext,
    candidate_name: Option<&str>,
) -> Result<RewriteResponse, AppError> {
    let rewritten = ctx
        .rewrite(
            state.llm.as_ref(),
            &state.rewrite_template,
            &state.config.target_language,
        )
        .await?;

    let export_file = match export::save(&state.config.export_dir, candidate_name, &rewritten) {
        Ok(path) => path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned()),
        Err(e) => {
            warn!("Rewritten résumé was not exported: {e:#}");
            None
        }
    };

    Ok(RewriteResponse {
        rewritten,
        analysis: ctx.analysis.clone(),
        options: ctx.options.clone(),
        target_language: ctx
            .options
            .language(&state.config.target_language)
            .to_string(),
        export_file,
        generated_at: Utc::now(),
    })
}

/// GET /api/v1/exports/:file
pub async fn handle_download_export(
    State(state): State<AppState>,
    Path(file): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let content = export::load(&state.config.export_dir, &file)?
        .ok_or_else(|| AppError::NotFound(format!("Export {file} not found")))?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/markdown; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file}\""),
            ),
        ],
        content,
    ))
}
