//! Axum route handlers for the screening API.

use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::jobs::handlers::resolve_job_text;
use crate::llm_client::Usage;
use crate::models::candidate::CandidateRecord;
use crate::records::store::AppendOutcome;
use crate::screening::agent::{parse_candidate, screen};
use crate::screening::document::read_pdf;
use crate::screening::prompts::{CANDIDATE_KEY, CANDIDATE_SCHEMA, SCORING_RUBRIC};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ScreenQuery {
    #[serde(default)]
    pub show_reasoning: bool,
}

#[derive(Debug, Serialize)]
pub struct ScreenResponse {
    /// The record exactly as extracted, and as stored when `stored` is true.
    pub record: Value,
    pub candidate: CandidateRecord,
    pub candidate_markdown: String,
    pub stored: bool,
    /// Present when the store already held a candidate with the same name.
    pub rejection: Option<String>,
    pub total_records: Option<usize>,
    pub reasoning: Option<String>,
    pub model: String,
    pub usage: Option<Usage>,
    pub screened_at: DateTime<Utc>,
}

/// POST /api/v1/screen?show_reasoning=
///
/// Multipart form with a `file` field holding one PDF résumé and an optional `job_text`
/// field. Without `job_text` the active job posting is used.
pub async fn handle_screen(
    State(state): State<AppState>,
    Query(params): Query<ScreenQuery>,
    mut multipart: Multipart,
) -> Result<Json<ScreenResponse>, AppError> {
    let mut file: Option<Vec<u8>> = None;
    let mut job_text: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        match field.name() {
            Some("file") => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Invalid file: {e}")))?;
                file = Some(bytes.to_vec());
            }
            Some("job_text") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Invalid job_text: {e}")))?;
                job_text = Some(text);
            }
            _ => {}
        }
    }

    let file = file.ok_or_else(|| AppError::Validation("file is required".to_string()))?;
    let job_text = resolve_job_text(&state, job_text).await?;

    let resume_text = read_pdf(file).await?;
    let response = screen_and_store(&state, &resume_text, &job_text, params.show_reasoning).await?;
    Ok(Json(response))
}

/// Screens extracted résumé text and appends the record to the store.
/// A duplicate name is reported in the response and leaves the store untouched.
pub async fn screen_and_store(
    state: &AppState,
    resume_text: &str,
    job_text: &str,
    show_reasoning: bool,
) -> Result<ScreenResponse, AppError> {
    let output = screen(
        state.llm.as_ref(),
        resume_text,
        job_text,
        CANDIDATE_SCHEMA,
        SCORING_RUBRIC,
        show_reasoning,
    )
    .await?;

    let record = parse_candidate(&output.text)?;
    let candidate = CandidateRecord::from_record(&record)
        .map_err(|e| AppError::UnprocessableEntity(format!("Unexpected record shape: {e}")))?;

    let outcome = state.records.lock().await.append(&record, CANDIDATE_KEY)?;
    let (stored, rejection, total_records) = match outcome {
        AppendOutcome::Stored { total } => (true, None, Some(total)),
        AppendOutcome::Rejected(rejection) => (false, Some(rejection.to_string()), None),
    };
    info!(
        "Screened '{}' with score {:.1} (stored: {stored})",
        candidate.name, candidate.score
    );

    Ok(ScreenResponse {
        record: Value::Object(record),
        candidate_markdown: candidate.to_markdown(),
        candidate,
        stored,
        rejection,
        total_records,
        reasoning: output.reasoning,
        model: output.response.model,
        usage: output.response.usage,
        screened_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::Config;
    use crate::llm_client::testing::ScriptedModel;
    use crate::rewrite::DEFAULT_TEMPLATE;

    const RESUME: &str = "Ana Silva. Data engineer, 5 years of Spark and SQL.";
    const JOB: &str = "Senior data engineer, Spark required.";

    fn reply(score: f64) -> String {
        format!(
            r#"{{"name": "Ana", "area": "Development", "summary": "Data engineer.", "skills": ["Spark"], "score": {score}}}"#
        )
    }

    fn state(dir: &std::path::Path, model: Arc<ScriptedModel>) -> AppState {
        AppState::new(model, Config::for_tests(dir), DEFAULT_TEMPLATE.to_string())
    }

    #[tokio::test]
    async fn test_first_screening_is_stored() {
        let dir = tempfile::tempdir().unwrap();
        let state = state(dir.path(), Arc::new(ScriptedModel::new([reply(7.5)])));

        let response = screen_and_store(&state, RESUME, JOB, false).await.unwrap();

        assert!(response.stored);
        assert_eq!(response.total_records, Some(1));
        assert!(response.rejection.is_none());
        assert_eq!(response.candidate.name, "Ana");
        let stored = state.records.lock().await.load_all().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0]["name"], "Ana");
    }

    #[tokio::test]
    async fn test_same_name_is_rejected_and_store_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let model = Arc::new(ScriptedModel::new([reply(7.5), reply(9.0)]));
        let state = state(dir.path(), model.clone());

        screen_and_store(&state, RESUME, JOB, false).await.unwrap();
        let before = std::fs::read(dir.path().join("candidates.json")).unwrap();

        let response = screen_and_store(&state, RESUME, JOB, false).await.unwrap();

        assert!(!response.stored);
        assert_eq!(response.total_records, None);
        let rejection = response.rejection.unwrap();
        assert!(rejection.contains("Ana"), "{rejection}");
        assert_eq!(response.candidate.score, 9.0);
        let after = std::fs::read(dir.path().join("candidates.json")).unwrap();
        assert_eq!(before, after);
        assert_eq!(model.calls(), 2);
    }

    #[tokio::test]
    async fn test_reasoning_only_when_asked() {
        let dir = tempfile::tempdir().unwrap();
        let state = state(
            dir.path(),
            Arc::new(ScriptedModel::new([format!("<think>fit</think>{}", reply(6.0))])),
        );

        let response = screen_and_store(&state, RESUME, JOB, true).await.unwrap();

        assert!(response.reasoning.is_some());
        assert_eq!(response.record["score"], 6.0);
    }
}
