//! Screening agent: one model call that turns résumé text into a candidate record.
//!
//! Parsing back-fills every field in `CANDIDATE_FIELDS` with an empty list when the model
//! omits it. The analysis agent does not; see `analysis::agent`.

use serde::Serialize;
use tracing::{debug, info};

use crate::extraction::{self, reasoning_of, strip_reasoning, ExtractionError, Record};
use crate::llm_client::prompts::{fill, JSON_ONLY_INSTRUCTION, RECRUITER_PERSONA};
use crate::llm_client::{ChatModel, LlmError, ModelResponse};
use crate::screening::prompts::{CANDIDATE_FIELDS, SCREENING_PROMPT_TEMPLATE};

/// What a screening call returns: the untouched model response, the answer with reasoning
/// removed, and the reasoning itself when the caller asked to see it.
#[derive(Debug, Clone, Serialize)]
pub struct ScreeningOutput {
    pub response: ModelResponse,
    pub text: String,
    pub reasoning: Option<String>,
}

pub fn build_screening_prompt(
    resume_text: &str,
    job_text: &str,
    schema: &str,
    scoring_rubric: &str,
) -> String {
    fill(
        SCREENING_PROMPT_TEMPLATE,
        &[
            ("persona", RECRUITER_PERSONA),
            ("json_only", JSON_ONLY_INSTRUCTION),
            ("schema", schema),
            ("scoring_rubric", scoring_rubric),
            ("resume", resume_text),
            ("job", job_text),
        ],
    )
}

/// Screens one résumé against one job posting. Transport failures propagate; the
/// response is not parsed here.
pub async fn screen(
    model: &dyn ChatModel,
    resume_text: &str,
    job_text: &str,
    schema: &str,
    scoring_rubric: &str,
    show_reasoning: bool,
) -> Result<ScreeningOutput, LlmError> {
    let prompt = build_screening_prompt(resume_text, job_text, schema, scoring_rubric);
    debug!("Screening prompt is {} chars", prompt.len());

    let response = model.invoke(&prompt).await?;
    let text = strip_reasoning(&response.content).to_string();
    let reasoning = if show_reasoning {
        reasoning_of(&response.content)
    } else {
        None
    };

    info!(
        "Screening response from {} ({} chars)",
        response.model,
        response.content.len()
    );
    Ok(ScreeningOutput {
        response,
        text,
        reasoning,
    })
}

/// Extracts the candidate record from screening text, back-filling missing fields.
pub fn parse_candidate(text: &str) -> Result<Record, ExtractionError> {
    extraction::extract(text, CANDIDATE_FIELDS)
}
