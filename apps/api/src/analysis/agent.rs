//! Analysis agent: compares a résumé with a job posting and returns a structured analysis.
//!
//! Unlike the screening agent, the response is extracted WITHOUT field back-fill. Missing
//! list keys still decode to empty lists through `AnalysisResult`'s serde defaults, so only
//! output that is not a JSON object of the right shape yields `None`.

use tracing::{info, warn};

use crate::analysis::prompts::ANALYSIS_PROMPT_TEMPLATE;
use crate::extraction;
use crate::llm_client::prompts::{fill, JSON_ONLY_INSTRUCTION, RECRUITER_PERSONA};
use crate::llm_client::{ChatModel, LlmError};
use crate::models::analysis::AnalysisResult;

pub fn build_analysis_prompt(resume_text: &str, job_text: &str) -> String {
    fill(
        ANALYSIS_PROMPT_TEMPLATE,
        &[
            ("persona", RECRUITER_PERSONA),
            ("json_only", JSON_ONLY_INSTRUCTION),
            ("resume", resume_text),
            ("job", job_text),
        ],
    )
}

/// Runs one analysis call. Unparseable output is logged and reported as `Ok(None)`;
/// it is not retried. Transport failures propagate.
pub async fn analyze(
    model: &dyn ChatModel,
    resume_text: &str,
    job_text: &str,
) -> Result<Option<AnalysisResult>, LlmError> {
    let prompt = build_analysis_prompt(resume_text, job_text);
    let response = model.invoke(&prompt).await?;

    let record = match extraction::extract(&response.content, &[]) {
        Ok(record) => record,
        Err(e) => {
            warn!("Analysis response could not be parsed: {e}");
            return Ok(None);
        }
    };

    match serde_json::from_value::<AnalysisResult>(serde_json::Value::Object(record)) {
        Ok(analysis) => {
            info!("Analysis complete, alignment score {:.1}", analysis.alignment_score);
            Ok(Some(analysis))
        }
        Err(e) => {
            warn!("Analysis response has an unexpected shape: {e}");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::ScriptedModel;

    const RESUME: &str = "Ana Silva. Python, SQL.";
    const JOB: &str = "Data Engineer. Python, SQL, Airflow.";

    #[test]
    fn test_prompt_names_every_key() {
        let prompt = build_analysis_prompt(RESUME, JOB);
        for key in [
            "analysis_summary",
            "alignment_score",
            "strengths",
            "weaknesses",
            "missing_skills",
            "underutilized_skills",
            "recommendations",
            "key_improvements",
        ] {
            assert!(prompt.contains(&format!("\"{key}\"")), "prompt is missing {key}");
        }
        assert!(prompt.contains(RESUME));
        assert!(prompt.contains(JOB));
    }

    #[tokio::test]
    async fn test_well_formed_response_is_parsed() {
        let model = ScriptedModel::new([r#"<think>compare</think>
            {"analysis_summary": "Solid fit.", "alignment_score": 7.0,
             "strengths": ["Python"], "missing_skills": ["Airflow"]}"#]);

        let analysis = analyze(&model, RESUME, JOB).await.unwrap().unwrap();
        assert_eq!(analysis.analysis_summary.as_deref(), Some("Solid fit."));
        assert_eq!(analysis.alignment_score, 7.0);
        assert_eq!(analysis.missing_skills, vec!["Airflow"]);
        assert!(analysis.key_improvements.is_empty());
        assert_eq!(model.calls(), 1);
    }

    #[tokio::test]
    async fn test_prose_only_response_is_none_without_retry() {
        let model = ScriptedModel::new(["The candidate looks fine to me."]);
        assert!(analyze(&model, RESUME, JOB).await.unwrap().is_none());
        assert_eq!(model.calls(), 1);
    }

    #[tokio::test]
    async fn test_malformed_json_is_none() {
        let model = ScriptedModel::new([r#"{"strengths": ["Python",]}"#]);
        assert!(analyze(&model, RESUME, JOB).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_wrong_shape_is_none() {
        let model = ScriptedModel::new([r#"{"strengths": "Python"}"#]);
        assert!(analyze(&model, RESUME, JOB).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let model = ScriptedModel::failing(500);
        assert!(analyze(&model, RESUME, JOB).await.is_err());
    }
}
