//! Rewrite agent: fills the résumé template from the original content, an analysis and the
//! job posting. Preconditions are checked before the model is called; the answer is checked
//! for emptiness and minimum length afterwards. No retry and no side effects.

use thiserror::Error;
use tracing::{info, warn};

use crate::extraction::strip_reasoning;
use crate::llm_client::prompts::fill;
use crate::llm_client::{ChatModel, LlmError};
use crate::models::analysis::AnalysisResult;
use crate::rewrite::options::{highlight_instruction, strengths_instruction, RewriteOptions};
use crate::rewrite::prompts::REWRITE_PROMPT_TEMPLATE;

/// Shortest answer accepted as a résumé, in characters.
pub const MIN_REWRITE_CHARS: usize = 50;

#[derive(Debug, Error)]
pub enum RewriteError {
    #[error("{0} must not be empty")]
    MissingPrecondition(&'static str),

    #[error("model returned an empty response")]
    EmptyResponse,

    #[error(
        "rewritten résumé is too short ({len} characters, minimum {min})",
        min = MIN_REWRITE_CHARS
    )]
    TooShort { len: usize },

    #[error(transparent)]
    Transport(#[from] LlmError),
}

/// Borrowed inputs of one rewrite call.
#[derive(Debug, Clone, Copy)]
pub struct RewriteInput<'a> {
    pub original_content: &'a str,
    pub analysis: &'a AnalysisResult,
    pub job_text: &'a str,
    pub template: &'a str,
    pub options: &'a RewriteOptions,
    /// Already resolved: the caller's choice or the service default.
    pub target_language: &'a str,
}

impl RewriteInput<'_> {
    /// Checked in a fixed order so the first missing input is the one reported.
    fn check_preconditions(&self) -> Result<(), RewriteError> {
        if self.original_content.trim().is_empty() {
            return Err(RewriteError::MissingPrecondition("original_content"));
        }
        if self.analysis.is_empty() {
            return Err(RewriteError::MissingPrecondition("analysis"));
        }
        if self.job_text.trim().is_empty() {
            return Err(RewriteError::MissingPrecondition("job_text"));
        }
        if self.template.trim().is_empty() {
            return Err(RewriteError::MissingPrecondition("template"));
        }
        Ok(())
    }
}

/// Plain-text rendering of an analysis for the rewrite prompt.
pub fn render_analysis_block(analysis: &AnalysisResult) -> String {
    let summary = analysis
        .analysis_summary
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or("N/A");

    let sections: [(&str, &[String]); 6] = [
        ("STRENGTHS", analysis.strengths.as_slice()),
        ("WEAKNESSES", analysis.weaknesses.as_slice()),
        ("MISSING SKILLS", analysis.missing_skills.as_slice()),
        ("UNDERUTILIZED SKILLS", analysis.underutilized_skills.as_slice()),
        ("RECOMMENDATIONS", analysis.recommendations.as_slice()),
        ("KEY IMPROVEMENTS", analysis.key_improvements.as_slice()),
    ];

    let mut block = format!("ANALYSIS SUMMARY:\n{summary}\n");
    for (title, items) in sections {
        block.push_str(&format!("\n{title}:\n"));
        for item in items {
            block.push_str(&format!("- {item}\n"));
        }
    }
    block
}

pub fn build_rewrite_prompt(input: &RewriteInput<'_>) -> String {
    let analysis = render_analysis_block(input.analysis);
    fill(
        REWRITE_PROMPT_TEMPLATE,
        &[
            ("style", input.options.style.phrasing()),
            ("focus_instruction", input.options.focus.instruction()),
            (
                "highlight_instruction",
                highlight_instruction(input.options.highlight_missing),
            ),
            (
                "strengths_instruction",
                strengths_instruction(input.options.emphasize_strengths),
            ),
            ("language", input.target_language),
            ("template", input.template),
            ("original", input.original_content),
            ("analysis", analysis.as_str()),
            ("job", input.job_text),
        ],
    )
}

/// Produces the rewritten résumé as markdown.
pub async fn rewrite(
    model: &dyn ChatModel,
    input: &RewriteInput<'_>,
) -> Result<String, RewriteError> {
    input.check_preconditions()?;

    let prompt = build_rewrite_prompt(input);
    let response = model.invoke(&prompt).await?;

    let text = strip_reasoning(&response.content).trim();
    if text.is_empty() {
        warn!("Rewrite returned an empty response");
        return Err(RewriteError::EmptyResponse);
    }
    let len = text.chars().count();
    if len < MIN_REWRITE_CHARS {
        warn!("Rewrite returned only {len} characters");
        return Err(RewriteError::TooShort { len });
    }

    info!(
        "Rewrite complete ({len} chars, focus {:?}, style {:?})",
        input.options.focus, input.options.style
    );
    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::ScriptedModel;
    use crate::rewrite::options::{Focus, Style};
    use crate::rewrite::DEFAULT_TEMPLATE;

    const ORIGINAL: &str = "Ana Silva. Data engineer at Acme since 2019. Python, SQL.";
    const JOB: &str = "Data Engineer. Python, SQL, Airflow.";

    fn analysis() -> AnalysisResult {
        AnalysisResult {
            analysis_summary: Some("Strong SQL, no orchestration.".to_string()),
            alignment_score: 7.0,
            strengths: vec!["SQL".to_string()],
            missing_skills: vec!["Airflow".to_string()],
            ..Default::default()
        }
    }

    fn long_resume() -> String {
        format!("**Ana Silva**\n\n**Professional Summary**\n\n{}", "Data engineer. ".repeat(6))
    }

    fn input<'a>(analysis: &'a AnalysisResult, options: &'a RewriteOptions) -> RewriteInput<'a> {
        RewriteInput {
            original_content: ORIGINAL,
            analysis,
            job_text: JOB,
            template: DEFAULT_TEMPLATE,
            options,
            target_language: "English",
        }
    }

    #[test]
    fn test_analysis_block_sections_and_items() {
        let block = render_analysis_block(&analysis());
        assert!(block.starts_with("ANALYSIS SUMMARY:\nStrong SQL, no orchestration.\n"));
        assert!(block.contains("\nSTRENGTHS:\n- SQL\n"));
        assert!(block.contains("\nMISSING SKILLS:\n- Airflow\n"));
        assert!(block.contains("\nKEY IMPROVEMENTS:\n"));
    }

    #[test]
    fn test_analysis_block_without_summary_says_na() {
        let block = render_analysis_block(&AnalysisResult {
            strengths: vec!["SQL".to_string()],
            ..Default::default()
        });
        assert!(block.starts_with("ANALYSIS SUMMARY:\nN/A\n"));
    }

    #[test]
    fn test_every_option_combination_reaches_the_prompt() {
        let analysis = analysis();
        for options in RewriteOptions::all_combinations() {
            let prompt = build_rewrite_prompt(&input(&analysis, &options));
            assert!(prompt.contains(options.focus.instruction()));
            assert!(prompt.contains(options.style.phrasing()));
            assert!(prompt.contains(highlight_instruction(options.highlight_missing)));
            assert!(prompt.contains(strengths_instruction(options.emphasize_strengths)));
            assert!(prompt.contains(ORIGINAL));
            assert!(prompt.contains(JOB));
            assert!(prompt.contains("Write the whole résumé in English."));
            assert!(!prompt.contains("{template}"));
        }
    }

    #[test]
    fn test_prompt_forbids_invented_organizations_and_dates() {
        let defaults = RewriteOptions::default();
        let analysis = analysis();
        let prompt = build_rewrite_prompt(&input(&analysis, &defaults));
        assert!(prompt.contains("NEVER invent organization names or employment dates"));
        assert!(prompt.contains("Do not add commentary"));
        assert!(prompt.contains(DEFAULT_TEMPLATE));
    }

    #[tokio::test]
    async fn test_preconditions_fail_before_any_model_call() {
        let defaults = RewriteOptions::default();
        let analysis = analysis();
        let empty = AnalysisResult::default();
        let cases: Vec<(RewriteInput<'_>, &str)> = vec![
            (
                RewriteInput {
                    original_content: "  ",
                    ..input(&analysis, &defaults)
                },
                "original_content",
            ),
            (input(&empty, &defaults), "analysis"),
            (
                RewriteInput {
                    job_text: "",
                    ..input(&analysis, &defaults)
                },
                "job_text",
            ),
            (
                RewriteInput {
                    template: "\n",
                    ..input(&analysis, &defaults)
                },
                "template",
            ),
        ];

        for (case, field) in cases {
            let model = ScriptedModel::new([long_resume()]);
            let err = rewrite(&model, &case).await.unwrap_err();
            assert!(
                matches!(err, RewriteError::MissingPrecondition(f) if f == field),
                "expected {field}, got {err}"
            );
            assert_eq!(model.calls(), 0);
        }
    }

    #[tokio::test]
    async fn test_first_missing_precondition_is_reported() {
        let defaults = RewriteOptions::default();
        let empty = AnalysisResult::default();
        let case = RewriteInput {
            original_content: "",
            job_text: "",
            ..input(&empty, &defaults)
        };
        let model = ScriptedModel::new([long_resume()]);
        let err = rewrite(&model, &case).await.unwrap_err();
        assert!(matches!(err, RewriteError::MissingPrecondition("original_content")));
    }

    #[tokio::test]
    async fn test_empty_response_fails() {
        let defaults = RewriteOptions::default();
        let analysis = analysis();
        let model = ScriptedModel::new(["<think>nothing to say</think>   "]);
        let err = rewrite(&model, &input(&analysis, &defaults))
            .await
            .unwrap_err();
        assert!(matches!(err, RewriteError::EmptyResponse));
        assert_eq!(model.calls(), 1);
    }

    #[tokio::test]
    async fn test_short_response_fails() {
        let defaults = RewriteOptions::default();
        let analysis = analysis();
        let model = ScriptedModel::new(["**Ana Silva**\nData engineer."]);
        let err = rewrite(&model, &input(&analysis, &defaults))
            .await
            .unwrap_err();
        assert!(matches!(err, RewriteError::TooShort { len } if len < MIN_REWRITE_CHARS));
    }

    #[tokio::test]
    async fn test_length_is_counted_in_characters() {
        let defaults = RewriteOptions::default();
        let analysis = analysis();
        // 49 two-byte characters: 98 bytes but still too short.
        let model = ScriptedModel::new(["é".repeat(49)]);
        let err = rewrite(&model, &input(&analysis, &defaults))
            .await
            .unwrap_err();
        assert!(matches!(err, RewriteError::TooShort { len: 49 }));
    }

    #[tokio::test]
    async fn test_successful_rewrite_is_trimmed_and_reasoning_free() {
        let analysis = analysis();
        let options = RewriteOptions {
            focus: Focus::Skills,
            style: Style::Modern,
            ..Default::default()
        };
        let reply = format!("<think>plan</think>\n\n{}\n\n", long_resume());
        let model = ScriptedModel::new([reply]);
        let text = rewrite(&model, &input(&analysis, &options)).await.unwrap();
        assert_eq!(text, long_resume().trim());
        assert!(model.prompts()[0].contains(Focus::Skills.instruction()));
    }

    #[tokio::test]
    async fn test_transport_failure_is_wrapped() {
        let defaults = RewriteOptions::default();
        let analysis = analysis();
        let model = ScriptedModel::failing(502);
        let err = rewrite(&model, &input(&analysis, &defaults))
            .await
            .unwrap_err();
        assert!(matches!(err, RewriteError::Transport(_)));
    }
}
