//! Request-scoped state of one review cycle: the résumé and job text, the analysis once it
//! exists, and the rewrite options. Agents are called through it in order; the rewrite
//! refuses to run until an analysis is present.

use crate::analysis::agent::analyze;
use crate::llm_client::{ChatModel, LlmError};
use crate::models::analysis::AnalysisResult;
use crate::models::candidate::CandidateRecord;
use crate::records::projection::{project_to_analysis, project_to_content};
use crate::rewrite::agent::{rewrite, RewriteError, RewriteInput};
use crate::rewrite::options::RewriteOptions;

#[derive(Debug, Clone, Default)]
pub struct ReviewContext {
    pub resume_text: String,
    pub job_text: String,
    pub analysis: Option<AnalysisResult>,
    pub options: RewriteOptions,
}

impl ReviewContext {
    pub fn new(
        resume_text: impl Into<String>,
        job_text: impl Into<String>,
        options: RewriteOptions,
    ) -> Self {
        Self {
            resume_text: resume_text.into(),
            job_text: job_text.into(),
            analysis: None,
            options,
        }
    }

    /// Seeds the context from a stored candidate: both the content and the analysis are
    /// projections of the record, so no analysis call is needed before rewriting.
    pub fn from_record(
        record: &CandidateRecord,
        job_text: impl Into<String>,
        options: RewriteOptions,
    ) -> Self {
        Self {
            resume_text: project_to_content(record),
            job_text: job_text.into(),
            analysis: Some(project_to_analysis(record)),
            options,
        }
    }

    pub fn with_analysis(mut self, analysis: AnalysisResult) -> Self {
        self.analysis = Some(analysis);
        self
    }

    /// Runs the analysis agent and keeps its result. An unparseable answer leaves the
    /// context without an analysis.
    pub async fn analyze(
        &mut self,
        model: &dyn ChatModel,
    ) -> Result<Option<&AnalysisResult>, LlmError> {
        self.analysis = analyze(model, &self.resume_text, &self.job_text).await?;
        Ok(self.analysis.as_ref())
    }

    /// Rewrites in the language chosen in the options, or `default_language` when none was.
    pub async fn rewrite(
        &self,
        model: &dyn ChatModel,
        template: &str,
        default_language: &str,
    ) -> Result<String, RewriteError> {
        let missing = AnalysisResult::default();
        let input = RewriteInput {
            original_content: &self.resume_text,
            analysis: self.analysis.as_ref().unwrap_or(&missing),
            job_text: &self.job_text,
            template,
            options: &self.options,
            target_language: self.options.language(default_language),
        };
        rewrite(model, &input).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::ScriptedModel;
    use crate::rewrite::DEFAULT_TEMPLATE;

    const JOB: &str = "**Job opening: Data Engineer**";

    fn rewritten() -> String {
        format!("**Ana Silva**\n\n**Professional Summary**\n\n{}", "Builds pipelines. ".repeat(5))
    }

    #[tokio::test]
    async fn test_rewrite_without_analysis_never_calls_model() {
        let ctx = ReviewContext::new("Ana Silva, data engineer", JOB, RewriteOptions::default());
        let model = ScriptedModel::new([rewritten()]);
        let err = ctx.rewrite(&model, DEFAULT_TEMPLATE, "English").await.unwrap_err();
        assert!(matches!(err, RewriteError::MissingPrecondition("analysis")));
        assert_eq!(model.calls(), 0);
    }

    #[tokio::test]
    async fn test_analyze_then_rewrite() {
        let model = ScriptedModel::new([
            r#"{"analysis_summary": "Good fit.", "alignment_score": 8, "strengths": ["SQL"]}"#
                .to_string(),
            rewritten(),
        ]);
        let mut ctx =
            ReviewContext::new("Ana Silva, data engineer", JOB, RewriteOptions::default());

        let analysis = ctx.analyze(&model).await.unwrap().cloned().unwrap();
        assert_eq!(analysis.strengths, vec!["SQL"]);

        let text = ctx.rewrite(&model, DEFAULT_TEMPLATE, "English").await.unwrap();
        assert_eq!(text, rewritten().trim());
        assert_eq!(model.calls(), 2);
        assert!(model.prompts()[1].contains("- SQL"));
    }

    #[tokio::test]
    async fn test_unparseable_analysis_blocks_rewrite() {
        let model = ScriptedModel::new(["no json here".to_string(), rewritten()]);
        let mut ctx = ReviewContext::new("Ana Silva", JOB, RewriteOptions::default());

        assert!(ctx.analyze(&model).await.unwrap().is_none());
        let err = ctx.rewrite(&model, DEFAULT_TEMPLATE, "English").await.unwrap_err();
        assert!(matches!(err, RewriteError::MissingPrecondition("analysis")));
        assert_eq!(model.calls(), 1);
    }

    #[tokio::test]
    async fn test_stored_record_rewrites_with_a_single_call() {
        let record = CandidateRecord {
            name: "Ana Silva".to_string(),
            summary: "Data engineer.".to_string(),
            strengths: vec!["Spark".to_string()],
            score: 7.5,
            ..Default::default()
        };
        let ctx = ReviewContext::from_record(&record, JOB, RewriteOptions::default());
        assert!(ctx.resume_text.starts_with("# Ana Silva"));

        let model = ScriptedModel::new([rewritten()]);
        ctx.rewrite(&model, DEFAULT_TEMPLATE, "English").await.unwrap();
        assert_eq!(model.calls(), 1);
        assert!(model.prompts()[0].contains("Profile analysis for Ana Silva."));
    }

    #[tokio::test]
    async fn test_caller_language_reaches_the_prompt() {
        let options = RewriteOptions {
            target_language: Some("Portuguese".to_string()),
            ..Default::default()
        };
        let ctx = ReviewContext::new("Ana Silva, data engineer", JOB, options).with_analysis(
            AnalysisResult {
                strengths: vec!["SQL".to_string()],
                ..Default::default()
            },
        );
        let model = ScriptedModel::new([rewritten()]);
        ctx.rewrite(&model, DEFAULT_TEMPLATE, "English").await.unwrap();

        let prompt = &model.prompts()[0];
        assert!(prompt.contains("Write the whole résumé in Portuguese."));
        assert!(!prompt.contains("Write the whole résumé in English."));
    }

    #[tokio::test]
    async fn test_default_language_used_when_options_have_none() {
        let ctx = ReviewContext::new("Ana Silva", JOB, RewriteOptions::default()).with_analysis(
            AnalysisResult {
                strengths: vec!["SQL".to_string()],
                ..Default::default()
            },
        );
        let model = ScriptedModel::new([rewritten()]);
        ctx.rewrite(&model, DEFAULT_TEMPLATE, "Spanish").await.unwrap();
        assert!(model.prompts()[0].contains("Write the whole résumé in Spanish."));
    }
}
