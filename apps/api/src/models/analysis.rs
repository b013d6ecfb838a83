use serde::{Deserialize, Serialize};

use crate::models::candidate::deserialize_score;

/// Structured output of the deep-analysis pass. Never persisted on its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub analysis_summary: Option<String>,
    #[serde(default, deserialize_with = "deserialize_score")]
    pub alignment_score: f64,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub missing_skills: Vec<String>,
    #[serde(default)]
    pub underutilized_skills: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub key_improvements: Vec<String>,
}

impl AnalysisResult {
    /// True when the analysis carries nothing a rewrite could use.
    pub fn is_empty(&self) -> bool {
        let no_summary = self
            .analysis_summary
            .as_deref()
            .map_or(true, |s| s.trim().is_empty());
        no_summary
            && self.alignment_score == 0.0
            && self.strengths.is_empty()
            && self.weaknesses.is_empty()
            && self.missing_skills.is_empty()
            && self.underutilized_skills.is_empty()
            && self.recommendations.is_empty()
            && self.key_improvements.is_empty()
    }
}
