//! Deterministic projections of a stored candidate. They let a rewrite be re-driven for
//! any stored record without a fresh analysis call.

use crate::models::analysis::AnalysisResult;
use crate::models::candidate::CandidateRecord;

/// Renders the narrative fields of a record as résumé-like markdown.
pub fn project_to_content(record: &CandidateRecord) -> String {
    let title = if record.name.trim().is_empty() {
        "Resume"
    } else {
        record.name.trim()
    };

    let bullets = |items: &[String]| {
        items
            .iter()
            .map(|item| format!("- {item}"))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "# {title}\n\n\
         ## Professional Summary\n{summary}\n\n\
         ## Area\n{area}\n\n\
         ## Education\n{education}\n\n\
         ## Skills\n{skills}\n\n\
         ## Strengths\n{strengths}\n\n\
         ## Areas for Development\n{development}\n\n\
         ## Recommendations\n{recommendations}\n",
        summary = record.summary,
        area = record.area,
        education = record.education,
        skills = record.skills.join(", "),
        strengths = bullets(&record.strengths),
        development = bullets(&record.areas_for_development),
        recommendations = record.final_recommendations,
    )
}

/// Synthesizes an analysis from what the screening pass already stored.
/// The record has no skill-gap fields, so `missing_skills` and `underutilized_skills`
/// are always empty.
pub fn project_to_analysis(record: &CandidateRecord) -> AnalysisResult {
    let name = if record.name.trim().is_empty() {
        "candidate"
    } else {
        record.name.trim()
    };

    AnalysisResult {
        analysis_summary: Some(format!("Profile analysis for {name}. {}", record.summary)),
        alignment_score: record.score,
        strengths: record.strengths.clone(),
        weaknesses: record.areas_for_development.clone(),
        missing_skills: Vec::new(),
        underutilized_skills: Vec::new(),
        recommendations: vec![record.final_recommendations.clone()],
        key_improvements: record.important_considerations.clone(),
    }
}
