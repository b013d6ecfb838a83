// Prompt for the deep-analysis pass: résumé vs. job posting, seven keys plus a score.

/// Analysis prompt template.
/// Replace: {persona}, {json_only}, {resume}, {job}
pub const ANALYSIS_PROMPT_TEMPLATE: &str = "{persona}
Compare the résumé below against the job posting and assess how well the candidate fits.
Return a JSON object with exactly these keys:
{
  \"analysis_summary\": \"Two or three sentences on the overall fit\",
  \"alignment_score\": 0.0,
  \"strengths\": [\"Points where the résumé matches the job well\"],
  \"weaknesses\": [\"Points where the résumé falls short of the job\"],
  \"missing_skills\": [\"Skills the job asks for that the résumé never shows\"],
  \"underutilized_skills\": [\"Skills the résumé has but undersells for this job\"],
  \"recommendations\": [\"Concrete changes to the résumé for this job\"],
  \"key_improvements\": [\"The few changes with the highest impact\"]
}
alignment_score is a number from 0.0 to 10.0 with no other text.
{json_only}

Résumé:
'{resume}'

---

Job posting:
'{job}'
";
