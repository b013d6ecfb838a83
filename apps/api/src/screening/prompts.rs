// All prompt constants for the screening agent.

/// Fields the screening response must carry. Missing ones are back-filled by the extractor.
pub const CANDIDATE_FIELDS: &[&str] = &[
    "name",
    "area",
    "summary",
    "skills",
    "education",
    "interview_questions",
    "strengths",
    "areas_for_development",
    "important_considerations",
    "final_recommendations",
    "score",
];

/// Identity key of a candidate record.
pub const CANDIDATE_KEY: &str = "name";

/// Target schema shown to the model. Keep keys in sync with `CANDIDATE_FIELDS`.
pub const CANDIDATE_SCHEMA: &str = r#"{
  "name": "Candidate's full name",
  "area": "Main area or sector the candidate works in. Pick exactly one: Development, Marketing, Sales, Finance, Administrative, Other",
  "summary": "Objective summary of the candidate's professional profile",
  "skills": ["skill 1", "skill 2", "..."],
  "education": "Summary of the most relevant academic background",
  "interview_questions": ["At least 3 useful interview questions based on the résumé, to clarify a point or explore it further"],
  "strengths": ["Strengths and aspects that indicate alignment with the profile or the job"],
  "areas_for_development": ["Points that indicate possible gaps, weaknesses or development needs"],
  "important_considerations": ["Specific observations that deserve verification or extra care"],
  "final_recommendations": "Final evaluative summary with suggested next steps (e.g. proceed to interview, refer to another opening)",
  "score": 0.0
}"#;

/// Weighted rubric the model applies itself. The score is never computed locally.
pub const SCORING_RUBRIC: &str = "\
Based on the specific job opening, compute the final score (from 0.0 to 10.0).
The value of this field must contain only the final score (x.x) with no other text or annotation.
Be fair and rigorous when scoring. A 10.0 must only be given to applications that exceed every expectation of the job.

Evaluation criteria:
1. Experience (Weight: 35% of the total): Analysis of previous positions, time in role and similarity to the job's responsibilities.
2. Technical Skills (Weight: 25% of the total): Check how well the technical skills align with the requirements mentioned in the job.
3. Education (Weight: 15% of the total): Assess the relevance of degrees/certifications to the role, including institutions and years of study.
4. Strengths (Weight: 15% of the total): Assess the relevance of the strengths (or alignments) to the job.
5. Weaknesses (Deduction of up to 10%): Assess how serious the weaknesses (or misalignments) are for the job.";

/// Screening prompt template.
/// Replace: {persona}, {schema}, {scoring_rubric}, {resume}, {job}, {json_only}
pub const SCREENING_PROMPT_TEMPLATE: &str = "{persona}
Your task is to analyze the content below and extract the data in the format shown, for each of the fields.
{json_only}
Desired schema:
{schema}

---
To compute the score field:
{scoring_rubric}

---

Résumé to analyze:
'{resume}'

---

Job the candidate is applying for:
'{job}'
";
