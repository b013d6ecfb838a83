use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::extraction::Record;

/// Categories the screening schema asks the model to choose from.
pub const AREAS: &[&str] = &[
    "Development",
    "Marketing",
    "Sales",
    "Finance",
    "Administrative",
    "Other",
];

pub const MAX_SCORE: f64 = 10.0;

/// One résumé's extracted profile, as stored in the record store.
///
/// Decoding is lenient: the extractor back-fills absent fields with `[]`, so string
/// fields accept lists and nulls, and the score accepts numeric strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub area: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub summary: String,
    #[serde(default, deserialize_with = "lenient_list")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub education: String,
    #[serde(default, deserialize_with = "lenient_list")]
    pub interview_questions: Vec<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub strengths: Vec<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub areas_for_development: Vec<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub important_considerations: Vec<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub final_recommendations: String,
    #[serde(default, deserialize_with = "deserialize_score")]
    pub score: f64,
}

impl CandidateRecord {
    pub fn from_record(record: &Record) -> Result<Self, serde_json::Error> {
        Self::from_value(Value::Object(record.clone()))
    }

    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Markdown summary shown to a reviewer after screening.
    pub fn to_markdown(&self) -> String {
        let mut md = String::from("### Résumé Analysis and Summary\n");
        md.push_str(&format!("- **Name:** {}\n", self.name));
        md.push_str(&format!("- **Area:** {}\n", self.area));
        md.push_str(&format!("- **Skills:** {}\n", self.skills.join(", ")));
        md.push_str(&format!("- **Profile summary:** {}\n", self.summary));
        md.push_str(&format!("- **Score:** {:.1}\n", self.score));
        push_list(&mut md, "Suggested interview questions", &self.interview_questions);
        push_list(&mut md, "Strengths (alignments)", &self.strengths);
        push_list(
            &mut md,
            "Areas for development (misalignments)",
            &self.areas_for_development,
        );
        push_list(
            &mut md,
            "Points of attention",
            &self.important_considerations,
        );
        md.push_str(&format!(
            "- **Conclusion and recommendations:** {}\n",
            self.final_recommendations
        ));
        md
    }
}

fn push_list(md: &mut String, title: &str, items: &[String]) {
    md.push_str(&format!("- **{title}:**\n"));
    for item in items {
        md.push_str(&format!("  - {item}\n"));
    }
}

fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .iter()
            .map(value_to_text)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        other => value_to_text(&other),
    })
}

fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items.iter().map(value_to_text).collect(),
        Value::Null => Vec::new(),
        Value::String(s) if s.trim().is_empty() => Vec::new(),
        other => vec![value_to_text(&other)],
    })
}

/// Shared with `AnalysisResult::alignment_score`.
pub fn deserialize_score<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(parse_score(&value))
}

/// Reads a 0.0–10.0 score from a number or a string such as `"7.5"` or `"7,5"`.
pub fn parse_score(value: &Value) -> f64 {
    let raw = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().replace(',', ".").parse::<f64>().ok(),
        _ => None,
    };
    raw.filter(|v| v.is_finite())
        .map(|v| v.clamp(0.0, MAX_SCORE))
        .unwrap_or(0.0)
}
