use serde::{Deserialize, Serialize};

/// One row of the job log. Field order is the column order on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub description: String,
    pub details: String,
}

impl JobPosting {
    /// Job text as fed to every agent prompt.
    pub fn render(&self) -> String {
        format!(
            "**Job opening: {}**\n\n**Job description:**\n{}\n\n**Full details:**\n{}",
            self.title.trim(),
            self.description.trim(),
            self.details.trim()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_contains_all_parts() {
        let job = JobPosting {
            title: "Data Engineer".to_string(),
            description: "Mid-level data engineer (AI)".to_string(),
            details: "\nPython, SQL, Spark.\n".to_string(),
        };
        let text = job.render();
        assert!(text.starts_with("**Job opening: Data Engineer**"));
        assert!(text.contains("Mid-level data engineer (AI)"));
        assert!(text.ends_with("Python, SQL, Spark."));
    }
}
