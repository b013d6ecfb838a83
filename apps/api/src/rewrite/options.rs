//! Rewrite options and the phrasing each one maps to in the rewrite prompt.

use serde::{Deserialize, Serialize};

/// Which part of the résumé the rewrite should emphasize.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Focus {
    #[default]
    All,
    Skills,
    Experience,
    Summary,
}

impl Focus {
    pub const ALL: [Focus; 4] = [Focus::All, Focus::Skills, Focus::Experience, Focus::Summary];

    pub fn instruction(self) -> &'static str {
        match self {
            Focus::All => "Give balanced attention to every part of the résumé.",
            Focus::Skills => "Put special emphasis on technical skills and competencies.",
            Focus::Experience => {
                "Put special emphasis on professional experience and work history."
            }
            Focus::Summary => "Put special emphasis on the professional summary and objective.",
        }
    }
}

/// Register of the rewritten text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    #[default]
    Professional,
    Modern,
    Concise,
}

impl Style {
    pub const ALL: [Style; 3] = [Style::Professional, Style::Modern, Style::Concise];

    pub fn phrasing(self) -> &'static str {
        match self {
            Style::Professional => "professional and objective",
            Style::Modern => "modern and dynamic",
            Style::Concise => "concise and direct",
        }
    }
}

pub fn highlight_instruction(highlight_missing: bool) -> &'static str {
    if highlight_missing {
        "Clearly point out the skills the job asks for that are missing from the résumé, \
         but do NOT claim the candidate has them."
    } else {
        "There is no need to point out missing skills."
    }
}

pub fn strengths_instruction(emphasize_strengths: bool) -> &'static str {
    if emphasize_strengths {
        "Emphasize and highlight the strengths and alignments identified in the analysis."
    } else {
        "Keep the strengths without special emphasis."
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewriteOptions {
    pub focus: Focus,
    pub style: Style,
    pub highlight_missing: bool,
    pub emphasize_strengths: bool,
    /// Language of the rewritten résumé. `None` uses the service's configured language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_language: Option<String>,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            focus: Focus::All,
            style: Style::Professional,
            highlight_missing: true,
            emphasize_strengths: true,
            target_language: None,
        }
    }
}

impl RewriteOptions {
    /// The caller's language when set and non-blank, `default_language` otherwise.
    pub fn language<'a>(&'a self, default_language: &'a str) -> &'a str {
        self.target_language
            .as_deref()
            .map(str::trim)
            .filter(|lang| !lang.is_empty())
            .unwrap_or(default_language)
    }

    /// Every one of the 48 option combinations.
    #[cfg(test)]
    pub fn all_combinations() -> Vec<RewriteOptions> {
        let mut combos = Vec::with_capacity(48);
        for focus in Focus::ALL {
            for style in Style::ALL {
                for highlight_missing in [true, false] {
                    for emphasize_strengths in [true, false] {
                        combos.push(RewriteOptions {
                            focus,
                            style,
                            highlight_missing,
                            emphasize_strengths,
                            target_language: None,
                        });
                    }
                }
            }
        }
        combos
    }
}
