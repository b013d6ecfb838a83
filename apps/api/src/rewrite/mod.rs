// Rewrite: analysis + original content + job + template → rewritten résumé markdown.

pub mod agent;
pub mod export;
pub mod handlers;
pub mod options;
pub mod prompts;

/// Built-in résumé template, used when no template file is configured.
pub const DEFAULT_TEMPLATE: &str = include_str!("template.md");
