use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::llm_client::{DEFAULT_BASE_URL, DEFAULT_MODEL};

const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: String,
    pub llm_base_url: String,
    pub llm_model: String,
    pub llm_temperature: f32,
    pub record_store_path: PathBuf,
    pub job_log_path: PathBuf,
    pub export_dir: PathBuf,
    /// Markdown template for rewrites. The built-in template is used when unset.
    pub rewrite_template_path: Option<PathBuf>,
    pub target_language: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            groq_api_key: require_env("GROQ_API_KEY")?,
            llm_base_url: env_or("LLM_BASE_URL", DEFAULT_BASE_URL),
            llm_model: env_or("LLM_MODEL", DEFAULT_MODEL),
            llm_temperature: env_or("LLM_TEMPERATURE", &DEFAULT_TEMPERATURE.to_string())
                .parse::<f32>()
                .context("LLM_TEMPERATURE must be a number")?,
            record_store_path: env_or("RECORD_STORE_PATH", "candidates.json").into(),
            job_log_path: env_or("JOB_LOG_PATH", "jobs.csv").into(),
            export_dir: env_or("EXPORT_DIR", "exports").into(),
            rewrite_template_path: std::env::var("REWRITE_TEMPLATE_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            target_language: env_or("TARGET_LANGUAGE", "English"),
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }

    /// Loads the configured rewrite template, or the built-in one.
    pub fn load_rewrite_template(&self) -> Result<String> {
        match &self.rewrite_template_path {
            Some(path) => std::fs::read_to_string(path).with_context(|| {
                format!("Failed to read rewrite template {}", path.display())
            }),
            None => Ok(crate::rewrite::DEFAULT_TEMPLATE.to_string()),
        }
    }

    /// Configuration with every file kept under `dir`.
    #[cfg(test)]
    pub fn for_tests(dir: &std::path::Path) -> Self {
        Config {
            groq_api_key: "test".to_string(),
            llm_base_url: DEFAULT_BASE_URL.to_string(),
            llm_model: DEFAULT_MODEL.to_string(),
            llm_temperature: DEFAULT_TEMPERATURE,
            record_store_path: dir.join("candidates.json"),
            job_log_path: dir.join("jobs.csv"),
            export_dir: dir.join("exports"),
            rewrite_template_path: None,
            target_language: "English".to_string(),
            port: 0,
            rust_log: "info".to_string(),
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
