use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::jobs::job_log::JobLog;
use crate::llm_client::ChatModel;
use crate::records::store::RecordStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Chat model behind every agent. `LlmClient` in production.
    pub llm: Arc<dyn ChatModel>,
    /// Held for the whole read-modify-write of an append.
    pub records: Arc<Mutex<RecordStore>>,
    pub jobs: Arc<Mutex<JobLog>>,
    pub config: Config,
    pub rewrite_template: Arc<str>,
}

impl AppState {
    pub fn new(llm: Arc<dyn ChatModel>, config: Config, rewrite_template: String) -> Self {
        Self {
            llm,
            records: Arc::new(Mutex::new(RecordStore::new(&config.record_store_path))),
            jobs: Arc::new(Mutex::new(JobLog::new(&config.job_log_path))),
            config,
            rewrite_template: rewrite_template.into(),
        }
    }
}
