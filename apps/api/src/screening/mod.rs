// Screening: PDF text → extraction prompt → candidate record → record store.
// All model calls go through llm_client::ChatModel.

pub mod agent;
pub mod document;
pub mod handlers;
pub mod prompts;
