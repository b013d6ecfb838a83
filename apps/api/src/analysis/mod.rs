pub mod agent;
pub mod handlers;
pub mod prompts;
