//! Job postings: the append-only job log and its HTTP handlers.

pub mod handlers;
pub mod job_log;
