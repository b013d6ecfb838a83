//! Candidate record store and its projections.

pub mod handlers;
pub mod projection;
pub mod store;
