pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::{analysis, jobs, records, rewrite, screening};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Job log
        .route("/api/v1/jobs", post(jobs::handlers::handle_save_job))
        .route("/api/v1/jobs/active", get(jobs::handlers::handle_active_job))
        // Agents
        .route("/api/v1/screen", post(screening::handlers::handle_screen))
        .route("/api/v1/analyze", post(analysis::handlers::handle_analyze))
        .route("/api/v1/rewrite", post(rewrite::handlers::handle_rewrite))
        // Stored candidates
        .route(
            "/api/v1/candidates",
            get(records::handlers::handle_list_candidates),
        )
        .route(
            "/api/v1/candidates.json",
            get(records::handlers::handle_export_candidates),
        )
        .route(
            "/api/v1/candidates/:name",
            get(records::handlers::handle_get_candidate),
        )
        .route(
            "/api/v1/candidates/:name/rewrite",
            post(records::handlers::handle_rewrite_candidate),
        )
        // Exported rewrites
        .route(
            "/api/v1/exports/:file",
            get(rewrite::handlers::handle_download_export),
        )
        .with_state(state)
}
