//! Route definitions for the Certificate Hub API

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Spreadsheet setup check
        .route("/setup", get(handlers::validate_setup))
        .nest("/certificates", certificate_routes())
}

/// Certificate routes
fn certificate_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_certificates))
        .route("/generate", post(handlers::generate_certificates))
        .route("/generate/export", post(handlers::export_certificates))
        .route("/:certificate_id", get(handlers::get_certificate))
}
