//! Certificate Hub backend
//!
//! Serves certificates read from a Google Sheets feed and generates new
//! certificate records in bulk from a template and a recipient list.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use config::Config;
pub use error::{AppError, AppResult};

use external::FeedSource;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub feed: Arc<dyn FeedSource>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(feed: Arc<dyn FeedSource>, config: Config) -> Self {
        Self {
            feed,
            config: Arc::new(config),
        }
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Certificate Hub API v1.0"
}
