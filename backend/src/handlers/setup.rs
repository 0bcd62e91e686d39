//! Feed setup check handler

use axum::{extract::State, Json};

use crate::models::SetupValidation;
use crate::services::CertificateService;
use crate::AppState;

/// Report whether the spreadsheet feed is usable.
///
/// Always answers 200; problems are described in the body.
pub async fn validate_setup(State(state): State<AppState>) -> Json<SetupValidation> {
    let service = CertificateService::new(state.feed.clone());
    Json(service.validate_setup().await)
}
