//! HTTP handlers for reading certificates from the feed

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::models::CertificateRecord;
use crate::services::CertificateService;
use crate::AppState;

/// Query parameters for listing certificates
#[derive(Debug, Deserialize)]
pub struct ListCertificatesQuery {
    /// Search term over recipient name, course name and id
    pub q: Option<String>,
}

/// List certificates, optionally filtered by a search term
pub async fn list_certificates(
    State(state): State<AppState>,
    Query(query): Query<ListCertificatesQuery>,
) -> AppResult<Json<Vec<CertificateRecord>>> {
    let service = CertificateService::new(state.feed.clone());
    let certificates = match query.q.as_deref() {
        Some(term) => service.search_certificates(term).await?,
        None => service.list_certificates().await?,
    };
    Ok(Json(certificates))
}

/// Get a certificate by ID
pub async fn get_certificate(
    State(state): State<AppState>,
    Path(certificate_id): Path<String>,
) -> AppResult<Json<CertificateRecord>> {
    let service = CertificateService::new(state.feed.clone());
    let certificate = service
        .get_certificate(&certificate_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Certificate {}", certificate_id)))?;
    Ok(Json(certificate))
}
