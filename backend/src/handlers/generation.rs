//! HTTP handlers for bulk certificate generation

use axum::{
    extract::{rejection::JsonRejection, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::models::{CertificateRecord, CertificateTemplate};
use crate::services::{export_csv, CertificateService, GenerationService};
use crate::AppState;

/// Template plus recipient lines (`name,email[,grade]`)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateCertificatesRequest {
    pub template: CertificateTemplate,
    pub recipients: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateCertificatesResponse {
    pub count: usize,
    pub certificates: Vec<CertificateRecord>,
}

fn generation_service(state: &AppState) -> GenerationService {
    GenerationService::new(CertificateService::new(state.feed.clone()))
}

/// Generate certificates and return them as JSON
pub async fn generate_certificates(
    State(state): State<AppState>,
    body: Result<Json<GenerateCertificatesRequest>, JsonRejection>,
) -> AppResult<Json<GenerateCertificatesResponse>> {
    let Json(body) = body?;
    let certificates = generation_service(&state)
        .generate(&body.template, &body.recipients)
        .await?;

    Ok(Json(GenerateCertificatesResponse {
        count: certificates.len(),
        certificates,
    }))
}

/// Generate certificates and return the URL listing as CSV
pub async fn export_certificates(
    State(state): State<AppState>,
    body: Result<Json<GenerateCertificatesRequest>, JsonRejection>,
) -> AppResult<Response> {
    let Json(body) = body?;
    let certificates = generation_service(&state)
        .generate(&body.template, &body.recipients)
        .await?;
    let csv = export_csv(&certificates, &state.config.public_base_url)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"certificate-urls.csv\"",
            ),
        ],
        csv,
    )
        .into_response())
}
