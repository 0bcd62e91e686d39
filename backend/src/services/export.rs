//! Export of generated certificates
//!
//! Produces the JSON record dump and the URL listing CSV that go out with a
//! generation batch.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use shared::{certificate_url, CertificateRecord};

use crate::error::{AppError, AppResult};

pub const CSV_HEADERS: [&str; 5] = [
    "Name",
    "Email",
    "Certificate ID",
    "Certificate URL",
    "Verification Code",
];
pub const JSON_FILE_NAME: &str = "generated-certificates.json";
pub const CSV_FILE_NAME: &str = "certificate-urls.csv";

/// One line of the URL listing
#[derive(Debug, Serialize, Deserialize)]
struct UrlListingRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Email")]
    email: String,
    #[serde(rename = "Certificate ID")]
    certificate_id: String,
    #[serde(rename = "Certificate URL")]
    certificate_url: String,
    #[serde(rename = "Verification Code")]
    verification_code: String,
}

impl UrlListingRow {
    fn new(record: &CertificateRecord, base_url: &str) -> Self {
        Self {
            name: record.recipient_name.clone(),
            email: record.recipient_email.clone(),
            certificate_id: record.id.clone(),
            certificate_url: certificate_url(base_url, &record.id),
            verification_code: record.verification_code.clone(),
        }
    }
}

/// Files written for one batch
#[derive(Debug, Clone)]
pub struct BatchArtifacts {
    pub json_path: PathBuf,
    pub csv_path: PathBuf,
}

/// CSV listing with a header row and one row per record, in input order
pub fn export_csv(records: &[CertificateRecord], base_url: &str) -> AppResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    if records.is_empty() {
        writer
            .write_record(CSV_HEADERS)
            .map_err(|e| AppError::Export(format!("Failed to write CSV header: {}", e)))?;
    }
    for record in records {
        writer
            .serialize(UrlListingRow::new(record, base_url))
            .map_err(|e| AppError::Export(format!("Failed to write CSV row: {}", e)))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Export(format!("Failed to finish CSV: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| AppError::Export(format!("CSV is not UTF-8: {}", e)))
}

/// Pretty-printed JSON array of the records
pub fn export_json(records: &[CertificateRecord]) -> AppResult<String> {
    serde_json::to_string_pretty(records)
        .map_err(|e| AppError::Export(format!("Failed to serialize certificates: {}", e)))
}

/// Certificate ids listed in a CSV produced by [`export_csv`]
pub fn read_certificate_ids(csv_text: &str) -> AppResult<Vec<String>> {
    let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
    reader
        .deserialize::<UrlListingRow>()
        .map(|row| {
            row.map(|r| r.certificate_id)
                .map_err(|e| AppError::Export(format!("Invalid CSV row: {}", e)))
        })
        .collect()
}

/// Write the JSON dump and URL listing into `out_dir`
pub fn write_batch(
    out_dir: &Path,
    records: &[CertificateRecord],
    base_url: &str,
) -> AppResult<BatchArtifacts> {
    fs::create_dir_all(out_dir).map_err(|e| {
        AppError::Export(format!("Failed to create {}: {}", out_dir.display(), e))
    })?;

    let artifacts = BatchArtifacts {
        json_path: out_dir.join(JSON_FILE_NAME),
        csv_path: out_dir.join(CSV_FILE_NAME),
    };

    write_file(&artifacts.json_path, &export_json(records)?)?;
    write_file(&artifacts.csv_path, &export_csv(records, base_url)?)?;

    tracing::info!(
        "Wrote {} certificates to {}",
        records.len(),
        out_dir.display()
    );
    Ok(artifacts)
}

fn write_file(path: &Path, contents: &str) -> AppResult<()> {
    fs::write(path, contents)
        .map_err(|e| AppError::Export(format!("Failed to write {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{create_certificate, CertificateTemplate, RecipientInput};

    fn record(name: &str, id: &str) -> CertificateRecord {
        let template = CertificateTemplate::new("Basics", "Rust Basics", "Academy");
        let recipient = RecipientInput::new(name, "someone@example.com", "");
        create_certificate(
            &recipient,
            &template,
            id.to_string(),
            "VER-ABCDEFGHI".to_string(),
            chrono::Utc::now(),
        )
    }

    #[test]
    fn test_export_csv_layout() {
        let records = vec![record("Jane Doe", "CERT-A"), record("John, Jr.", "CERT-B")];
        let csv = export_csv(&records, "https://example.org").unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], CSV_HEADERS.join(","));
        assert_eq!(
            lines[1],
            "Jane Doe,someone@example.com,CERT-A,https://example.org/certificate/CERT-A,VER-ABCDEFGHI"
        );
        assert!(lines[2].starts_with("\"John, Jr.\","));
    }

    #[test]
    fn test_export_csv_empty_has_header_only() {
        let csv = export_csv(&[], "https://example.org").unwrap();
        assert_eq!(csv.trim_end(), CSV_HEADERS.join(","));
    }

    #[test]
    fn test_read_certificate_ids_preserves_order() {
        let records = vec![record("A", "CERT-2"), record("B", "CERT-1")];
        let csv = export_csv(&records, "https://example.org").unwrap();
        assert_eq!(read_certificate_ids(&csv).unwrap(), vec!["CERT-2", "CERT-1"]);
    }
}
