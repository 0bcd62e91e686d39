//! Listing search

use crate::models::CertificateRecord;

/// Records whose recipient name, course name or id contains `term`,
/// ignoring case. A blank term keeps everything; any other term is matched
/// as typed, surrounding spaces included. Order is preserved.
pub fn search_certificates(
    records: Vec<CertificateRecord>,
    term: &str,
) -> Vec<CertificateRecord> {
    if term.trim().is_empty() {
        return records;
    }
    let needle = term.to_lowercase();
    records
        .into_iter()
        .filter(|record| record.matches_lowercase(&needle))
        .collect()
}
