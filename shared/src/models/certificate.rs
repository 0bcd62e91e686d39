//! Certificate records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A certificate of completion
///
/// Field names serialize in camelCase so generated batches stay compatible
/// with the list-of-records JSON consumed by the certificate pages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CertificateRecord {
    pub id: String,
    pub recipient_name: String,
    #[serde(default)]
    pub recipient_email: String,
    pub course_name: String,
    pub issuer_name: String,
    pub issue_date: String,
    pub completion_date: String,
    #[serde(default)]
    pub duration: String,
    pub grade: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor_name: Option<String>,
    pub verification_code: String,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Site-relative page path for a certificate id
pub fn certificate_path(id: &str) -> String {
    format!("/certificate/{}", id)
}

/// Certificate page URL under `base_url`, ignoring a trailing `/` on the base
pub fn certificate_url(base_url: &str, id: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), certificate_path(id))
}

impl CertificateRecord {
    /// Copy of this record with `updated_at` moved to `now`
    pub fn touched(&self, now: DateTime<Utc>) -> Self {
        Self {
            updated_at: now,
            ..self.clone()
        }
    }

    /// Site-relative path of the certificate page
    pub fn path(&self) -> String {
        certificate_path(&self.id)
    }

    /// Absolute certificate page URL under `base_url`
    pub fn url(&self, base_url: &str) -> String {
        certificate_url(base_url, &self.id)
    }

    /// Case-insensitive substring match over recipient name, course name and id.
    ///
    /// `needle` must already be lowercased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.recipient_name.to_lowercase().contains(needle)
            || self.course_name.to_lowercase().contains(needle)
            || self.id.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> CertificateRecord {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        CertificateRecord {
            id: "CERT-1709294400000-ABC123".to_string(),
            recipient_name: "Alice Johnson".to_string(),
            recipient_email: "alice@example.com".to_string(),
            course_name: "Advanced React Development".to_string(),
            issuer_name: "TechEd Academy".to_string(),
            issue_date: "March 1, 2024".to_string(),
            completion_date: "February 25, 2024".to_string(),
            duration: "40 hours".to_string(),
            grade: "95%".to_string(),
            skills: vec!["React".to_string(), "TypeScript".to_string()],
            instructor_name: None,
            verification_code: "VER-ABCDEFGHI".to_string(),
            is_verified: true,
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn test_touched_only_moves_updated_at() {
        let record = sample();
        let later = record.updated_at + chrono::Duration::hours(2);
        let touched = record.touched(later);

        assert_eq!(touched.updated_at, later);
        assert_eq!(touched.created_at, record.created_at);
        assert_eq!(touched.id, record.id);
        assert_eq!(record.updated_at, record.created_at);
    }

    #[test]
    fn test_url_strips_trailing_slash() {
        let record = sample();
        assert_eq!(
            record.url("https://yoursite.com/"),
            "https://yoursite.com/certificate/CERT-1709294400000-ABC123"
        );
        assert_eq!(record.path(), "/certificate/CERT-1709294400000-ABC123");
    }

    #[test]
    fn test_free_path_and_url_match_record() {
        let record = sample();
        assert_eq!(certificate_path(&record.id), record.path());
        assert_eq!(
            certificate_url("https://yoursite.com", &record.id),
            record.url("https://yoursite.com///")
        );
    }

    #[test]
    fn test_serializes_camel_case_without_empty_instructor() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["recipientName"], "Alice Johnson");
        assert_eq!(json["isVerified"], true);
        assert!(json.get("instructorName").is_none());
    }

    #[test]
    fn test_matches_lowercase() {
        let record = sample();
        assert!(record.matches_lowercase("alice"));
        assert!(record.matches_lowercase("react"));
        assert!(record.matches_lowercase("abc123"));
        assert!(!record.matches_lowercase("bob"));
    }
}
