//! Common types used across the platform

use serde::{Deserialize, Serialize};

use crate::models::CertificateRecord;

/// Raw spreadsheet values, row 0 holding the headers
pub type Grid = Vec<Vec<String>>;

/// Number of mapped rows returned with a successful setup check
pub const SETUP_SAMPLE_SIZE: usize = 3;

/// Outcome of checking that the spreadsheet feed is usable
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SetupValidation {
    pub is_valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing_columns: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_data: Option<Vec<CertificateRecord>>,
}

impl SetupValidation {
    pub fn valid(mut records: Vec<CertificateRecord>) -> Self {
        records.truncate(SETUP_SAMPLE_SIZE);
        Self {
            is_valid: true,
            error: None,
            missing_columns: Vec::new(),
            sample_data: Some(records),
        }
    }

    pub fn invalid(error: impl Into<String>, missing_columns: Vec<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(error.into()),
            missing_columns,
            sample_data: None,
        }
    }
}
