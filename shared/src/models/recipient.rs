//! Recipient input for bulk generation

use serde::{Deserialize, Serialize};

/// Grade recorded when a recipient line leaves it blank
pub const DEFAULT_GRADE: &str = "Pass";

/// One recipient of a generation batch
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipientInput {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub grade: String,
}

impl RecipientInput {
    pub fn new(name: impl Into<String>, email: impl Into<String>, grade: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            grade: grade.into(),
        }
    }

    /// The grade to print, falling back to [`DEFAULT_GRADE`]
    pub fn effective_grade(&self) -> &str {
        let grade = self.grade.trim();
        if grade.is_empty() {
            DEFAULT_GRADE
        } else {
            &self.grade
        }
    }
}
