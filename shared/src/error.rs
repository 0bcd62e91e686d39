//! Errors raised by the synthesis and feed-validation pipelines

use thiserror::Error;

use crate::feed::Column;

/// Generation input that cannot produce a full batch
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SynthesisError {
    #[error("Invalid template: {field} is required")]
    InvalidTemplate { field: String },

    /// `line` is 1-based within the submitted text or recipient list
    #[error("Invalid recipient on line {line}: {reason}")]
    InvalidRecipientLine { line: usize, reason: String },

    #[error("No recipients supplied")]
    NoRecipients,

    #[error("Could not produce a unique certificate id after {attempts} attempts")]
    IdCollision { attempts: usize },
}

/// A reachable feed that cannot be mapped into certificate records
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeedValidationError {
    #[error("No data found in the sheet. Please add certificate data.")]
    Empty,

    #[error("Missing required columns: {}", join_columns(.0))]
    MissingColumns(Vec<Column>),
}

impl FeedValidationError {
    /// Header labels of the missing columns, empty for other failures
    pub fn missing_columns(&self) -> Vec<String> {
        match self {
            FeedValidationError::MissingColumns(columns) => {
                columns.iter().map(|c| c.header().to_string()).collect()
            }
            FeedValidationError::Empty => Vec::new(),
        }
    }
}

fn join_columns(columns: &[Column]) -> String {
    columns
        .iter()
        .map(|c| c.header())
        .collect::<Vec<_>>()
        .join(", ")
}
