//! Mapping a spreadsheet feed into certificate records
//!
//! A feed is a grid of string cells whose first row holds column headers.
//! Headers are resolved once into a [`HeaderIndex`]; rows then read cells by
//! [`Column`] rather than by raw header text.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::error::FeedValidationError;
use crate::models::CertificateRecord;
use crate::types::Grid;

/// Columns understood by the importer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    CertificateId,
    RecipientName,
    RecipientEmail,
    CourseName,
    IssuerName,
    IssueDate,
    CompletionDate,
    Duration,
    Grade,
    Skills,
    InstructorName,
    VerificationCode,
    IsVerified,
}

impl Column {
    pub const ALL: [Column; 13] = [
        Column::CertificateId,
        Column::RecipientName,
        Column::RecipientEmail,
        Column::CourseName,
        Column::IssuerName,
        Column::IssueDate,
        Column::CompletionDate,
        Column::Duration,
        Column::Grade,
        Column::Skills,
        Column::InstructorName,
        Column::VerificationCode,
        Column::IsVerified,
    ];

    /// Columns a feed must carry before any row is mapped
    pub const REQUIRED: [Column; 4] = [
        Column::CertificateId,
        Column::RecipientName,
        Column::CourseName,
        Column::IssuerName,
    ];

    /// Header label as it appears in the sheet
    pub fn header(&self) -> &'static str {
        match self {
            Column::CertificateId => "Certificate ID",
            Column::RecipientName => "Recipient Name",
            Column::RecipientEmail => "Recipient Email",
            Column::CourseName => "Course Name",
            Column::IssuerName => "Issuer Name",
            Column::IssueDate => "Issue Date",
            Column::CompletionDate => "Completion Date",
            Column::Duration => "Duration",
            Column::Grade => "Grade",
            Column::Skills => "Skills",
            Column::InstructorName => "Instructor Name",
            Column::VerificationCode => "Verification Code",
            Column::IsVerified => "Is Verified",
        }
    }

    /// Exact (whitespace-trimmed) header match
    pub fn from_header(header: &str) -> Option<Column> {
        let header = header.trim();
        Column::ALL.into_iter().find(|c| c.header() == header)
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.header())
    }
}

/// Position of each known column in the header row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderIndex {
    positions: HashMap<Column, usize>,
}

impl HeaderIndex {
    /// Unknown headers are ignored; a repeated header resolves to its last
    /// occurrence.
    pub fn from_header_row(headers: &[String]) -> Self {
        let positions = headers
            .iter()
            .enumerate()
            .filter_map(|(i, h)| Column::from_header(h).map(|c| (c, i)))
            .collect();
        Self { positions }
    }

    pub fn position(&self, column: Column) -> Option<usize> {
        self.positions.get(&column).copied()
    }

    /// Required columns absent from the header, in [`Column::REQUIRED`] order
    pub fn missing_required(&self) -> Vec<Column> {
        Column::REQUIRED
            .into_iter()
            .filter(|c| !self.positions.contains_key(c))
            .collect()
    }

    pub fn row<'a>(&'a self, cells: &'a [String]) -> FeedRow<'a> {
        FeedRow {
            cells,
            index: self,
        }
    }
}

/// One data row read through its header index
#[derive(Debug, Clone, Copy)]
pub struct FeedRow<'a> {
    cells: &'a [String],
    index: &'a HeaderIndex,
}

impl<'a> FeedRow<'a> {
    /// Cell text, or "" when the column is absent or the row is short
    pub fn get(&self, column: Column) -> &'a str {
        self.index
            .position(column)
            .and_then(|i| self.cells.get(i))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn to_record(&self, imported_at: DateTime<Utc>) -> CertificateRecord {
        let instructor = self.get(Column::InstructorName);
        CertificateRecord {
            id: self.get(Column::CertificateId).to_string(),
            recipient_name: self.get(Column::RecipientName).to_string(),
            recipient_email: self.get(Column::RecipientEmail).to_string(),
            course_name: self.get(Column::CourseName).to_string(),
            issuer_name: self.get(Column::IssuerName).to_string(),
            issue_date: self.get(Column::IssueDate).to_string(),
            completion_date: self.get(Column::CompletionDate).to_string(),
            duration: self.get(Column::Duration).to_string(),
            grade: self.get(Column::Grade).to_string(),
            skills: parse_skills(self.get(Column::Skills)),
            instructor_name: (!instructor.is_empty()).then(|| instructor.to_string()),
            verification_code: self.get(Column::VerificationCode).to_string(),
            is_verified: parse_is_verified(self.get(Column::IsVerified)),
            created_at: imported_at,
            updated_at: imported_at,
        }
    }
}

/// Comma-separated skills, each trimmed. An empty cell yields no skills.
pub fn parse_skills(cell: &str) -> Vec<String> {
    if cell.is_empty() {
        return Vec::new();
    }
    cell.split(',').map(|s| s.trim().to_string()).collect()
}

/// True only for a case-insensitive "true"
pub fn parse_is_verified(cell: &str) -> bool {
    cell.eq_ignore_ascii_case("true")
}

/// Check the feed shape before mapping: at least one data row and every
/// required column present.
pub fn validate_feed(grid: &Grid) -> Result<HeaderIndex, FeedValidationError> {
    let Some((header, rows)) = grid.split_first() else {
        return Err(FeedValidationError::Empty);
    };
    if rows.is_empty() {
        return Err(FeedValidationError::Empty);
    }

    let index = HeaderIndex::from_header_row(header);
    let missing = index.missing_required();
    if !missing.is_empty() {
        return Err(FeedValidationError::MissingColumns(missing));
    }
    Ok(index)
}

/// Map every data row of a validated feed
pub fn map_feed(
    grid: &Grid,
    imported_at: DateTime<Utc>,
) -> Result<Vec<CertificateRecord>, FeedValidationError> {
    let index = validate_feed(grid)?;
    Ok(grid[1..]
        .iter()
        .map(|cells| index.row(cells).to_record(imported_at))
        .collect())
}

/// First row whose certificate id equals `id` exactly. `Ok(None)` when no
/// row matches.
pub fn find_certificate(
    grid: &Grid,
    id: &str,
    imported_at: DateTime<Utc>,
) -> Result<Option<CertificateRecord>, FeedValidationError> {
    let index = validate_feed(grid)?;
    Ok(grid[1..]
        .iter()
        .map(|cells| index.row(cells))
        .find(|row| row.get(Column::CertificateId) == id)
        .map(|row| row.to_record(imported_at)))
}

/// Every certificate id present in the feed
pub fn certificate_ids(grid: &Grid) -> Result<Vec<String>, FeedValidationError> {
    let index = validate_feed(grid)?;
    Ok(grid[1..]
        .iter()
        .map(|cells| index.row(cells).get(Column::CertificateId).to_string())
        .collect())
}
