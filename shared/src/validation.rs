//! Validation of generation input
//!
//! Bulk recipient text is one recipient per line, `Name,Email,Grade`, with
//! the grade optional.

use validator::Validate;

use crate::error::SynthesisError;
use crate::models::{CertificateTemplate, RecipientInput, DEFAULT_GRADE};

// ============================================================================
// Template Validation
// ============================================================================

/// Field names reported for template failures, in reporting priority
const TEMPLATE_FIELDS: [(&str, &str); 3] = [
    ("course_name", "courseName"),
    ("issuer_name", "issuerName"),
    ("skills", "skills"),
];

/// Check that a template can be applied to a batch
pub fn validate_template(template: &CertificateTemplate) -> Result<(), SynthesisError> {
    template.validate().map_err(|errors| {
        let failed = errors.field_errors();
        let field = TEMPLATE_FIELDS
            .iter()
            .find(|(name, _)| failed.contains_key(name))
            .map(|(_, label)| *label)
            .unwrap_or("template");
        SynthesisError::InvalidTemplate {
            field: field.to_string(),
        }
    })
}

// ============================================================================
// Recipient Validation
// ============================================================================

/// Check a recipient built outside the text parser. `line` is 1-based.
pub fn validate_recipient(recipient: &RecipientInput, line: usize) -> Result<(), SynthesisError> {
    if recipient.name.trim().is_empty() {
        return Err(SynthesisError::InvalidRecipientLine {
            line,
            reason: "name is required".to_string(),
        });
    }
    if recipient.email.trim().is_empty() {
        return Err(SynthesisError::InvalidRecipientLine {
            line,
            reason: "email is required".to_string(),
        });
    }
    Ok(())
}

/// Parse one non-blank `Name,Email,Grade` line
pub fn parse_recipient_line(
    line: &str,
    line_number: usize,
) -> Result<RecipientInput, SynthesisError> {
    let mut fields = line.split(',').map(str::trim);
    let name = fields.next().unwrap_or_default();
    let email = fields.next().unwrap_or_default();
    let grade = fields.next().unwrap_or_default();

    let recipient = RecipientInput::new(
        name,
        email,
        if grade.is_empty() { DEFAULT_GRADE } else { grade },
    );
    validate_recipient(&recipient, line_number)?;
    Ok(recipient)
}

/// Parse bulk recipient text.
///
/// Blank lines are skipped but still counted, so errors report the line the
/// user sees. Any malformed line fails the whole batch.
pub fn parse_recipient_lines(text: &str) -> Result<Vec<RecipientInput>, SynthesisError> {
    let recipients = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| parse_recipient_line(line, index + 1))
        .collect::<Result<Vec<_>, _>>()?;

    if recipients.is_empty() {
        return Err(SynthesisError::NoRecipients);
    }
    Ok(recipients)
}
