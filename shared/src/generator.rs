//! Bulk certificate generation
//!
//! Applies one template to an ordered list of recipients. Output order always
//! matches input order and any invalid input aborts the whole batch.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::dates::certificate_dates;
use crate::error::SynthesisError;
use crate::identifiers::{new_certificate_id_with, new_verification_code_with};
use crate::models::{CertificateRecord, CertificateTemplate, RecipientInput};
use crate::validation::{validate_recipient, validate_template};

/// Fresh ids drawn per record before giving up on finding an unused one
pub const MAX_ID_ATTEMPTS: usize = 16;

/// Generate one certificate per recipient
pub fn generate_certificates(
    template: &CertificateTemplate,
    recipients: &[RecipientInput],
) -> Result<Vec<CertificateRecord>, SynthesisError> {
    generate_certificates_excluding(template, recipients, &HashSet::new())
}

/// Generate certificates whose ids avoid `known_ids`, typically the ids
/// already present in the feed.
pub fn generate_certificates_excluding(
    template: &CertificateTemplate,
    recipients: &[RecipientInput],
    known_ids: &HashSet<String>,
) -> Result<Vec<CertificateRecord>, SynthesisError> {
    generate_certificates_with(
        template,
        recipients,
        known_ids,
        &mut rand::thread_rng(),
        Utc::now,
    )
}

/// Generation with an explicit random source and clock.
///
/// `clock` is read once per record so `created_at` and `updated_at` match.
pub fn generate_certificates_with<R, C>(
    template: &CertificateTemplate,
    recipients: &[RecipientInput],
    known_ids: &HashSet<String>,
    rng: &mut R,
    mut clock: C,
) -> Result<Vec<CertificateRecord>, SynthesisError>
where
    R: Rng + ?Sized,
    C: FnMut() -> DateTime<Utc>,
{
    validate_template(template)?;
    if recipients.is_empty() {
        return Err(SynthesisError::NoRecipients);
    }
    for (index, recipient) in recipients.iter().enumerate() {
        validate_recipient(recipient, index + 1)?;
    }

    let mut issued: HashSet<String> = HashSet::with_capacity(recipients.len());
    let mut certificates = Vec::with_capacity(recipients.len());

    for recipient in recipients {
        let now = clock();
        let id = unused_id(rng, now, known_ids, &issued)?;
        issued.insert(id.clone());
        let verification_code = new_verification_code_with(rng);
        certificates.push(create_certificate(
            recipient,
            template,
            id,
            verification_code,
            now,
        ));
    }

    Ok(certificates)
}

/// Assemble a record from already-generated identifiers
pub fn create_certificate(
    recipient: &RecipientInput,
    template: &CertificateTemplate,
    id: String,
    verification_code: String,
    now: DateTime<Utc>,
) -> CertificateRecord {
    let dates = certificate_dates(now);

    CertificateRecord {
        id,
        recipient_name: recipient.name.clone(),
        recipient_email: recipient.email.clone(),
        course_name: template.course_name.clone(),
        issuer_name: template.issuer_name.clone(),
        issue_date: dates.issue_date,
        completion_date: dates.completion_date,
        duration: template.duration.clone(),
        grade: recipient.effective_grade().to_string(),
        skills: template.skills.clone(),
        instructor_name: template.instructor_name.clone(),
        verification_code,
        is_verified: true,
        created_at: now,
        updated_at: now,
    }
}

fn unused_id<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
    known_ids: &HashSet<String>,
    issued: &HashSet<String>,
) -> Result<String, SynthesisError> {
    for _ in 0..MAX_ID_ATTEMPTS {
        let candidate = new_certificate_id_with(rng, now);
        if !known_ids.contains(&candidate) && !issued.contains(&candidate) {
            return Ok(candidate);
        }
    }
    Err(SynthesisError::IdCollision {
        attempts: MAX_ID_ATTEMPTS,
    })
}
