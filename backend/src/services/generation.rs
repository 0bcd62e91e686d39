//! Generation service for bulk certificate creation
//!
//! Records are returned to the caller and never written back to the feed.

use std::collections::HashSet;

use shared::{
    generate_certificates_excluding, parse_recipient_lines, CertificateRecord,
    CertificateTemplate,
};

use crate::error::AppResult;
use crate::services::CertificateService;

#[derive(Clone)]
pub struct GenerationService {
    certificates: CertificateService,
}

impl GenerationService {
    pub fn new(certificates: CertificateService) -> Self {
        Self { certificates }
    }

    /// Generate one certificate per line of `recipients_text`.
    ///
    /// Ids already in the feed are avoided when the feed can be read. The
    /// feed is advisory here: if it is unreachable generation still proceeds.
    pub async fn generate(
        &self,
        template: &CertificateTemplate,
        recipients_text: &str,
    ) -> AppResult<Vec<CertificateRecord>> {
        let recipients = parse_recipient_lines(recipients_text)?;

        let known_ids = match self.certificates.known_ids().await {
            Ok(ids) => ids,
            Err(err) => {
                tracing::warn!("Generating without feed id check: {}", err);
                HashSet::new()
            }
        };

        let certificates = generate_certificates_excluding(template, &recipients, &known_ids)?;
        tracing::info!(
            "Generated {} certificates for course '{}'",
            certificates.len(),
            template.course_name
        );
        Ok(certificates)
    }
}
