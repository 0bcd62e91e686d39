//! Property tests for the generation and feed-mapping pipelines
//!
//! - Generation preserves order, count and id uniqueness
//! - Recipient text parsing honours the grade default
//! - Row mapping tolerates short rows and splits skills predictably

use std::collections::HashSet;

use chrono::Utc;
use proptest::prelude::*;
use shared::identifiers::{is_certificate_id, is_verification_code};
use shared::{
    generate_certificates, map_feed, parse_recipient_lines, parse_skills, CertificateTemplate,
    Column, RecipientInput,
};

/// Strategy for names and emails: non-blank, no commas or newlines
fn field_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 .@_-]{0,24}".prop_map(|s| s.trim().to_string())
}

fn grade_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("Pass".to_string()),
        (0u32..=100).prop_map(|p| format!("{}%", p)),
    ]
}

fn recipient_strategy() -> impl Strategy<Value = RecipientInput> {
    (field_strategy(), field_strategy(), grade_strategy())
        .prop_map(|(name, email, grade)| RecipientInput::new(name, email, grade))
}

fn template() -> CertificateTemplate {
    let mut template =
        CertificateTemplate::new("Rust Course", "Rust Fundamentals", "Ferris Academy");
    template.duration = "12 hours".to_string();
    template.add_skill("Ownership");
    template.add_skill("Traits");
    template
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_generation_preserves_order_and_count(
        recipients in prop::collection::vec(recipient_strategy(), 1..40)
    ) {
        let certificates = generate_certificates(&template(), &recipients).unwrap();

        prop_assert_eq!(certificates.len(), recipients.len());
        for (certificate, recipient) in certificates.iter().zip(&recipients) {
            prop_assert_eq!(&certificate.recipient_name, &recipient.name);
            prop_assert_eq!(&certificate.recipient_email, &recipient.email);
            prop_assert!(certificate.is_verified);
            prop_assert!(is_certificate_id(&certificate.id));
            prop_assert!(is_verification_code(&certificate.verification_code));
            if recipient.grade.trim().is_empty() {
                prop_assert_eq!(certificate.grade.as_str(), "Pass");
            } else {
                prop_assert_eq!(&certificate.grade, &recipient.grade);
            }
        }

        let ids: HashSet<_> = certificates.iter().map(|c| c.id.as_str()).collect();
        prop_assert_eq!(ids.len(), certificates.len());
    }

    #[test]
    fn prop_recipient_text_round_trip(
        recipients in prop::collection::vec(recipient_strategy(), 1..20)
    ) {
        let text = recipients
            .iter()
            .map(|r| format!("{},{},{}", r.name, r.email, r.grade))
            .collect::<Vec<_>>()
            .join("\n");

        let parsed = parse_recipient_lines(&text).unwrap();
        prop_assert_eq!(parsed.len(), recipients.len());
        for (parsed, original) in parsed.iter().zip(&recipients) {
            prop_assert_eq!(&parsed.name, &original.name);
            prop_assert_eq!(parsed.grade.as_str(), original.effective_grade());
        }
    }

    #[test]
    fn prop_short_rows_never_panic(width in 0usize..=13, rows in 1usize..10) {
        let header: Vec<String> = Column::ALL.iter().map(|c| c.header().to_string()).collect();
        let mut grid = vec![header];
        for r in 0..rows {
            grid.push((0..width).map(|c| format!("r{}c{}", r, c)).collect());
        }

        let records = map_feed(&grid, Utc::now()).unwrap();
        prop_assert_eq!(records.len(), rows);
        for record in &records {
            if width == 0 {
                prop_assert_eq!(record.id.as_str(), "");
            }
            if width < 10 {
                prop_assert!(record.skills.is_empty());
            }
        }
    }

    #[test]
    fn prop_skills_are_trimmed(skills in prop::collection::vec("[A-Za-z]{1,10}", 1..8)) {
        let cell = skills.iter().map(|s| format!("  {} ", s)).collect::<Vec<_>>().join(",");
        prop_assert_eq!(parse_skills(&cell), skills);
    }
}
