//! Certificate templates

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Reusable course and issuer settings applied to every recipient of a batch
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CertificateTemplate {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    #[validate(custom = "validate_not_blank")]
    pub course_name: String,
    #[validate(custom = "validate_not_blank")]
    pub issuer_name: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    #[validate(custom = "validate_distinct_skills")]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor_name: Option<String>,
}

impl CertificateTemplate {
    pub fn new(
        name: impl Into<String>,
        course_name: impl Into<String>,
        issuer_name: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            course_name: course_name.into(),
            issuer_name: issuer_name.into(),
            duration: String::new(),
            skills: Vec::new(),
            instructor_name: None,
        }
    }

    /// Append a trimmed skill unless it is blank or already present.
    ///
    /// Returns true when the list changed.
    pub fn add_skill(&mut self, skill: &str) -> bool {
        let skill = skill.trim();
        if skill.is_empty() || self.skills.iter().any(|s| s == skill) {
            return false;
        }
        self.skills.push(skill.to_string());
        true
    }

    /// Remove an exact skill match. Returns true when it was present.
    pub fn remove_skill(&mut self, skill: &str) -> bool {
        let before = self.skills.len();
        self.skills.retain(|s| s != skill);
        self.skills.len() != before
    }
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn validate_distinct_skills(skills: &[String]) -> Result<(), ValidationError> {
    for (i, skill) in skills.iter().enumerate() {
        if skills[..i].contains(skill) {
            return Err(ValidationError::new("duplicate_skill"));
        }
    }
    Ok(())
}
