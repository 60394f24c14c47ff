//! Client-side draft validation.
//!
//! Mirrors what the submission form enforces before a create is allowed to
//! reach the server. All violated rules are reported together so the user can
//! fix a form in one pass instead of rule-by-rule.

use crate::rating::Rating;
use crate::thesis::ThesisDraft;

const MIN_TOPIC_CHARS: usize = 5;
const MIN_DESCRIPTION_CHARS: usize = 20;

/// One violated rule, attributed to the field it concerns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// A draft that failed one or more validation rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDraft {
    pub issues: Vec<ValidationIssue>,
}

impl std::error::Error for InvalidDraft {}

impl std::fmt::Display for InvalidDraft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "draft validation failed: ")?;
        for (index, issue) in self.issues.iter().enumerate() {
            if index > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

/// Check a draft against every submission rule.
///
/// # Errors
///
/// Returns [`InvalidDraft`] listing every violated rule. A draft that passes
/// here is safe to hand to the thesis gateway.
pub fn validate(draft: &ThesisDraft) -> Result<(), InvalidDraft> {
    let mut issues = Vec::new();

    if draft.topic_name.trim().chars().count() < MIN_TOPIC_CHARS {
        issues.push(ValidationIssue {
            field: "topic_name",
            message: format!("must be at least {MIN_TOPIC_CHARS} characters"),
        });
    }

    if draft.main_area.trim().is_empty() {
        issues.push(ValidationIssue {
            field: "main_area",
            message: "is required".into(),
        });
    }

    if draft.topic_description.trim().chars().count() < MIN_DESCRIPTION_CHARS {
        issues.push(ValidationIssue {
            field: "topic_description",
            message: format!("must be at least {MIN_DESCRIPTION_CHARS} characters"),
        });
    }

    for (field, value) in [
        ("personal_interest", draft.personal_interest),
        ("business_potential", draft.business_potential),
        ("open_source_contribution", draft.open_source_contribution),
        ("scientific_value", draft.scientific_value),
    ] {
        if !Rating::in_range(value) {
            issues.push(ValidationIssue {
                field,
                message: format!(
                    "must be between {} and {} (got {value})",
                    Rating::MIN,
                    Rating::MAX
                ),
            });
        }
    }

    if let Some(link) = draft.external_link.as_deref()
        && !link.is_empty()
        && url::Url::parse(link).is_err()
    {
        issues.push(ValidationIssue {
            field: "external_link",
            message: "must be a valid URL or empty".into(),
        });
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(InvalidDraft { issues })
    }
}
