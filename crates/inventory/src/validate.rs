//! Structural validation of candidate records.
//!
//! Pure; no I/O. Every rule is evaluated — a draft violating three rules
//! reports three issues, not just the first.

use thiserror::Error;

use crate::record::{RecordDraft, RecordPatch};

/// A single validation rule violation.
///
/// The `Display` text is the message surfaced verbatim to callers.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationIssue {
    #[error("item name is required")]
    NameRequired,
    #[error("category is required")]
    CategoryRequired,
    #[error("quantity must be a non-negative number")]
    NegativeQuantity,
    #[error("price must be a non-negative number")]
    NegativePrice,
}

/// Check a draft against every rule; an empty list means valid.
///
/// A draft with a non-empty result must never reach a record store.
pub fn validate(draft: &RecordDraft) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if draft.name.trim().is_empty() {
        issues.push(ValidationIssue::NameRequired);
    }
    if draft.category.trim().is_empty() {
        issues.push(ValidationIssue::CategoryRequired);
    }
    if draft.quantity < 0 {
        issues.push(ValidationIssue::NegativeQuantity);
    }
    if draft.price_cents < 0 {
        issues.push(ValidationIssue::NegativePrice);
    }

    issues
}

/// Check the fields a patch actually carries; absent fields impose nothing.
pub fn validate_patch(patch: &RecordPatch) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if let Some(name) = &patch.name {
        if name.trim().is_empty() {
            issues.push(ValidationIssue::NameRequired);
        }
    }
    if let Some(category) = &patch.category {
        if category.trim().is_empty() {
            issues.push(ValidationIssue::CategoryRequired);
        }
    }
    if let Some(quantity) = patch.quantity {
        if quantity < 0 {
            issues.push(ValidationIssue::NegativeQuantity);
        }
    }
    if let Some(price_cents) = patch.price_cents {
        if price_cents < 0 {
            issues.push(ValidationIssue::NegativePrice);
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> RecordDraft {
        RecordDraft {
            name: "Stapler".to_string(),
            category: "Office".to_string(),
            quantity: 3,
            price_cents: 450,
            description: Some("Red".to_string()),
        }
    }

    #[test]
    fn valid_draft_has_no_issues() {
        assert!(validate(&valid_draft()).is_empty());
    }

    #[test]
    fn blank_name_is_reported() {
        let mut draft = valid_draft();
        draft.name = "   ".to_string();
        assert_eq!(validate(&draft), vec![ValidationIssue::NameRequired]);
    }

    #[test]
    fn blank_category_is_reported() {
        let mut draft = valid_draft();
        draft.category = String::new();
        assert_eq!(validate(&draft), vec![ValidationIssue::CategoryRequired]);
    }

    #[test]
    fn negative_quantity_is_reported() {
        let mut draft = valid_draft();
        draft.quantity = -1;
        assert_eq!(validate(&draft), vec![ValidationIssue::NegativeQuantity]);
    }

    #[test]
    fn negative_price_is_reported() {
        let mut draft = valid_draft();
        draft.price_cents = -250;
        assert_eq!(validate(&draft), vec![ValidationIssue::NegativePrice]);
    }

    #[test]
    fn all_violations_are_reported_together() {
        let draft = RecordDraft {
            name: String::new(),
            category: " ".to_string(),
            quantity: -5,
            price_cents: -1,
            description: None,
        };
        assert_eq!(
            validate(&draft),
            vec![
                ValidationIssue::NameRequired,
                ValidationIssue::CategoryRequired,
                ValidationIssue::NegativeQuantity,
                ValidationIssue::NegativePrice,
            ]
        );
    }

    #[test]
    fn zero_quantity_and_price_are_valid() {
        let mut draft = valid_draft();
        draft.quantity = 0;
        draft.price_cents = 0;
        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn empty_patch_is_valid() {
        assert!(validate_patch(&RecordPatch::default()).is_empty());
    }

    #[test]
    fn patch_checks_only_present_fields() {
        let patch = RecordPatch {
            name: Some("  ".to_string()),
            quantity: Some(-2),
            ..RecordPatch::default()
        };
        assert_eq!(
            validate_patch(&patch),
            vec![
                ValidationIssue::NameRequired,
                ValidationIssue::NegativeQuantity,
            ]
        );
    }

    #[test]
    fn issue_messages_match_the_reported_text() {
        assert_eq!(
            ValidationIssue::NameRequired.to_string(),
            "item name is required"
        );
        assert_eq!(
            ValidationIssue::NegativePrice.to_string(),
            "price must be a non-negative number"
        );
    }
}
