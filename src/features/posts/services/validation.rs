use chrono::{DateTime, Duration, Utc};

use crate::features::posts::models::{FieldErrors, FormField, ReportDraft};
use crate::shared::constants::{
    DESCRIPTION_MAX_LEN, DESCRIPTION_MIN_LEN, EVENT_DATE_TOLERANCE_SECS, TITLE_MAX_LEN,
    TITLE_MIN_LEN,
};
use crate::shared::validation::ALL_DIGITS_REGEX;

/// Validate a draft against the submission rules.
///
/// Pure function of the draft and the supplied clock: every rule is checked
/// independently so all invalid fields are reported at once. Returns an
/// empty set iff the draft is submittable.
pub fn validate_draft(draft: &ReportDraft, now: DateTime<Utc>) -> FieldErrors {
    let mut errors = FieldErrors::new();

    let title = draft.title.trim();
    if title.is_empty() {
        errors.insert(FormField::Title, "Title is required.");
    } else if title.chars().count() < TITLE_MIN_LEN {
        errors.insert(
            FormField::Title,
            format!("Title must be at least {} characters.", TITLE_MIN_LEN),
        );
    } else if draft.title.chars().count() > TITLE_MAX_LEN {
        errors.insert(
            FormField::Title,
            format!("Title must not exceed {} characters.", TITLE_MAX_LEN),
        );
    } else if ALL_DIGITS_REGEX.is_match(title) {
        errors.insert(FormField::Title, "Title must not consist of digits only.");
    }

    // `kind` is a closed enum, so the LOST/FOUND rule cannot fail here.

    if draft.category.is_none() {
        errors.insert(FormField::CategoryId, "Please choose a category.");
    }

    let description = draft.description.trim();
    if description.is_empty() {
        errors.insert(FormField::Description, "Description is required.");
    } else if draft.description.chars().count() > DESCRIPTION_MAX_LEN {
        errors.insert(
            FormField::Description,
            format!(
                "Description must not exceed {} characters.",
                DESCRIPTION_MAX_LEN
            ),
        );
    } else if description.chars().count() < DESCRIPTION_MIN_LEN {
        errors.insert(
            FormField::Description,
            format!(
                "Please describe the item in at least {} characters.",
                DESCRIPTION_MIN_LEN
            ),
        );
    }

    if draft.location_detail.trim().is_empty() {
        errors.insert(
            FormField::LocationDetail,
            "Please tell us where the item was lost or found.",
        );
    }

    if let Some(event_date) = draft.event_date {
        let latest = now + Duration::seconds(EVENT_DATE_TOLERANCE_SECS);
        if event_date > latest {
            errors.insert(FormField::EventDate, "The date cannot be in the future.");
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::posts::models::{Building, Category, ReportKind};

    fn valid_draft() -> ReportDraft {
        ReportDraft {
            kind: ReportKind::Lost,
            title: "Lost a brown leather wallet".to_string(),
            category: Some(Category::Wallet),
            event_date: None,
            building: Building::Alpha,
            location_detail: "Room 201, desk 5".to_string(),
            description: "Brown wallet with a small scratch on the front".to_string(),
            images: Vec::new(),
            contact_phone: String::new(),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    #[test]
    fn test_valid_draft_passes() {
        let errors = validate_draft(&valid_draft(), now());
        assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    }

    #[test]
    fn test_empty_title() {
        let mut draft = valid_draft();
        draft.title = "   ".to_string();
        let errors = validate_draft(&draft, now());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(FormField::Title), Some("Title is required."));
    }

    #[test]
    fn test_short_title() {
        let mut draft = valid_draft();
        draft.title = "short".to_string();
        let errors = validate_draft(&draft, now());
        assert!(errors.get(FormField::Title).unwrap().contains("at least 10"));
    }

    #[test]
    fn test_title_exactly_ten_trimmed_chars_passes() {
        let mut draft = valid_draft();
        draft.title = "  ten chars!  ".to_string(); // 10 chars trimmed
        let errors = validate_draft(&draft, now());
        assert_eq!(errors.get(FormField::Title), None);
    }

    #[test]
    fn test_title_too_long() {
        let mut draft = valid_draft();
        draft.title = "x".repeat(101);
        let errors = validate_draft(&draft, now());
        assert!(errors.get(FormField::Title).unwrap().contains("100"));

        draft.title = "x".repeat(100);
        assert!(validate_draft(&draft, now()).is_empty());
    }

    #[test]
    fn test_all_digit_title_rejected() {
        let mut draft = valid_draft();
        draft.title = "12345".to_string();
        let errors = validate_draft(&draft, now());
        // Too short wins, but the title must be rejected either way
        assert!(errors.get(FormField::Title).is_some());

        draft.title = "0123456789".to_string(); // long enough, still all digits
        let errors = validate_draft(&draft, now());
        assert_eq!(
            errors.get(FormField::Title),
            Some("Title must not consist of digits only.")
        );
    }

    #[test]
    fn test_missing_category() {
        let mut draft = valid_draft();
        draft.category = None;
        let errors = validate_draft(&draft, now());
        assert_eq!(errors.len(), 1);
        assert!(errors.get(FormField::CategoryId).is_some());
    }

    #[test]
    fn test_description_rules() {
        let mut draft = valid_draft();

        draft.description = String::new();
        let errors = validate_draft(&draft, now());
        assert_eq!(
            errors.get(FormField::Description),
            Some("Description is required.")
        );

        draft.description = "too short".to_string();
        let errors = validate_draft(&draft, now());
        assert!(errors
            .get(FormField::Description)
            .unwrap()
            .contains("at least 10"));

        draft.description = "x".repeat(1001);
        let errors = validate_draft(&draft, now());
        assert!(errors.get(FormField::Description).unwrap().contains("1000"));
    }

    #[test]
    fn test_empty_location_detail() {
        let mut draft = valid_draft();
        draft.location_detail = " ".to_string();
        let errors = validate_draft(&draft, now());
        assert_eq!(errors.len(), 1);
        assert!(errors.get(FormField::LocationDetail).is_some());
    }

    #[test]
    fn test_event_date_tolerance() {
        let now = now();
        let mut draft = valid_draft();

        draft.event_date = Some(now + Duration::seconds(30));
        assert!(validate_draft(&draft, now).is_empty());

        draft.event_date = Some(now + Duration::seconds(120));
        let errors = validate_draft(&draft, now);
        assert_eq!(errors.len(), 1);
        assert!(errors.get(FormField::EventDate).is_some());

        draft.event_date = Some(now - Duration::days(3));
        assert!(validate_draft(&draft, now).is_empty());
    }

    #[test]
    fn test_multiple_errors_reported_together() {
        let draft = ReportDraft {
            title: String::new(),
            description: String::new(),
            location_detail: String::new(),
            category: None,
            ..valid_draft()
        };
        let errors = validate_draft(&draft, now());
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.first_field(), Some("title"));
    }
}
