use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::features::posts::models::{ReportDraft, ReportKind};

/// Outbound payload for `POST /api/posts`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePostDto {
    #[serde(rename = "type")]
    pub kind: ReportKind,

    #[validate(length(min = 10, max = 100, message = "Title must be 10-100 characters"))]
    pub title: String,

    pub category_id: i32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_date: Option<DateTime<Utc>>,

    #[validate(nested)]
    pub location: LocationDto,

    #[validate(length(min = 10, max = 1000, message = "Description must be 10-1000 characters"))]
    pub description: String,

    pub images: Vec<String>,

    pub contact_phone: String,
}

/// Nested location object in the posts payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LocationDto {
    pub building: String,

    #[validate(length(min = 1, message = "Location detail is required"))]
    pub detail: String,
}

impl CreatePostDto {
    /// Compose the outbound payload from a draft. Callers are expected to
    /// have run draft validation first; `category_id` falls back to 0 so a
    /// missing category is still rejected server-side rather than panicking.
    pub fn from_draft(draft: &ReportDraft) -> Self {
        Self {
            kind: draft.kind,
            title: draft.title.clone(),
            category_id: draft.category.map(|c| c.id()).unwrap_or(0),
            event_date: draft.event_date,
            location: LocationDto {
                building: draft.building.as_str().to_string(),
                detail: draft.location_detail.clone(),
            },
            description: draft.description.clone(),
            images: draft.images.clone(),
            contact_phone: draft.contact_phone.clone(),
        }
    }
}

/// Response body of `POST /api/upload`
#[derive(Debug, Deserialize)]
pub struct UploadResponseDto {
    pub url: Option<String>,
    pub error: Option<String>,
}

/// Error body of a rejected `POST /api/posts`
#[derive(Debug, Default, Deserialize)]
pub struct SubmitErrorResponseDto {
    /// Per-field messages; keys may use dotted names for nested fields
    pub errors: Option<std::collections::HashMap<String, String>>,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl SubmitErrorResponseDto {
    /// Best global message when no field map is present
    pub fn global_message(&self) -> Option<&str> {
        self.message.as_deref().or(self.error.as_deref())
    }
}

/// MIME types the form accepts without falling back to the prefix check
pub const ALLOWED_IMAGE_TYPES: &[&str] = &[
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
];

/// Check whether a declared media type is an image type
pub fn is_image_type(content_type: &str) -> bool {
    ALLOWED_IMAGE_TYPES.contains(&content_type) || content_type.starts_with("image/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::posts::models::{Building, Category};

    fn sample_draft() -> ReportDraft {
        ReportDraft {
            kind: ReportKind::Found,
            title: "Found a brown leather wallet".to_string(),
            category: Some(Category::Wallet),
            event_date: None,
            building: Building::Library,
            location_detail: "Second floor reading room".to_string(),
            description: "Brown wallet with a student card inside".to_string(),
            images: vec!["http://cdn.test/a.jpg".to_string()],
            contact_phone: "0123456789".to_string(),
        }
    }

    #[test]
    fn test_payload_shape() {
        let dto = CreatePostDto::from_draft(&sample_draft());
        let json = serde_json::to_value(&dto).unwrap();

        assert_eq!(json["type"], "FOUND");
        assert_eq!(json["category_id"], 2);
        assert_eq!(json["location"]["building"], "Library");
        assert_eq!(json["location"]["detail"], "Second floor reading room");
        assert_eq!(json["images"][0], "http://cdn.test/a.jpg");
        assert_eq!(json["contact_phone"], "0123456789");
        // No event_date key when the draft has none
        assert!(json.get("event_date").is_none());
    }

    #[test]
    fn test_dto_validate() {
        let dto = CreatePostDto::from_draft(&sample_draft());
        assert!(dto.validate().is_ok());

        let mut bad = dto;
        bad.title = "short".to_string();
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_is_image_type() {
        assert!(is_image_type("image/jpeg"));
        assert!(is_image_type("image/heic")); // prefix fallback
        assert!(!is_image_type("application/pdf"));
        assert!(!is_image_type("video/mp4"));
    }

    #[test]
    fn test_submit_error_response_parsing() {
        let body = r#"{"errors": {"location.detail": "required", "title": "taken"}}"#;
        let parsed: SubmitErrorResponseDto = serde_json::from_str(body).unwrap();
        let errors = parsed.errors.unwrap();
        assert_eq!(errors["location.detail"], "required");

        let body = r#"{"message": "Server Error"}"#;
        let parsed: SubmitErrorResponseDto = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.global_message(), Some("Server Error"));
    }
}
