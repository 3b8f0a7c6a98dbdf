use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether the report is about a lost or a found item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReportKind {
    #[default]
    Lost,
    Found,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Lost => "LOST",
            ReportKind::Found => "FOUND",
        }
    }
}

/// Fixed item category set the server recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    StudentCard,
    Wallet,
    Electronics,
    Keys,
    Documents,
    Other,
}

impl Category {
    /// Numeric id used by the posts API
    pub fn id(&self) -> i32 {
        match self {
            Category::StudentCard => 1,
            Category::Wallet => 2,
            Category::Electronics => 3,
            Category::Keys => 4,
            Category::Documents => 5,
            Category::Other => 6,
        }
    }

    pub fn from_id(id: i32) -> Option<Self> {
        match id {
            1 => Some(Category::StudentCard),
            2 => Some(Category::Wallet),
            3 => Some(Category::Electronics),
            4 => Some(Category::Keys),
            5 => Some(Category::Documents),
            6 => Some(Category::Other),
            _ => None,
        }
    }
}

/// Known campus buildings for the location selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Building {
    #[default]
    Alpha,
    Beta,
    Gamma,
    Delta,
    Epsilon,
    Canteen,
    Library,
    ParkingLot,
    Other,
}

impl Building {
    /// Display name sent to the server
    pub fn as_str(&self) -> &'static str {
        match self {
            Building::Alpha => "Alpha",
            Building::Beta => "Beta",
            Building::Gamma => "Gamma",
            Building::Delta => "Delta",
            Building::Epsilon => "Epsilon",
            Building::Canteen => "Canteen",
            Building::Library => "Library",
            Building::ParkingLot => "Parking Lot",
            Building::Other => "Other",
        }
    }
}

/// In-progress item report being composed by the user.
///
/// Owned exclusively by the form controller for its lifetime; created empty
/// when the form opens and discarded on cancel or after a confirmed
/// successful submission.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDraft {
    pub kind: ReportKind,
    pub title: String,
    pub category: Option<Category>,
    pub event_date: Option<DateTime<Utc>>,
    pub building: Building,
    pub location_detail: String,
    pub description: String,
    /// Uploaded image URLs, insertion order preserved
    pub images: Vec<String>,
    pub contact_phone: String,
}

impl Default for ReportDraft {
    fn default() -> Self {
        Self {
            kind: ReportKind::Lost,
            title: String::new(),
            // Documents is the pre-selected category in the form
            category: Some(Category::Documents),
            event_date: None,
            building: Building::Alpha,
            location_detail: String::new(),
            description: String::new(),
            images: Vec::new(),
            contact_phone: String::new(),
        }
    }
}

/// A file the user picked for upload
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(
        filename: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            filename: filename.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_id_round_trip() {
        for id in 1..=6 {
            let category = Category::from_id(id).unwrap();
            assert_eq!(category.id(), id);
        }
        assert_eq!(Category::from_id(0), None);
        assert_eq!(Category::from_id(7), None);
    }

    #[test]
    fn test_report_kind_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&ReportKind::Lost).unwrap(),
            "\"LOST\""
        );
        assert_eq!(
            serde_json::to_string(&ReportKind::Found).unwrap(),
            "\"FOUND\""
        );
    }

    #[test]
    fn test_draft_defaults() {
        let draft = ReportDraft::default();
        assert_eq!(draft.kind, ReportKind::Lost);
        assert_eq!(draft.category, Some(Category::Documents));
        assert_eq!(draft.building, Building::Alpha);
        assert!(draft.title.is_empty());
        assert!(draft.images.is_empty());
        assert!(draft.event_date.is_none());
    }
}
