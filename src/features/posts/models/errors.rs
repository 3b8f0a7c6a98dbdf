use std::collections::HashMap;

/// Form fields that can carry a validation error, in validation-rule order.
/// The order decides which field gets focused first when several are invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Kind,
    CategoryId,
    Description,
    LocationDetail,
    EventDate,
    LocationBuilding,
    ContactPhone,
}

impl FormField {
    /// Flat field name as used by the form inputs
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Kind => "type",
            FormField::CategoryId => "category_id",
            FormField::Description => "description",
            FormField::LocationDetail => "location_detail",
            FormField::EventDate => "event_date",
            FormField::LocationBuilding => "location_building",
            FormField::ContactPhone => "contact_phone",
        }
    }

    fn rank(name: &str) -> usize {
        const ORDER: &[&str] = &[
            "title",
            "type",
            "category_id",
            "description",
            "location_detail",
            "event_date",
            "location_building",
            "contact_phone",
        ];
        ORDER
            .iter()
            .position(|f| *f == name)
            .unwrap_or(ORDER.len())
    }

    /// Translate a server-side field name (dotted for nested objects, e.g.
    /// `location.detail`) to the flat local name.
    pub fn local_name(remote: &str) -> String {
        match remote {
            "location.detail" => "location_detail".to_string(),
            "location.building" => "location_building".to_string(),
            other => other.replace('.', "_"),
        }
    }
}

/// Field-scoped validation messages, recomputed wholesale on each validation
/// pass. Insertion order is preserved; `first_field` resolves ties by the
/// canonical rule order so focus always lands on the topmost invalid input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    entries: Vec<(String, String)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for a field, replacing any previous one
    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.insert_named(field.as_str(), message);
    }

    pub fn insert_named(&mut self, field: &str, message: impl Into<String>) {
        let message = message.into();
        if let Some(entry) = self.entries.iter_mut().find(|(f, _)| f == field) {
            entry.1 = message;
        } else {
            self.entries.push((field.to_string(), message));
        }
    }

    /// Clear the error for one field, leaving the others untouched
    pub fn clear(&mut self, field: FormField) {
        self.entries.retain(|(f, _)| f != field.as_str());
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.get_named(field.as_str())
    }

    pub fn get_named(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(f, _)| f == field)
            .map(|(_, m)| m.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// First invalid field in validation-rule order; the caller scrolls
    /// to and focuses this one.
    pub fn first_field(&self) -> Option<&str> {
        self.entries
            .iter()
            .min_by_key(|(f, _)| FormField::rank(f))
            .map(|(f, _)| f.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(f, m)| (f.as_str(), m.as_str()))
    }

    /// Merge a server error map into the local set, translating dotted
    /// remote names to flat local names.
    pub fn merge_remote(&mut self, remote: &HashMap<String, String>) {
        for (field, message) in remote {
            self.insert_named(&FormField::local_name(field), message.clone());
        }
    }
}
