use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single selectable entry within a category.
///
/// Beyond `id` and `name`, an item is an open key-value bag. Dependent
/// categories reference these fields by name through their `filtered_by`
/// relations, so an item only needs to carry the fields its dependents
/// actually ask for (a grade item carries `school_id`, a student item
/// carries `class_id` and `user_institution_id`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    /// Extra fields, including any foreign-key fields dependents filter by.
    #[serde(flatten, default)]
    pub fields: HashMap<String, serde_json::Value>,
}

impl Item {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            fields: HashMap::new(),
        }
    }

    /// Attach an extra field. Foreign-key values must be strings.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Read a field as a string.
    ///
    /// Foreign-key matching only ever compares string ids, so non-string
    /// values yield `None` rather than being coerced.
    pub fn field_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(|value| value.as_str())
    }
}
