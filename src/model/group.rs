use serde::{Deserialize, Serialize};

use super::category::Category;

/// A named collection of categories rendered together (one filter panel).
///
/// Dependencies only ever point at categories inside the same group; groups
/// are independent of each other.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilterGroup {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl FilterGroup {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            categories: Vec::new(),
        }
    }

    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    pub fn category(&self, key: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.key == key)
    }

    pub fn category_mut(&mut self, key: &str) -> Option<&mut Category> {
        self.categories.iter_mut().find(|category| category.key == key)
    }

    /// Categories with a non-empty selection.
    pub fn active_categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter().filter(|category| category.is_active())
    }
}
