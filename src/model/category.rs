use serde::{Deserialize, Serialize};

use super::item::Item;

/// Links a dependent category to one ancestor: an item of the dependent is
/// visible only while its `field` value is among the ancestor's selected ids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKey {
    /// Key of the ancestor category within the same group.
    pub category: String,
    /// Item field holding the ancestor id (e.g. `school_id`).
    pub field: String,
}

/// One filterable dimension: a keyed set of items plus the current selection.
///
/// `filtered_by` lists the ancestors gating this category's visible items;
/// `depends_on` carries the same ancestor keys for callers that only need the
/// topology. `selected_ids` preserves selection order and must stay a subset
/// of the currently visible (dependency-filtered) item ids — the filter
/// engine re-establishes that invariant after every mutation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique within the owning filter group.
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub selected_ids: Vec<String>,
    #[serde(default)]
    pub depends_on: Vec<String>,
    #[serde(default)]
    pub filtered_by: Vec<ForeignKey>,
}

impl Category {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            items: Vec::new(),
            selected_ids: Vec::new(),
            depends_on: Vec::new(),
            filtered_by: Vec::new(),
        }
    }

    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }

    /// Declare an ancestor: this category's items are filtered down to those
    /// whose `field` value matches one of the ancestor's selected ids.
    pub fn with_dependency(mut self, ancestor_key: impl Into<String>, field: impl Into<String>) -> Self {
        let ancestor_key = ancestor_key.into();
        self.depends_on.push(ancestor_key.clone());
        self.filtered_by.push(ForeignKey {
            category: ancestor_key,
            field: field.into(),
        });
        self
    }

    /// Look an item up by id, regardless of current visibility.
    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Whether this category counts toward the active filters.
    pub fn is_active(&self) -> bool {
        !self.selected_ids.is_empty()
    }

    /// Whether this category's visible items are gated by ancestors.
    pub fn is_dependent(&self) -> bool {
        !self.filtered_by.is_empty()
    }
}
