//! Staged selection state and the operations a filter panel drives.

use std::collections::BTreeMap;

use super::resolver;
use crate::model::{Category, FilterGroup, Item};

/// Holds the staged (uncommitted) working copy of every filter group and
/// applies selection edits at item, batch, and global granularity.
///
/// All operations are total: an unknown category key or item id is a no-op,
/// never an error, so a stale callback from the rendering layer cannot
/// poison the state. Every mutation re-runs cascade pruning on the owning
/// group, keeping each selection a subset of its category's visible items.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionStore {
    groups: Vec<FilterGroup>,
}

impl SelectionStore {
    pub fn new(groups: Vec<FilterGroup>) -> Self {
        let mut store = Self { groups: Vec::new() };
        store.set_groups(groups);
        store
    }

    pub fn groups(&self) -> &[FilterGroup] {
        &self.groups
    }

    pub fn into_groups(self) -> Vec<FilterGroup> {
        self.groups
    }

    /// Replace the working copy wholesale (e.g. after a directory fetch),
    /// re-establishing the dependency invariant.
    pub fn set_groups(&mut self, groups: Vec<FilterGroup>) {
        self.groups = groups;
        for group in &mut self.groups {
            resolver::prune_invalid_selections(&mut group.categories);
        }
    }

    /// Look a category up across all groups.
    pub fn category(&self, key: &str) -> Option<&Category> {
        self.groups
            .iter()
            .find_map(|group| group.categories.iter().find(|category| category.key == key))
    }

    /// Items of `category_key` currently selectable given ancestor selections.
    pub fn effective_items(&self, category_key: &str) -> Vec<&Item> {
        match self.position(category_key) {
            Some((group, _)) => resolver::effective_items(&self.groups[group].categories, category_key),
            None => Vec::new(),
        }
    }

    /// Flip one item in or out of a category's selection.
    ///
    /// Only ids that are currently visible may enter the selection; removing
    /// is always allowed.
    pub fn toggle_item(&mut self, category_key: &str, item_id: &str) {
        let Some((group, index)) = self.position(category_key) else {
            return;
        };
        let categories = &mut self.groups[group].categories;
        match categories[index].selected_ids.iter().position(|id| id == item_id) {
            Some(position) => {
                categories[index].selected_ids.remove(position);
            }
            None => {
                let allowed = resolver::effective_ids(categories, category_key);
                if allowed.contains(item_id) {
                    categories[index].selected_ids.push(item_id.to_string());
                }
            }
        }
        resolver::prune_invalid_selections(categories);
    }

    /// Toggle a batch of ids as a unit ("select all in this class").
    ///
    /// If any visible id of the batch is unselected the whole batch becomes
    /// selected; if all of them are selected the whole batch is dropped.
    /// Applying the same batch twice restores the original selection.
    pub fn toggle_batch(&mut self, category_key: &str, item_ids: &[String]) {
        let Some((group, index)) = self.position(category_key) else {
            return;
        };
        let categories = &mut self.groups[group].categories;
        let allowed = resolver::effective_ids(categories, category_key);
        let batch: Vec<&String> = item_ids.iter().filter(|id| allowed.contains(*id)).collect();
        if batch.is_empty() {
            return;
        }

        let category = &mut categories[index];
        let all_selected = batch.iter().all(|id| category.selected_ids.contains(id));
        if all_selected {
            category.selected_ids.retain(|id| !batch.contains(&id));
        } else {
            for id in batch {
                if !category.selected_ids.contains(id) {
                    category.selected_ids.push(id.clone());
                }
            }
        }
        resolver::prune_invalid_selections(categories);
    }

    /// Select every visible item in every category.
    ///
    /// Selecting all ancestors widens every dependent's effective set, so the
    /// whole universe is selected first and the chains are then pruned down
    /// to ids with resolvable foreign keys.
    pub fn select_all(&mut self) {
        for group in &mut self.groups {
            for category in &mut group.categories {
                category.selected_ids = category.items.iter().map(|item| item.id.clone()).collect();
            }
            resolver::prune_invalid_selections(&mut group.categories);
        }
    }

    /// Empty every category's selection.
    pub fn clear_all(&mut self) {
        for group in &mut self.groups {
            for category in &mut group.categories {
                category.selected_ids.clear();
            }
        }
    }

    pub fn is_item_selected(&self, category_key: &str, item_id: &str) -> bool {
        self.category(category_key)
            .is_some_and(|category| category.selected_ids.iter().any(|id| id == item_id))
    }

    /// Whether every id of a non-empty batch is selected. An empty batch is
    /// never "selected".
    pub fn is_batch_selected(&self, category_key: &str, item_ids: &[String]) -> bool {
        if item_ids.is_empty() {
            return false;
        }
        self.category(category_key)
            .is_some_and(|category| item_ids.iter().all(|id| category.selected_ids.contains(id)))
    }

    /// Per-category active selections across every group. Derived by
    /// scanning, never stored.
    pub fn active_filters(&self) -> BTreeMap<String, Vec<String>> {
        active_filters_of(&self.groups)
    }

    pub fn has_active_selection(&self) -> bool {
        self.groups
            .iter()
            .any(|group| group.active_categories().next().is_some())
    }

    fn position(&self, category_key: &str) -> Option<(usize, usize)> {
        for (group_index, group) in self.groups.iter().enumerate() {
            if let Some(index) = group
                .categories
                .iter()
                .position(|category| category.key == category_key)
            {
                return Some((group_index, index));
            }
        }
        None
    }
}

/// Scan a set of groups for categories with a non-empty selection.
pub fn active_filters_of(groups: &[FilterGroup]) -> BTreeMap<String, Vec<String>> {
    let mut active = BTreeMap::new();
    for group in groups {
        for category in group.active_categories() {
            active.insert(category.key.clone(), category.selected_ids.clone());
        }
    }
    active
}
