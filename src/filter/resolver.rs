//! Dependency-gated visibility and cascade invalidation.
//!
//! A dependent category only shows items whose foreign-key fields match the
//! current selection of every ancestor it is filtered by. Whenever a
//! selection changes, descendants must drop any selected ids that are no
//! longer visible; [`prune_invalid_selections`] applies that rule until the
//! whole chain is consistent again.

use std::collections::HashSet;

use crate::model::{Category, Item};

/// Compute the currently selectable items of `key`.
///
/// A category without `filtered_by` relations exposes all of its items. A
/// dependent category exposes only items whose foreign-key field values are
/// contained in the selected-id set of every listed ancestor; an ancestor
/// with nothing selected gates the whole set down to empty (dependents are
/// gated, not merely unfiltered, until the ancestor is chosen). Unknown
/// category or ancestor keys resolve to an empty list, never an error.
pub fn effective_items<'a>(categories: &'a [Category], key: &str) -> Vec<&'a Item> {
    let Some(category) = categories.iter().find(|category| category.key == key) else {
        return Vec::new();
    };
    if category.filtered_by.is_empty() {
        return category.items.iter().collect();
    }

    // Collect every ancestor's selected-id set up front; a missing or
    // unselected ancestor empties the result outright.
    let mut gates: Vec<(&str, HashSet<&str>)> = Vec::with_capacity(category.filtered_by.len());
    for relation in &category.filtered_by {
        let Some(ancestor) = categories.iter().find(|category| category.key == relation.category) else {
            return Vec::new();
        };
        if ancestor.selected_ids.is_empty() {
            return Vec::new();
        }
        let selected = ancestor.selected_ids.iter().map(String::as_str).collect();
        gates.push((relation.field.as_str(), selected));
    }

    category
        .items
        .iter()
        .filter(|item| {
            gates.iter().all(|(field, allowed)| {
                item.field_str(field).is_some_and(|value| allowed.contains(&value))
            })
        })
        .collect()
}

/// Ids of the currently selectable items of `key`.
pub fn effective_ids(categories: &[Category], key: &str) -> HashSet<String> {
    effective_items(categories, key)
        .into_iter()
        .map(|item| item.id.clone())
        .collect()
}

/// Drop selected ids that fell out of their category's effective set.
///
/// Removing a selection can invalidate selections further down the chain, so
/// passes repeat until the tree is stable. Each pass settles at least one
/// level of the dependency chain, so stability is reached within one pass
/// per category whatever order the categories are declared in.
pub fn prune_invalid_selections(categories: &mut [Category]) {
    for _ in 0..categories.len() {
        let mut changed = false;
        for index in 0..categories.len() {
            if categories[index].filtered_by.is_empty() || categories[index].selected_ids.is_empty() {
                continue;
            }
            let key = categories[index].key.clone();
            let allowed = effective_ids(categories, &key);
            let category = &mut categories[index];
            let before = category.selected_ids.len();
            category.selected_ids.retain(|id| allowed.contains(id));
            changed |= category.selected_ids.len() != before;
        }
        if !changed {
            break;
        }
    }
}
