//! Projection of the leaf selection into submittable recipients.

use log::warn;

use crate::backend::Recipient;
use crate::filter::SelectionStore;

/// Resolve the leaf category's selected ids into recipients, in selection
/// order.
///
/// An id with no matching item, or an item whose institution field is
/// missing or not a string, is skipped rather than producing a partial
/// record. The projection is pure and idempotent: the same store state
/// always yields the same list.
pub fn extract_recipients(store: &SelectionStore, leaf_key: &str, institution_field: &str) -> Vec<Recipient> {
    let Some(category) = store.category(leaf_key) else {
        return Vec::new();
    };
    let mut recipients = Vec::with_capacity(category.selected_ids.len());
    for id in &category.selected_ids {
        match category.item(id).and_then(|item| item.field_str(institution_field)) {
            Some(institution_id) => recipients.push(Recipient {
                student_id: id.clone(),
                user_institution_id: institution_id.to_string(),
            }),
            None => warn!("skipping unresolvable recipient id {id}"),
        }
    }
    recipients
}
