use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::backend::Recipient;

/// Field → message map populated by step validators. Empty means valid.
/// A `BTreeMap` keeps iteration order stable for display.
pub type FieldErrors = BTreeMap<String, String>;

/// Everything the wizard steps collect.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActivityForm {
    pub title: String,
    pub description: String,
    /// Optional activity model to base the payload on.
    pub model_id: Option<String>,
    /// Derived from the recipient selection store before validation and
    /// submission; never edited directly by the UI.
    pub recipients: Vec<Recipient>,
    pub deadline: Option<NaiveDate>,
}
