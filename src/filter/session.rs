//! Staged/applied filter session controller.

use std::collections::BTreeMap;

use log::info;

use super::location::QueryLocation;
use super::query::{self, QueryString};
use super::store::{self, SelectionStore};
use crate::config::FilterConfig;
use crate::logger::Logger;
use crate::model::FilterGroup;

/// Owns one filter panel's lifecycle: a staged working copy the UI edits
/// freely, and the applied copy external consumers filter against.
///
/// Edits to the staged copy never leak — only [`apply_filters`] commits them
/// and serializes to the attached location. [`clear_filters`] is the one
/// deliberate exception: clearing empties both copies and serializes
/// immediately, since it is not an experiment a user cancels.
///
/// Synchronization is opt-in. Without a location (or with `sync_enabled`
/// off) the session is pure in-memory state, which is what embedded widgets
/// and most tests want.
///
/// [`apply_filters`]: FilterSession::apply_filters
/// [`clear_filters`]: FilterSession::clear_filters
pub struct FilterSession {
    staged: SelectionStore,
    applied: Vec<FilterGroup>,
    location: Option<Box<dyn QueryLocation>>,
    config: FilterConfig,
    logger: Logger,
}

impl FilterSession {
    /// Pure in-memory session with default configuration.
    pub fn new(groups: Vec<FilterGroup>) -> Self {
        Self::with_config(groups, FilterConfig::default())
    }

    pub fn with_config(groups: Vec<FilterGroup>, config: FilterConfig) -> Self {
        let staged = SelectionStore::new(groups);
        let applied = staged.groups().to_vec();
        Self {
            staged,
            applied,
            location: None,
            config,
            logger: Logger::new(),
        }
    }

    /// Attach the external location and hydrate staged and applied state
    /// from whatever filter parameters it currently carries.
    ///
    /// When synchronization is disabled in the configuration the location is
    /// discarded and the session stays in-memory.
    pub fn with_location(mut self, location: Box<dyn QueryLocation>) -> Self {
        if self.config.sync_enabled {
            self.location = Some(location);
            self.hydrate();
        }
        self
    }

    /// The staged working copy (what the filter panel renders).
    pub fn store(&self) -> &SelectionStore {
        &self.staged
    }

    /// Mutable access for incremental staged edits (toggles).
    pub fn store_mut(&mut self) -> &mut SelectionStore {
        &mut self.staged
    }

    /// Replace the staged working copy wholesale. Applied state and the
    /// external location stay untouched until [`FilterSession::apply_filters`].
    pub fn update_filters(&mut self, groups: Vec<FilterGroup>) {
        self.staged.set_groups(groups);
    }

    /// Commit staged → applied and serialize the applied state.
    pub fn apply_filters(&mut self) {
        self.applied = self.staged.groups().to_vec();
        self.write_location();
        let active = self.active_filters().len();
        info!("applied {active} active filter(s)");
        self.logger.log(format!("filters applied ({active} active)"));
    }

    /// Empty every selection in both copies and serialize immediately.
    pub fn clear_filters(&mut self) {
        self.staged.clear_all();
        self.applied = self.staged.groups().to_vec();
        self.write_location();
        self.logger.log("filters cleared");
    }

    /// Active categories of the *staged* copy.
    pub fn active_filters(&self) -> BTreeMap<String, Vec<String>> {
        self.staged.active_filters()
    }

    pub fn has_active_filters(&self) -> bool {
        self.staged.has_active_selection()
    }

    /// Active categories of the *applied* copy (what consumers filter by).
    pub fn applied_filters(&self) -> BTreeMap<String, Vec<String>> {
        store::active_filters_of(&self.applied)
    }

    pub fn applied_groups(&self) -> &[FilterGroup] {
        &self.applied
    }

    /// Re-read the external location after an externally triggered history
    /// move (browser back/forward) and overwrite both copies.
    pub fn handle_navigation(&mut self) {
        self.hydrate();
    }

    /// Diagnostics recorded by this session.
    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    fn hydrate(&mut self) {
        let Some(location) = &self.location else {
            return;
        };
        let query = QueryString::parse(&location.read());
        let mut groups = self.staged.groups().to_vec();
        query::read_filters(&query, &mut groups, &self.config.param_prefix, &self.config.id_delimiter);
        self.applied = groups.clone();
        self.staged.set_groups(groups);
        self.logger.log(format!(
            "hydrated {} active filter(s) from location",
            self.applied_filters().len()
        ));
    }

    fn write_location(&mut self) {
        let Some(location) = &mut self.location else {
            return;
        };
        let mut query = QueryString::parse(&location.read());
        query::write_filters(&mut query, &self.applied, &self.config.param_prefix, &self.config.id_delimiter);
        location.write(&query.encode());
    }
}
