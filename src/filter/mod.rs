//! Filter engine: dependency resolution, selection state, session control
//! and query-string synchronization.
//!
//! # Module Components
//!
//! - [`resolver`] - Dependency-gated visibility and cascade invalidation
//! - [`store`] - Staged selection state and the edits a filter panel drives
//! - [`session`] - Staged/applied lifecycle and commit semantics
//! - [`query`] - Query-string codec and the `filter_*` parameter adapter
//! - [`location`] - Addressable external locations (browser history stand-in)
//! - [`table`] - Pagination/sort/search parameters sharing the query string
//!
//! # Architecture
//!
//! A [`FilterSession`] owns two copies of the filter groups: the *staged*
//! working copy inside a [`SelectionStore`], mutated freely by the UI, and
//! the *applied* copy external consumers filter their data against. Only
//! `apply_filters` commits staged edits (and serializes them to the attached
//! [`QueryLocation`]); clearing is immediate. Every selection mutation runs
//! the resolver's cascade pruning so dependent categories never keep ids
//! their ancestors no longer allow.

pub mod location;
pub mod query;
pub mod resolver;
pub mod session;
pub mod store;
pub mod table;

// Re-export core types for easier access from other modules
pub use location::{MemoryLocation, QueryLocation};
pub use query::QueryString;
pub use session::FilterSession;
pub use store::SelectionStore;
pub use table::{SortOrder, TableQuery};
