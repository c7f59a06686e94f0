//! Facetist - A hierarchical dependent filter and selection engine
//!
//! This library provides the state and control core behind faceted filter
//! panels and multi-step assignment wizards: dependency-gated categories
//! (School → Grade → Class → Student), staged-then-applied filter sessions,
//! query-string synchronization, and a validated multi-step submission flow.
//! It exposes state and callbacks for a rendering layer and renders nothing
//! itself.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`config`] - Library configuration management
//! * [`model`] - Pure data model: items, categories, filter groups
//! * [`filter`] - Dependency resolver, selection store, session controller,
//!   and query-string synchronization
//! * [`backend`] - Collaborator traits for directory data and submissions
//! * [`wizard`] - Multi-step activity wizard and background tasks
//! * [`logger`] - In-memory diagnostics buffer

/// Collaborator seams for directory fetches and submissions
pub mod backend;

/// Configuration module for managing library settings
pub mod config;

/// Default parameter names, field keys, and message constants
pub mod constants;

/// Filter engine: resolution, selection state, sessions, query sync
pub mod filter;

/// Diagnostics logging surfaced to hosting UIs
pub mod logger;

/// Pure data model for filter hierarchies
pub mod model;

/// Multi-step activity wizard
pub mod wizard;

// Re-export the model types for convenient access
pub use model::{Category, FilterGroup, ForeignKey, Item};
