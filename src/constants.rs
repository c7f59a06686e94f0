//! Constants used throughout the library
//!
//! This module centralizes default parameter names, field keys, and
//! user-facing message values to improve maintainability and consistency.

// Query parameter defaults
/// Prefix marking a query parameter as filter-owned
pub const DEFAULT_FILTER_PREFIX: &str = "filter_";
/// Delimiter joining selected ids inside one filter parameter
pub const DEFAULT_ID_DELIMITER: &str = ",";

// Table provider query parameters (shared query string, never touched by
// the filter adapter)
pub const PARAM_PAGE: &str = "page";
pub const PARAM_PER_PAGE: &str = "perPage";
pub const PARAM_SORT_BY: &str = "sortBy";
pub const PARAM_SORT_ORDER: &str = "sortOrder";
pub const PARAM_SEARCH: &str = "search";

// Wizard defaults
/// Key of the leaf category whose selection is submitted
pub const DEFAULT_LEAF_CATEGORY: &str = "student";
/// Item field carrying the institution id required on recipients
pub const DEFAULT_INSTITUTION_FIELD: &str = "user_institution_id";

// Validation Error Messages
pub const ERROR_TITLE_REQUIRED: &str = "Title is required";
pub const ERROR_RECIPIENTS_REQUIRED: &str = "Select at least one student";
pub const ERROR_DEADLINE_REQUIRED: &str = "Deadline is required";
pub const ERROR_DEADLINE_PAST: &str = "Deadline cannot be in the past";

// Submission Messages
pub const ERROR_SUBMIT_FAILED: &str = "Could not send the activity. Please try again.";

// UI Messages
pub const CONFIG_GENERATED: &str = "Generated default configuration file";
