//! Pagination, sorting and search parameters shared with the filter query.

use super::query::QueryString;
use crate::constants::{PARAM_PAGE, PARAM_PER_PAGE, PARAM_SEARCH, PARAM_SORT_BY, PARAM_SORT_ORDER};

/// Typed view over a table provider's query parameters.
///
/// These live in the same query string the filter adapter writes to, and are
/// exactly the parameters that adapter must preserve verbatim. Unparseable
/// numbers and empty strings count as absent — manual URL edits degrade to
/// defaults, never to errors.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
    pub search: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

impl TableQuery {
    /// Read the table parameters out of a query string.
    pub fn read(query: &QueryString) -> Self {
        Self {
            page: query.get(PARAM_PAGE).and_then(|value| value.parse().ok()),
            per_page: query.get(PARAM_PER_PAGE).and_then(|value| value.parse().ok()),
            sort_by: query
                .get(PARAM_SORT_BY)
                .filter(|value| !value.is_empty())
                .map(str::to_string),
            sort_order: query.get(PARAM_SORT_ORDER).and_then(SortOrder::parse),
            search: query
                .get(PARAM_SEARCH)
                .filter(|value| !value.is_empty())
                .map(str::to_string),
        }
    }

    /// Write the set parameters and remove the unset ones, leaving every
    /// other parameter (filters included) alone.
    pub fn write(&self, query: &mut QueryString) {
        write_or_remove(query, PARAM_PAGE, self.page.map(|page| page.to_string()));
        write_or_remove(query, PARAM_PER_PAGE, self.per_page.map(|count| count.to_string()));
        write_or_remove(query, PARAM_SORT_BY, self.sort_by.clone());
        write_or_remove(query, PARAM_SORT_ORDER, self.sort_order.map(|order| order.as_str().to_string()));
        write_or_remove(query, PARAM_SEARCH, self.search.clone());
    }
}

fn write_or_remove(query: &mut QueryString, key: &str, value: Option<String>) {
    match value {
        Some(value) => query.set(key, value),
        None => query.remove(key),
    }
}
