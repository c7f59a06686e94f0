//! Addressable external locations for applied filter state.

use std::sync::{Arc, Mutex};

/// Where applied filter state lives outside the session — the address bar in
/// a browser host, or nothing at all in embedded use.
///
/// Implementations only expose the raw query string; the session performs
/// the filter-aware read-modify-write on top, so a location never needs to
/// understand filter parameters.
pub trait QueryLocation: Send {
    /// Current query string (with or without a leading `?`).
    fn read(&self) -> String;

    /// Replace the query string, recording it as a new history entry.
    fn write(&mut self, query: &str);
}

/// In-memory location with a browsable history.
///
/// Stands in for browser history in tests and in hosts with no addressable
/// location. `back`/`forward` move the cursor the way the browser buttons
/// would; the owner is expected to follow a successful move with
/// [`FilterSession::handle_navigation`](super::FilterSession::handle_navigation).
#[derive(Clone, Debug)]
pub struct MemoryLocation {
    history: Vec<String>,
    cursor: usize,
}

impl MemoryLocation {
    pub fn new() -> Self {
        Self {
            history: vec![String::new()],
            cursor: 0,
        }
    }

    pub fn with_query(query: &str) -> Self {
        Self {
            history: vec![query.to_string()],
            cursor: 0,
        }
    }

    /// Move one entry back. Returns whether a move happened.
    pub fn back(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Move one entry forward. Returns whether a move happened.
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 < self.history.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Number of history entries recorded so far.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

impl Default for MemoryLocation {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryLocation for MemoryLocation {
    fn read(&self) -> String {
        self.history[self.cursor].clone()
    }

    fn write(&mut self, query: &str) {
        // Writing drops any forward entries, like pushState.
        self.history.truncate(self.cursor + 1);
        self.history.push(query.to_string());
        self.cursor += 1;
    }
}

// Shared handle, so a host (or a test) can keep inspecting and navigating a
// location after handing it to a session.
impl QueryLocation for Arc<Mutex<MemoryLocation>> {
    fn read(&self) -> String {
        self.lock().map(|location| location.read()).unwrap_or_default()
    }

    fn write(&mut self, query: &str) {
        if let Ok(mut location) = self.lock() {
            location.write(query);
        }
    }
}
