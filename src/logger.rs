use chrono::Utc;
use std::sync::{Arc, Mutex};

/// Upper bound on retained entries; older entries are dropped first.
const MAX_ENTRIES: usize = 500;

/// Shared in-memory diagnostics buffer.
///
/// Sessions and wizards record operational events here (hydrations, applies,
/// submission failures) so a hosting UI can surface them in a debug panel.
/// The buffer is bounded, so a long-lived session cannot grow it without
/// limit.
#[derive(Clone)]
pub struct Logger {
    entries: Arc<Mutex<Vec<String>>>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a timestamped entry.
    pub fn log(&self, message: impl Into<String>) {
        let timestamp = Utc::now().format("%H:%M:%S%.3f");
        let line = format!("[{}] {}", timestamp, message.into());

        if let Ok(mut entries) = self.entries.lock() {
            entries.push(line);
            if entries.len() > MAX_ENTRIES {
                let excess = entries.len() - MAX_ENTRIES;
                entries.drain(..excess);
            }
        }
    }

    /// All retained entries, newest first.
    pub fn entries(&self) -> Vec<String> {
        if let Ok(entries) = self.entries.lock() {
            let mut newest_first = entries.clone();
            newest_first.reverse();
            newest_first
        } else {
            Vec::new()
        }
    }

    /// Drop every retained entry.
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().map(|entries| entries.is_empty()).unwrap_or(true)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
