//! Query-string codec and the filter parameter adapter.
//!
//! The codec is deliberately small and tolerant: it round-trips the
//! parameters it does not own verbatim and in their original order, and it
//! never fails on malformed input — a hand-edited URL decodes to *something*
//! rather than taking the filter state down.

use super::resolver;
use crate::model::FilterGroup;

/// An ordered list of decoded `key=value` pairs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryString {
    pairs: Vec<(String, String)>,
}

impl QueryString {
    /// Parse a raw query string, with or without the leading `?`.
    ///
    /// Pieces without `=` become a key with an empty value; empty pieces and
    /// empty keys are skipped; malformed percent-escapes decode literally.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        let mut pairs = Vec::new();
        for piece in raw.split('&') {
            if piece.is_empty() {
                continue;
            }
            let (key, value) = match piece.split_once('=') {
                Some((key, value)) => (key, value),
                None => (piece, ""),
            };
            if key.is_empty() {
                continue;
            }
            pairs.push((decode(key), decode(value)));
        }
        Self { pairs }
    }

    /// Encode back to wire form, preserving pair order.
    pub fn encode(&self) -> String {
        let mut out = String::new();
        for (index, (key, value)) in self.pairs.iter().enumerate() {
            if index > 0 {
                out.push('&');
            }
            out.push_str(&encode_component(key));
            out.push('=');
            out.push_str(&encode_component(value));
        }
        out
    }

    /// First value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Replace `key` in place, keeping its relative position, or append it.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        match self.pairs.iter_mut().find(|(existing, _)| existing == key) {
            Some(pair) => pair.1 = value.into(),
            None => self.pairs.push((key.to_string(), value.into())),
        }
    }

    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|(existing, _)| existing != key);
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Write every category's selection into `query` under
/// `<prefix><category key>`.
///
/// Empty selections remove their parameter entirely (never `filter_k=`);
/// parameters not owned by a known category are left untouched.
pub fn write_filters(query: &mut QueryString, groups: &[FilterGroup], prefix: &str, delimiter: &str) {
    for group in groups {
        for category in &group.categories {
            let param = format!("{prefix}{}", category.key);
            if category.selected_ids.is_empty() {
                query.remove(&param);
            } else {
                query.set(&param, category.selected_ids.join(delimiter));
            }
        }
    }
}

/// Overwrite every category's selection from `query`.
///
/// A missing parameter or an empty value hydrates to an empty selection; ids
/// that do not resolve to a known item of the category are dropped silently,
/// and dependent chains are re-pruned once the whole group is hydrated.
pub fn read_filters(query: &QueryString, groups: &mut [FilterGroup], prefix: &str, delimiter: &str) {
    for group in groups {
        for category in &mut group.categories {
            let param = format!("{prefix}{}", category.key);
            category.selected_ids = match query.get(&param) {
                Some(value) if !value.is_empty() => value
                    .split(delimiter)
                    .filter(|id| !id.is_empty())
                    .filter(|id| category.items.iter().any(|item| item.id == *id))
                    .map(str::to_string)
                    .collect(),
                _ => Vec::new(),
            };
        }
        resolver::prune_invalid_selections(&mut group.categories);
    }
}

fn decode(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut index = 0;
    while index < bytes.len() {
        match bytes[index] {
            b'+' => {
                out.push(b' ');
                index += 1;
            }
            b'%' if index + 2 < bytes.len() => match (hex_value(bytes[index + 1]), hex_value(bytes[index + 2])) {
                (Some(high), Some(low)) => {
                    out.push(high * 16 + low);
                    index += 3;
                }
                // Malformed escape, keep the '%' literally.
                _ => {
                    out.push(b'%');
                    index += 1;
                }
            },
            byte => {
                out.push(byte);
                index += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for &byte in raw.as_bytes() {
        match byte {
            // Commas stay literal so id lists remain readable in the URL.
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b',' => {
                out.push(byte as char);
            }
            _ => {
                out.push('%');
                out.push_str(&format!("{byte:02X}"));
            }
        }
    }
    out
}
