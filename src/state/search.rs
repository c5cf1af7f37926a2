//! Search filter.
//!
//! A query matches a record when it is a case-insensitive substring of any
//! of the record's id, name, email, or role. Filtering always starts from
//! the full record set, never from the currently displayed subset.

use crate::model::{Record, RecordId};

// ===== SearchQuery =====

/// Validated search query. Never empty.
///
/// Whitespace is significant: `" "` is a real query that matches any
/// field containing a space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    needle: String,
}

impl SearchQuery {
    /// Smart constructor: returns None for the empty string.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            None
        } else {
            let needle = raw.to_lowercase();
            Some(Self { raw, needle })
        }
    }

    /// The query as typed.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether the record matches this query.
    pub fn matches(&self, record: &Record) -> bool {
        record
            .searchable_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&self.needle))
    }
}

// ===== Filter Execution =====

/// Ids of the records matching `query`, in source order.
pub fn filter_ids(records: &[Record], query: &SearchQuery) -> Vec<RecordId> {
    records
        .iter()
        .filter(|record| query.matches(record))
        .map(|record| record.id().clone())
        .collect()
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
