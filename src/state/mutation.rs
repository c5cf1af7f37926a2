//! Destructive mutations: single-row delete and bulk delete.
//!
//! Every delete removes the rows from the store and from the selection in
//! the same call, so no caller can observe a selected row that no longer
//! exists.

use crate::model::RecordId;
use crate::state::selection::SelectionSet;
use crate::state::store::RecordStore;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

// ===== ConfirmPolicy =====

/// When a bulk delete asks for confirmation first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConfirmPolicy {
    /// Ask before deleting a non-empty selection; an empty selection is a no-op.
    #[default]
    WhenSelected,
    /// Ask only when nothing is selected (and then delete nothing); a
    /// non-empty selection is deleted immediately.
    WhenEmpty,
}

impl ConfirmPolicy {
    /// Name used in config files and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::WhenSelected => "when-selected",
            Self::WhenEmpty => "when-empty",
        }
    }
}

impl fmt::Display for ConfirmPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized confirm policy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown confirm policy '{0}' (expected 'when-selected' or 'when-empty')")]
pub struct InvalidConfirmPolicy(pub String);

impl FromStr for ConfirmPolicy {
    type Err = InvalidConfirmPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "when-selected" => Ok(Self::WhenSelected),
            "when-empty" => Ok(Self::WhenEmpty),
            other => Err(InvalidConfirmPolicy(other.to_string())),
        }
    }
}

// ===== Bulk delete =====

/// A bulk delete waiting for the user's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    ids: Vec<RecordId>,
}

impl PendingDelete {
    /// Rows that will be deleted on confirmation.
    pub fn ids(&self) -> &[RecordId] {
        &self.ids
    }

    /// Number of rows that will be deleted on confirmation.
    pub fn count(&self) -> usize {
        self.ids.len()
    }
}

/// What a bulk delete request turns into under a policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteRequest {
    /// Nothing to do.
    Nothing,
    /// Ask first.
    Confirm(PendingDelete),
    /// Delete these rows right away.
    Immediate(Vec<RecordId>),
}

/// Decide how to handle a bulk delete of the current selection.
pub fn request_delete_selected(policy: ConfirmPolicy, selection: &SelectionSet) -> DeleteRequest {
    let mut ids: Vec<RecordId> = selection.iter().cloned().collect();
    ids.sort();
    match (policy, ids.is_empty()) {
        (ConfirmPolicy::WhenSelected, true) => DeleteRequest::Nothing,
        (ConfirmPolicy::WhenSelected, false) => DeleteRequest::Confirm(PendingDelete { ids }),
        (ConfirmPolicy::WhenEmpty, true) => DeleteRequest::Confirm(PendingDelete { ids }),
        (ConfirmPolicy::WhenEmpty, false) => DeleteRequest::Immediate(ids),
    }
}

/// Delete `ids` from the store and the selection. Returns rows removed.
pub fn delete_ids(store: &mut RecordStore, selection: &mut SelectionSet, ids: &[RecordId]) -> usize {
    for id in ids {
        selection.remove(id);
    }
    store.remove(ids)
}

/// Delete one displayed row. Returns false if it was not displayed.
pub fn delete_one(store: &mut RecordStore, selection: &mut SelectionSet, id: &RecordId) -> bool {
    if !store.is_displayed(id) {
        return false;
    }
    delete_ids(store, selection, std::slice::from_ref(id)) == 1
}
