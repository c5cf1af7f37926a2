//! Inline edit session.
//!
//! Edit mode is a per-row display flag. While a row is in edit mode every
//! field change is written straight into the store; leaving edit mode does
//! not save anything because there is nothing left to save, and there is no
//! way to revert.

use crate::model::{EditableField, RecordId};
use crate::state::store::RecordStore;

/// Flip edit mode for `id`. Other rows are untouched.
///
/// Returns the new flag, or None if the record is not displayed.
pub fn toggle_edit(store: &mut RecordStore, id: &RecordId) -> Option<bool> {
    if !store.is_displayed(id) {
        return None;
    }
    let record = store.get_mut(id)?;
    let editing = !record.is_editing();
    record.set_editing(editing);
    Some(editing)
}

/// Overwrite one field of a row that is in edit mode.
///
/// Any string is accepted, including the empty one. Returns false (and
/// changes nothing) if the row is missing, hidden, or not in edit mode.
pub fn update_field(
    store: &mut RecordStore,
    id: &RecordId,
    field: EditableField,
    value: String,
) -> bool {
    if !store.is_displayed(id) {
        return false;
    }
    match store.get_mut(id) {
        Some(record) if record.is_editing() => {
            record.set_field(field, value);
            true
        }
        _ => false,
    }
}
