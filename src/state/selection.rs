//! Selection set keyed by record id.

use crate::model::RecordId;
use std::collections::HashSet;

/// The set of marked rows.
///
/// Callers keep it a subset of the displayed records by calling
/// [`SelectionSet::retain`] after anything that changes what is displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: HashSet<RecordId>,
}

impl SelectionSet {
    /// Empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of selected rows.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Whether `id` is selected.
    pub fn is_selected(&self, id: &RecordId) -> bool {
        self.ids.contains(id)
    }

    /// Selected ids, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &RecordId> + '_ {
        self.ids.iter()
    }

    /// Add `id` if absent, remove it if present. Returns the new state.
    pub fn toggle_row(&mut self, id: &RecordId) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.clone());
            true
        }
    }

    /// Whether the select-all checkbox shows as checked for `page`.
    pub fn all_selected(&self, page: &[RecordId]) -> bool {
        !page.is_empty() && page.iter().all(|id| self.ids.contains(id))
    }

    /// Select-all for one page at a time.
    ///
    /// If every row of `page` is already selected (trivially so for an
    /// empty page) the whole selection is cleared, including rows on other
    /// pages. Otherwise the selection becomes exactly `page`.
    pub fn toggle_select_all(&mut self, page: &[RecordId]) {
        if page.iter().all(|id| self.ids.contains(id)) {
            self.ids.clear();
        } else {
            self.ids = page.iter().cloned().collect();
        }
    }

    /// Remove `id`. Returns true if it was selected.
    pub fn remove(&mut self, id: &RecordId) -> bool {
        self.ids.remove(id)
    }

    /// Clear the selection.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Drop every selected id not in `displayed`. Returns how many were dropped.
    pub fn retain(&mut self, displayed: &[RecordId]) -> usize {
        let before = self.ids.len();
        if !self.ids.is_empty() {
            let visible: HashSet<&RecordId> = displayed.iter().collect();
            self.ids.retain(|id| visible.contains(id));
        }
        before - self.ids.len()
    }
}
