//! Table state: the single owner of store, filter, pagination, selection,
//! edit flags, and pending confirmation.
//!
//! Every user intent is a [`TableAction`] fed to [`TableState::apply`].
//! After each action the repair step runs (selection restricted to what is
//! displayed, page index clamped), so any state observable from outside
//! satisfies the table invariants.
//!
//! # Invariants
//!
//! - every selected id is displayed
//! - `1 <= current_page <= total_pages`
//! - every displayed id resolves to a stored record

use crate::model::{EditableField, Member, Record, RecordId};
use crate::state::edit;
use crate::state::mutation::{self, ConfirmPolicy, DeleteRequest, PendingDelete};
use crate::state::pagination::{PageNav, Pagination, DEFAULT_PAGE_SIZE};
use crate::state::search::SearchQuery;
use crate::state::selection::SelectionSet;
use crate::state::store::{LoadReport, RecordStore};
use tracing::debug;

// ===== TableAction =====

/// A discrete user intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableAction {
    /// The search text changed (fires on every keystroke).
    SetQuery(String),
    /// Page navigation.
    Navigate(PageNav),
    /// Select-all checkbox.
    ToggleSelectAll,
    /// Per-row checkbox.
    ToggleRow(RecordId),
    /// Per-row edit/save button.
    ToggleEdit(RecordId),
    /// A keystroke in an edit field.
    UpdateField {
        /// Row being edited.
        id: RecordId,
        /// Column being edited.
        field: EditableField,
        /// Full new value.
        value: String,
    },
    /// Per-row delete button.
    DeleteRow(RecordId),
    /// Bulk delete button.
    DeleteSelected,
    /// "Yes" in the confirmation prompt.
    ConfirmDelete,
    /// "No" in the confirmation prompt.
    CancelDelete,
}

// ===== Outcome =====

/// What an action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The action was a no-op (disabled control, unknown row, ...).
    Unchanged,
    /// State changed.
    Applied,
    /// A bulk delete is waiting for confirmation of `count` rows.
    ConfirmationRequired {
        /// Rows that would be deleted.
        count: usize,
    },
    /// Rows were deleted.
    Deleted {
        /// Rows removed.
        count: usize,
    },
    /// A pending bulk delete was declined.
    Cancelled,
}

// ===== TableState =====

/// The table state engine.
#[derive(Debug, Clone)]
pub struct TableState {
    store: RecordStore,
    pagination: Pagination,
    selection: SelectionSet,
    policy: ConfirmPolicy,
    query: String,
    pending: Option<PendingDelete>,
}

impl Default for TableState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, ConfirmPolicy::default())
    }
}

impl TableState {
    /// Empty table with the given page size and confirmation policy.
    pub fn new(page_size: usize, policy: ConfirmPolicy) -> Self {
        Self {
            store: RecordStore::new(),
            pagination: Pagination::new(page_size),
            selection: SelectionSet::new(),
            policy,
            query: String::new(),
            pending: None,
        }
    }

    /// Populate from the data source. Resets query, page, and selection.
    pub fn load(&mut self, members: Vec<Member>) -> LoadReport {
        let report = self.store.load(members);
        self.query.clear();
        self.pagination.reset();
        self.selection.clear();
        self.pending = None;
        debug!(loaded = report.loaded, duplicates = report.duplicates, "Table loaded");
        report
    }

    /// Apply one action and repair invariants.
    pub fn apply(&mut self, action: TableAction) -> Outcome {
        // Anything other than answering the prompt dismisses it
        if !matches!(action, TableAction::ConfirmDelete | TableAction::CancelDelete) {
            self.pending = None;
        }

        let outcome = match &action {
            TableAction::SetQuery(value) => self.set_query(value),
            TableAction::Navigate(nav) => {
                changed(self.pagination.navigate(*nav, self.store.displayed_len()))
            }
            TableAction::ToggleSelectAll => {
                let page = self.page_ids().to_vec();
                self.selection.toggle_select_all(&page);
                Outcome::Applied
            }
            TableAction::ToggleRow(id) => {
                if self.store.is_displayed(id) {
                    self.selection.toggle_row(id);
                    Outcome::Applied
                } else {
                    Outcome::Unchanged
                }
            }
            TableAction::ToggleEdit(id) => changed(edit::toggle_edit(&mut self.store, id).is_some()),
            TableAction::UpdateField { id, field, value } => changed(edit::update_field(
                &mut self.store,
                id,
                *field,
                value.clone(),
            )),
            TableAction::DeleteRow(id) => {
                if mutation::delete_one(&mut self.store, &mut self.selection, id) {
                    Outcome::Deleted { count: 1 }
                } else {
                    Outcome::Unchanged
                }
            }
            TableAction::DeleteSelected => {
                match mutation::request_delete_selected(self.policy, &self.selection) {
                    DeleteRequest::Nothing => Outcome::Unchanged,
                    DeleteRequest::Confirm(pending) => {
                        let count = pending.count();
                        self.pending = Some(pending);
                        Outcome::ConfirmationRequired { count }
                    }
                    DeleteRequest::Immediate(ids) => self.delete_and_clear(&ids),
                }
            }
            TableAction::ConfirmDelete => match self.pending.take() {
                Some(pending) => self.delete_and_clear(pending.ids()),
                None => Outcome::Unchanged,
            },
            TableAction::CancelDelete => match self.pending.take() {
                Some(_) => Outcome::Cancelled,
                None => Outcome::Unchanged,
            },
        };

        self.repair();
        debug!(?action, ?outcome, page = self.pagination.current(), "Table action applied");
        outcome
    }

    fn set_query(&mut self, value: &str) -> Outcome {
        self.query = value.to_string();
        match SearchQuery::new(value) {
            // Clearing the search keeps the page; the repair step clamps it
            None => self.store.show_all(),
            Some(query) => {
                self.store.show_filtered(&query);
                self.pagination.reset();
            }
        }
        Outcome::Applied
    }

    fn delete_and_clear(&mut self, ids: &[RecordId]) -> Outcome {
        let count = mutation::delete_ids(&mut self.store, &mut self.selection, ids);
        self.selection.clear();
        Outcome::Deleted { count }
    }

    fn repair(&mut self) {
        let dropped = self.selection.retain(self.store.displayed_ids());
        let moved = self.pagination.clamp(self.store.displayed_len());
        if dropped > 0 || moved {
            debug!(dropped, page = self.pagination.current(), "Repaired table invariants");
        }
    }

    // ===== Queries =====

    /// Underlying store.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Current selection.
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Pagination state.
    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Active confirmation policy.
    pub fn policy(&self) -> ConfirmPolicy {
        self.policy
    }

    /// Current search text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Bulk delete waiting for an answer, if any.
    pub fn pending_delete(&self) -> Option<&PendingDelete> {
        self.pending.as_ref()
    }

    /// Ids on the current page.
    pub fn page_ids(&self) -> &[RecordId] {
        self.pagination.slice(self.store.displayed_ids())
    }

    /// Records on the current page.
    pub fn page_records(&self) -> Vec<&Record> {
        self.page_ids()
            .iter()
            .filter_map(|id| self.store.get(id))
            .collect()
    }

    /// Total number of pages for the displayed records.
    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages(self.store.displayed_len())
    }

    /// Check the table invariants. Returns the first violation found.
    pub fn check_invariants(&self) -> Result<(), String> {
        if let Some(id) = self.selection.iter().find(|id| !self.store.is_displayed(id)) {
            return Err(format!("selected id {} is not displayed", id));
        }
        let current = self.pagination.current();
        let total = self.total_pages();
        if current < 1 || current > total {
            return Err(format!("page {} outside 1..={}", current, total));
        }
        if let Some(id) = self
            .store
            .displayed_ids()
            .iter()
            .find(|id| self.store.get(id).is_none())
        {
            return Err(format!("displayed id {} has no record", id));
        }
        Ok(())
    }

    /// Everything a renderer needs, with no further derivation required.
    pub fn view(&self) -> TableView {
        let rows = self
            .page_records()
            .into_iter()
            .map(|record| RowView {
                id: record.id().clone(),
                name: record.name().to_string(),
                email: record.email().to_string(),
                role: record.role().to_string(),
                editing: record.is_editing(),
                selected: self.selection.is_selected(record.id()),
            })
            .collect();
        let len = self.store.displayed_len();

        TableView {
            rows,
            total_count: len,
            selected_count: self.selection.len(),
            current_page: self.pagination.current(),
            total_pages: self.total_pages(),
            all_selected: self.selection.all_selected(self.page_ids()),
            can_prev: self.pagination.can_prev(),
            can_next: self.pagination.can_next(len),
            query: self.query.clone(),
            pending_delete: self.pending.as_ref().map(PendingDelete::count),
        }
    }
}

fn changed(did_change: bool) -> Outcome {
    if did_change {
        Outcome::Applied
    } else {
        Outcome::Unchanged
    }
}

// ===== TableView =====

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    /// Record id.
    pub id: RecordId,
    /// Current name.
    pub name: String,
    /// Current email.
    pub email: String,
    /// Current role.
    pub role: String,
    /// Row is in edit mode.
    pub editing: bool,
    /// Row is selected.
    pub selected: bool,
}

/// Snapshot of the table for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// Rows of the current page.
    pub rows: Vec<RowView>,
    /// Number of displayed records across all pages.
    pub total_count: usize,
    /// Number of selected records.
    pub selected_count: usize,
    /// 1-based current page.
    pub current_page: usize,
    /// Total pages (at least 1).
    pub total_pages: usize,
    /// Select-all checkbox state.
    pub all_selected: bool,
    /// "Previous" enabled.
    pub can_prev: bool,
    /// "Next" enabled.
    pub can_next: bool,
    /// Search text.
    pub query: String,
    /// Rows awaiting bulk-delete confirmation.
    pub pending_delete: Option<usize>,
}

impl TableView {
    /// "`n` of `m` row(s) selected".
    pub fn selection_summary(&self) -> String {
        format!("{} of {} row(s) selected", self.selected_count, self.total_count)
    }

    /// "Page `p` of `n`".
    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.current_page, self.total_pages)
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
