//! Application state and transitions.
//!
//! AppState is the root state type. The table engine owns everything with
//! invariants; this type adds the UI-only state around it (focus, search
//! box, row cursor, edit field focus, overlays, load status).

use crate::model::{EditableField, Member, RecordId};
use crate::state::search_input_handler::SearchInput;
use crate::state::store::LoadReport;
use crate::state::table::{Outcome, TableAction, TableState};

// ===== FocusPane =====

/// Which part of the screen receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPane {
    /// Keys drive the table.
    #[default]
    Table,
    /// Keys edit the search box.
    Search,
}

// ===== FetchStatus =====

/// State of the one-shot initial load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    /// Waiting for the data source.
    Loading,
    /// Records arrived.
    Loaded {
        /// Number of records kept.
        count: usize,
    },
    /// The load failed; the table stays empty.
    Failed,
}

// ===== AppState =====

/// Application state. Pure data, no side effects.
///
/// # State Transitions
///
/// - Focus: Table ⇄ Search (via `StartSearch` / `LeaveSearch`)
/// - Fetch: Loading → Loaded | Failed (exactly once)
/// - Table: see [`TableState::apply`]
///
/// The row cursor indexes into the current page and is clamped after
/// every table transition.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The table engine.
    pub table: TableState,

    /// Which pane has keyboard focus.
    pub focus: FocusPane,

    /// Search box contents. Mirrors `table.query()` after every edit.
    pub search: SearchInput,

    /// Row cursor within the current page (0-based).
    pub cursor: usize,

    /// Field receiving typed characters when the cursor row is in edit mode.
    pub edit_field: EditableField,

    /// Whether the help overlay is visible.
    pub help_visible: bool,

    /// Initial load status.
    pub fetch: FetchStatus,
}

impl AppState {
    /// Create state around a table, waiting for data.
    pub fn new(table: TableState) -> Self {
        Self {
            table,
            focus: FocusPane::Table,
            search: SearchInput::new(),
            cursor: 0,
            edit_field: EditableField::Name,
            help_visible: false,
            fetch: FetchStatus::Loading,
        }
    }

    /// Records arrived from the data source.
    pub fn load(&mut self, members: Vec<Member>) -> LoadReport {
        let report = self.table.load(members);
        self.search = SearchInput::new();
        self.cursor = 0;
        self.fetch = FetchStatus::Loaded {
            count: report.loaded,
        };
        report
    }

    /// The data source failed. The table stays as it is (empty).
    pub fn fetch_failed(&mut self) {
        self.fetch = FetchStatus::Failed;
    }

    /// Apply a table action and keep the cursor on the page.
    pub fn dispatch(&mut self, action: TableAction) -> Outcome {
        let outcome = self.table.apply(action);
        self.clamp_cursor();
        outcome
    }

    /// Id of the row under the cursor, if the page has any rows.
    pub fn cursor_id(&self) -> Option<RecordId> {
        self.table.page_ids().get(self.cursor).cloned()
    }

    /// Whether the cursor row is in edit mode.
    pub fn cursor_editing(&self) -> bool {
        self.cursor_id()
            .and_then(|id| self.table.store().get(&id).map(|r| r.is_editing()))
            .unwrap_or(false)
    }

    /// Whether a bulk-delete confirmation is open.
    pub fn confirm_visible(&self) -> bool {
        self.table.pending_delete().is_some()
    }

    /// Move the cursor up one row. Saturates at the top of the page.
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor down one row. Saturates at the bottom of the page.
    pub fn cursor_down(&mut self) {
        let rows = self.table.page_ids().len();
        if rows > 0 {
            self.cursor = (self.cursor + 1).min(rows - 1);
        }
    }

    /// Keep the cursor inside the current page.
    pub fn clamp_cursor(&mut self) {
        let rows = self.table.page_ids().len();
        self.cursor = self.cursor.min(rows.saturating_sub(1));
    }

    /// Apply an edit to the search box and forward the text to the table
    /// if it changed.
    pub fn edit_search(&mut self, edit: impl FnOnce(SearchInput) -> SearchInput) -> Outcome {
        let before = self.search.text.clone();
        self.search = edit(std::mem::take(&mut self.search));
        if self.search.text == before {
            return Outcome::Unchanged;
        }
        let text = self.search.text.clone();
        self.dispatch(TableAction::SetQuery(text))
    }

    /// Replace the focused field of the cursor row using `edit`.
    ///
    /// No-op unless the cursor row is in edit mode.
    pub fn edit_cursor_field(&mut self, edit: impl FnOnce(&mut String)) -> Outcome {
        let Some(id) = self.cursor_id() else {
            return Outcome::Unchanged;
        };
        let Some(record) = self.table.store().get(&id) else {
            return Outcome::Unchanged;
        };
        if !record.is_editing() {
            return Outcome::Unchanged;
        }
        let mut value = record.field(self.edit_field).to_string();
        edit(&mut value);
        self.dispatch(TableAction::UpdateField {
            id,
            field: self.edit_field,
            value,
        })
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(TableState::default())
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
