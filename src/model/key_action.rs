//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Cursor
    /// Move the row cursor up within the current page. Default: k/↑
    CursorUp,
    /// Move the row cursor down within the current page. Default: j/↓
    CursorDown,

    // Pagination
    /// Jump to the first page. Default: g/Home
    FirstPage,
    /// Go to the previous page (disabled on page 1). Default: h/←
    PrevPage,
    /// Go to the next page (disabled on the last page). Default: l/→
    NextPage,
    /// Jump to the last page. Default: G/End
    LastPage,
    /// Jump to a numbered page (1-based). Default: 1-9
    GotoPage(usize),

    // Selection
    /// Toggle selection of the row under the cursor. Default: Space
    ToggleRow,
    /// Select the current page, or clear the selection if the page is
    /// already fully selected. Default: a
    ToggleSelectAll,

    // Editing
    /// Enter or leave inline-edit mode on the cursor row. Default: e
    ToggleEdit,
    /// Move edit focus to the next field of the cursor row. Default: Tab
    NextField,

    // Deletion
    /// Delete the row under the cursor. Default: d/Delete
    DeleteRow,
    /// Delete all selected rows. Default: D/Shift+d
    DeleteSelected,

    // Search
    /// Focus the search input. Default: / or Ctrl+f
    StartSearch,
    /// Leave the search input, keeping the query. Default: Esc
    LeaveSearch,

    // Application
    /// Exit the application. Default: q/Ctrl+c
    Quit,
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
}

impl KeyAction {
    /// Whether this action is allowed while the help overlay is open.
    pub fn allowed_over_help(self) -> bool {
        matches!(self, KeyAction::Help | KeyAction::Quit)
    }
}
