//! Table keyboard action handler.
//!
//! Translates key-level intents into table actions, resolving "the row
//! under the cursor" along the way. Returns None for actions that are not
//! table actions (quit, help, search focus), which the caller handles.

use crate::model::{EditableField, KeyAction};
use crate::state::pagination::PageNav;
use crate::state::table::{Outcome, TableAction};
use crate::state::AppState;

/// Handle a table keyboard action.
///
/// # Arguments
/// * `state` - Application state to transform
/// * `action` - The keyboard action
pub fn handle_table_action(state: &mut AppState, action: KeyAction) -> Option<Outcome> {
    let outcome = match action {
        KeyAction::CursorUp => {
            state.cursor_up();
            Outcome::Applied
        }
        KeyAction::CursorDown => {
            state.cursor_down();
            Outcome::Applied
        }
        KeyAction::FirstPage => navigate(state, PageNav::First),
        KeyAction::PrevPage => navigate(state, PageNav::Previous),
        KeyAction::NextPage => navigate(state, PageNav::Next),
        KeyAction::LastPage => navigate(state, PageNav::Last),
        KeyAction::GotoPage(page) => navigate(state, PageNav::Goto(page)),
        KeyAction::ToggleSelectAll => state.dispatch(TableAction::ToggleSelectAll),
        KeyAction::ToggleRow => match state.cursor_id() {
            Some(id) => state.dispatch(TableAction::ToggleRow(id)),
            None => Outcome::Unchanged,
        },
        KeyAction::ToggleEdit => match state.cursor_id() {
            Some(id) => {
                let outcome = state.dispatch(TableAction::ToggleEdit(id));
                if state.cursor_editing() {
                    state.edit_field = EditableField::Name;
                }
                outcome
            }
            None => Outcome::Unchanged,
        },
        KeyAction::NextField => {
            if state.cursor_editing() {
                state.edit_field = state.edit_field.next();
                Outcome::Applied
            } else {
                Outcome::Unchanged
            }
        }
        KeyAction::DeleteRow => match state.cursor_id() {
            Some(id) => state.dispatch(TableAction::DeleteRow(id)),
            None => Outcome::Unchanged,
        },
        KeyAction::DeleteSelected => state.dispatch(TableAction::DeleteSelected),
        KeyAction::StartSearch | KeyAction::LeaveSearch | KeyAction::Quit | KeyAction::Help => {
            return None;
        }
    };
    Some(outcome)
}

/// Page navigation moves the cursor back to the top row.
fn navigate(state: &mut AppState, nav: PageNav) -> Outcome {
    let outcome = state.dispatch(TableAction::Navigate(nav));
    if outcome == Outcome::Applied {
        state.cursor = 0;
    }
    outcome
}

// ===== Tests =====

#[cfg(test)]
#[path = "table_handler_tests.rs"]
mod tests;
