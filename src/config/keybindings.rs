//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings alongside arrow and Home/End keys.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Only code and modifiers take part in the lookup, so repeat and
    /// release events from enhanced keyboards resolve like presses.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings
            .get(&KeyEvent::new(key.code, key.modifiers))
            .copied()
    }

    fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = Self {
            bindings: HashMap::new(),
        };
        let none = KeyModifiers::NONE;

        // Row cursor
        keys.bind(KeyCode::Char('j'), none, KeyAction::CursorDown);
        keys.bind(KeyCode::Char('k'), none, KeyAction::CursorUp);
        keys.bind(KeyCode::Down, none, KeyAction::CursorDown);
        keys.bind(KeyCode::Up, none, KeyAction::CursorUp);

        // Pagination
        keys.bind(KeyCode::Char('g'), none, KeyAction::FirstPage);
        keys.bind(KeyCode::Home, none, KeyAction::FirstPage);
        keys.bind(KeyCode::Char('h'), none, KeyAction::PrevPage);
        keys.bind(KeyCode::Left, none, KeyAction::PrevPage);
        keys.bind(KeyCode::PageUp, none, KeyAction::PrevPage);
        keys.bind(KeyCode::Char('l'), none, KeyAction::NextPage);
        keys.bind(KeyCode::Right, none, KeyAction::NextPage);
        keys.bind(KeyCode::PageDown, none, KeyAction::NextPage);
        keys.bind(KeyCode::Char('G'), KeyModifiers::SHIFT, KeyAction::LastPage);
        keys.bind(KeyCode::Char('G'), none, KeyAction::LastPage);
        keys.bind(KeyCode::End, none, KeyAction::LastPage);
        for (digit, page) in ('1'..='9').zip(1usize..) {
            keys.bind(KeyCode::Char(digit), none, KeyAction::GotoPage(page));
        }

        // Selection
        keys.bind(KeyCode::Char(' '), none, KeyAction::ToggleRow);
        keys.bind(KeyCode::Char('a'), none, KeyAction::ToggleSelectAll);

        // Editing
        keys.bind(KeyCode::Char('e'), none, KeyAction::ToggleEdit);
        keys.bind(KeyCode::Enter, none, KeyAction::ToggleEdit);
        keys.bind(KeyCode::Tab, none, KeyAction::NextField);

        // Deletion
        keys.bind(KeyCode::Char('d'), none, KeyAction::DeleteRow);
        keys.bind(KeyCode::Delete, none, KeyAction::DeleteRow);
        keys.bind(
            KeyCode::Char('D'),
            KeyModifiers::SHIFT,
            KeyAction::DeleteSelected,
        );
        keys.bind(KeyCode::Char('D'), none, KeyAction::DeleteSelected);

        // Search
        keys.bind(KeyCode::Char('/'), none, KeyAction::StartSearch);
        keys.bind(
            KeyCode::Char('f'),
            KeyModifiers::CONTROL,
            KeyAction::StartSearch,
        );
        keys.bind(KeyCode::Esc, none, KeyAction::LeaveSearch);

        // Application controls
        keys.bind(KeyCode::Char('q'), none, KeyAction::Quit);
        keys.bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);
        keys.bind(KeyCode::Char('?'), none, KeyAction::Help);
        keys.bind(KeyCode::Char('?'), KeyModifiers::SHIFT, KeyAction::Help);

        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    #[test]
    fn digits_map_to_goto_page() {
        let bindings = KeyBindings::default();
        let key_event = KeyEvent::new(KeyCode::Char('3'), KeyModifiers::NONE);

        assert_eq!(bindings.get(key_event), Some(KeyAction::GotoPage(3)));
    }

    #[test]
    fn uppercase_d_maps_to_bulk_delete_with_or_without_shift() {
        let bindings = KeyBindings::default();
        for modifiers in [KeyModifiers::SHIFT, KeyModifiers::NONE] {
            assert_eq!(
                bindings.get(KeyEvent::new(KeyCode::Char('D'), modifiers)),
                Some(KeyAction::DeleteSelected),
                "'D' with {:?} should map to DeleteSelected",
                modifiers
            );
        }
    }

    #[test]
    fn lowercase_d_deletes_single_row() {
        let bindings = KeyBindings::default();
        let key_event = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE);

        assert_eq!(bindings.get(key_event), Some(KeyAction::DeleteRow));
    }

    #[test]
    fn repeat_events_resolve_like_presses() {
        let bindings = KeyBindings::default();
        let key_event = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('l'),
            KeyModifiers::NONE,
            KeyEventKind::Repeat,
            KeyEventState::NONE,
        );

        assert_eq!(bindings.get(key_event), Some(KeyAction::NextPage));
    }

    #[test]
    fn unbound_key_has_no_action() {
        let bindings = KeyBindings::default();
        let key_event = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE);

        assert_eq!(bindings.get(key_event), None);
    }
}
