//! Acceptance Test Harness for TUI testing
//!
//! Wraps TuiApp<TestBackend> with methods for simulating user interactions
//! against a member list.

use crate::config::keybindings::KeyBindings;
use crate::model::Member;
use crate::source::{FileSource, InputSource};
use crate::state::{AppState, ConfirmPolicy, TableState};
use crate::view::TuiApp;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::path::PathBuf;

/// Convert a ratatui buffer to a string representation.
///
/// Captures the visual output character by character, preserving layout.
/// Empty lines are removed.
pub(crate) fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// `n` members with ids "1".."n", names "Member 1".."Member n".
///
/// Every third member is an admin, the rest are members.
pub(crate) fn sample_members(n: usize) -> Vec<Member> {
    (1..=n)
        .map(|i| {
            Member::new(
                i.to_string(),
                format!("Member {}", i),
                format!("member{}@mailinator.com", i),
                if i % 3 == 0 { "admin" } else { "member" },
            )
        })
        .collect()
}

/// Test harness for acceptance testing
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Harness with `members` already loaded, default table settings, 100x30.
    pub fn from_members(members: Vec<Member>) -> Self {
        Self::with_table(members, TableState::default(), 100, 30)
    }

    /// Harness with `members` loaded under a specific confirmation policy.
    pub fn with_policy(members: Vec<Member>, policy: ConfirmPolicy) -> Self {
        Self::with_table(
            members,
            TableState::new(crate::state::DEFAULT_PAGE_SIZE, policy),
            100,
            30,
        )
    }

    /// Harness with full control over table settings and terminal size.
    pub fn with_table(members: Vec<Member>, table: TableState, width: u16, height: u16) -> Self {
        let mut app_state = AppState::new(table);
        app_state.load(members);
        Self::build(app_state, None, width, height)
    }

    /// Harness whose table is still waiting on `source`.
    ///
    /// Call [`AcceptanceTestHarness::poll_source`] to deliver.
    pub fn loading_from(source: InputSource) -> Self {
        Self::build(AppState::default(), Some(source), 100, 30)
    }

    /// Harness loaded from a local JSON fixture file.
    pub fn from_fixture(path: &str) -> Self {
        let source = InputSource::File(FileSource::new(PathBuf::from(path)));
        let mut harness = Self::loading_from(source);
        harness.poll_source();
        harness
    }

    fn build(app_state: AppState, source: Option<InputSource>, width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .expect("TestBackend terminal creation cannot fail");
        let app = TuiApp::new_for_test(terminal, app_state, source, KeyBindings::default());
        Self { app, running: true }
    }

    /// Send a single key event
    ///
    /// Returns true if the app quit as a result of this key.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true;
        }

        let quit = self.app.handle_key_test(KeyEvent::new(key, mods));
        if quit {
            self.running = false;
        }
        quit
    }

    /// Send a sequence of keys, stopping early if the app quits.
    pub fn send_keys(&mut self, keys: &[KeyCode]) {
        for key in keys {
            if self.send_key(*key) {
                break;
            }
        }
    }

    /// Type text (sends individual character key events)
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if self.send_key(KeyCode::Char(ch)) {
                break;
            }
        }
    }

    /// Deliver the pending source outcome, if any. Returns true if it changed state.
    pub fn poll_source(&mut self) -> bool {
        self.app.poll_source_test()
    }

    /// Access app state for assertions
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Whether the app is still running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render the current frame to a string
    ///
    /// # Panics
    /// Panics if rendering fails (should never happen with TestBackend)
    pub fn render_to_string(&mut self) -> String {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");
        buffer_to_string(self.app.terminal().backend().buffer())
    }
}
