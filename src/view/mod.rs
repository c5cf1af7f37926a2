//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod confirm;
mod help;
mod layout;
mod pager;
mod search_input;
pub mod styles;
mod table;

pub use help::render_help_overlay;
pub use layout::render_layout;
pub use pager::pager_line;
pub use search_input::SearchBox;
pub use styles::{ColorConfig, TableStyles};
pub use table::truncate_to_width;

use crate::config::keybindings::KeyBindings;
use crate::model::{AppError, KeyAction};
use crate::source::{FetchResult, InputSource};
use crate::state::{
    handle_table_action, search_input_handler, AppState, ConfirmPolicy, FocusPane, Outcome,
    TableAction, TableState,
};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    /// Pending member source; dropped once it has delivered.
    input_source: Option<InputSource>,
    source_label: String,
    key_bindings: KeyBindings,
    styles: TableStyles,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen. The table starts
    /// empty and fills when `input_source` delivers.
    pub fn new(input_source: InputSource, options: UiOptions) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        let source_label = input_source.describe();
        let app_state = AppState::new(TableState::new(options.page_size, options.confirm_policy));

        Ok(Self {
            terminal,
            app_state,
            input_source: Some(input_source),
            source_label,
            key_bindings: KeyBindings::default(),
            styles: TableStyles::with_color_config(options.color),
        })
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Redraws on input, on resize,
    /// and when the member source delivers.
    pub fn run(&mut self) -> Result<(), TuiError> {
        // Upper bound on how long a finished fetch waits to be noticed.
        const TICK_INTERVAL: Duration = Duration::from_millis(200);

        self.draw()?;

        loop {
            if event::poll(TICK_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        self.draw()?;
                    }
                    Event::Resize(width, height) => {
                        debug!(width, height, "Terminal resized");
                        self.draw()?;
                    }
                    _ => {}
                }
            }

            if self.poll_source() {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Check the member source and apply its outcome.
    ///
    /// Returns true if the state changed.
    fn poll_source(&mut self) -> bool {
        let Some(result) = self.input_source.as_mut().and_then(InputSource::poll) else {
            return false;
        };
        self.input_source = None;
        self.apply_fetch(result);
        true
    }

    fn apply_fetch(&mut self, result: FetchResult) {
        match result {
            Ok(members) => {
                let received = members.len();
                let report = self.app_state.load(members);
                info!(
                    source = %self.source_label,
                    received,
                    loaded = report.loaded,
                    duplicates = report.duplicates,
                    "Members loaded"
                );
            }
            Err(e) => {
                error!(source = %self.source_label, error = %e, "Failed to load members");
                self.app_state.fetch_failed();
            }
        }
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }

        // Ctrl+C always quits, whatever has focus
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        // The confirmation dialog captures every key
        if self.app_state.confirm_visible() {
            let action = match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    Some(TableAction::ConfirmDelete)
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    Some(TableAction::CancelDelete)
                }
                _ => None,
            };
            if let Some(action) = action {
                let outcome = self.app_state.dispatch(action);
                log_outcome(&outcome);
            }
            return false;
        }

        if self.app_state.help_visible {
            if key.code == KeyCode::Esc {
                self.app_state.help_visible = false;
                return false;
            }
            return match self.key_bindings.get(key) {
                Some(KeyAction::Quit) => true,
                Some(KeyAction::Help) => {
                    self.app_state.help_visible = false;
                    false
                }
                _ => false,
            };
        }

        if self.app_state.focus == FocusPane::Search && self.handle_search_key(key) {
            return false;
        }

        if self.app_state.focus == FocusPane::Table
            && self.app_state.cursor_editing()
            && self.handle_edit_key(key)
        {
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        match action {
            KeyAction::Quit => return true,
            KeyAction::Help => self.app_state.help_visible = true,
            KeyAction::StartSearch => self.app_state.focus = FocusPane::Search,
            KeyAction::LeaveSearch => self.app_state.focus = FocusPane::Table,
            other => {
                if let Some(outcome) = handle_table_action(&mut self.app_state, other) {
                    log_outcome(&outcome);
                }
            }
        }
        false
    }

    /// Keys consumed by the search box. Returns false to fall through to
    /// the bindings (arrows up/down still move the row cursor).
    fn handle_search_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.app_state
                    .edit_search(|input| search_input_handler::handle_char_input(input, ch));
            }
            KeyCode::Backspace => {
                self.app_state
                    .edit_search(search_input_handler::handle_backspace);
            }
            KeyCode::Left => {
                self.app_state
                    .edit_search(search_input_handler::handle_cursor_left);
            }
            KeyCode::Right => {
                self.app_state
                    .edit_search(search_input_handler::handle_cursor_right);
            }
            KeyCode::Esc | KeyCode::Enter => self.app_state.focus = FocusPane::Table,
            _ => return false,
        }
        true
    }

    /// Keys consumed while the cursor row is in edit mode. Returns false to
    /// fall through to the bindings (Tab, arrows, paging).
    fn handle_edit_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.app_state.edit_cursor_field(|value| value.push(ch));
            }
            KeyCode::Backspace => {
                self.app_state.edit_cursor_field(|value| {
                    value.pop();
                });
            }
            KeyCode::Esc | KeyCode::Enter => {
                handle_table_action(&mut self.app_state, KeyAction::ToggleEdit);
            }
            _ => return false,
        }
        true
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.app_state;
        let styles = &self.styles;
        let source = self.source_label.as_str();
        self.terminal.draw(|frame| {
            layout::render_layout(frame, state, styles, source);
        })?;
        Ok(())
    }
}

fn log_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Deleted { count } => info!(count, "Rows deleted"),
        Outcome::ConfirmationRequired { count } => debug!(count, "Awaiting delete confirmation"),
        Outcome::Cancelled => debug!("Delete cancelled"),
        Outcome::Applied | Outcome::Unchanged => {}
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.

#[cfg(test)]
#[allow(dead_code)] // Not every helper is used by every test module
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing (test-only constructor)
    ///
    /// Skips terminal initialization. Used by the acceptance test harness.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        app_state: AppState,
        input_source: Option<InputSource>,
        key_bindings: KeyBindings,
    ) -> Self {
        let source_label = input_source
            .as_ref()
            .map(InputSource::describe)
            .unwrap_or_else(|| "test".to_string());
        Self {
            terminal,
            app_state,
            input_source,
            source_label,
            key_bindings,
            styles: TableStyles::with_color_config(ColorConfig::enabled()),
        }
    }

    /// Get reference to app state (test-only accessor)
    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Handle a single keyboard event (test-only accessor)
    ///
    /// Returns true if app should quit.
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    /// Poll the member source once (test-only accessor)
    pub(crate) fn poll_source_test(&mut self) -> bool {
        self.poll_source()
    }

    /// Render a single frame (test-only accessor)
    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    /// Get reference to terminal (test-only accessor)
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Startup options for the TUI.
///
/// Carries resolved configuration from main.rs into the shell; the pure
/// core never sees where a value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiOptions {
    /// Rows per page.
    pub page_size: usize,
    /// Bulk-delete confirmation policy.
    pub confirm_policy: ConfirmPolicy,
    /// Color output.
    pub color: ColorConfig,
}

impl UiOptions {
    /// Create new UiOptions.
    pub fn new(page_size: usize, confirm_policy: ConfirmPolicy, color: ColorConfig) -> Self {
        Self {
            page_size,
            confirm_policy,
            color,
        }
    }
}

/// Initialize and run the TUI application with input source and options
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// on exit, including when the loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_source(input_source: InputSource, options: UiOptions) -> Result<(), TuiError> {
    let mut app = TuiApp::new(input_source, options)?;

    let result = app.run();

    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FetchError, Member, RecordId};
    use crate::state::FetchStatus;
    use ratatui::backend::TestBackend;

    fn create_test_app(members: usize) -> TuiApp<TestBackend> {
        let terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        let mut state = AppState::default();
        state.load(
            (1..=members)
                .map(|i| Member::new(i.to_string(), format!("User {}", i), "u@x.com", "member"))
                .collect(),
        );
        TuiApp::new_for_test(terminal, state, None, KeyBindings::default())
    }

    fn press(app: &mut TuiApp<TestBackend>, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn tui_error_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::Other, "boom");
        let err: TuiError = io_err.into();
        assert!(matches!(err, TuiError::Io(_)));
    }

    #[test]
    fn handle_key_q_returns_true() {
        let mut app = create_test_app(3);
        assert!(press(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn handle_key_ctrl_c_returns_true() {
        let mut app = create_test_app(3);
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.handle_key(key));
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = create_test_app(3);
        let key = KeyEvent::new_with_kind(KeyCode::Char('q'), KeyModifiers::NONE, KeyEventKind::Release);
        assert!(!app.handle_key(key));
    }

    #[test]
    fn q_types_into_search_instead_of_quitting() {
        let mut app = create_test_app(3);
        press(&mut app, KeyCode::Char('/'));
        assert!(!press(&mut app, KeyCode::Char('q')));
        assert_eq!(app.app_state.search.text, "q");
        assert_eq!(app.app_state.table.query(), "q");
    }

    #[test]
    fn enter_leaves_search_keeping_query() {
        let mut app = create_test_app(3);
        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.app_state.focus, FocusPane::Table);
        assert_eq!(app.app_state.table.store().displayed_len(), 1);
    }

    #[test]
    fn help_overlay_blocks_table_keys() {
        let mut app = create_test_app(3);
        press(&mut app, KeyCode::Char('?'));
        assert!(app.app_state.help_visible);

        press(&mut app, KeyCode::Char(' '));
        assert!(app.app_state.table.selection().is_empty());

        press(&mut app, KeyCode::Esc);
        assert!(!app.app_state.help_visible);
    }

    #[test]
    fn confirm_dialog_captures_keys() {
        let mut app = create_test_app(3);
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('D'));
        assert!(app.app_state.confirm_visible());

        // 'q' does not quit while the dialog is open
        assert!(!press(&mut app, KeyCode::Char('q')));
        assert!(app.app_state.confirm_visible());

        press(&mut app, KeyCode::Char('y'));
        assert!(!app.app_state.confirm_visible());
        assert_eq!(app.app_state.table.store().displayed_len(), 0);
    }

    #[test]
    fn edit_mode_routes_characters_into_focused_field() {
        let mut app = create_test_app(2);
        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Char('X'));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('!'));
        press(&mut app, KeyCode::Esc);

        let record = app.app_state.table.store().get(&RecordId::new("1")).unwrap();
        assert_eq!(record.name(), "User X");
        assert_eq!(record.email(), "u@x.com!");
        assert!(!record.is_editing());
    }

    #[test]
    fn source_outcome_is_applied_once() {
        let mut app = create_test_app(0);
        app.apply_fetch(Ok(vec![Member::new("9", "Nina", "n@x.com", "admin")]));
        assert_eq!(app.app_state.fetch, FetchStatus::Loaded { count: 1 });
        assert!(!app.poll_source(), "no source left to poll");
    }

    #[test]
    fn failed_fetch_keeps_table_empty() {
        let mut app = create_test_app(0);
        app.apply_fetch(Err(FetchError::WorkerGone));
        assert_eq!(app.app_state.fetch, FetchStatus::Failed);
        assert_eq!(app.app_state.table.store().displayed_len(), 0);
    }

    #[test]
    fn draw_renders_without_error() {
        let mut app = create_test_app(12);
        app.draw().unwrap();
    }
}
