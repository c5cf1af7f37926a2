//! Table styling configuration.
//!
//! Every color decision goes through [`TableStyles`] so `--no-color` and
//! `NO_COLOR` can turn all of them off in one place.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Colors on, regardless of environment.
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== TableStyles =====

/// Styles for every part of the member table screen.
///
/// Without colors, emphasis falls back to modifiers (bold, reversed,
/// underlined) so the cursor, selection and edit focus stay visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStyles {
    /// Column header row.
    pub header: Style,
    /// Row under the cursor.
    pub cursor_row: Style,
    /// Selected rows.
    pub selected_row: Style,
    /// Rows in edit mode.
    pub editing_row: Style,
    /// The field receiving typed characters.
    pub edit_field: Style,
    /// Borders of the focused pane.
    pub focused_border: Style,
    /// Borders of unfocused panes.
    pub unfocused_border: Style,
    /// Enabled pager buttons.
    pub pager_button: Style,
    /// Current page button.
    pub pager_current: Style,
    /// Hints, disabled buttons and other secondary text.
    pub muted: Style,
    /// Error messages.
    pub error: Style,
    /// Section headers in the help overlay.
    pub section_header: Style,
    /// Key names in the help overlay.
    pub key: Style,
}

impl TableStyles {
    /// Build styles for the given color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                header: Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                cursor_row: Style::default().add_modifier(Modifier::REVERSED),
                selected_row: Style::default().fg(Color::Yellow),
                editing_row: Style::default().fg(Color::Green),
                edit_field: Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                focused_border: Style::default().fg(Color::Cyan),
                unfocused_border: Style::default().fg(Color::DarkGray),
                pager_button: Style::default().fg(Color::White),
                pager_current: Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                muted: Style::default().fg(Color::DarkGray),
                error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                section_header: Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                key: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            }
        } else {
            Self {
                header: Style::default().add_modifier(Modifier::BOLD),
                cursor_row: Style::default().add_modifier(Modifier::REVERSED),
                selected_row: Style::default().add_modifier(Modifier::BOLD),
                editing_row: Style::default().add_modifier(Modifier::ITALIC),
                edit_field: Style::default().add_modifier(Modifier::UNDERLINED),
                focused_border: Style::default().add_modifier(Modifier::BOLD),
                unfocused_border: Style::default(),
                pager_button: Style::default(),
                pager_current: Style::default().add_modifier(Modifier::REVERSED),
                muted: Style::default().add_modifier(Modifier::DIM),
                error: Style::default().add_modifier(Modifier::BOLD),
                section_header: Style::default().add_modifier(Modifier::BOLD),
                key: Style::default().add_modifier(Modifier::BOLD),
            }
        }
    }
}

impl Default for TableStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::enabled())
    }
}

// ===== Tests =====
