//! Tests for help overlay widget

use super::*;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn render(width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| render_help_overlay(frame, &TableStyles::default()))
        .unwrap();

    let buffer = terminal.backend().buffer();
    let area = buffer.area();
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn render_help_overlay_shows_bordered_box() {
    let rendered = render(80, 24);
    assert!(rendered.contains('┌') && rendered.contains('┘'));
    assert!(rendered.contains("Keyboard Shortcuts"));
}

#[test]
fn render_help_overlay_lists_categories() {
    let rendered = render(100, 60);
    for category in ["Rows", "Pages", "Editing", "Deleting", "Search", "Application"] {
        assert!(
            rendered.contains(category),
            "Should show {} category:\n{}",
            category,
            rendered
        );
    }
}

#[test]
fn render_help_overlay_shows_dismiss_hint() {
    let rendered = render(80, 24);
    assert!(rendered.contains("Press Esc or ? to close"));
}

#[test]
fn help_content_has_one_line_per_shortcut_plus_headers() {
    let lines = build_help_content(&TableStyles::default());
    let shortcuts: usize = SHORTCUTS.iter().map(|(_, keys)| keys.len()).sum();
    let headers = SHORTCUTS.len();
    let blank_separators = SHORTCUTS.len() - 1;
    assert_eq!(lines.len(), shortcuts + headers + blank_separators);
}

#[test]
fn centered_rect_is_centered() {
    let rect = centered_rect(50, 50, Rect::new(0, 0, 100, 40));
    assert_eq!(rect, Rect::new(25, 10, 50, 20));
}
