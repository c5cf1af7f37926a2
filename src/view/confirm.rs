//! Bulk-delete confirmation dialog.

use super::constants::{CONFIRM_DIALOG_HEIGHT, CONFIRM_DIALOG_WIDTH};
use super::styles::TableStyles;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the confirmation dialog for deleting `count` rows.
pub fn render_confirm_dialog(frame: &mut Frame, count: usize, styles: &TableStyles) {
    let area = centered_fixed(CONFIRM_DIALOG_WIDTH, CONFIRM_DIALOG_HEIGHT, frame.area());
    frame.render_widget(Clear, area);

    let question = if count == 0 {
        "No rows are selected. Nothing will be deleted.".to_string()
    } else {
        format!("Delete {} selected row(s)?", count)
    };

    let lines = vec![
        Line::from(question),
        Line::from(""),
        Line::from(vec![
            Span::styled("y/Enter", styles.key),
            Span::raw(" confirm   "),
            Span::styled("n/Esc", styles.key),
            Span::raw(" cancel"),
        ]),
    ];

    let dialog = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Confirm delete ")
            .border_style(styles.error),
    );
    frame.render_widget(dialog, area);
}

/// A `width` x `height` rect centered in `area`, shrunk to fit.
fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
