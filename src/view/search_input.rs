//! Search box widget.

use super::styles::TableStyles;
use crate::state::SearchInput;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search box above the table.
///
/// Shows a block cursor while focused; otherwise the query (or a hint
/// when there is none).
pub struct SearchBox<'a> {
    input: &'a SearchInput,
    focused: bool,
    styles: &'a TableStyles,
}

impl<'a> SearchBox<'a> {
    /// Create new SearchBox widget.
    pub fn new(input: &'a SearchInput, focused: bool, styles: &'a TableStyles) -> Self {
        Self {
            input,
            focused,
            styles,
        }
    }

    fn line(&self) -> Line<'static> {
        let text = &self.input.text;
        if !self.focused {
            return if text.is_empty() {
                Line::from(Span::styled(
                    "Press / to search by name, email or role",
                    self.styles.muted,
                ))
            } else {
                Line::from(text.clone())
            };
        }

        let before: String = text.chars().take(self.input.cursor).collect();
        let mut rest = text.chars().skip(self.input.cursor);
        let under = rest.next().map(String::from).unwrap_or_else(|| " ".to_string());
        let after: String = rest.collect();

        Line::from(vec![
            Span::raw(before),
            Span::styled(under, self.styles.cursor_row),
            Span::raw(after),
        ])
    }
}

impl Widget for SearchBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.styles.focused_border
        } else {
            self.styles.unfocused_border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .border_style(border_style);
        Paragraph::new(self.line()).block(block).render(area, buf);
    }
}
