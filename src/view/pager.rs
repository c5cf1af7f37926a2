//! Pager line: page buttons, page label and selection summary.
//!
//! ```text
//! « ‹ [1] 2 3 › »   Page 1 of 3   2 of 25 row(s) selected
//! ```

use super::constants::PAGER_MAX_BUTTONS;
use super::styles::TableStyles;
use crate::state::TableView;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::ops::RangeInclusive;

/// Render the pager into a one-line `area`.
pub fn render_pager(frame: &mut Frame, area: Rect, view: &TableView, styles: &TableStyles) {
    frame.render_widget(Paragraph::new(pager_line(view, styles)), area);
}

/// Build the pager line.
pub fn pager_line(view: &TableView, styles: &TableStyles) -> Line<'static> {
    let button = |label: &'static str, enabled: bool| {
        let style = if enabled {
            styles.pager_button
        } else {
            styles.muted
        };
        Span::styled(label, style)
    };

    let mut spans = vec![
        button("«", view.can_prev),
        Span::raw(" "),
        button("‹", view.can_prev),
        Span::raw(" "),
    ];

    for page in visible_pages(view.current_page, view.total_pages) {
        if page == view.current_page {
            spans.push(Span::styled(format!("[{}]", page), styles.pager_current));
        } else {
            spans.push(Span::styled(page.to_string(), styles.pager_button));
        }
        spans.push(Span::raw(" "));
    }

    spans.extend([
        button("›", view.can_next),
        Span::raw(" "),
        button("»", view.can_next),
        Span::raw("   "),
        Span::raw(view.page_label()),
        Span::raw("   "),
        Span::styled(view.selection_summary(), styles.muted),
    ]);

    Line::from(spans)
}

/// Page numbers to show as buttons: a window of at most
/// [`PAGER_MAX_BUTTONS`] pages that contains `current`.
fn visible_pages(current: usize, total: usize) -> RangeInclusive<usize> {
    let total = total.max(1);
    if total <= PAGER_MAX_BUTTONS {
        return 1..=total;
    }
    let half = PAGER_MAX_BUTTONS / 2;
    let start = current
        .saturating_sub(half)
        .clamp(1, total + 1 - PAGER_MAX_BUTTONS);
    start..=start + PAGER_MAX_BUTTONS - 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(current_page: usize, total_pages: usize) -> TableView {
        TableView {
            rows: Vec::new(),
            total_count: 25,
            selected_count: 2,
            current_page,
            total_pages,
            all_selected: false,
            can_prev: current_page > 1,
            can_next: current_page < total_pages,
            query: String::new(),
            pending_delete: None,
        }
    }

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn line_shows_buttons_label_and_summary() {
        let line = pager_line(&view(2, 3), &TableStyles::default());
        insta::assert_snapshot!(text(&line), @"« ‹ 1 [2] 3 › »   Page 2 of 3   2 of 25 row(s) selected");
    }

    #[test]
    fn disabled_buttons_use_muted_style() {
        let styles = TableStyles::default();
        let line = pager_line(&view(1, 3), &styles);
        assert_eq!(line.spans[0].style, styles.muted, "« disabled on page 1");
        assert_eq!(line.spans[2].style, styles.muted, "‹ disabled on page 1");
    }

    #[test]
    fn few_pages_show_all_buttons() {
        assert_eq!(visible_pages(1, 3), 1..=3);
        assert_eq!(visible_pages(1, 1), 1..=1);
        assert_eq!(visible_pages(1, 0), 1..=1);
    }

    #[test]
    fn many_pages_window_follows_current() {
        assert_eq!(visible_pages(1, 20), 1..=9);
        assert_eq!(visible_pages(10, 20), 6..=14);
        assert_eq!(visible_pages(20, 20), 12..=20);
    }
}
