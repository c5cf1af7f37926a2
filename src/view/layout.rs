//! Screen layout.
//!
//! ```text
//! header      memview · <source> · <load status>
//! search      ┌ Search ┐
//! table       ┌ Members (n) ┐
//! pager       « ‹ [1] 2 › »   Page 1 of 2   0 of 12 row(s) selected
//! status      key hints
//! ```
//!
//! Overlays (confirmation dialog, help) draw on top.

use super::confirm::render_confirm_dialog;
use super::constants::{HEADER_HEIGHT, PAGER_HEIGHT, SEARCH_INPUT_HEIGHT, STATUS_BAR_HEIGHT};
use super::help::render_help_overlay;
use super::pager::render_pager;
use super::search_input::SearchBox;
use super::styles::TableStyles;
use super::table::{render_member_table, TableContext};
use crate::state::{AppState, FetchStatus, FocusPane};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the whole screen for `state`.
///
/// `source` names where the members come from (URL or file path).
pub fn render_layout(frame: &mut Frame, state: &AppState, styles: &TableStyles, source: &str) {
    let [header_area, search_area, table_area, pager_area, status_area] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(SEARCH_INPUT_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(PAGER_HEIGHT),
        Constraint::Length(STATUS_BAR_HEIGHT),
    ])
    .areas(frame.area());

    let view = state.table.view();

    render_header(frame, header_area, state.fetch, source, styles);

    frame.render_widget(
        SearchBox::new(&state.search, state.focus == FocusPane::Search, styles),
        search_area,
    );

    let ctx = TableContext {
        cursor: state.cursor,
        edit_field: state.edit_field,
        focused: state.focus == FocusPane::Table,
        fetch: state.fetch,
    };
    render_member_table(frame, table_area, &view, ctx, styles);
    render_pager(frame, pager_area, &view, styles);
    render_status_bar(frame, status_area, state, styles);

    if let Some(count) = view.pending_delete {
        render_confirm_dialog(frame, count, styles);
    }

    if state.help_visible {
        render_help_overlay(frame, styles);
    }
}

fn render_header(
    frame: &mut Frame,
    area: Rect,
    fetch: FetchStatus,
    source: &str,
    styles: &TableStyles,
) {
    let (status, style) = match fetch {
        FetchStatus::Loading => ("loading…".to_string(), styles.muted),
        FetchStatus::Loaded { count } => (format!("{} loaded", count), styles.muted),
        FetchStatus::Failed => ("load failed".to_string(), styles.error),
    };

    let line = Line::from(vec![
        Span::styled("memview", styles.header),
        Span::raw(" · "),
        Span::styled(source.to_string(), styles.muted),
        Span::raw(" · "),
        Span::styled(status, style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, styles: &TableStyles) {
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(status_hint(state), styles.muted))),
        area,
    );
}

/// Key hints for the current mode.
fn status_hint(state: &AppState) -> &'static str {
    if state.confirm_visible() {
        "y/Enter: delete | n/Esc: cancel"
    } else if state.focus == FocusPane::Search {
        "type to filter | Esc/Enter: back to table"
    } else if state.cursor_editing() {
        "type to edit | Tab: next field | Backspace: erase | Esc/Enter: done"
    } else {
        "q: quit | /: search | Space: select | a: select page | e: edit | d/D: delete | ?: help"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Member;
    use crate::state::TableAction;

    fn loaded(n: usize) -> AppState {
        let mut state = AppState::default();
        state.load(
            (1..=n)
                .map(|i| Member::new(i.to_string(), format!("User {}", i), "u@x.com", "member"))
                .collect(),
        );
        state
    }

    #[test]
    fn status_hint_follows_mode() {
        let mut state = loaded(3);
        assert!(status_hint(&state).starts_with("q: quit"));

        state.focus = FocusPane::Search;
        assert!(status_hint(&state).starts_with("type to filter"));

        state.focus = FocusPane::Table;
        let id = state.cursor_id().unwrap();
        state.dispatch(TableAction::ToggleEdit(id));
        assert!(status_hint(&state).starts_with("type to edit"));

        state.dispatch(TableAction::ToggleSelectAll);
        state.dispatch(TableAction::DeleteSelected);
        assert!(status_hint(&state).starts_with("y/Enter"));
    }
}
