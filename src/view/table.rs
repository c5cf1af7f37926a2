//! Member table widget.
//!
//! Renders one page of rows: a checkbox column followed by name, email and
//! role. Cell text is cut to the column width by display width, so wide
//! characters never spill into the next column.

use super::constants::{CHECKBOX_COLUMN_WIDTH, NAME_EMAIL_ROLE_RATIOS};
use super::styles::TableStyles;
use crate::model::EditableField;
use crate::state::{FetchStatus, RowView, TableView};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const COLUMN_SPACING: u16 = 1;
const ELLIPSIS: char = '…';

/// Everything the table needs besides the projection itself.
#[derive(Debug, Clone, Copy)]
pub struct TableContext {
    /// Row cursor within the page.
    pub cursor: usize,
    /// Field receiving input on the cursor row.
    pub edit_field: EditableField,
    /// Whether the table pane has keyboard focus.
    pub focused: bool,
    /// Load status, for the empty-table message.
    pub fetch: FetchStatus,
}

/// Render the member table into `area`.
pub fn render_member_table(
    frame: &mut Frame,
    area: Rect,
    view: &TableView,
    ctx: TableContext,
    styles: &TableStyles,
) {
    let border_style = if ctx.focused {
        styles.focused_border
    } else {
        styles.unfocused_border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Members ({}) ", view.total_count))
        .border_style(border_style);

    if view.rows.is_empty() {
        let message = empty_message(view, ctx.fetch);
        let style = if ctx.fetch == FetchStatus::Failed {
            styles.error
        } else {
            styles.muted
        };
        let paragraph = Paragraph::new(Line::from(Span::styled(message, style))).block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let widths = column_constraints();
    let columns = Layout::horizontal(widths)
        .spacing(COLUMN_SPACING)
        .split(block.inner(area));
    let col_widths = [1, 2, 3].map(|i| columns[i].width as usize);

    let header = Row::new(vec![
        Cell::from(checkbox(view.all_selected)),
        Cell::from(truncate_to_width("Name", col_widths[0])),
        Cell::from(truncate_to_width("Email", col_widths[1])),
        Cell::from(truncate_to_width("Role", col_widths[2])),
    ])
    .style(styles.header);

    let rows = view.rows.iter().enumerate().map(|(index, row)| {
        let is_cursor = index == ctx.cursor;
        let focus_field = (is_cursor && row.editing).then_some(ctx.edit_field);
        build_row(row, focus_field, col_widths, styles)
            .style(row_style(row, is_cursor && ctx.focused, styles))
    });

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(COLUMN_SPACING)
        .block(block);

    frame.render_widget(table, area);
}

fn column_constraints() -> [Constraint; 4] {
    let [name, email, role] = NAME_EMAIL_ROLE_RATIOS;
    [
        Constraint::Length(CHECKBOX_COLUMN_WIDTH),
        Constraint::Fill(name as u16),
        Constraint::Fill(email as u16),
        Constraint::Fill(role as u16),
    ]
}

fn build_row(
    row: &RowView,
    focus_field: Option<EditableField>,
    col_widths: [usize; 3],
    styles: &TableStyles,
) -> Row<'static> {
    let fields = [
        (EditableField::Name, &row.name),
        (EditableField::Email, &row.email),
        (EditableField::Role, &row.role),
    ];

    let mut cells = vec![Cell::from(checkbox(row.selected))];
    for ((field, value), width) in fields.into_iter().zip(col_widths) {
        if focus_field == Some(field) {
            // One column is reserved for the caret.
            let mut text = truncate_to_width(value, width.saturating_sub(1));
            text.push('▏');
            cells.push(Cell::from(Span::styled(text, styles.edit_field)));
        } else {
            cells.push(Cell::from(truncate_to_width(value, width)));
        }
    }
    Row::new(cells)
}

fn row_style(row: &RowView, under_cursor: bool, styles: &TableStyles) -> Style {
    let mut style = Style::default();
    if row.selected {
        style = style.patch(styles.selected_row);
    }
    if row.editing {
        style = style.patch(styles.editing_row);
    }
    if under_cursor {
        style = style.patch(styles.cursor_row);
    }
    style
}

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

fn empty_message(view: &TableView, fetch: FetchStatus) -> String {
    match fetch {
        FetchStatus::Loading => "Loading members…".to_string(),
        FetchStatus::Failed => "Could not load members. See the log file for details.".to_string(),
        FetchStatus::Loaded { .. } if !view.query.is_empty() => {
            format!("No members match \"{}\"", view.query)
        }
        FetchStatus::Loaded { .. } => "No members".to_string(),
    }
}

/// Cut `text` to at most `max` display columns, marking the cut with an
/// ellipsis.
pub fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let budget = max - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push(ELLIPSIS);
    out
}
