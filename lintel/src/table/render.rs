//! Table rendering.

use lintel_view::render::{display_width, truncate_to_width};
use lintel_view::{Layout, Node, Size, Style};

use super::item::{Alignment, TableRow};
use super::state::{Table, TableInner};

/// Width of the selection indicator column, glyph plus one space.
pub(super) const INDICATOR_WIDTH: u16 = 2;
/// Space between adjacent cells.
pub(super) const CELL_GAP: u16 = 1;

const SELECTED_INDICATOR: &str = "■ ";
const UNSELECTED_INDICATOR: &str = "□ ";
const SORT_ASCENDING: &str = " ↑";
const SORT_DESCENDING: &str = " ↓";
const LOADING_TEXT: &str = "Loading…";
const EMPTY_TEXT: &str = "No data available";

impl<R: TableRow> Table<R> {
    /// Build the view tree: header, rule, then one line per display row,
    /// or a single notice line when loading or empty.
    pub fn view(&self) -> Node {
        let Ok(guard) = self.inner.read() else {
            return Node::empty();
        };

        let width = table_width(&guard);
        let mut lines = Vec::with_capacity(guard.order.len() + 2);
        lines.push(header_row(&guard));
        lines.push(Node::text_styled(
            "─".repeat(width),
            Style::new().fg("border"),
        ));

        if guard.loading {
            lines.push(notice_row(LOADING_TEXT, width, Style::new().fg("text_muted").dim()));
        } else if guard.rows.is_empty() {
            lines.push(notice_row(EMPTY_TEXT, width, Style::new().fg("text_muted")));
        } else {
            for &index in &guard.order {
                if let Some(row) = guard.rows.get(index) {
                    lines.push(data_row(&guard, row));
                }
            }
        }

        Node::column(lines)
    }

    /// Full width of the rendered table in cells.
    pub fn total_width(&self) -> usize {
        self.inner.read().map(|g| table_width(&g)).unwrap_or(0)
    }
}

// -------------------------------------------------------------------------
// Geometry
// -------------------------------------------------------------------------

/// Indicator column (when selectable) plus cell widths and gaps. Click
/// handling and rendering both derive their x positions from this.
pub(super) fn table_width<R: TableRow>(inner: &TableInner<R>) -> usize {
    let indicator = if inner.selectable {
        INDICATOR_WIDTH as usize
    } else {
        0
    };
    let cells: usize = inner.columns.iter().map(|c| c.width as usize).sum();
    let gaps = CELL_GAP as usize * inner.columns.len().saturating_sub(1);
    indicator + cells + gaps
}

/// The column under an x position, or `None` over the indicator zone,
/// a gap, or past the last column.
pub(super) fn column_at<R: TableRow>(inner: &TableInner<R>, x: u16) -> Option<usize> {
    let mut offset = if inner.selectable { INDICATOR_WIDTH } else { 0 };
    if x < offset {
        return None;
    }
    for (index, column) in inner.columns.iter().enumerate() {
        if x < offset + column.width {
            return Some(index);
        }
        offset += column.width + CELL_GAP;
        if x < offset {
            return None; // between columns
        }
    }
    None
}

// -------------------------------------------------------------------------
// Lines
// -------------------------------------------------------------------------

fn header_row<R: TableRow>(inner: &TableInner<R>) -> Node {
    let mut cells = Vec::with_capacity(inner.columns.len() * 2 + 1);
    if inner.selectable {
        cells.push(Node::text(if inner.all_selected() {
            SELECTED_INDICATOR
        } else {
            UNSELECTED_INDICATOR
        }));
    }
    for (index, column) in inner.columns.iter().enumerate() {
        if index > 0 {
            cells.push(Node::text(" "));
        }
        let mut title = column.title.clone();
        if let Some((sorted, ascending)) = inner.sort
            && sorted == index
        {
            title.push_str(if ascending {
                SORT_ASCENDING
            } else {
                SORT_DESCENDING
            });
        }
        cells.push(Node::text(align_cell(
            &title,
            column.width as usize,
            column.align,
        )));
    }
    Node::row_styled(cells, Style::new().bold(), Layout::default())
}

fn data_row<R: TableRow>(inner: &TableInner<R>, row: &R) -> Node {
    let selected = inner.selection.is_selected(&row.id());
    let mut cells = Vec::with_capacity(inner.columns.len() * 2 + 1);
    if inner.selectable {
        cells.push(Node::text(if selected {
            SELECTED_INDICATOR
        } else {
            UNSELECTED_INDICATOR
        }));
    }
    for (index, column) in inner.columns.iter().enumerate() {
        if index > 0 {
            cells.push(Node::text(" "));
        }
        let value = row.field(&column.field);
        let cell = match &column.render {
            // Custom cells are placed in their column slot as-is; what
            // they contain is the renderer's business.
            Some(render) => Node::row_styled(
                vec![render(&value, row)],
                Style::new(),
                Layout {
                    width: Size::Fixed(column.width),
                    ..Layout::default()
                },
            ),
            None => Node::text(align_cell(
                &value.to_string(),
                column.width as usize,
                column.align,
            )),
        };
        cells.push(cell);
    }

    let style = if selected {
        Style::new().bg("selection")
    } else {
        Style::new()
    };
    Node::row_styled(cells, style, Layout::default())
}

/// Single centered line used for the loading and no-data states.
fn notice_row(text: &str, width: usize, style: Style) -> Node {
    Node::text_styled(align_cell(text, width, Alignment::Center), style)
}

fn align_cell(text: &str, width: usize, align: Alignment) -> String {
    let text = truncate_to_width(text, width);
    let pad = width.saturating_sub(display_width(&text));
    match align {
        Alignment::Left => format!("{text}{}", " ".repeat(pad)),
        Alignment::Right => format!("{}{text}", " ".repeat(pad)),
        Alignment::Center => {
            let left = pad / 2;
            format!("{}{text}{}", " ".repeat(left), " ".repeat(pad - left))
        }
    }
}
