//! Table event handling.

use crate::events::{ComponentEvents, EventResult};

use super::item::TableRow;
use super::render::{INDICATOR_WIDTH, column_at};
use super::state::Table;

impl<R: TableRow> ComponentEvents for Table<R> {
    /// Clicks are widget-relative: y 0 is the header, y 1 the rule, data
    /// rows start at y 2 in display order.
    fn on_click(&self, x: u16, y: u16) -> EventResult {
        match y {
            0 => self.header_click(x),
            1 => EventResult::Ignored,
            _ => self.row_click(y - 2),
        }
    }
}

impl<R: TableRow> Table<R> {
    /// Header clicks: the indicator zone toggles select-all, a sortable
    /// column's title toggles its sort. Everything else falls through.
    fn header_click(&self, x: u16) -> EventResult {
        let (select_all, sort_column) = {
            let Ok(guard) = self.inner.read() else {
                return EventResult::Ignored;
            };
            let select_all = guard.selectable && x < INDICATOR_WIDTH;
            let sort_column = if select_all {
                None
            } else {
                column_at(&guard, x).filter(|&index| guard.columns[index].sortable)
            };
            (select_all, sort_column)
        };

        if select_all {
            self.toggle_select_all();
            return EventResult::Consumed;
        }
        if let Some(index) = sort_column {
            self.toggle_sort(index);
            return EventResult::Consumed;
        }
        EventResult::Ignored
    }

    /// Row clicks toggle selection. The loading and no-data notice lines
    /// are not rows, so clicks on them fall through.
    fn row_click(&self, display_index: u16) -> EventResult {
        let id = {
            let Ok(guard) = self.inner.read() else {
                return EventResult::Ignored;
            };
            if !guard.selectable || guard.loading {
                return EventResult::Ignored;
            }
            guard
                .order
                .get(display_index as usize)
                .and_then(|&index| guard.rows.get(index))
                .map(TableRow::id)
        };

        match id {
            Some(id) => {
                self.toggle_row_selection(&id);
                EventResult::Consumed
            }
            None => EventResult::Ignored,
        }
    }
}
