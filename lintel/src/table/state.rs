//! Table widget state.

use std::collections::HashSet;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::selection::Selection;

use super::item::{Column, TableRow};

/// Unique identifier for a Table widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId(usize);

impl TableId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__table_{}", self.0)
    }
}

/// Handler invoked with the full current selection after every
/// user-driven selection change, in insertion order.
pub type RowSelectHandler<R> = Arc<dyn Fn(&[R]) + Send + Sync>;

/// Internal state for the Table widget.
pub(super) struct TableInner<R: TableRow> {
    /// Column definitions.
    pub columns: Vec<Column<R>>,
    /// The rows in the table, in caller order. Never reordered.
    pub rows: Vec<R>,
    /// Display permutation over `rows`, recomputed from caller order
    /// whenever the sort state or the rows change.
    pub order: Vec<usize>,
    /// Current sort state (column index, ascending).
    pub sort: Option<(usize, bool)>,
    /// Selection state (by row ID, insertion-ordered).
    pub selection: Selection,
    /// Whether rows can be selected (checkbox column shown).
    pub selectable: bool,
    /// Whether the table shows its loading indicator row.
    pub loading: bool,
    /// Selection-change callback.
    pub on_row_select: Option<RowSelectHandler<R>>,
}

impl<R: TableRow> TableInner<R> {
    fn new(columns: Vec<Column<R>>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            order: Vec::new(),
            sort: None,
            selection: Selection::new(),
            selectable: false,
            loading: false,
            on_row_select: None,
        }
    }

    /// Recompute the display permutation.
    ///
    /// Always starts from caller order so ties keep their relative input
    /// positions no matter how often the sort changes.
    fn resort(&mut self) {
        self.order = (0..self.rows.len()).collect();
        if let Some((index, ascending)) = self.sort
            && let Some(column) = self.columns.get(index)
        {
            let field = column.field.clone();
            let rows = &self.rows;
            self.order.sort_by(|&a, &b| {
                let ordering = rows[a].field(&field).compare(&rows[b].field(&field));
                if ascending { ordering } else { ordering.reverse() }
            });
        }
    }

    /// All rows selected (and there is something to select).
    pub(super) fn all_selected(&self) -> bool {
        !self.rows.is_empty() && self.selection.len() == self.rows.len()
    }

    /// The full current selection, in insertion order.
    fn selected_rows(&self) -> Vec<R> {
        self.selection
            .selected()
            .into_iter()
            .filter_map(|id| self.rows.iter().find(|row| row.id() == id).cloned())
            .collect()
    }
}

/// A sortable, selectable table.
///
/// `Table<R>` renders a header (with sort indicators and an optional
/// select-all checkbox), one row per record in display order, and
/// loading / no-data indicator rows. Sorting produces a display
/// permutation; the caller's row order is never mutated. Selection is
/// keyed by [`TableRow::id`] and reported through `on_row_select` with
/// the full selection in insertion order.
///
/// # Example
///
/// ```ignore
/// let table = Table::new(vec![
///     Column::new("name", "Name", 18).sortable(),
///     Column::new("email", "Email", 24),
/// ])
/// .with_rows(users)
/// .with_selectable(true)
/// .on_row_select(|selected| log::debug!("{} rows selected", selected.len()));
/// ```
pub struct Table<R: TableRow> {
    /// Unique identifier.
    id: TableId,
    /// Internal state.
    pub(super) inner: Arc<RwLock<TableInner<R>>>,
    /// Dirty flag for re-render.
    dirty: Arc<AtomicBool>,
}

impl<R: TableRow> Table<R> {
    /// Create a new table with column definitions.
    pub fn new(columns: Vec<Column<R>>) -> Self {
        Self {
            id: TableId::new(),
            inner: Arc::new(RwLock::new(TableInner::new(columns))),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Set the rows (builder form).
    pub fn with_rows(self, rows: Vec<R>) -> Self {
        self.set_rows(rows);
        self
    }

    /// Enable or disable row selection (builder form).
    pub fn with_selectable(self, selectable: bool) -> Self {
        self.set_selectable(selectable);
        self
    }

    /// Set the loading state (builder form).
    pub fn with_loading(self, loading: bool) -> Self {
        self.set_loading(loading);
        self
    }

    /// Register the selection-change handler.
    ///
    /// The handler receives the full current selection in insertion
    /// order on every user-driven change. Without a handler, changes are
    /// simply not reported.
    pub fn on_row_select<F>(self, handler: F) -> Self
    where
        F: Fn(&[R]) + Send + Sync + 'static,
    {
        if let Ok(mut guard) = self.inner.write() {
            guard.on_row_select = Some(Arc::new(handler));
        }
        self
    }

    /// Get the unique ID.
    pub fn id(&self) -> TableId {
        self.id
    }

    /// Get the ID as a string.
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Column access
    // -------------------------------------------------------------------------

    /// Get the column definitions.
    pub fn columns(&self) -> Vec<Column<R>> {
        self.inner
            .read()
            .map(|g| g.columns.clone())
            .unwrap_or_default()
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.inner.read().map(|g| g.columns.len()).unwrap_or(0)
    }

    // -------------------------------------------------------------------------
    // Row access
    // -------------------------------------------------------------------------

    /// Get the number of rows.
    pub fn len(&self) -> usize {
        self.inner.read().map(|g| g.rows.len()).unwrap_or(0)
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get all rows, in caller order.
    pub fn rows(&self) -> Vec<R> {
        self.inner
            .read()
            .map(|g| g.rows.clone())
            .unwrap_or_default()
    }

    /// Get all rows in display order (sorted when a sort is active).
    pub fn display_rows(&self) -> Vec<R> {
        self.inner
            .read()
            .map(|g| {
                g.order
                    .iter()
                    .filter_map(|&i| g.rows.get(i).cloned())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Find a row by ID.
    pub fn find_row(&self, id: &str) -> Option<R> {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.rows.iter().find(|row| row.id() == id).cloned())
    }

    /// Replace all rows.
    ///
    /// The display order is recomputed under the current sort state.
    /// Selected ids that no longer occur are pruned silently; the
    /// selection callback only fires for user-driven changes.
    pub fn set_rows(&self, rows: Vec<R>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.rows = rows;
            guard.resort();
            let valid: HashSet<String> = guard.rows.iter().map(TableRow::id).collect();
            guard.selection.retain_ids(&valid);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Get the current sort state (column index, ascending).
    pub fn sort(&self) -> Option<(usize, bool)> {
        self.inner.read().ok().and_then(|g| g.sort)
    }

    /// Toggle sort for a column.
    ///
    /// If the column already holds sort focus, flips the direction;
    /// otherwise starts ascending on it. Once a column has been engaged
    /// the cycle never returns to unsorted. Ignores out-of-range and
    /// non-sortable columns.
    ///
    /// Returns the new sort state.
    pub fn toggle_sort(&self, column_index: usize) -> Option<(usize, bool)> {
        if let Ok(mut guard) = self.inner.write()
            && column_index < guard.columns.len()
            && guard.columns[column_index].sortable
        {
            let new_sort = match guard.sort {
                Some((index, ascending)) if index == column_index => (column_index, !ascending),
                _ => (column_index, true), // Default to ascending
            };
            guard.sort = Some(new_sort);
            guard.resort();
            self.dirty.store(true, Ordering::SeqCst);
            log::debug!(
                "{}: sorting column {} {}",
                self.id,
                new_sort.0,
                if new_sort.1 { "ascending" } else { "descending" }
            );
            return Some(new_sort);
        }
        None
    }

    /// Set sort by column index and direction.
    ///
    /// Ignores out-of-range and non-sortable columns.
    pub fn set_sort(&self, column_index: usize, ascending: bool) {
        if let Ok(mut guard) = self.inner.write()
            && column_index < guard.columns.len()
            && guard.columns[column_index].sortable
        {
            guard.sort = Some((column_index, ascending));
            guard.resort();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Clear the sort state; display order falls back to caller order.
    ///
    /// Header clicks only ever flip between ascending and descending,
    /// so no interaction path leads here. Hosts may still reset
    /// programmatically.
    pub fn clear_sort(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.sort = None;
            guard.resort();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Whether row selection is enabled.
    pub fn selectable(&self) -> bool {
        self.inner.read().map(|g| g.selectable).unwrap_or(false)
    }

    /// Enable or disable row selection.
    ///
    /// Disabling hides the checkbox column but keeps the selection
    /// state.
    pub fn set_selectable(&self, selectable: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.selectable = selectable;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Check if a row is selected.
    pub fn is_row_selected(&self, id: &str) -> bool {
        self.inner
            .read()
            .map(|g| g.selection.is_selected(id))
            .unwrap_or(false)
    }

    /// Selected row ids, in insertion order.
    pub fn selection(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|g| g.selection.selected())
            .unwrap_or_default()
    }

    /// Selected rows, in insertion order.
    pub fn selected_rows(&self) -> Vec<R> {
        self.inner
            .read()
            .map(|g| g.selected_rows())
            .unwrap_or_default()
    }

    /// Whether every row is currently selected (false on an empty
    /// table).
    pub fn all_selected(&self) -> bool {
        self.inner.read().map(|g| g.all_selected()).unwrap_or(false)
    }

    /// Toggle one row's selection by id and report the new full
    /// selection through the callback.
    ///
    /// Ids not present in the current rows are ignored, which keeps the
    /// selection a subset of the data. Returns `true` if the row is
    /// selected afterwards.
    pub fn toggle_row_selection(&self, id: &str) -> bool {
        let (now_selected, notify) = {
            let Ok(mut guard) = self.inner.write() else {
                return false;
            };
            if !guard.rows.iter().any(|row| row.id() == id) {
                return false;
            }
            let now_selected = guard.selection.toggle(id);
            self.dirty.store(true, Ordering::SeqCst);
            log::debug!(
                "{}: row '{}' {}",
                self.id,
                id,
                if now_selected { "selected" } else { "deselected" }
            );
            (now_selected, Self::selection_notification(&guard))
        };
        Self::notify(notify);
        now_selected
    }

    /// Toggle between the whole data sequence selected and nothing
    /// selected, reporting the result through the callback either way.
    ///
    /// Selecting all picks rows in data order.
    pub fn toggle_select_all(&self) {
        let notify = {
            let Ok(mut guard) = self.inner.write() else {
                return;
            };
            if guard.all_selected() {
                guard.selection.clear();
            } else {
                let ids: Vec<String> = guard.rows.iter().map(TableRow::id).collect();
                guard.selection.select_exactly(&ids);
            }
            self.dirty.store(true, Ordering::SeqCst);
            log::debug!("{}: select-all -> {} rows", self.id, guard.selection.len());
            Self::selection_notification(&guard)
        };
        Self::notify(notify);
    }

    /// Capture handler and payload under the lock; the call happens
    /// outside it so user code never runs while the state is held.
    fn selection_notification(guard: &TableInner<R>) -> Option<(RowSelectHandler<R>, Vec<R>)> {
        guard
            .on_row_select
            .clone()
            .map(|handler| (handler, guard.selected_rows()))
    }

    fn notify(notification: Option<(RowSelectHandler<R>, Vec<R>)>) {
        if let Some((handler, selected)) = notification {
            handler(&selected);
        }
    }

    // -------------------------------------------------------------------------
    // Loading
    // -------------------------------------------------------------------------

    /// Whether the table is in the loading state.
    pub fn loading(&self) -> bool {
        self.inner.read().map(|g| g.loading).unwrap_or(false)
    }

    /// Set the loading state.
    pub fn set_loading(&self, loading: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.loading = loading;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the table needs re-rendering.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag (called after rendering).
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl<R: TableRow> Clone for Table<R> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl<R: TableRow> fmt::Debug for Table<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}
