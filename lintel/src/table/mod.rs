//! Sortable, selectable data table.
//!
//! Rows are any type implementing [`TableRow`]; columns address row
//! fields by name and can bring their own cell renderer. Sorting never
//! reorders the caller's data, it only changes the display permutation,
//! and selection is keyed by row ID so it survives re-sorting.

mod events;
mod item;
mod render;
mod state;

pub use item::{Alignment, CellRenderer, CellValue, Column, TableRow};
pub use state::{RowSelectHandler, Table, TableId};
