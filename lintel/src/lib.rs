pub mod events;
pub mod input;
pub mod selection;
pub mod table;

pub use lintel_view as view;

pub mod prelude {
    pub use crate::events::{ComponentEvents, EventResult, Key, KeyCombo, Modifiers};
    pub use crate::input::{ChangeEvent, Input, InputId, InputKind, InputSize, InputVariant};
    pub use crate::selection::Selection;
    pub use crate::table::{Alignment, CellValue, Column, Table, TableId, TableRow};

    pub use lintel_view::{Color, DefaultTheme, Node, Style, StyleColor, Theme};
    pub use lintel_view::{render_ansi, render_lines};
}
