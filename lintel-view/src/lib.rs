pub mod node;
pub mod render;
pub mod styling;

pub use node::{Align, Border, Justify, Layout, Node, Size};
pub use render::{render_ansi, render_lines};
pub use styling::{Color, DefaultTheme, Style, StyleColor, Theme, ThemeRef};
pub use styling::{resolve_color, resolve_style_color};
