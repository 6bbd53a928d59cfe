//! Text and container styling.

use crate::styling::color::StyleColor;

/// Text and element styling.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    /// Foreground color
    pub fg: Option<StyleColor>,
    /// Background color
    pub bg: Option<StyleColor>,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
    /// Underlined text
    pub underline: bool,
    /// Dim/faint text
    pub dim: bool,
}

impl Style {
    /// Create a new empty style.
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            bold: false,
            italic: false,
            underline: false,
            dim: false,
        }
    }

    /// Set foreground color.
    pub fn fg(mut self, color: impl Into<StyleColor>) -> Self {
        self.fg = Some(color.into());
        self
    }

    /// Set background color.
    pub fn bg(mut self, color: impl Into<StyleColor>) -> Self {
        self.bg = Some(color.into());
        self
    }

    /// Set bold.
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Set italic.
    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Set underline.
    pub const fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Set dim.
    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    /// Cascade: fill unset fields from a parent style.
    ///
    /// Colors inherit when absent; attribute flags accumulate. Used by the
    /// renderer so container styling reaches the text inside it.
    pub fn inherit(&self, parent: &Style) -> Style {
        Style {
            fg: self.fg.clone().or_else(|| parent.fg.clone()),
            bg: self.bg.clone().or_else(|| parent.bg.clone()),
            bold: self.bold || parent.bold,
            italic: self.italic || parent.italic,
            underline: self.underline || parent.underline,
            dim: self.dim || parent.dim,
        }
    }

    /// Whether this style sets anything at all.
    pub fn is_plain(&self) -> bool {
        self.fg.is_none()
            && self.bg.is_none()
            && !self.bold
            && !self.italic
            && !self.underline
            && !self.dim
    }
}
