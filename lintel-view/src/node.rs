//! Declarative view tree the widgets build their output from.
//!
//! A `Node` describes *what* to show; materializing it is the renderer's
//! job (see [`crate::render`]), or a host framework's, if it brings its
//! own painter.

use crate::styling::Style;

/// Content alignment on the main axis of a container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Justify {
    #[default]
    Start,
    Center,
    End,
    SpaceBetween,
}

/// Content alignment on the cross axis of a container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
}

/// Border drawn around a container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Border {
    #[default]
    None,
    Single,
    Rounded,
}

impl Border {
    /// Corner and edge glyphs: (top-left, top-right, bottom-left,
    /// bottom-right, horizontal, vertical). `None` has no glyphs.
    pub(crate) fn glyphs(self) -> Option<(char, char, char, char, char, char)> {
        match self {
            Border::None => None,
            Border::Single => Some(('┌', '┐', '└', '┘', '─', '│')),
            Border::Rounded => Some(('╭', '╮', '╰', '╯', '─', '│')),
        }
    }
}

/// Size specification for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Size {
    /// Fixed size in cells.
    Fixed(u16),
    /// Percentage of the parent's available space.
    Percent(f32),
    /// Flex grow factor over the space left after fixed/auto children.
    Flex(u16),
    /// Size to content.
    #[default]
    Auto,
}

/// Layout properties for a container node.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    /// Width
    pub width: Size,
    /// Height
    pub height: Size,
    /// Padding (all sides)
    pub padding: u16,
    /// Gap between children
    pub gap: u16,
    /// Content justification (main axis)
    pub justify: Justify,
    /// Content alignment (cross axis)
    pub align: Align,
    /// Border style
    pub border: Border,
}

/// A node in the view tree.
#[derive(Debug, Clone, Default)]
pub enum Node {
    /// Empty node (renders nothing)
    #[default]
    Empty,

    /// Text content
    Text { content: String, style: Style },

    /// Container with vertical layout
    Column {
        children: Vec<Node>,
        style: Style,
        layout: Layout,
    },

    /// Container with horizontal layout
    Row {
        children: Vec<Node>,
        style: Style,
        layout: Layout,
    },
}

impl Node {
    /// Create an empty node.
    pub const fn empty() -> Self {
        Self::Empty
    }

    /// Create a text node.
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
            style: Style::new(),
        }
    }

    /// Create a text node with style.
    pub fn text_styled(content: impl Into<String>, style: Style) -> Self {
        Self::Text {
            content: content.into(),
            style,
        }
    }

    /// Create a column node.
    pub fn column(children: Vec<Node>) -> Self {
        Self::Column {
            children,
            style: Style::new(),
            layout: Layout::default(),
        }
    }

    /// Create a column node with style and layout.
    pub fn column_styled(children: Vec<Node>, style: Style, layout: Layout) -> Self {
        Self::Column {
            children,
            style,
            layout,
        }
    }

    /// Create a row node.
    pub fn row(children: Vec<Node>) -> Self {
        Self::Row {
            children,
            style: Style::new(),
            layout: Layout::default(),
        }
    }

    /// Create a row node with style and layout.
    pub fn row_styled(children: Vec<Node>, style: Style, layout: Layout) -> Self {
        Self::Row {
            children,
            style,
            layout,
        }
    }

    /// Check if node is empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Child nodes, if this is a container.
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Column { children, .. } | Self::Row { children, .. } => children,
            _ => &[],
        }
    }

    /// Concatenate every text fragment in the tree, depth first.
    ///
    /// Fragments are joined with single spaces. Mainly useful in tests
    /// that assert on content without pinning layout.
    pub fn text_content(&self) -> String {
        let mut out = Vec::new();
        self.collect_text(&mut out);
        out.join(" ")
    }

    fn collect_text(&self, out: &mut Vec<String>) {
        match self {
            Self::Empty => {}
            Self::Text { content, .. } => {
                if !content.is_empty() {
                    out.push(content.clone());
                }
            }
            Self::Column { children, .. } | Self::Row { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }
}
