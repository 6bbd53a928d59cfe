//! Input rendering.

use lintel_view::render::{display_width, fit_to_width};
use lintel_view::{Border, Layout, Node, Size, Style};

use super::state::{Input, InputInner, InputKind, InputVariant};

/// Mask glyph for password values.
const MASK: char = '•';
/// Reveal affordance while the value is masked / revealed.
const REVEAL_HIDDEN: char = '◉';
const REVEAL_SHOWN: char = '○';
/// Clear affordance.
const CLEAR: char = '×';
/// Affordance placeholder while loading.
const LOADING: char = '…';

impl Input {
    /// Build the view tree: optional label, the field itself (one line,
    /// or three with an outline), and an optional helper or error line.
    pub fn view(&self) -> Node {
        let Ok(guard) = self.inner.read() else {
            return Node::empty();
        };

        let mut parts = Vec::with_capacity(3);
        if let Some(label) = &guard.label {
            parts.push(Node::text_styled(
                label.clone(),
                Style::new().fg("text_muted"),
            ));
        }
        parts.push(field(&guard));
        if let Some(footer) = footer(&guard) {
            parts.push(footer);
        }

        let style = if guard.disabled {
            Style::new().dim()
        } else {
            Style::new()
        };
        Node::column_styled(parts, style, Layout::default())
    }
}

// -------------------------------------------------------------------------
// Geometry
// -------------------------------------------------------------------------

/// Interactive affordance inside the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Affordance {
    Reveal,
    Clear,
}

/// Horizontal inset of the content: the outline's border cell or the
/// filled variant's breathing space. Ghost content starts at the edge.
pub(super) fn content_inset(variant: InputVariant) -> u16 {
    match variant {
        InputVariant::Outlined | InputVariant::Filled => 1,
        InputVariant::Ghost => 0,
    }
}

/// The y position of the content line within the widget.
pub(super) fn content_y(inner: &InputInner) -> u16 {
    let label = u16::from(inner.label.is_some());
    let border = u16::from(inner.variant == InputVariant::Outlined);
    label + border
}

/// The affordance under an x position on the content line, if any.
/// Positions mirror the cluster layout: clear sits on the last content
/// cell, reveal directly before it.
pub(super) fn affordance_at(inner: &InputInner, x: u16) -> Option<Affordance> {
    if inner.loading {
        return None;
    }
    let right = inner
        .size
        .width()
        .checked_sub(1 + content_inset(inner.variant))?;
    let clear = inner.show_clear && !inner.value.is_empty();
    let reveal = inner.show_reveal && inner.kind == InputKind::Password;

    if clear && x == right {
        return Some(Affordance::Clear);
    }
    let reveal_x = if clear { right.checked_sub(2)? } else { right };
    if reveal && x == reveal_x {
        return Some(Affordance::Reveal);
    }
    None
}

// -------------------------------------------------------------------------
// Pieces
// -------------------------------------------------------------------------

fn field(inner: &InputInner) -> Node {
    let width = inner.size.width();
    let content = content_line(inner);
    match inner.variant {
        InputVariant::Outlined => Node::row_styled(
            vec![content],
            Style::new().fg(if inner.invalid { "error" } else { "border" }),
            Layout {
                width: Size::Fixed(width),
                border: Border::Rounded,
                ..Layout::default()
            },
        ),
        InputVariant::Filled => Node::row_styled(
            vec![content],
            Style::new().bg("surface"),
            Layout {
                width: Size::Fixed(width),
                ..Layout::default()
            },
        ),
        InputVariant::Ghost => Node::row_styled(
            vec![content],
            Style::new(),
            Layout {
                width: Size::Fixed(width),
                ..Layout::default()
            },
        ),
    }
}

/// The single content line: value (or placeholder) on the left, the
/// affordance cluster right-aligned against the content edge.
fn content_line(inner: &InputInner) -> Node {
    let width = inner.size.width() as usize;
    let inner_width = match inner.variant {
        // The border consumes one cell per side before content is laid out.
        InputVariant::Outlined => width.saturating_sub(2),
        InputVariant::Filled | InputVariant::Ghost => width,
    };
    let pad = usize::from(inner.variant == InputVariant::Filled);
    let cluster = affordance_cluster(inner);
    let text_width = inner_width.saturating_sub(pad * 2 + display_width(&cluster));

    let (text, text_style) = if inner.value.is_empty() {
        (
            inner.placeholder.clone(),
            Style::new().fg("text_muted").dim(),
        )
    } else if inner.display_kind.masked() {
        (
            MASK.to_string().repeat(inner.value.chars().count()),
            Style::new().fg("text"),
        )
    } else {
        (inner.value.clone(), Style::new().fg("text"))
    };

    let mut spans = Vec::with_capacity(4);
    if pad > 0 {
        spans.push(Node::text(" "));
    }
    spans.push(Node::text_styled(fit_to_width(&text, text_width), text_style));
    if !cluster.is_empty() {
        let style = if inner.loading {
            Style::new().fg("text_muted").dim()
        } else {
            Style::new().fg("text_muted")
        };
        spans.push(Node::text_styled(cluster, style));
    }
    if pad > 0 {
        spans.push(Node::text(" "));
    }
    Node::row(spans)
}

/// Affordances as they appear, left to right: reveal, then clear, each
/// set off by one space. Loading replaces the lot with a single `…`.
fn affordance_cluster(inner: &InputInner) -> String {
    if inner.loading {
        return format!(" {LOADING}");
    }
    let mut cluster = String::new();
    if inner.show_reveal && inner.kind == InputKind::Password {
        cluster.push(' ');
        cluster.push(if inner.display_kind.masked() {
            REVEAL_HIDDEN
        } else {
            REVEAL_SHOWN
        });
    }
    if inner.show_clear && !inner.value.is_empty() {
        cluster.push(' ');
        cluster.push(CLEAR);
    }
    cluster
}

/// Error line while invalid, helper line otherwise. Never both.
fn footer(inner: &InputInner) -> Option<Node> {
    if inner.invalid {
        inner
            .error_message
            .as_ref()
            .map(|message| Node::text_styled(message.clone(), Style::new().fg("error")))
    } else {
        inner
            .helper_text
            .as_ref()
            .map(|helper| Node::text_styled(helper.clone(), Style::new().fg("text_muted")))
    }
}
