//! Line renderer for the view tree.
//!
//! Materializes a [`Node`] as lines of text: plain (for snapshot tests
//! and piping) or ANSI-styled through crossterm (for the catalog
//! binaries). Hosts with their own painter can ignore this module and
//! walk the tree directly.
//!
//! The model is line/span based: every node paints to a list of lines,
//! each line a run of styled spans. Containers size their children
//! (fixed, percent, flex, or content width), lay the painted lines out
//! with gap/padding/justify/align, and optionally wrap them in a border
//! drawn in the container's foreground color.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::node::{Align, Border, Justify, Layout, Node, Size};
use crate::styling::{Style, Theme, resolve_color};

// ---------- text helpers ----------

/// Display width of a string in terminal cells.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Display width of a single character in terminal cells.
pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Truncate a string to a maximum display width, appending `…` when
/// anything was cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let target = max_width - 1;
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > target {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Truncate or right-pad a string to exactly the given display width.
pub fn fit_to_width(s: &str, width: usize) -> String {
    let mut out = truncate_to_width(s, width);
    let used = display_width(&out);
    if used < width {
        out.extend(std::iter::repeat_n(' ', width - used));
    }
    out
}

// ---------- span model ----------

#[derive(Debug, Clone)]
struct Span {
    text: String,
    style: Style,
}

impl Span {
    fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    fn blank(width: usize, style: Style) -> Self {
        Self::new(" ".repeat(width), style)
    }

    fn width(&self) -> usize {
        display_width(&self.text)
    }
}

type Line = Vec<Span>;

fn line_width(line: &Line) -> usize {
    line.iter().map(Span::width).sum()
}

// ---------- public entry points ----------

/// Render a node tree to plain text lines at the given width.
///
/// Styles are ignored; padding is preserved, so lines come out at their
/// laid-out width (trailing spaces included).
pub fn render_lines(node: &Node, width: u16) -> Vec<String> {
    paint(node, width as usize, &Style::new())
        .into_iter()
        .map(|line| line.iter().map(|s| s.text.as_str()).collect())
        .collect()
}

/// Render a node tree to an ANSI-styled string at the given width,
/// resolving named colors against the theme.
pub fn render_ansi(node: &Node, width: u16, theme: &dyn Theme) -> String {
    use crossterm::style::Stylize;

    let lines = paint(node, width as usize, &Style::new());
    let mut out = String::new();
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        for span in line {
            let style = &span.style;
            if style.is_plain() {
                out.push_str(&span.text);
                continue;
            }
            let mut styled = span.text.as_str().stylize();
            if let Some(fg) = &style.fg {
                styled = styled.with(resolve_color(fg, theme).to_crossterm());
            }
            if let Some(bg) = &style.bg {
                styled = styled.on(resolve_color(bg, theme).to_crossterm());
            }
            if style.bold {
                styled = styled.bold();
            }
            if style.italic {
                styled = styled.italic();
            }
            if style.underline {
                styled = styled.underlined();
            }
            if style.dim {
                styled = styled.dim();
            }
            out.push_str(&styled.to_string());
        }
    }
    out
}

// ---------- measurement ----------

/// Content width of a node, in cells, before any constraint is applied.
fn intrinsic_width(node: &Node) -> usize {
    match node {
        Node::Empty => 0,
        Node::Text { content, .. } => content
            .split('\n')
            .map(display_width)
            .max()
            .unwrap_or(0),
        Node::Row {
            children, layout, ..
        } => {
            let inner: usize = children
                .iter()
                .map(|c| declared_or_intrinsic(c))
                .sum::<usize>()
                + layout.gap as usize * children.len().saturating_sub(1);
            inner + chrome_width(layout)
        }
        Node::Column {
            children, layout, ..
        } => {
            let inner = children
                .iter()
                .map(|c| declared_or_intrinsic(c))
                .max()
                .unwrap_or(0);
            inner + chrome_width(layout)
        }
    }
}

/// A child's contribution to its parent's intrinsic width: its declared
/// fixed width when it has one, otherwise its content width.
fn declared_or_intrinsic(node: &Node) -> usize {
    match node_layout(node) {
        Some(layout) => match layout.width {
            Size::Fixed(w) => w as usize,
            _ => intrinsic_width(node),
        },
        None => intrinsic_width(node),
    }
}

fn node_layout(node: &Node) -> Option<&Layout> {
    match node {
        Node::Row { layout, .. } | Node::Column { layout, .. } => Some(layout),
        _ => None,
    }
}

/// Horizontal space the container itself consumes (border + padding).
fn chrome_width(layout: &Layout) -> usize {
    let border = if layout.border == Border::None { 0 } else { 2 };
    border + layout.padding as usize * 2
}

/// Resolve the widths of a row's children within the available inner
/// width. Fixed and percent sizes are honored first, auto children take
/// their content width, and flex children share whatever remains in
/// proportion to their factors.
fn resolve_row_widths(children: &[Node], gap: usize, available: usize) -> Vec<usize> {
    let gap_total = gap * children.len().saturating_sub(1);
    let budget = available.saturating_sub(gap_total);

    let mut widths = vec![0usize; children.len()];
    let mut flex: Vec<(usize, u16)> = Vec::new();
    let mut used = 0usize;

    for (i, child) in children.iter().enumerate() {
        let size = node_layout(child).map(|l| l.width).unwrap_or(Size::Auto);
        match size {
            Size::Fixed(w) => {
                widths[i] = w as usize;
                used += widths[i];
            }
            Size::Percent(p) => {
                widths[i] = ((budget as f32) * p / 100.0).round() as usize;
                used += widths[i];
            }
            Size::Auto => {
                widths[i] = intrinsic_width(child);
                used += widths[i];
            }
            Size::Flex(factor) => flex.push((i, factor.max(1))),
        }
    }

    if !flex.is_empty() {
        let remaining = budget.saturating_sub(used);
        let total_factor: usize = flex.iter().map(|(_, f)| *f as usize).sum();
        let mut handed_out = 0;
        for (pos, (i, factor)) in flex.iter().enumerate() {
            let share = if pos == flex.len() - 1 {
                remaining - handed_out
            } else {
                remaining * (*factor as usize) / total_factor
            };
            widths[*i] = share;
            handed_out += share;
        }
    }

    widths
}

// ---------- painting ----------

fn paint(node: &Node, width: usize, inherited: &Style) -> Vec<Line> {
    match node {
        Node::Empty => Vec::new(),
        Node::Text { content, style } => {
            let style = style.inherit(inherited);
            content
                .split('\n')
                .map(|part| vec![Span::new(fit_to_width(part, width), style.clone())])
                .collect()
        }
        Node::Row {
            children,
            style,
            layout,
        } => {
            let style = style.inherit(inherited);
            let inner = width.saturating_sub(chrome_width(layout));
            let body = paint_row(children, layout, inner, &style);
            finish_container(body, layout, inner, &style)
        }
        Node::Column {
            children,
            style,
            layout,
        } => {
            let style = style.inherit(inherited);
            let inner = width.saturating_sub(chrome_width(layout));
            let body = paint_column(children, layout, inner, &style);
            finish_container(body, layout, inner, &style)
        }
    }
}

fn paint_row(children: &[Node], layout: &Layout, inner: usize, style: &Style) -> Vec<Line> {
    if children.is_empty() {
        return Vec::new();
    }

    let widths = resolve_row_widths(children, layout.gap as usize, inner);
    let mut painted: Vec<Vec<Line>> = children
        .iter()
        .zip(&widths)
        .map(|(child, w)| paint(child, *w, style))
        .collect();

    let height = painted.iter().map(Vec::len).max().unwrap_or(0).max(1);
    for (block, w) in painted.iter_mut().zip(&widths) {
        align_block_vertically(block, height, *w, layout.align, style);
    }

    let used: usize = widths.iter().sum::<usize>() + layout.gap as usize * (children.len() - 1);
    let leftover = inner.saturating_sub(used);
    let (lead, between_extra, trail) = match layout.justify {
        Justify::Start => (0, 0, leftover),
        Justify::End => (leftover, 0, 0),
        Justify::Center => (leftover / 2, 0, leftover - leftover / 2),
        Justify::SpaceBetween if children.len() > 1 => {
            (0, leftover / (children.len() - 1), leftover % (children.len() - 1))
        }
        Justify::SpaceBetween => (0, 0, leftover),
    };

    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        let mut line: Line = Vec::new();
        if lead > 0 {
            line.push(Span::blank(lead, style.clone()));
        }
        for (i, block) in painted.iter().enumerate() {
            if i > 0 {
                let sep = layout.gap as usize + between_extra;
                if sep > 0 {
                    line.push(Span::blank(sep, style.clone()));
                }
            }
            line.extend(block[row].iter().cloned());
        }
        if trail > 0 {
            line.push(Span::blank(trail, style.clone()));
        }
        clamp_line(&mut line, inner, style);
        lines.push(line);
    }
    lines
}

fn paint_column(children: &[Node], layout: &Layout, inner: usize, style: &Style) -> Vec<Line> {
    let mut lines: Vec<Line> = Vec::new();
    let mut first = true;
    for child in children {
        if child.is_empty() {
            continue;
        }
        if !first {
            for _ in 0..layout.gap {
                lines.push(vec![Span::blank(inner, style.clone())]);
            }
        }
        first = false;

        let child_width = match node_layout(child).map(|l| l.width).unwrap_or(Size::Auto) {
            Size::Fixed(w) => (w as usize).min(inner),
            Size::Percent(p) => (((inner as f32) * p / 100.0).round() as usize).min(inner),
            Size::Flex(_) => inner,
            Size::Auto => intrinsic_width(child).min(inner),
        };
        for mut line in paint(child, child_width, style) {
            let pad = inner.saturating_sub(child_width);
            let (left, right) = match layout.align {
                Align::Start => (0, pad),
                Align::Center => (pad / 2, pad - pad / 2),
                Align::End => (pad, 0),
            };
            if left > 0 {
                line.insert(0, Span::blank(left, style.clone()));
            }
            if right > 0 {
                line.push(Span::blank(right, style.clone()));
            }
            clamp_line(&mut line, inner, style);
            lines.push(line);
        }
    }
    lines
}

/// Pad a painted child to the row height, honoring cross-axis alignment.
fn align_block_vertically(
    block: &mut Vec<Line>,
    height: usize,
    width: usize,
    align: Align,
    style: &Style,
) {
    let missing = height.saturating_sub(block.len());
    if missing == 0 {
        return;
    }
    let (above, below) = match align {
        Align::Start => (0, missing),
        Align::Center => (missing / 2, missing - missing / 2),
        Align::End => (missing, 0),
    };
    for _ in 0..above {
        block.insert(0, vec![Span::blank(width, style.clone())]);
    }
    for _ in 0..below {
        block.push(vec![Span::blank(width, style.clone())]);
    }
}

/// Truncate a line's spans to the given width and pad the tail so every
/// line in a container comes out at exactly the inner width.
fn clamp_line(line: &mut Line, width: usize, style: &Style) {
    let mut used = 0;
    let mut cut = None;
    for (i, span) in line.iter_mut().enumerate() {
        let w = span.width();
        if used + w > width {
            span.text = fit_to_width(&span.text, width - used);
            used = width;
            cut = Some(i + 1);
            break;
        }
        used += w;
    }
    if let Some(end) = cut {
        line.truncate(end);
    }
    if used < width {
        line.push(Span::blank(width - used, style.clone()));
    }
    line.retain(|s| !s.text.is_empty());
}

/// Apply fixed height, padding, and border around a painted body.
fn finish_container(mut body: Vec<Line>, layout: &Layout, inner: usize, style: &Style) -> Vec<Line> {
    if let Size::Fixed(h) = layout.height {
        let target = h as usize;
        let chrome = if layout.border == Border::None { 0 } else { 2 };
        let target = target.saturating_sub(chrome + layout.padding as usize * 2);
        match layout.justify {
            // Vertical justification only matters once height is fixed.
            Justify::Center | Justify::End if body.len() < target => {
                let missing = target - body.len();
                let above = if layout.justify == Justify::Center {
                    missing / 2
                } else {
                    missing
                };
                for _ in 0..above {
                    body.insert(0, vec![Span::blank(inner, style.clone())]);
                }
            }
            _ => {}
        }
        while body.len() < target {
            body.push(vec![Span::blank(inner, style.clone())]);
        }
        body.truncate(target);
    }

    let pad = layout.padding as usize;
    if pad > 0 {
        for line in &mut body {
            line.insert(0, Span::blank(pad, style.clone()));
            line.push(Span::blank(pad, style.clone()));
        }
        let full = inner + pad * 2;
        for _ in 0..pad {
            body.insert(0, vec![Span::blank(full, style.clone())]);
            body.push(vec![Span::blank(full, style.clone())]);
        }
    }

    if let Some((tl, tr, bl, br, h, v)) = layout.border.glyphs() {
        let span_width = inner + pad * 2;
        let horizontal: String = std::iter::repeat_n(h, span_width).collect();
        let mut bordered = Vec::with_capacity(body.len() + 2);
        bordered.push(vec![Span::new(
            format!("{tl}{horizontal}{tr}"),
            style.clone(),
        )]);
        for line in body {
            let mut bordered_line = vec![Span::new(v.to_string(), style.clone())];
            bordered_line.extend(line);
            bordered_line.push(Span::new(v.to_string(), style.clone()));
            bordered.push(bordered_line);
        }
        bordered.push(vec![Span::new(
            format!("{bl}{horizontal}{br}"),
            style.clone(),
        )]);
        return bordered;
    }

    body
}
