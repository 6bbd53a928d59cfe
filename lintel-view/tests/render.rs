use lintel_view::render::{char_width, display_width, fit_to_width, truncate_to_width};
use lintel_view::{Align, Border, DefaultTheme, Justify, Layout, Node, Size, Style};
use lintel_view::{render_ansi, render_lines};

fn plain(node: &Node, width: u16) -> Vec<String> {
    render_lines(node, width)
}

fn fixed(width: u16) -> Layout {
    Layout {
        width: Size::Fixed(width),
        ..Layout::default()
    }
}

// ============================================================================
// Width Helper Tests
// ============================================================================

#[test]
fn test_display_width_counts_cells() {
    assert_eq!(display_width("abc"), 3);
    assert_eq!(display_width(""), 0);
    // CJK characters occupy two cells each.
    assert_eq!(display_width("你好"), 4);
    assert_eq!(char_width('a'), 1);
    assert_eq!(char_width('好'), 2);
}

#[test]
fn test_truncate_appends_ellipsis() {
    assert_eq!(truncate_to_width("hello world", 8), "hello w…");
    assert_eq!(truncate_to_width("abc", 3), "abc", "exact fit is untouched");
    assert_eq!(truncate_to_width("abcd", 0), "");
}

#[test]
fn test_truncate_handles_wide_characters() {
    // The third character would straddle the cut, so it is dropped.
    assert_eq!(truncate_to_width("你好吗", 5), "你好…");
    assert_eq!(display_width(&truncate_to_width("你好吗", 5)), 5);
}

#[test]
fn test_fit_to_width_pads_and_truncates() {
    assert_eq!(fit_to_width("ab", 5), "ab   ");
    assert_eq!(fit_to_width("abcdef", 4), "abc…");
    assert_eq!(fit_to_width("", 3), "   ");
}

// ============================================================================
// Text Node Tests
// ============================================================================

#[test]
fn test_text_pads_to_render_width() {
    let lines = plain(&Node::text("hi"), 6);
    assert_eq!(lines, vec!["hi    "]);
}

#[test]
fn test_text_truncates_to_render_width() {
    let lines = plain(&Node::text("hello world"), 8);
    assert_eq!(lines, vec!["hello w…"]);
}

#[test]
fn test_multiline_text_splits_into_lines() {
    let lines = plain(&Node::text("ab\ncd"), 4);
    assert_eq!(lines, vec!["ab  ", "cd  "]);
}

#[test]
fn test_empty_node_renders_nothing() {
    let lines = plain(&Node::Empty, 10);
    assert!(lines.is_empty());
}

// ============================================================================
// Row Layout Tests
// ============================================================================

#[test]
fn test_row_places_children_side_by_side() {
    let row = Node::row(vec![Node::text("ab"), Node::text("cd")]);
    let lines = plain(&row, 6);
    assert_eq!(lines, vec!["abcd  "]);
}

#[test]
fn test_row_gap_separates_children() {
    let row = Node::row_styled(
        vec![Node::text("ab"), Node::text("cd")],
        Style::new(),
        Layout {
            gap: 1,
            ..Layout::default()
        },
    );
    let lines = plain(&row, 5);
    assert_eq!(lines, vec!["ab cd"]);
}

#[test]
fn test_row_honors_fixed_child_width() {
    let row = Node::row(vec![
        Node::column_styled(vec![Node::text("abcdef")], Style::new(), fixed(3)),
        Node::text("z"),
    ]);
    let lines = plain(&row, 10);
    assert_eq!(lines, vec!["ab…z      "], "fixed child truncates its content");
}

#[test]
fn test_row_flex_children_share_remainder() {
    let flex = |content: &str| {
        Node::column_styled(
            vec![Node::text(content)],
            Style::new(),
            Layout {
                width: Size::Flex(1),
                ..Layout::default()
            },
        )
    };
    let row = Node::row(vec![
        Node::column_styled(vec![Node::text("aaaa")], Style::new(), fixed(4)),
        flex("b"),
        flex("c"),
    ]);

    let lines = plain(&row, 10);
    assert_eq!(lines, vec!["aaaab  c  "], "two flex children split 6 cells evenly");
}

#[test]
fn test_row_percent_width() {
    let row = Node::row(vec![
        Node::column_styled(
            vec![Node::text("x")],
            Style::new(),
            Layout {
                width: Size::Percent(50.0),
                ..Layout::default()
            },
        ),
        Node::text("yy"),
    ]);
    let lines = plain(&row, 10);
    assert_eq!(lines, vec!["x    yy   "]);
}

#[test]
fn test_row_justify_center() {
    let row = Node::row_styled(
        vec![Node::text("ab")],
        Style::new(),
        Layout {
            justify: Justify::Center,
            ..Layout::default()
        },
    );
    let lines = plain(&row, 6);
    assert_eq!(lines, vec!["  ab  "]);
}

#[test]
fn test_row_justify_space_between() {
    let row = Node::row_styled(
        vec![Node::text("a"), Node::text("b")],
        Style::new(),
        Layout {
            justify: Justify::SpaceBetween,
            ..Layout::default()
        },
    );
    let lines = plain(&row, 5);
    assert_eq!(lines, vec!["a   b"]);
}

#[test]
fn test_row_children_align_to_tallest() {
    let row = Node::row(vec![Node::text("a\nb"), Node::text("x")]);
    let lines = plain(&row, 4);
    assert_eq!(lines, vec!["ax  ", "b   "], "short child is padded below");
}

// ============================================================================
// Column Layout Tests
// ============================================================================

#[test]
fn test_column_stacks_children() {
    let column = Node::column(vec![Node::text("a"), Node::text("b")]);
    let lines = plain(&column, 3);
    assert_eq!(lines, vec!["a  ", "b  "]);
}

#[test]
fn test_column_gap_inserts_blank_lines() {
    let column = Node::column_styled(
        vec![Node::text("a"), Node::text("b")],
        Style::new(),
        Layout {
            gap: 1,
            ..Layout::default()
        },
    );
    let lines = plain(&column, 1);
    assert_eq!(lines, vec!["a", " ", "b"]);
}

#[test]
fn test_column_skips_empty_children() {
    let column = Node::column_styled(
        vec![Node::text("a"), Node::Empty, Node::text("b")],
        Style::new(),
        Layout {
            gap: 1,
            ..Layout::default()
        },
    );
    let lines = plain(&column, 1);
    assert_eq!(lines, vec!["a", " ", "b"], "empty child contributes no gap");
}

#[test]
fn test_column_align_center() {
    let column = Node::column_styled(
        vec![Node::text("ab")],
        Style::new(),
        Layout {
            align: Align::Center,
            ..Layout::default()
        },
    );
    let lines = plain(&column, 6);
    assert_eq!(lines, vec!["  ab  "]);
}

#[test]
fn test_column_align_end() {
    let column = Node::column_styled(
        vec![Node::text("ab")],
        Style::new(),
        Layout {
            align: Align::End,
            ..Layout::default()
        },
    );
    let lines = plain(&column, 5);
    assert_eq!(lines, vec!["   ab"]);
}

// ============================================================================
// Container Tests
// ============================================================================

#[test]
fn test_single_border_wraps_content() {
    let boxed = Node::column_styled(
        vec![Node::text("hi")],
        Style::new(),
        Layout {
            border: Border::Single,
            ..Layout::default()
        },
    );
    let lines = plain(&boxed, 6);
    assert_eq!(lines, vec!["┌────┐", "│hi  │", "└────┘"]);
}

#[test]
fn test_rounded_border_glyphs() {
    let boxed = Node::row_styled(
        vec![Node::text("x")],
        Style::new(),
        Layout {
            border: Border::Rounded,
            ..Layout::default()
        },
    );
    let lines = plain(&boxed, 5);
    assert_eq!(lines, vec!["╭───╮", "│x  │", "╰───╯"]);
}

#[test]
fn test_border_surrounds_every_body_line() {
    let boxed = Node::row_styled(
        vec![Node::column(vec![Node::text("a"), Node::text("b")])],
        Style::new(),
        Layout {
            border: Border::Rounded,
            ..Layout::default()
        },
    );
    let lines = plain(&boxed, 5);
    assert_eq!(lines, vec!["╭───╮", "│a  │", "│b  │", "╰───╯"]);
}

#[test]
fn test_padding_surrounds_content() {
    let padded = Node::column_styled(
        vec![Node::text("a")],
        Style::new(),
        Layout {
            padding: 1,
            ..Layout::default()
        },
    );
    let lines = plain(&padded, 3);
    assert_eq!(lines, vec!["   ", " a ", "   "]);
}

#[test]
fn test_fixed_height_pads_with_blank_lines() {
    let column = Node::column_styled(
        vec![Node::text("a")],
        Style::new(),
        Layout {
            height: Size::Fixed(3),
            ..Layout::default()
        },
    );
    let lines = plain(&column, 2);
    assert_eq!(lines, vec!["a ", "  ", "  "]);
}

#[test]
fn test_fixed_height_truncates_overflow() {
    let column = Node::column_styled(
        vec![Node::text("a"), Node::text("b"), Node::text("c")],
        Style::new(),
        Layout {
            height: Size::Fixed(2),
            ..Layout::default()
        },
    );
    let lines = plain(&column, 1);
    assert_eq!(lines, vec!["a", "b"]);
}

#[test]
fn test_fixed_height_justify_center_offsets_content() {
    let column = Node::column_styled(
        vec![Node::text("a")],
        Style::new(),
        Layout {
            height: Size::Fixed(3),
            justify: Justify::Center,
            ..Layout::default()
        },
    );
    let lines = plain(&column, 1);
    assert_eq!(lines, vec![" ", "a", " "]);
}

// ============================================================================
// Content and ANSI Tests
// ============================================================================

#[test]
fn test_text_content_joins_fragments() {
    let tree = Node::row(vec![
        Node::text("a"),
        Node::column(vec![Node::text("b"), Node::Empty, Node::text("c")]),
    ]);
    assert_eq!(tree.text_content(), "a b c");
}

#[test]
fn test_render_ansi_passes_plain_text_through() {
    let theme = DefaultTheme::dark();
    let out = render_ansi(&Node::text("hi"), 2, &theme);
    assert_eq!(out, "hi");

    let stacked = Node::column(vec![Node::text("a"), Node::text("b")]);
    assert_eq!(render_ansi(&stacked, 1, &theme), "a\nb");
}

#[test]
fn test_render_ansi_emits_escape_codes_for_styles() {
    let theme = DefaultTheme::dark();

    let bold = render_ansi(&Node::text_styled("x", Style::new().bold()), 1, &theme);
    assert!(bold.contains('\u{1b}'), "bold span must be escaped");

    let colored = render_ansi(&Node::text_styled("x", Style::new().fg("error")), 1, &theme);
    assert!(colored.contains('\u{1b}'), "named color must resolve and escape");
}

#[test]
fn test_render_ansi_inherits_container_style() {
    let theme = DefaultTheme::dark();
    let tree = Node::column_styled(vec![Node::text("x")], Style::new().bold(), Layout::default());
    let out = render_ansi(&tree, 1, &theme);
    assert!(out.contains('\u{1b}'), "child spans inherit container styling");
}
