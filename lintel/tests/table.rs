use std::sync::{Arc, Mutex};

use lintel::prelude::*;

#[derive(Debug, Clone)]
struct Item {
    id: &'static str,
    name: &'static str,
    qty: i64,
}

impl TableRow for Item {
    fn id(&self) -> String {
        self.id.to_string()
    }

    fn field(&self, name: &str) -> CellValue {
        match name {
            "id" => self.id.into(),
            "name" => self.name.into(),
            "qty" => self.qty.into(),
            _ => CellValue::Empty,
        }
    }
}

fn items() -> Vec<Item> {
    vec![
        Item {
            id: "a",
            name: "cherry",
            qty: 30,
        },
        Item {
            id: "b",
            name: "apple",
            qty: 10,
        },
        Item {
            id: "c",
            name: "banana",
            qty: 20,
        },
    ]
}

/// id not sortable, name and qty sortable.
///
/// Without selection the header runs: id 0..4, name 5..13, qty 14..19.
/// The selection indicator shifts everything right by two.
fn columns() -> Vec<Column<Item>> {
    vec![
        Column::new("id", "Id", 4),
        Column::new("name", "Name", 8).sortable(),
        Column::new("qty", "Qty", 5).align(Alignment::Right).sortable(),
    ]
}

fn display_ids(table: &Table<Item>) -> Vec<String> {
    table.display_rows().iter().map(|r| r.id()).collect()
}

/// Table wired to record every selection callback payload as id lists.
fn selectable_table() -> (Table<Item>, Arc<Mutex<Vec<Vec<String>>>>) {
    let calls: Arc<Mutex<Vec<Vec<String>>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    let table = Table::new(columns())
        .with_rows(items())
        .with_selectable(true)
        .on_row_select(move |rows| {
            sink.lock().unwrap().push(rows.iter().map(|r| r.id()).collect());
        });
    (table, calls)
}

// ============================================================================
// Sorting
// ============================================================================

#[test]
fn test_unsorted_preserves_caller_order() {
    let table = Table::new(columns()).with_rows(items());

    assert_eq!(table.sort(), None);
    assert_eq!(display_ids(&table), vec!["a", "b", "c"]);
}

#[test]
fn test_header_click_sorts_ascending() {
    let table = Table::new(columns()).with_rows(items());

    let result = table.on_click(5, 0); // name header

    assert_eq!(result, EventResult::Consumed);
    assert_eq!(table.sort(), Some((1, true)));
    assert_eq!(
        display_ids(&table),
        vec!["b", "c", "a"],
        "apple, banana, cherry"
    );
}

#[test]
fn test_second_click_sorts_descending() {
    let table = Table::new(columns()).with_rows(items());

    table.on_click(5, 0);
    table.on_click(5, 0);

    assert_eq!(table.sort(), Some((1, false)));
    assert_eq!(display_ids(&table), vec!["a", "c", "b"]);
}

#[test]
fn test_third_click_returns_to_ascending() {
    // The cycle is ascending/descending; it never goes back to unsorted
    let table = Table::new(columns()).with_rows(items());

    table.on_click(5, 0);
    table.on_click(5, 0);
    table.on_click(5, 0);

    assert_eq!(table.sort(), Some((1, true)));
    assert_eq!(display_ids(&table), vec!["b", "c", "a"]);
}

#[test]
fn test_switching_column_starts_ascending() {
    let table = Table::new(columns()).with_rows(items());

    table.on_click(5, 0);
    table.on_click(5, 0); // name descending
    table.on_click(14, 0); // qty header

    assert_eq!(table.sort(), Some((2, true)));
    assert_eq!(display_ids(&table), vec!["b", "c", "a"], "qty 10, 20, 30");
}

#[test]
fn test_non_sortable_column_click_ignored() {
    let table = Table::new(columns()).with_rows(items());

    let result = table.on_click(0, 0); // id header

    assert_eq!(result, EventResult::Ignored);
    assert_eq!(table.sort(), None);
}

#[test]
fn test_gap_click_ignored() {
    let table = Table::new(columns()).with_rows(items());

    // x 4 is the gap between the id and name cells
    assert_eq!(table.on_click(4, 0), EventResult::Ignored);
    assert_eq!(table.sort(), None);
}

#[test]
fn test_toggle_sort_out_of_range_ignored() {
    let table = Table::new(columns()).with_rows(items());

    assert_eq!(table.toggle_sort(7), None);
    assert_eq!(table.sort(), None);
}

#[test]
fn test_sort_is_stable_for_ties() {
    let rows = vec![
        Item {
            id: "x",
            name: "pear",
            qty: 5,
        },
        Item {
            id: "y",
            name: "plum",
            qty: 5,
        },
        Item {
            id: "z",
            name: "fig",
            qty: 1,
        },
    ];
    let table = Table::new(columns()).with_rows(rows);

    table.toggle_sort(2); // qty ascending

    // x and y tie on qty and keep their caller order
    assert_eq!(display_ids(&table), vec!["z", "x", "y"]);

    table.toggle_sort(2); // qty descending
    assert_eq!(
        display_ids(&table),
        vec!["x", "y", "z"],
        "ties keep caller order in both directions"
    );
}

#[test]
fn test_sorting_never_mutates_caller_rows() {
    let table = Table::new(columns()).with_rows(items());

    table.toggle_sort(1);
    table.toggle_sort(2);

    let ids: Vec<String> = table.rows().iter().map(|r| r.id()).collect();
    assert_eq!(ids, vec!["a", "b", "c"], "rows() stays in caller order");
}

#[test]
fn test_set_rows_resorts_under_active_sort() {
    let table = Table::new(columns()).with_rows(items());
    table.toggle_sort(2); // qty ascending

    table.set_rows(vec![
        Item {
            id: "d",
            name: "date",
            qty: 50,
        },
        Item {
            id: "e",
            name: "elderberry",
            qty: 40,
        },
    ]);

    assert_eq!(table.sort(), Some((2, true)), "sort state survives new data");
    assert_eq!(display_ids(&table), vec!["e", "d"]);
}

#[test]
fn test_clear_sort_restores_caller_order() {
    let table = Table::new(columns()).with_rows(items());
    table.toggle_sort(1);

    table.clear_sort();

    assert_eq!(table.sort(), None);
    assert_eq!(display_ids(&table), vec!["a", "b", "c"]);
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn test_row_click_toggles_selection() {
    let (table, calls) = selectable_table();

    let result = table.on_click(3, 2); // first data row

    assert_eq!(result, EventResult::Consumed);
    assert!(table.is_row_selected("a"));
    assert_eq!(calls.lock().unwrap().as_slice(), &[vec!["a".to_string()]]);

    table.on_click(3, 2); // same row again deselects

    assert!(!table.is_row_selected("a"));
    assert_eq!(
        calls.lock().unwrap().last().unwrap().len(),
        0,
        "deselection reports the emptied selection"
    );
}

#[test]
fn test_selection_callback_reports_insertion_order() {
    let (table, calls) = selectable_table();

    table.on_click(3, 4); // third data row: c
    table.on_click(3, 2); // first data row: a

    let calls = calls.lock().unwrap();
    assert_eq!(
        calls.last().unwrap(),
        &vec!["c".to_string(), "a".to_string()],
        "payload order is pick order, not data order"
    );
}

#[test]
fn test_selection_keyed_by_id_survives_sorting() {
    let (table, _) = selectable_table();

    table.on_click(3, 2); // row a at the top, unsorted
    table.toggle_sort(1); // now apple, banana, cherry -> a is last

    assert!(table.is_row_selected("a"));
    assert_eq!(table.selected_rows().len(), 1);
    assert_eq!(table.selected_rows()[0].id(), "a");
}

#[test]
fn test_row_click_follows_display_order() {
    let (table, _) = selectable_table();
    table.toggle_sort(1); // apple (b) first

    table.on_click(3, 2);

    assert!(
        table.is_row_selected("b"),
        "click on the first display row hits the row shown there"
    );
}

#[test]
fn test_select_all_then_clear() {
    let (table, calls) = selectable_table();

    table.on_click(0, 0); // header checkbox

    assert!(table.all_selected());
    assert_eq!(
        calls.lock().unwrap().last().unwrap(),
        &vec!["a".to_string(), "b".to_string(), "c".to_string()],
        "select-all reports all rows in data order"
    );

    table.on_click(0, 0);

    assert!(!table.all_selected());
    assert!(table.selection().is_empty());
    assert_eq!(
        calls.lock().unwrap().last().unwrap().len(),
        0,
        "clearing also fires the callback"
    );
}

#[test]
fn test_select_all_completes_partial_selection() {
    let (table, _) = selectable_table();

    table.on_click(3, 3); // row b
    table.on_click(0, 0); // header checkbox

    assert!(table.all_selected(), "partial selection extends to all rows");
}

#[test]
fn test_all_selected_false_on_empty_table() {
    let table = Table::new(columns()).with_selectable(true);

    assert!(!table.all_selected());
}

#[test]
fn test_select_all_on_empty_table_reports_empty() {
    let calls: Arc<Mutex<Vec<Vec<String>>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    let table = Table::new(columns())
        .with_selectable(true)
        .on_row_select(move |rows: &[Item]| {
            sink.lock().unwrap().push(rows.iter().map(|r| r.id()).collect());
        });

    table.on_click(0, 0);

    assert_eq!(
        calls.lock().unwrap().as_slice(),
        &[Vec::<String>::new()],
        "nothing to select still reports, with an empty payload"
    );
}

#[test]
fn test_set_rows_prunes_stale_selection_without_callback() {
    let (table, calls) = selectable_table();
    table.on_click(3, 2); // select a
    table.on_click(3, 3); // select b
    let calls_before = calls.lock().unwrap().len();

    table.set_rows(vec![Item {
        id: "b",
        name: "apple",
        qty: 10,
    }]);

    assert_eq!(table.selection(), vec!["b".to_string()], "a was pruned");
    assert_eq!(
        calls.lock().unwrap().len(),
        calls_before,
        "data changes never fire the selection callback"
    );
}

#[test]
fn test_row_click_ignored_when_not_selectable() {
    let table = Table::new(columns()).with_rows(items());

    assert_eq!(table.on_click(3, 2), EventResult::Ignored);
    assert!(table.selection().is_empty());
}

#[test]
fn test_row_click_ignored_while_loading() {
    let (table, calls) = selectable_table();
    table.set_loading(true);

    assert_eq!(table.on_click(3, 2), EventResult::Ignored);
    assert!(calls.lock().unwrap().is_empty());
}

#[test]
fn test_header_stays_live_while_loading() {
    let table = Table::new(columns()).with_rows(items()).with_loading(true);

    assert_eq!(table.on_click(5, 0), EventResult::Consumed);
    assert_eq!(table.sort(), Some((1, true)));
}

#[test]
fn test_toggle_unknown_id_is_ignored() {
    let (table, calls) = selectable_table();

    assert!(!table.toggle_row_selection("nope"));

    assert!(table.selection().is_empty());
    assert!(calls.lock().unwrap().is_empty(), "no callback for unknown ids");
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_render_has_header_rule_and_rows() {
    let table = Table::new(columns()).with_rows(items());
    let lines = render_lines(&table.view(), table.total_width() as u16);

    assert_eq!(lines.len(), 5, "header + rule + three rows");
    assert!(lines[0].contains("Id"));
    assert!(lines[0].contains("Name"));
    assert!(lines[0].contains("Qty"));
    assert!(lines[1].starts_with("───"));
    assert!(lines[2].contains("cherry"));
    assert!(lines[4].contains("banana"));
}

#[test]
fn test_header_shows_sort_indicator() {
    let table = Table::new(columns()).with_rows(items());

    table.toggle_sort(1);
    let lines = render_lines(&table.view(), table.total_width() as u16);
    assert!(lines[0].contains("Name ↑"), "ascending arrow: {}", lines[0]);

    table.toggle_sort(1);
    let lines = render_lines(&table.view(), table.total_width() as u16);
    assert!(lines[0].contains("Name ↓"), "descending arrow: {}", lines[0]);
    assert!(!lines[0].contains("↑"));
}

#[test]
fn test_right_alignment_pads_on_the_left() {
    let table = Table::new(columns()).with_rows(items());
    let lines = render_lines(&table.view(), table.total_width() as u16);

    // qty column is 5 wide, right-aligned: "   30"
    assert!(lines[2].ends_with("   30"), "row line: {:?}", lines[2]);
}

#[test]
fn test_loading_renders_single_notice_row() {
    let table = Table::new(columns()).with_rows(items()).with_loading(true);
    let lines = render_lines(&table.view(), table.total_width() as u16);

    assert_eq!(lines.len(), 3, "header + rule + notice, data rows suppressed");
    assert!(lines[2].contains("Loading…"));
    assert!(!lines.iter().any(|l| l.contains("cherry")));
}

#[test]
fn test_empty_renders_no_data_notice() {
    let table = Table::new(columns());
    let lines = render_lines(&table.view(), table.total_width() as u16);

    assert_eq!(lines.len(), 3);
    assert!(lines[2].contains("No data available"));
}

#[test]
fn test_selection_indicators_in_render() {
    let (table, _) = selectable_table();
    table.on_click(3, 2); // select the first display row

    let lines = render_lines(&table.view(), table.total_width() as u16);

    assert!(lines[0].starts_with("□ "), "not all selected yet");
    assert!(lines[2].starts_with("■ "), "selected row");
    assert!(lines[3].starts_with("□ "), "unselected row");

    table.on_click(0, 0); // select all
    let lines = render_lines(&table.view(), table.total_width() as u16);
    assert!(lines[0].starts_with("■ "), "header reflects all-selected");
}

#[test]
fn test_no_indicator_column_when_not_selectable() {
    let table = Table::new(columns()).with_rows(items());
    let lines = render_lines(&table.view(), table.total_width() as u16);

    assert!(lines[0].starts_with("Id"));
    assert!(!lines[0].contains('□'));
}

#[test]
fn test_custom_renderer_output_in_cell() {
    let mut cols = columns();
    cols.push(
        Column::new("badge", "Badge", 10)
            .field("name")
            .render_with(|value, _row| Node::text(format!("<{value}>"))),
    );
    let table = Table::new(cols).with_rows(items());

    let lines = render_lines(&table.view(), table.total_width() as u16);

    assert!(
        lines[2].contains("<cherry>"),
        "renderer output placed verbatim: {:?}",
        lines[2]
    );
}

#[test]
fn test_long_values_truncate_with_ellipsis() {
    let table = Table::new(columns()).with_rows(vec![Item {
        id: "a",
        name: "a-very-long-name",
        qty: 1,
    }]);

    let lines = render_lines(&table.view(), table.total_width() as u16);

    // name column is 8 wide
    assert!(lines[2].contains("a-very-…"), "row line: {:?}", lines[2]);
}

// ============================================================================
// Dirty tracking
// ============================================================================

#[test]
fn test_interactions_mark_dirty() {
    let table = Table::new(columns()).with_rows(items());
    table.clear_dirty();

    assert!(!table.is_dirty());
    table.toggle_sort(1);
    assert!(table.is_dirty());

    table.clear_dirty();
    table.set_loading(true);
    assert!(table.is_dirty());
}
