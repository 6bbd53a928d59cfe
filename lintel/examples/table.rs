//! Table catalog: each table preset rendered to the terminal.
//!
//! Run with `cargo run --example table`. Interactions are driven the
//! way a host event loop would drive them, with the result re-rendered
//! after each one.

use std::fs::File;

use lintel::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

#[derive(Debug, Clone)]
struct User {
    id: u32,
    name: &'static str,
    email: &'static str,
    age: u32,
    active: bool,
}

impl TableRow for User {
    fn id(&self) -> String {
        self.id.to_string()
    }

    fn field(&self, name: &str) -> CellValue {
        match name {
            "name" => self.name.into(),
            "email" => self.email.into(),
            "age" => self.age.into(),
            "active" => self.active.into(),
            _ => CellValue::Empty,
        }
    }
}

fn users() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "Alice Johnson",
            email: "alice@example.com",
            age: 34,
            active: true,
        },
        User {
            id: 2,
            name: "Bob Smith",
            email: "bob@example.com",
            age: 28,
            active: false,
        },
        User {
            id: 3,
            name: "Carol White",
            email: "carol@example.com",
            age: 45,
            active: true,
        },
        User {
            id: 4,
            name: "Dan Brown",
            email: "dan@example.com",
            age: 28,
            active: true,
        },
    ]
}

fn columns() -> Vec<Column<User>> {
    vec![
        Column::new("name", "Name", 16).sortable(),
        Column::new("email", "Email", 22),
        Column::new("age", "Age", 5).align(Alignment::Right).sortable(),
    ]
}

fn section(title: &str) {
    println!("\n# {title}\n");
}

fn show(table: &Table<User>, theme: &DefaultTheme) {
    println!("{}", render_ansi(&table.view(), table.total_width() as u16, theme));
}

fn main() {
    let log_file = File::create("catalog-table.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let theme = DefaultTheme::dark();

    section("Basic");
    let basic = Table::new(columns()).with_rows(users());
    show(&basic, &theme);

    section("Sorted by age, descending");
    let sorted = Table::new(columns()).with_rows(users());
    sorted.toggle_sort(2);
    sorted.toggle_sort(2);
    show(&sorted, &theme);

    section("Selectable");
    let selectable = Table::new(columns())
        .with_rows(users())
        .with_selectable(true)
        .on_row_select(|rows| println!("-> selection now holds {} row(s)", rows.len()));
    selectable.on_click(0, 2); // first data row
    selectable.on_click(0, 4); // third data row
    show(&selectable, &theme);

    section("Selectable, after select-all");
    selectable.on_click(0, 0); // header checkbox
    show(&selectable, &theme);

    section("Loading");
    let loading = Table::new(columns()).with_loading(true);
    show(&loading, &theme);

    section("Empty");
    let empty = Table::new(columns());
    show(&empty, &theme);

    section("Custom cell renderer");
    let mut badge_columns = columns();
    badge_columns.push(
        Column::new("active", "Status", 10).render_with(|value, _user| match value {
            CellValue::Bool(true) => Node::text_styled("● Active", Style::new().fg("success")),
            _ => Node::text_styled("○ Inactive", Style::new().fg("text_muted")),
        }),
    );
    let badges = Table::new(badge_columns).with_rows(users());
    show(&badges, &theme);
}
