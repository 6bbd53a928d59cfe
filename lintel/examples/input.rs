//! Input catalog: each input preset rendered to the terminal.
//!
//! Run with `cargo run --example input`. The clear section also walks
//! one full controlled-value round trip: the affordance proposes an
//! empty value, and the host applies it with `set_value`.

use std::fs::File;

use lintel::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

/// Wide enough for every size preset plus footer text.
const CANVAS: u16 = 40;

fn section(title: &str) {
    println!("\n# {title}\n");
}

fn show(input: &Input, theme: &DefaultTheme) {
    println!("{}", render_ansi(&input.view(), CANVAS, theme));
}

fn main() {
    let log_file = File::create("catalog-input.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let theme = DefaultTheme::dark();

    section("Default");
    show(
        &Input::new().with_label("Name").with_placeholder("Jane Doe"),
        &theme,
    );

    section("With value");
    show(
        &Input::new().with_label("Name").with_value("Ada Lovelace"),
        &theme,
    );

    section("Helper text");
    show(
        &Input::new()
            .with_label("Email")
            .with_kind(InputKind::Email)
            .with_placeholder("you@example.com")
            .with_helper_text("We never share your address"),
        &theme,
    );

    section("Error state");
    show(
        &Input::new()
            .with_label("Email")
            .with_kind(InputKind::Email)
            .with_value("not-an-email")
            .with_helper_text("We never share your address")
            .with_invalid(true)
            .with_error_message("Enter a valid email address"),
        &theme,
    );

    section("Disabled");
    show(
        &Input::new()
            .with_label("Plan")
            .with_value("Enterprise")
            .with_disabled(true),
        &theme,
    );

    section("Loading");
    show(
        &Input::new()
            .with_label("Username")
            .with_value("ada")
            .with_loading(true),
        &theme,
    );

    section("Clear button");
    let clearable = Input::new()
        .with_label("Search")
        .with_value("tables")
        .with_show_clear(true)
        .on_change(|event| println!("-> proposed value: {:?}", event.value));
    show(&clearable, &theme);

    section("Clear button, clicked and applied");
    // x 26 is the × glyph for the medium width, y 2 the content line
    // under a label and a border.
    clearable.on_click(26, 2);
    clearable.set_value("");
    show(&clearable, &theme);

    section("Password");
    let password = Input::new()
        .with_label("Password")
        .with_kind(InputKind::Password)
        .with_value("hunter2")
        .with_show_reveal(true);
    show(&password, &theme);

    section("Password, revealed");
    password.toggle_reveal();
    show(&password, &theme);

    section("Variants");
    for (name, variant) in [
        ("Filled", InputVariant::Filled),
        ("Outlined", InputVariant::Outlined),
        ("Ghost", InputVariant::Ghost),
    ] {
        println!("{name}:");
        show(
            &Input::new().with_variant(variant).with_value("The quick brown fox"),
            &theme,
        );
    }

    section("Sizes");
    for (name, size) in [
        ("Small", InputSize::Small),
        ("Medium", InputSize::Medium),
        ("Large", InputSize::Large),
    ] {
        println!("{name}:");
        show(
            &Input::new().with_size(size).with_placeholder("Type here"),
            &theme,
        );
    }
}
