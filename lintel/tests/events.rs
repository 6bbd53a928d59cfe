use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use lintel::events::KeyParseError;
use lintel::prelude::*;

// ============================================================================
// Keybind parsing
// ============================================================================

#[test]
fn test_parse_plain_key() {
    assert_eq!(KeyCombo::parse("left").unwrap(), KeyCombo::key(Key::Left));
    assert_eq!(KeyCombo::parse("enter").unwrap(), KeyCombo::key(Key::Enter));
    assert_eq!(KeyCombo::parse("a").unwrap(), KeyCombo::char('a'));
    assert_eq!(KeyCombo::parse("space").unwrap(), KeyCombo::char(' '));
}

#[test]
fn test_parse_with_modifiers() {
    assert_eq!(KeyCombo::parse("ctrl+k").unwrap(), KeyCombo::char('k').ctrl());
    assert_eq!(
        KeyCombo::parse("ctrl+shift+end").unwrap(),
        KeyCombo::key(Key::End).ctrl().shift()
    );
    assert_eq!(KeyCombo::parse("alt+f4").unwrap(), KeyCombo::key(Key::F(4)).alt());
}

#[test]
fn test_parse_is_case_insensitive() {
    assert_eq!(KeyCombo::parse("Ctrl+K").unwrap(), KeyCombo::char('k').ctrl());
    assert_eq!(KeyCombo::parse("PAGEUP").unwrap(), KeyCombo::key(Key::PageUp));
}

#[test]
fn test_parse_key_aliases() {
    assert_eq!(KeyCombo::parse("return").unwrap(), KeyCombo::key(Key::Enter));
    assert_eq!(KeyCombo::parse("esc").unwrap(), KeyCombo::key(Key::Escape));
    assert_eq!(KeyCombo::parse("del").unwrap(), KeyCombo::key(Key::Delete));
    assert_eq!(KeyCombo::parse("control+c").unwrap(), KeyCombo::char('c').ctrl());
}

#[test]
fn test_parse_function_keys() {
    assert_eq!(KeyCombo::parse("f1").unwrap(), KeyCombo::key(Key::F(1)));
    assert_eq!(KeyCombo::parse("f12").unwrap(), KeyCombo::key(Key::F(12)));
    assert_eq!(
        KeyCombo::parse("f13"),
        Err(KeyParseError::UnknownKey("f13".to_string()))
    );
}

#[test]
fn test_parse_rejects_empty() {
    assert_eq!(KeyCombo::parse(""), Err(KeyParseError::Empty));
    assert_eq!(KeyCombo::parse("ctrl+"), Err(KeyParseError::Empty));
}

#[test]
fn test_parse_rejects_two_keys() {
    assert_eq!(
        KeyCombo::parse("a+b"),
        Err(KeyParseError::TrailingKey("b".to_string()))
    );
}

#[test]
fn test_parse_error_messages() {
    assert_eq!(
        KeyParseError::UnknownKey("f99".to_string()).to_string(),
        "unknown key 'f99'"
    );
    assert_eq!(KeyParseError::Empty.to_string(), "empty key combo");
}

// ============================================================================
// Event results
// ============================================================================

#[test]
fn test_event_result_is_handled() {
    assert!(EventResult::Consumed.is_handled());
    assert!(!EventResult::Ignored.is_handled());
}

#[test]
fn test_modifiers_none() {
    assert!(Modifiers::NONE.none());
    assert!(!KeyCombo::char('x').ctrl().modifiers.none());
}

// ============================================================================
// Crossterm conversion
// ============================================================================

#[test]
fn test_key_event_conversion() {
    let event = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
    let combo: KeyCombo = event.into();

    assert_eq!(combo, KeyCombo::char('s').ctrl());
}

#[test]
fn test_key_code_conversion() {
    assert_eq!(Key::from(KeyCode::Enter), Key::Enter);
    assert_eq!(Key::from(KeyCode::F(7)), Key::F(7));
    assert_eq!(Key::from(KeyCode::PageDown), Key::PageDown);
}

#[test]
fn test_shift_modifier_conversion() {
    let event = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
    let combo: KeyCombo = event.into();

    assert!(combo.modifiers.shift);
    assert_eq!(combo.key, Key::Char('A'));
}
