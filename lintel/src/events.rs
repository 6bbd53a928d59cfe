//! Component event handling types.
//!
//! Each component handles its own events and reports whether it consumed
//! them, keeping whatever host event loop sits above this crate a thin
//! dispatcher.

use thiserror::Error;

/// Result of handling an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

/// Trait for components that can handle events.
///
/// All methods have default implementations that return
/// `EventResult::Ignored`, so components only implement the events they
/// care about.
pub trait ComponentEvents {
    /// Handle a click at the given position, in coordinates relative to
    /// the component's rendered output.
    fn on_click(&self, _x: u16, _y: u16) -> EventResult {
        EventResult::Ignored
    }

    /// Handle a key event while this component is focused.
    fn on_key(&self, _key: &KeyCombo) -> EventResult {
        EventResult::Ignored
    }
}

/// Key modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
    };

    /// True when no modifier is held.
    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

/// Simplified key representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    F(u8),
    Enter,
    Escape,
    Backspace,
    Tab,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Delete,
}

/// A key combination (key + modifiers).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    /// The key code
    pub key: Key,
    /// Modifier keys
    pub modifiers: Modifiers,
}

impl KeyCombo {
    /// Create a new key combo.
    pub const fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Create a key combo without modifiers.
    pub const fn key(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    /// Create an unmodified character combo.
    pub const fn char(c: char) -> Self {
        Self::key(Key::Char(c))
    }

    /// Add ctrl modifier.
    pub const fn ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    /// Add shift modifier.
    pub const fn shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }

    /// Add alt modifier.
    pub const fn alt(mut self) -> Self {
        self.modifiers.alt = true;
        self
    }

    /// Parse a combo from a keybind string like `"ctrl+k"`, `"left"`, or
    /// `"ctrl+shift+end"`. Case-insensitive; the last segment is the key,
    /// everything before it a modifier.
    pub fn parse(s: &str) -> Result<Self, KeyParseError> {
        let mut modifiers = Modifiers::NONE;
        let mut key = None;

        for part in s.split('+') {
            let part = part.trim().to_ascii_lowercase();
            if part.is_empty() {
                continue;
            }
            match part.as_str() {
                "ctrl" | "control" => modifiers.ctrl = true,
                "alt" => modifiers.alt = true,
                "shift" => modifiers.shift = true,
                other => {
                    if key.is_some() {
                        return Err(KeyParseError::TrailingKey(other.to_string()));
                    }
                    key = Some(parse_key(other)?);
                }
            }
        }

        match key {
            Some(key) => Ok(Self { key, modifiers }),
            None => Err(KeyParseError::Empty),
        }
    }
}

fn parse_key(s: &str) -> Result<Key, KeyParseError> {
    let key = match s {
        "enter" | "return" => Key::Enter,
        "esc" | "escape" => Key::Escape,
        "backspace" => Key::Backspace,
        "tab" => Key::Tab,
        "space" => Key::Char(' '),
        "up" => Key::Up,
        "down" => Key::Down,
        "left" => Key::Left,
        "right" => Key::Right,
        "home" => Key::Home,
        "end" => Key::End,
        "pageup" => Key::PageUp,
        "pagedown" => Key::PageDown,
        "delete" | "del" => Key::Delete,
        _ => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Key::Char(c),
                _ => {
                    if let Some(n) = s.strip_prefix('f').and_then(|n| n.parse::<u8>().ok())
                        && (1..=12).contains(&n)
                    {
                        Key::F(n)
                    } else {
                        return Err(KeyParseError::UnknownKey(s.to_string()));
                    }
                }
            }
        }
    };
    Ok(key)
}

/// Errors from parsing keybind strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyParseError {
    #[error("empty key combo")]
    Empty,
    #[error("unknown key '{0}'")]
    UnknownKey(String),
    #[error("unexpected segment '{0}' after the key")]
    TrailingKey(String),
}

// Conversion from crossterm types
impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::F(n) => Key::F(n),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Tab => Key::Tab,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::Delete => Key::Delete,
            _ => Key::Char('\0'), // Placeholder for unsupported keys
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::KeyEvent> for KeyCombo {
    fn from(event: crossterm::event::KeyEvent) -> Self {
        Self {
            key: event.code.into(),
            modifiers: event.modifiers.into(),
        }
    }
}
