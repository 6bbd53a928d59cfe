//! Event handling for the Input widget.

use std::sync::Arc;

use lintel_view::render::char_width;

use crate::events::{ComponentEvents, EventResult, Key, KeyCombo};

use super::render::{Affordance, affordance_at, content_inset, content_y};
use super::state::Input;

/// Payload of a proposed value change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    /// The value the input would hold after the edit.
    pub value: String,
}

/// Handler invoked with every proposed value.
pub type ChangeHandler = Arc<dyn Fn(&ChangeEvent) + Send + Sync>;

impl ComponentEvents for Input {
    fn on_key(&self, key: &KeyCombo) -> EventResult {
        if !self.interactive() {
            return EventResult::Ignored;
        }
        // Only handle keys without modifiers (except Shift)
        if key.modifiers.ctrl || key.modifiers.alt {
            return EventResult::Ignored;
        }

        match key.key {
            Key::Char(c) => {
                self.insert_char(c);
                EventResult::Consumed
            }
            Key::Backspace => {
                self.delete_char_before();
                EventResult::Consumed
            }
            Key::Delete => {
                self.delete_char_at();
                EventResult::Consumed
            }
            Key::Left => {
                self.cursor_left();
                EventResult::Consumed
            }
            Key::Right => {
                self.cursor_right();
                EventResult::Consumed
            }
            Key::Home => {
                self.cursor_home();
                EventResult::Consumed
            }
            Key::End => {
                self.cursor_end();
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    /// Clicks are widget-relative and only the content line reacts.
    /// Affordances act even on a disabled input (loading hides them);
    /// anywhere else in an interactive field places the cursor.
    fn on_click(&self, x: u16, y: u16) -> EventResult {
        enum Action {
            Clear,
            Reveal,
            Cursor(usize),
        }

        let action = {
            let Ok(guard) = self.inner.read() else {
                return EventResult::Ignored;
            };
            if guard.loading || y != content_y(&guard) {
                return EventResult::Ignored;
            }
            match affordance_at(&guard, x) {
                Some(Affordance::Clear) => Action::Clear,
                Some(Affordance::Reveal) => Action::Reveal,
                None if guard.disabled => return EventResult::Ignored,
                None => {
                    let column = x.saturating_sub(content_inset(guard.variant)) as usize;
                    let masked = guard.display_kind.masked();
                    Action::Cursor(cursor_byte_at(&guard.value, masked, column))
                }
            }
        };

        match action {
            Action::Clear => self.clear(),
            Action::Reveal => self.toggle_reveal(),
            Action::Cursor(position) => self.set_cursor(position),
        }
        EventResult::Consumed
    }
}

/// Byte offset of the character at a display column, or the end of the
/// value past the last character. Masked characters are all one cell.
fn cursor_byte_at(value: &str, masked: bool, column: usize) -> usize {
    if masked {
        return value
            .char_indices()
            .nth(column)
            .map(|(i, _)| i)
            .unwrap_or(value.len());
    }
    let mut used = 0;
    for (i, c) in value.char_indices() {
        if used >= column {
            return i;
        }
        used += char_width(c);
    }
    value.len()
}
