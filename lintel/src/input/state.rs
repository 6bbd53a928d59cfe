//! Input widget state.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use super::events::{ChangeEvent, ChangeHandler};

/// Unique identifier for an Input widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputId(usize);

impl InputId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for InputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__input_{}", self.0)
    }
}

/// Visual treatment of the input field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputVariant {
    /// Solid background, no border.
    Filled,
    /// Bordered box.
    #[default]
    Outlined,
    /// Bare text, no box at all.
    Ghost,
}

/// Field width presets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl InputSize {
    /// Total field width in cells, border included.
    pub const fn width(self) -> u16 {
        match self {
            InputSize::Small => 20,
            InputSize::Medium => 28,
            InputSize::Large => 36,
        }
    }
}

/// Semantic kind of the input.
///
/// Only `Password` affects presentation (masking); the other kinds are
/// carried for the host to act on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputKind {
    #[default]
    Text,
    Password,
    Email,
    Number,
}

impl InputKind {
    /// Whether values of this kind render masked.
    pub const fn masked(self) -> bool {
        matches!(self, InputKind::Password)
    }
}

/// Internal state for an Input widget.
pub(super) struct InputInner {
    /// Current text value. Owned by the host; key edits propose a new
    /// value through `on_change` instead of writing here.
    pub value: String,
    /// Label shown above the field.
    pub label: Option<String>,
    /// Placeholder text shown while the value is empty.
    pub placeholder: String,
    /// Helper line under the field, hidden while invalid.
    pub helper_text: Option<String>,
    /// Error line under the field, shown while invalid.
    pub error_message: Option<String>,
    /// Whether the input accepts interaction.
    pub disabled: bool,
    /// Validation state; switches the footer and the outline color.
    pub invalid: bool,
    /// Loading state; suppresses interaction and the affordances.
    pub loading: bool,
    /// Visual treatment.
    pub variant: InputVariant,
    /// Width preset.
    pub size: InputSize,
    /// Semantic kind, as configured.
    pub kind: InputKind,
    /// Kind currently presented. Differs from `kind` only while a
    /// password is revealed.
    pub display_kind: InputKind,
    /// Whether the clear affordance is offered.
    pub show_clear: bool,
    /// Whether the reveal affordance is offered.
    pub show_reveal: bool,
    /// Cursor position (byte offset).
    pub cursor: usize,
    /// Change callback.
    pub on_change: Option<ChangeHandler>,
}

impl Default for InputInner {
    fn default() -> Self {
        Self {
            value: String::new(),
            label: None,
            placeholder: String::new(),
            helper_text: None,
            error_message: None,
            disabled: false,
            invalid: false,
            loading: false,
            variant: InputVariant::default(),
            size: InputSize::default(),
            kind: InputKind::default(),
            display_kind: InputKind::default(),
            show_clear: false,
            show_reveal: false,
            cursor: 0,
            on_change: None,
        }
    }
}

/// A styled text input.
///
/// The value is controlled: the host owns it, and every edit (a
/// keystroke or the clear affordance) is proposed through `on_change`
/// rather than applied locally. The widget keeps only presentation
/// state of its own: the cursor and, for passwords, whether the value
/// is currently revealed.
///
/// # Example
///
/// ```ignore
/// let email = Input::new()
///     .with_label("Email")
///     .with_kind(InputKind::Email)
///     .with_placeholder("you@example.com")
///     .on_change(|event| log::debug!("proposed: {}", event.value));
/// ```
pub struct Input {
    /// Unique identifier.
    id: InputId,
    /// Internal state.
    pub(super) inner: Arc<RwLock<InputInner>>,
    /// Dirty flag for re-render.
    dirty: Arc<AtomicBool>,
}

impl Input {
    /// Create a new empty input.
    pub fn new() -> Self {
        Self {
            id: InputId::new(),
            inner: Arc::new(RwLock::new(InputInner::default())),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get the unique ID.
    pub fn id(&self) -> InputId {
        self.id
    }

    /// Get the ID as a string.
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Builders
    // -------------------------------------------------------------------------

    /// Set the initial value; the cursor lands at its end.
    pub fn with_value(self, value: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.value = value.into();
            guard.cursor = guard.value.len();
            self.dirty.store(true, Ordering::SeqCst);
        }
        self
    }

    /// Set the label shown above the field.
    pub fn with_label(self, label: impl Into<String>) -> Self {
        self.set_label(label);
        self
    }

    /// Set the placeholder text.
    pub fn with_placeholder(self, placeholder: impl Into<String>) -> Self {
        self.set_placeholder(placeholder);
        self
    }

    /// Set the helper line shown under the field while valid.
    pub fn with_helper_text(self, helper: impl Into<String>) -> Self {
        self.set_helper_text(helper);
        self
    }

    /// Set the error line shown under the field while invalid.
    pub fn with_error_message(self, message: impl Into<String>) -> Self {
        self.set_error_message(message);
        self
    }

    /// Set the disabled state (builder form).
    pub fn with_disabled(self, disabled: bool) -> Self {
        self.set_disabled(disabled);
        self
    }

    /// Set the validation state (builder form).
    pub fn with_invalid(self, invalid: bool) -> Self {
        self.set_invalid(invalid);
        self
    }

    /// Set the loading state (builder form).
    pub fn with_loading(self, loading: bool) -> Self {
        self.set_loading(loading);
        self
    }

    /// Set the visual variant (builder form).
    pub fn with_variant(self, variant: InputVariant) -> Self {
        self.set_variant(variant);
        self
    }

    /// Set the width preset (builder form).
    pub fn with_size(self, size: InputSize) -> Self {
        self.set_size(size);
        self
    }

    /// Set the semantic kind (builder form).
    pub fn with_kind(self, kind: InputKind) -> Self {
        self.set_kind(kind);
        self
    }

    /// Offer the clear affordance (builder form).
    pub fn with_show_clear(self, show: bool) -> Self {
        self.set_show_clear(show);
        self
    }

    /// Offer the reveal affordance (builder form).
    pub fn with_show_reveal(self, show: bool) -> Self {
        self.set_show_reveal(show);
        self
    }

    /// Register the change handler.
    ///
    /// Receives every proposed value. The input never applies proposals
    /// itself; the host decides and writes back with [`Input::set_value`].
    pub fn on_change<F>(self, handler: F) -> Self
    where
        F: Fn(&ChangeEvent) + Send + Sync + 'static,
    {
        if let Ok(mut guard) = self.inner.write() {
            guard.on_change = Some(Arc::new(handler));
        }
        self
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Get the current text value.
    pub fn value(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.value.clone())
            .unwrap_or_default()
    }

    /// Check if the value is empty.
    pub fn is_empty(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.value.is_empty())
            .unwrap_or(true)
    }

    /// Get the length of the current value in bytes.
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .map(|guard| guard.value.len())
            .unwrap_or(0)
    }

    /// Get the label.
    pub fn label(&self) -> Option<String> {
        self.inner
            .read()
            .map(|guard| guard.label.clone())
            .unwrap_or(None)
    }

    /// Get the placeholder text.
    pub fn placeholder(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.placeholder.clone())
            .unwrap_or_default()
    }

    /// Get the helper text.
    pub fn helper_text(&self) -> Option<String> {
        self.inner
            .read()
            .map(|guard| guard.helper_text.clone())
            .unwrap_or(None)
    }

    /// Get the error message.
    pub fn error_message(&self) -> Option<String> {
        self.inner
            .read()
            .map(|guard| guard.error_message.clone())
            .unwrap_or(None)
    }

    /// Whether the input is disabled.
    pub fn disabled(&self) -> bool {
        self.inner.read().map(|guard| guard.disabled).unwrap_or(false)
    }

    /// Whether the input is marked invalid.
    pub fn invalid(&self) -> bool {
        self.inner.read().map(|guard| guard.invalid).unwrap_or(false)
    }

    /// Whether the input is loading.
    pub fn loading(&self) -> bool {
        self.inner.read().map(|guard| guard.loading).unwrap_or(false)
    }

    /// Get the visual variant.
    pub fn variant(&self) -> InputVariant {
        self.inner
            .read()
            .map(|guard| guard.variant)
            .unwrap_or_default()
    }

    /// Get the width preset.
    pub fn size(&self) -> InputSize {
        self.inner.read().map(|guard| guard.size).unwrap_or_default()
    }

    /// Total field width in cells for the current size.
    pub fn field_width(&self) -> u16 {
        self.size().width()
    }

    /// Get the semantic kind, as configured.
    pub fn kind(&self) -> InputKind {
        self.inner.read().map(|guard| guard.kind).unwrap_or_default()
    }

    /// Get the kind currently presented. Differs from [`Input::kind`]
    /// only while a password is revealed.
    pub fn display_kind(&self) -> InputKind {
        self.inner
            .read()
            .map(|guard| guard.display_kind)
            .unwrap_or_default()
    }

    /// Whether the clear affordance is offered.
    pub fn show_clear(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.show_clear)
            .unwrap_or(false)
    }

    /// Whether the reveal affordance is offered.
    pub fn show_reveal(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.show_reveal)
            .unwrap_or(false)
    }

    /// Get the cursor position (byte offset).
    pub fn cursor(&self) -> usize {
        self.inner.read().map(|guard| guard.cursor).unwrap_or(0)
    }

    /// Whether the input reacts to keys and clicks at all.
    pub fn interactive(&self) -> bool {
        self.inner
            .read()
            .map(|guard| !guard.disabled && !guard.loading)
            .unwrap_or(false)
    }

    /// Whether the clear affordance is currently shown: offered, with
    /// something to clear, and not loading.
    pub fn clear_visible(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.show_clear && !guard.value.is_empty() && !guard.loading)
            .unwrap_or(false)
    }

    /// Whether the reveal affordance is currently shown: offered, on a
    /// password input, and not loading.
    pub fn reveal_visible(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.show_reveal && guard.kind == InputKind::Password && !guard.loading)
            .unwrap_or(false)
    }

    /// Whether the helper line is shown. Invalid state replaces it with
    /// the error line.
    pub fn helper_visible(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.helper_text.is_some() && !guard.invalid)
            .unwrap_or(false)
    }

    /// Whether the error line is shown.
    pub fn error_visible(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.invalid && guard.error_message.is_some())
            .unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Apply a value. This is the host's write-back half of the
    /// controlled loop; the cursor is clamped, not moved.
    pub fn set_value(&self, value: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value = value.into();
            guard.cursor = guard.cursor.min(guard.value.len());
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Set the label.
    pub fn set_label(&self, label: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.label = Some(label.into());
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Set the placeholder text.
    pub fn set_placeholder(&self, placeholder: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.placeholder = placeholder.into();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Set the helper text.
    pub fn set_helper_text(&self, helper: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.helper_text = Some(helper.into());
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Set the error message.
    pub fn set_error_message(&self, message: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.error_message = Some(message.into());
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Set the disabled state.
    pub fn set_disabled(&self, disabled: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.disabled = disabled;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Set the validation state.
    pub fn set_invalid(&self, invalid: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.invalid = invalid;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Set the loading state.
    pub fn set_loading(&self, loading: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.loading = loading;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Set the visual variant.
    pub fn set_variant(&self, variant: InputVariant) {
        if let Ok(mut guard) = self.inner.write() {
            guard.variant = variant;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Set the width preset.
    pub fn set_size(&self, size: InputSize) {
        if let Ok(mut guard) = self.inner.write() {
            guard.size = size;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Set the semantic kind. Resets any active reveal.
    pub fn set_kind(&self, kind: InputKind) {
        if let Ok(mut guard) = self.inner.write() {
            guard.kind = kind;
            guard.display_kind = kind;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Offer or withdraw the clear affordance.
    pub fn set_show_clear(&self, show: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.show_clear = show;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Offer or withdraw the reveal affordance.
    pub fn set_show_reveal(&self, show: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.show_reveal = show;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Set the cursor position, clamped to the value length.
    pub fn set_cursor(&self, position: usize) {
        if let Ok(mut guard) = self.inner.write() {
            guard.cursor = position.min(guard.value.len());
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Edits (proposed through on_change, value untouched)
    // -------------------------------------------------------------------------

    /// Propose inserting a character at the cursor.
    pub fn insert_char(&self, c: char) {
        let notify = {
            let Ok(mut guard) = self.inner.write() else {
                return;
            };
            let cursor = guard.cursor.min(guard.value.len());
            let mut proposed = guard.value.clone();
            proposed.insert(cursor, c);
            guard.cursor = cursor + c.len_utf8();
            self.dirty.store(true, Ordering::SeqCst);
            Self::change_notification(&guard, proposed)
        };
        Self::notify(notify);
    }

    /// Propose deleting the character before the cursor (backspace).
    pub fn delete_char_before(&self) {
        let notify = {
            let Ok(mut guard) = self.inner.write() else {
                return;
            };
            if guard.cursor == 0 {
                return;
            }
            // Find the previous character boundary
            let prev_cursor = guard.value[..guard.cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            let mut proposed = guard.value.clone();
            proposed.remove(prev_cursor);
            guard.cursor = prev_cursor;
            self.dirty.store(true, Ordering::SeqCst);
            Self::change_notification(&guard, proposed)
        };
        Self::notify(notify);
    }

    /// Propose deleting the character at the cursor (delete key).
    pub fn delete_char_at(&self) {
        let notify = {
            let Ok(mut guard) = self.inner.write() else {
                return;
            };
            if guard.cursor >= guard.value.len() {
                return;
            }
            let mut proposed = guard.value.clone();
            proposed.remove(guard.cursor);
            self.dirty.store(true, Ordering::SeqCst);
            Self::change_notification(&guard, proposed)
        };
        Self::notify(notify);
    }

    /// Propose clearing the value.
    ///
    /// Fires only while the clear affordance is shown; with nothing to
    /// clear, or while loading, this is a no-op.
    pub fn clear(&self) {
        let notify = {
            let Ok(mut guard) = self.inner.write() else {
                return;
            };
            if !guard.show_clear || guard.value.is_empty() || guard.loading {
                return;
            }
            guard.cursor = 0;
            self.dirty.store(true, Ordering::SeqCst);
            log::debug!("{}: clear", self.id);
            Self::change_notification(&guard, String::new())
        };
        Self::notify(notify);
    }

    /// Toggle password reveal. Purely presentational; the value is
    /// never touched.
    pub fn toggle_reveal(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.show_reveal
            && guard.kind == InputKind::Password
            && !guard.loading
        {
            guard.display_kind = if guard.display_kind.masked() {
                InputKind::Text
            } else {
                InputKind::Password
            };
            self.dirty.store(true, Ordering::SeqCst);
            log::debug!(
                "{}: password {}",
                self.id,
                if guard.display_kind.masked() { "hidden" } else { "revealed" }
            );
        }
    }

    // -------------------------------------------------------------------------
    // Cursor movement
    // -------------------------------------------------------------------------

    /// Move cursor left.
    pub fn cursor_left(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.cursor > 0
        {
            guard.cursor = guard.value[..guard.cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Move cursor right.
    pub fn cursor_right(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.cursor < guard.value.len()
        {
            guard.cursor = guard.value[guard.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| guard.cursor + i)
                .unwrap_or(guard.value.len());
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Move cursor to start.
    pub fn cursor_home(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.cursor != 0
        {
            guard.cursor = 0;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Move cursor to end.
    pub fn cursor_end(&self) {
        if let Ok(mut guard) = self.inner.write() {
            let end = guard.value.len();
            if guard.cursor != end {
                guard.cursor = end;
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the input needs re-rendering.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag (called after rendering).
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    /// Capture handler and payload under the lock; the call happens
    /// outside it so user code never runs while the state is held.
    fn change_notification(
        guard: &InputInner,
        value: String,
    ) -> Option<(ChangeHandler, ChangeEvent)> {
        guard
            .on_change
            .clone()
            .map(|handler| (handler, ChangeEvent { value }))
    }

    fn notify(notification: Option<(ChangeHandler, ChangeEvent)>) {
        if let Some((handler, event)) = notification {
            handler(&event);
        }
    }
}

impl Clone for Input {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Input")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}
