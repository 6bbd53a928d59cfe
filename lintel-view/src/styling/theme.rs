//! Theme system.
//!
//! Themes define named colors that styles can reference via
//! [`StyleColor::Named`]. At render time, named colors are resolved by
//! looking up the active theme.
//!
//! # Example
//!
//! ```rust,ignore
//! use lintel_view::{DefaultTheme, Style, Theme};
//!
//! let theme = DefaultTheme::light();
//! let style = Style::new().fg("text_muted").bg("surface");
//! // render_ansi resolves the names against the theme
//! ```

use std::sync::Arc;

use crate::styling::color::{Color, StyleColor};

/// Trait for theme types that can resolve named colors.
pub trait Theme: Send + Sync + 'static {
    /// Resolve a named color to its actual color value.
    ///
    /// Returns `None` if the color name is not defined in this theme.
    fn resolve(&self, name: &str) -> Option<Color>;

    /// Get all color names defined in this theme.
    fn color_names(&self) -> Vec<&'static str>;

    /// Clone this theme into a boxed trait object.
    fn clone_box(&self) -> Box<dyn Theme>;
}

impl Clone for Box<dyn Theme> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// A thread-safe reference to a theme.
pub type ThemeRef = Arc<dyn Theme>;

/// The default theme with the color roles the widgets reference.
#[derive(Debug, Clone)]
pub struct DefaultTheme {
    pub primary: Color,
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub text_muted: Color,
    pub border: Color,
    /// Background for selected table rows
    pub selection: Color,
    pub error: Color,
    pub success: Color,
    pub warning: Color,
}

impl Default for DefaultTheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl DefaultTheme {
    /// Create the default dark theme.
    pub fn dark() -> Self {
        let background = Color::oklch(0.15, 0.0, 0.0);
        Self {
            primary: Color::BLUE,
            background,
            surface: background.lighten(0.12),
            text: Color::WHITE,
            text_muted: Color::GRAY,
            border: Color::DARK_GRAY,
            selection: Color::oklch(0.35, 0.07, 260.0),
            error: Color::RED,
            success: Color::GREEN,
            warning: Color::YELLOW,
        }
    }

    /// Create a light theme variant.
    pub fn light() -> Self {
        let background = Color::WHITE;
        Self {
            primary: Color::BLUE,
            background,
            surface: background.darken(0.05),
            text: Color::BLACK,
            text_muted: Color::DARK_GRAY,
            border: Color::LIGHT_GRAY,
            selection: Color::oklch(0.93, 0.03, 250.0),
            error: Color::RED,
            success: Color::GREEN,
            warning: Color::YELLOW,
        }
    }
}

impl Theme for DefaultTheme {
    fn resolve(&self, name: &str) -> Option<Color> {
        match name {
            "primary" => Some(self.primary),
            "background" => Some(self.background),
            "surface" => Some(self.surface),
            "text" => Some(self.text),
            "text_muted" => Some(self.text_muted),
            "border" => Some(self.border),
            "selection" => Some(self.selection),
            "error" => Some(self.error),
            "success" => Some(self.success),
            "warning" => Some(self.warning),
            // Common aliases
            "fg" => Some(self.text),
            "bg" => Some(self.background),
            "muted" => Some(self.text_muted),
            "danger" => Some(self.error),
            // Basic color names
            "black" => Some(Color::BLACK),
            "red" => Some(Color::RED),
            "green" => Some(Color::GREEN),
            "yellow" => Some(Color::YELLOW),
            "blue" => Some(Color::BLUE),
            "magenta" => Some(Color::MAGENTA),
            "cyan" => Some(Color::CYAN),
            "white" => Some(Color::WHITE),
            "gray" | "grey" => Some(Color::GRAY),
            _ => None,
        }
    }

    fn color_names(&self) -> Vec<&'static str> {
        vec![
            "primary",
            "background",
            "surface",
            "text",
            "text_muted",
            "border",
            "selection",
            "error",
            "success",
            "warning",
            "fg",
            "bg",
            "muted",
            "danger",
            "black",
            "red",
            "green",
            "yellow",
            "blue",
            "magenta",
            "cyan",
            "white",
            "gray",
            "grey",
        ]
    }

    fn clone_box(&self) -> Box<dyn Theme> {
        Box::new(self.clone())
    }
}

/// Resolve a StyleColor to a concrete Color, looking up named colors in
/// the theme.
///
/// Unknown names degrade to gray with a logged warning; rendering never
/// fails over a color.
pub fn resolve_color(color: &StyleColor, theme: &dyn Theme) -> Color {
    match color {
        StyleColor::Concrete(c) => *c,
        StyleColor::Named(name) => theme.resolve(name).unwrap_or_else(|| {
            log::warn!("Unknown theme color '{}', using default", name);
            Color::GRAY
        }),
    }
}

/// Resolve a StyleColor to a concrete Color, returning None if the named
/// color is not found.
pub fn resolve_style_color(color: &StyleColor, theme: &dyn Theme) -> Option<Color> {
    match color {
        StyleColor::Concrete(c) => Some(*c),
        StyleColor::Named(name) => theme.resolve(name),
    }
}
