//! Styled text input.
//!
//! The value is controlled by the host: keystrokes and the clear
//! affordance propose a new value through `on_change`, and the host
//! writes the decision back with [`Input::set_value`]. Password reveal
//! and the cursor are the widget's own presentation state.

mod events;
mod render;
mod state;

pub use events::{ChangeEvent, ChangeHandler};
pub use state::{Input, InputId, InputKind, InputSize, InputVariant};
