//! Input handling: platform-agnostic event types and key-bound actions.

/// Platform-agnostic input events.
pub mod event;
/// Key-bindable engine actions.
pub mod keyboard;

pub use event::{InputEvent, MouseButton};
pub use keyboard::KeyAction;
