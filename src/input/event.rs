/// Platform-agnostic input events.
///
/// These are fed into
/// [`RobotRenderEngine::handle_input`](crate::engine::RobotRenderEngine::handle_input),
/// which converts them into [`SceneCommand`](crate::SceneCommand) execution
/// and mouse-uniform updates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Cursor left the window surface.
    ///
    /// Treated like a release of every held button — a hold-to-shake drag
    /// that leaves the window must not keep shaking forever.
    CursorLeft,
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button — drives the mouse uniform.
    Left,
    /// Secondary (right) mouse button — the hold-to-shake trigger.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Left,
        }
    }
}
