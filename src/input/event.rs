/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`ViewerCommand`](crate::session::ViewerCommand)
/// values.
///
/// # Example
///
/// ```ignore
/// if let Some(cmd) = input_processor.handle_event(
///     InputEvent::CursorMoved { x: 100.0, y: 200.0 },
/// ) {
///     session.execute(cmd)?;
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute viewport position.
    CursorMoved {
        /// Horizontal position in pixels from the left edge.
        x: f32,
        /// Vertical position in pixels from the top edge.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel (positive = zoom in).
    Scroll {
        /// Scroll amount (positive = zoom in, negative = zoom out).
        delta: f32,
    },
    /// The viewport changed size.
    Resized {
        /// New width in pixels.
        width: u32,
        /// New height in pixels.
        height: u32,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

impl MouseButton {
    /// Map a DOM `MouseEvent.button` code.
    #[must_use]
    pub fn from_dom(code: i16) -> Self {
        match code {
            1 => Self::Middle,
            2 => Self::Right,
            _ => Self::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_button_codes() {
        assert_eq!(MouseButton::from_dom(0), MouseButton::Left);
        assert_eq!(MouseButton::from_dom(1), MouseButton::Middle);
        assert_eq!(MouseButton::from_dom(2), MouseButton::Right);
        // Back/forward and anything unknown act as primary.
        assert_eq!(MouseButton::from_dom(3), MouseButton::Left);
        assert_eq!(MouseButton::from_dom(-1), MouseButton::Left);
    }
}
