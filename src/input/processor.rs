//! Converts raw viewport events into viewer commands.
//!
//! The `InputProcessor` owns all transient input state (cursor tracking,
//! drag detection, viewport size) and the key-binding map. It is the only
//! thing that sits between raw window events and the session's
//! [`execute`](crate::session::ViewerSession::execute) method.

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use crate::camera::core::pixel_to_ndc;
use crate::options::KeybindingOptions;
use crate::session::ViewerCommand;

/// Cursor travel (pixels) past which a press becomes a drag, not a click.
const DRAG_THRESHOLD: f32 = 4.0;

/// Converts raw viewport events into [`ViewerCommand`]s.
///
/// # Usage
///
/// ```ignore
/// if let Some(cmd) = input_processor.handle_event(event) {
///     session.execute(cmd)?;
/// }
///
/// if let Some(cmd) = input_processor.handle_key_press("Digit2") {
///     session.execute(cmd)?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct InputProcessor {
    cursor: Vec2,
    /// Cursor position at left-button press, while held.
    press_origin: Option<Vec2>,
    dragging: bool,
    viewport: Vec2,
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a processor for a viewport of the given pixel size.
    #[must_use]
    pub fn new(width: u32, height: u32, key_bindings: KeybindingOptions) -> Self {
        Self {
            cursor: Vec2::ZERO,
            press_origin: None,
            dragging: false,
            viewport: Vec2::new(width as f32, height as f32),
            key_bindings,
        }
    }

    /// Current cursor position in pixels.
    #[must_use]
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Whether the primary button is held.
    #[must_use]
    pub fn mouse_pressed(&self) -> bool {
        self.press_origin.is_some()
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<ViewerCommand> {
        self.key_bindings.lookup(key).map(|action| action.to_command())
    }

    /// A view button was activated. Button ids are view names.
    #[must_use]
    pub fn handle_view_button(&self, id: &str) -> ViewerCommand {
        ViewerCommand::GoToView { name: id.to_owned() }
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<ViewerCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                Some(self.handle_cursor_moved(Vec2::new(x, y)))
            }
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed)
            }
            InputEvent::Scroll { delta } => Some(ViewerCommand::Zoom { delta }),
            InputEvent::Resized { width, height } => {
                self.viewport = Vec2::new(width as f32, height as f32);
                Some(ViewerCommand::Resize { width, height })
            }
        }
    }

    fn ndc(&self) -> Vec2 {
        pixel_to_ndc(self.cursor, self.viewport)
    }

    /// Dragging orbits the camera; free movement hovers.
    fn handle_cursor_moved(&mut self, pos: Vec2) -> ViewerCommand {
        let delta = pos - self.cursor;
        self.cursor = pos;

        match self.press_origin {
            Some(origin) => {
                if pos.distance(origin) > DRAG_THRESHOLD {
                    self.dragging = true;
                }
                ViewerCommand::RotateCamera { delta }
            }
            None => ViewerCommand::HoverAt { ndc: self.ndc() },
        }
    }

    /// A left press-release without a drag between is a click.
    fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
    ) -> Option<ViewerCommand> {
        if button != MouseButton::Left {
            return None;
        }

        if pressed {
            self.press_origin = Some(self.cursor);
            self.dragging = false;
            return None;
        }

        let was_pressed = self.press_origin.take().is_some();
        let was_dragging = std::mem::take(&mut self.dragging);
        (was_pressed && !was_dragging)
            .then(|| ViewerCommand::ClickAt { ndc: self.ndc() })
    }
}
