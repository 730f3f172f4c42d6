//! The session's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a key press, mouse
//! gesture, view button, or programmatic call, is represented as a
//! `ViewerCommand`. Consumers construct commands and pass them to
//! [`ViewerSession::execute`](super::ViewerSession::execute).

use glam::{Vec2, Vec3};

/// A discrete action the session can perform.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerCommand {
    // ── Camera ──
    /// Fly to a named preset view.
    GoToView {
        /// Preset name, e.g. `"topView"`.
        name: String,
    },
    /// Fly to an arbitrary pose using the default transition options.
    GoTo {
        /// Camera destination.
        position: Vec3,
        /// Look-at target.
        target: Vec3,
    },
    /// Fly back to the starting pose and resume auto-rotation.
    ReturnToDefault,
    /// Toggle turntable auto-rotation.
    ToggleAutoRotate,
    /// Orbit by a pixel delta.
    RotateCamera {
        /// Cursor movement in pixels.
        delta: Vec2,
    },
    /// Zoom (positive = in).
    Zoom {
        /// Scroll amount.
        delta: f32,
    },

    // ── Hotspots ──
    /// Pointer moved to a viewport position.
    HoverAt {
        /// Pointer in normalized device coordinates.
        ndc: Vec2,
    },
    /// Pointer clicked at a viewport position.
    ClickAt {
        /// Pointer in normalized device coordinates.
        ndc: Vec2,
    },
    /// Close the info panel.
    ClosePanel,

    // ── Viewport ──
    /// The viewport changed size.
    Resize {
        /// New width in pixels.
        width: u32,
        /// New height in pixels.
        height: u32,
    },
}
