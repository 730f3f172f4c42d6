//! Camera system: the perspective camera, orbit controls, preset views, and
//! eased view transitions.

/// Core camera struct, projection, and screen-to-ray unprojection.
pub mod core;
/// Orbit controls with damping, limits, and auto-rotation.
pub mod orbit;
/// Named literal camera views.
pub mod presets;
/// Eased, supersedable camera-view transitions.
pub mod transition;

use glam::Vec3;

pub use self::core::{Camera, Ray};
pub use orbit::OrbitControls;
pub use presets::{ViewPreset, ViewPresets};
pub use transition::{
    CameraTransition, TransitionOptions, TransitionStep,
    ViewTransitionController,
};

/// Mutation interface onto a camera owned by the rendering environment.
///
/// Transitions never keep their own copy of the camera pose; every frame
/// they read the live position and issue writes through this trait.
pub trait CameraRig {
    /// Current eye position.
    fn position(&self) -> Vec3;
    /// Move the eye.
    fn set_position(&mut self, position: Vec3);
    /// Orient the camera toward `target` from its current position.
    fn look_at(&mut self, target: Vec3);
    /// Move the orbit pivot used by drag controls.
    fn set_orbit_target(&mut self, target: Vec3);
    /// Enable or disable ambient turntable rotation.
    fn set_auto_rotate(&mut self, enabled: bool);
    /// Whether ambient turntable rotation is enabled.
    fn auto_rotate(&self) -> bool;
}
