use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};

use super::core::Camera;
use super::CameraRig;
use crate::options::ControlOptions;

/// Polar-angle margin that keeps the camera off the poles.
const POLE_EPSILON: f32 = 1e-6;

/// Deltas below this are treated as settled when damping decays them.
const SETTLE_EPSILON: f32 = 1e-6;

/// Orbit-style camera controls: spherical rotation about a target point,
/// dolly zoom, optional damping, and turntable auto-rotation.
///
/// Distance and polar limits are enforced whenever the controls move the
/// camera. A frame with no pending user input and auto-rotation off leaves
/// the camera untouched, so a pose set by a programmatic transition stays
/// exactly where it landed until the user interacts again.
#[derive(Debug, Clone)]
pub struct OrbitControls {
    /// Camera driven by these controls.
    pub camera: Camera,
    target: Vec3,
    options: ControlOptions,

    delta_theta: f32,
    delta_phi: f32,
    scale: f32,
    auto_rotate: bool,
}

impl OrbitControls {
    /// Controls orbiting `camera.target`.
    #[must_use]
    pub fn new(camera: Camera, options: ControlOptions) -> Self {
        Self {
            target: camera.target,
            auto_rotate: options.auto_rotate,
            camera,
            options,
            delta_theta: 0.0,
            delta_phi: 0.0,
            scale: 1.0,
        }
    }

    /// Current orbit pivot.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Control parameters.
    #[must_use]
    pub fn options(&self) -> &ControlOptions {
        &self.options
    }

    /// Queue a drag rotation of `delta` pixels.
    pub fn rotate(&mut self, delta: Vec2) {
        self.delta_theta -= delta.x * self.options.rotate_speed;
        self.delta_phi -= delta.y * self.options.rotate_speed;
    }

    /// Queue a zoom step (positive = zoom in, negative = zoom out).
    pub fn zoom(&mut self, delta: f32) {
        self.scale *= (1.0 - delta * self.options.zoom_speed).max(0.1);
    }

    /// Whether user input is still being applied (including damping
    /// tails).
    #[must_use]
    pub fn has_pending_motion(&self) -> bool {
        self.delta_theta != 0.0 || self.delta_phi != 0.0 || self.scale != 1.0
    }

    /// Apply queued input, damping, and auto-rotation for a frame of `dt`
    /// seconds. Returns whether the camera moved. Non-finite or negative
    /// `dt` stops auto-rotation for the frame.
    pub fn update(&mut self, dt: f32) -> bool {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let auto_angle = if self.auto_rotate {
            TAU / 60.0 * self.options.auto_rotate_speed * dt
        } else {
            0.0
        };
        if !self.has_pending_motion() && auto_angle == 0.0 {
            return false;
        }

        let offset = self.camera.eye - self.target;
        let radius = offset.length();
        let mut theta = offset.x.atan2(offset.z);
        let mut phi = if radius > 0.0 {
            (offset.y / radius).clamp(-1.0, 1.0).acos()
        } else {
            PI / 2.0
        };

        let factor = if self.options.enable_damping {
            self.options.damping_factor
        } else {
            1.0
        };
        theta += self.delta_theta * factor - auto_angle;
        phi += self.delta_phi * factor;

        let phi = phi
            .clamp(self.options.min_polar_angle, self.options.max_polar_angle)
            .clamp(POLE_EPSILON, PI - POLE_EPSILON);
        let radius = (radius * self.scale)
            .clamp(self.options.min_distance, self.options.max_distance);

        let (sin_phi, cos_phi) = phi.sin_cos();
        let (sin_theta, cos_theta) = theta.sin_cos();
        self.camera.eye = self.target
            + Vec3::new(
                radius * sin_phi * sin_theta,
                radius * cos_phi,
                radius * sin_phi * cos_theta,
            );
        self.camera.look_at(self.target);

        if self.options.enable_damping {
            self.delta_theta *= 1.0 - self.options.damping_factor;
            self.delta_phi *= 1.0 - self.options.damping_factor;
            if self.delta_theta.abs() < SETTLE_EPSILON {
                self.delta_theta = 0.0;
            }
            if self.delta_phi.abs() < SETTLE_EPSILON {
                self.delta_phi = 0.0;
            }
        } else {
            self.delta_theta = 0.0;
            self.delta_phi = 0.0;
        }
        self.scale = 1.0;
        true
    }
}

impl CameraRig for OrbitControls {
    fn position(&self) -> Vec3 {
        self.camera.eye
    }

    fn set_position(&mut self, position: Vec3) {
        self.camera.eye = position;
    }

    fn look_at(&mut self, target: Vec3) {
        self.camera.look_at(target);
    }

    fn set_orbit_target(&mut self, target: Vec3) {
        self.target = target;
    }

    fn set_auto_rotate(&mut self, enabled: bool) {
        self.auto_rotate = enabled;
    }

    fn auto_rotate(&self) -> bool {
        self.auto_rotate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controls() -> OrbitControls {
        OrbitControls::new(Camera::default(), ControlOptions::default())
    }

    #[test]
    fn idle_frame_leaves_camera_alone() {
        let mut c = controls();
        c.set_auto_rotate(false);
        // Outside the distance limits, but nothing asked the camera to move.
        c.set_position(Vec3::new(0.0, 56.0, 16.8));
        assert!(!c.update(1.0 / 60.0));
        assert_eq!(c.position(), Vec3::new(0.0, 56.0, 16.8));
    }

    #[test]
    fn auto_rotate_orbits_at_constant_radius() {
        let mut c = controls();
        assert!(c.auto_rotate());
        let before = c.position();
        let radius = before.length();
        assert!(c.update(1.0));
        let after = c.position();
        assert!(after != before);
        assert!((after.length() - radius).abs() < 1e-3);
        assert!((after.y - before.y).abs() < 1e-3, "turntable keeps height");
        assert_eq!(c.camera.target, Vec3::ZERO);
    }

    #[test]
    fn non_finite_dt_does_not_poison_camera() {
        let mut c = controls();
        let before = c.position();
        for dt in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY, -0.5] {
            assert!(!c.update(dt));
        }
        assert_eq!(c.position(), before);

        // Queued drag still applies, with a finite result.
        c.rotate(Vec2::new(10.0, 0.0));
        assert!(c.update(f32::NAN));
        assert!(c.position().is_finite());
    }

    #[test]
    fn zoom_respects_distance_limits() {
        let mut c = controls();
        c.set_auto_rotate(false);
        for _ in 0..50 {
            c.zoom(5.0);
            let _ = c.update(0.016);
        }
        assert!((c.position().length() - 20.0).abs() < 1e-3);
        for _ in 0..50 {
            c.zoom(-5.0);
            let _ = c.update(0.016);
        }
        assert!((c.position().length() - 50.0).abs() < 1e-3);
    }

    #[test]
    fn drag_respects_polar_limits() {
        let mut c = controls();
        c.set_auto_rotate(false);
        for _ in 0..500 {
            c.rotate(Vec2::new(0.0, 400.0));
            let _ = c.update(0.016);
        }
        let eye = c.position();
        let phi = (eye.y / eye.length()).acos();
        assert!(phi >= c.options().min_polar_angle - 1e-4);
    }

    #[test]
    fn damping_tail_settles() {
        let mut c = controls();
        c.set_auto_rotate(false);
        c.rotate(Vec2::new(30.0, 0.0));
        let mut frames = 0;
        while c.update(0.016) {
            frames += 1;
            assert!(frames < 10_000, "damping never settled");
        }
        assert!(!c.has_pending_motion());
        assert!(frames > 1, "damping spreads motion over several frames");
    }
}
