//! Time-based camera-view transitions.
//!
//! [`ViewTransitionController::go_to`] starts an eased move from the live
//! camera position to a requested pose. The host's render loop then calls
//! [`update`](ViewTransitionController::update) once per frame; each step
//! writes the interpolated position, re-aims the camera at the target, and
//! syncs the orbit pivot. A new `go_to` supersedes the one in flight and
//! starts from wherever the camera currently is, so motion never jumps.

use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::CameraRig;
use crate::error::VistaError;
use crate::util::easing::EasingFunction;
use crate::util::math::{is_finite_vec3, lerp_vec3};

/// Duration and curve of a view transition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Transition", inline)]
#[serde(default)]
pub struct TransitionOptions {
    /// Transition length in seconds. Zero snaps to the end pose.
    #[schemars(title = "Duration", range(min = 0.0, max = 5.0), extend("step" = 0.1))]
    pub duration: f32,
    /// Easing curve id.
    #[schemars(title = "Easing")]
    pub easing: EasingFunction,
}

impl TransitionOptions {
    /// Negative durations behave like zero.
    fn floored(self) -> Self {
        Self {
            duration: self.duration.max(0.0),
            ..self
        }
    }
}

impl Default for TransitionOptions {
    fn default() -> Self {
        Self {
            duration: 1.5,
            easing: EasingFunction::EaseInOut,
        }
    }
}

/// One in-flight camera move.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraTransition {
    start_position: Vec3,
    end_position: Vec3,
    target: Vec3,
    elapsed: f32,
    duration: f32,
    easing: EasingFunction,
}

impl CameraTransition {
    fn new(
        start_position: Vec3,
        end_position: Vec3,
        target: Vec3,
        options: TransitionOptions,
    ) -> Self {
        Self {
            start_position,
            end_position,
            target,
            elapsed: 0.0,
            duration: options.duration,
            easing: options.easing,
        }
    }

    /// Position the camera was at when the transition began.
    #[must_use]
    pub fn start_position(&self) -> Vec3 {
        self.start_position
    }

    /// Position the camera settles at.
    #[must_use]
    pub fn end_position(&self) -> Vec3 {
        self.end_position
    }

    /// Point the camera faces throughout.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Seconds since the transition began.
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Total length in seconds.
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Linear progress `min(elapsed / duration, 1)`.
    #[must_use]
    pub fn linear_progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).min(1.0)
        }
    }

    /// Eased progress.
    #[must_use]
    pub fn eased_progress(&self) -> f32 {
        self.easing.evaluate(self.linear_progress())
    }

    /// Interpolated camera position at the current elapsed time. Exactly
    /// the end position once complete.
    #[must_use]
    pub fn sample(&self) -> Vec3 {
        if self.is_complete() {
            return self.end_position;
        }
        lerp_vec3(self.eased_progress(), self.start_position, self.end_position)
    }

    /// Whether the final frame has been reached.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.linear_progress() >= 1.0 || self.eased_progress() >= 1.0
    }

    fn advance(&mut self, dt: f32) {
        self.elapsed += dt.max(0.0);
    }
}

/// What a call to [`ViewTransitionController::update`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionStep {
    /// No transition was active; the camera was not touched.
    Idle,
    /// An intermediate frame was applied.
    Moving,
    /// The final frame was applied and the transition ended.
    Finished,
}

/// Drives at most one camera transition at a time.
#[derive(Debug, Clone, Default)]
pub struct ViewTransitionController {
    active: Option<CameraTransition>,
    defaults: TransitionOptions,
}

impl ViewTransitionController {
    /// Controller whose `go_to` calls use `defaults` unless overridden.
    #[must_use]
    pub fn new(defaults: TransitionOptions) -> Self {
        Self {
            active: None,
            defaults,
        }
    }

    /// Default options for new transitions.
    #[must_use]
    pub fn defaults(&self) -> TransitionOptions {
        self.defaults
    }

    /// Begin a transition toward `position`, facing `target`.
    ///
    /// Auto-rotation is disabled immediately and stays off until the caller
    /// re-enables it. An in-flight transition is abandoned; the new one
    /// starts from the camera's live position. Non-finite input is rejected
    /// before the camera is touched.
    pub fn go_to<R: CameraRig + ?Sized>(
        &mut self,
        rig: &mut R,
        position: Vec3,
        target: Vec3,
        options: Option<TransitionOptions>,
    ) -> Result<(), VistaError> {
        let options = options.unwrap_or(self.defaults);
        if !is_finite_vec3(position)
            || !is_finite_vec3(target)
            || !options.duration.is_finite()
        {
            return Err(VistaError::InvalidTarget { position, target });
        }

        rig.set_auto_rotate(false);
        let start = rig.position();
        if self.active.take().is_some() {
            log::debug!("Superseding camera transition at {start}");
        }
        log::debug!(
            "Camera transition {start} -> {position} over {:.2}s ({})",
            options.duration,
            options.easing
        );

        let transition =
            CameraTransition::new(start, position, target, options.floored());
        if transition.is_complete() {
            apply(rig, &transition);
        } else {
            self.active = Some(transition);
        }
        Ok(())
    }

    /// Advance the active transition by `dt` seconds and write the frame.
    ///
    /// Call after the orbit controls' own per-frame update so the
    /// transition's pose wins any conflict within the frame.
    pub fn update<R: CameraRig + ?Sized>(
        &mut self,
        rig: &mut R,
        dt: f32,
    ) -> TransitionStep {
        let Some(transition) = self.active.as_mut() else {
            return TransitionStep::Idle;
        };
        transition.advance(dt);
        apply(rig, transition);

        if transition.is_complete() {
            log::debug!("Camera transition settled at {}", transition.end_position);
            self.active = None;
            TransitionStep::Finished
        } else {
            TransitionStep::Moving
        }
    }

    /// Whether a transition is in flight.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// The in-flight transition, if any.
    #[must_use]
    pub fn active(&self) -> Option<&CameraTransition> {
        self.active.as_ref()
    }
}

/// Write one frame: position first, then aim from that new position.
fn apply<R: CameraRig + ?Sized>(rig: &mut R, transition: &CameraTransition) {
    rig.set_position(transition.sample());
    rig.look_at(transition.target);
    rig.set_orbit_target(transition.target);
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every write so tests can check per-frame orientation.
    #[derive(Default)]
    struct MockRig {
        position: Vec3,
        looking_at: Vec3,
        orbit_target: Vec3,
        auto_rotate: bool,
        /// (position at time of look_at, look_at target)
        aims: Vec<(Vec3, Vec3)>,
    }

    impl CameraRig for MockRig {
        fn position(&self) -> Vec3 {
            self.position
        }
        fn set_position(&mut self, position: Vec3) {
            self.position = position;
        }
        fn look_at(&mut self, target: Vec3) {
            self.looking_at = target;
            self.aims.push((self.position, target));
        }
        fn set_orbit_target(&mut self, target: Vec3) {
            self.orbit_target = target;
        }
        fn set_auto_rotate(&mut self, enabled: bool) {
            self.auto_rotate = enabled;
        }
        fn auto_rotate(&self) -> bool {
            self.auto_rotate
        }
    }

    fn rig_at(position: Vec3) -> MockRig {
        MockRig {
            position,
            auto_rotate: true,
            ..MockRig::default()
        }
    }

    const P0: Vec3 = Vec3::new(15.0, 15.0, 30.0);
    const TOP: Vec3 = Vec3::new(0.0, 56.0, 16.8);

    #[test]
    fn top_view_lands_exactly() {
        let mut rig = rig_at(P0);
        let mut ctl = ViewTransitionController::default();
        ctl.go_to(&mut rig, TOP, Vec3::ZERO, None).unwrap();
        assert!(!rig.auto_rotate, "auto-rotate disabled synchronously");

        let mut steps = 0;
        while ctl.update(&mut rig, 1.0 / 60.0) == TransitionStep::Moving {
            steps += 1;
        }
        assert!(steps > 80);
        assert_eq!(rig.position, TOP);
        assert_eq!(rig.looking_at, Vec3::ZERO);
        assert_eq!(rig.orbit_target, Vec3::ZERO);
        assert!(!rig.auto_rotate);
        assert!(!ctl.is_active());
        assert_eq!(ctl.update(&mut rig, 1.0), TransitionStep::Idle);
    }

    #[test]
    fn sample_endpoints_and_monotonic_progress() {
        let mut rig = rig_at(P0);
        let mut ctl = ViewTransitionController::default();
        ctl.go_to(&mut rig, TOP, Vec3::ZERO, None).unwrap();

        assert_eq!(ctl.update(&mut rig, 0.0), TransitionStep::Moving);
        assert!((rig.position - P0).length() < 1e-5);

        let mut prev_dist = (TOP - P0).length();
        for _ in 0..11 {
            let _ = ctl.update(&mut rig, 0.125);
            let dist = (TOP - rig.position).length();
            assert!(dist <= prev_dist + 1e-5, "moved away from the end");
            prev_dist = dist;
        }
        assert_eq!(ctl.update(&mut rig, 0.125), TransitionStep::Finished);
        assert_eq!(rig.position, TOP);
    }

    #[test]
    fn orientation_recomputed_every_frame() {
        let mut rig = rig_at(P0);
        let mut ctl = ViewTransitionController::default();
        ctl.go_to(&mut rig, TOP, Vec3::new(0.0, 1.0, 0.0), None).unwrap();
        for _ in 0..10 {
            let _ = ctl.update(&mut rig, 0.05);
        }
        assert_eq!(rig.aims.len(), 10);
        // Each aim happened after that frame's position write.
        let positions: Vec<_> = rig.aims.iter().map(|(p, _)| *p).collect();
        for pair in positions.windows(2) {
            assert!(pair[0] != pair[1]);
        }
        assert!(rig.aims.iter().all(|(_, t)| *t == Vec3::new(0.0, 1.0, 0.0)));
    }

    #[test]
    fn supersession_starts_from_live_position() {
        let mut rig = rig_at(P0);
        let mut ctl = ViewTransitionController::default();
        let p1 = Vec3::new(0.0, 7.0, 16.8);
        let p2 = Vec3::new(28.0, 11.2, 0.0);
        ctl.go_to(&mut rig, p1, Vec3::ZERO, None).unwrap();
        let _ = ctl.update(&mut rig, 0.75);

        let midpoint = (P0 + p1) * 0.5;
        assert!((rig.position - midpoint).length() < 1e-4);

        ctl.go_to(&mut rig, p2, Vec3::ZERO, None).unwrap();
        let active = ctl.active().unwrap();
        assert_eq!(active.start_position(), rig.position);
        assert_eq!(active.end_position(), p2);
        assert_eq!(active.elapsed(), 0.0);

        // First frame of the new transition is continuous with the last.
        let before = rig.position;
        let _ = ctl.update(&mut rig, 1.0 / 60.0);
        assert!((rig.position - before).length() < 0.05);
    }

    #[test]
    fn non_finite_request_is_rejected_without_side_effects() {
        let mut rig = rig_at(P0);
        let mut ctl = ViewTransitionController::default();
        let err = ctl.go_to(
            &mut rig,
            Vec3::new(f32::NAN, 0.0, 0.0),
            Vec3::ZERO,
            None,
        );
        assert!(matches!(err, Err(VistaError::InvalidTarget { .. })));
        let err = ctl.go_to(
            &mut rig,
            TOP,
            Vec3::new(0.0, f32::INFINITY, 0.0),
            None,
        );
        assert!(err.is_err());
        assert!(rig.auto_rotate);
        assert_eq!(rig.position, P0);
        assert!(!ctl.is_active());
    }

    #[test]
    fn zero_duration_snaps() {
        let mut rig = rig_at(P0);
        let mut ctl = ViewTransitionController::default();
        let options = TransitionOptions {
            duration: 0.0,
            ..TransitionOptions::default()
        };
        ctl.go_to(&mut rig, TOP, Vec3::ZERO, Some(options)).unwrap();
        assert_eq!(rig.position, TOP);
        assert_eq!(rig.looking_at, Vec3::ZERO);
        assert!(!ctl.is_active());
    }

    #[test]
    fn non_finite_duration_is_rejected() {
        let mut rig = rig_at(P0);
        let mut ctl = ViewTransitionController::default();
        for duration in [f32::NAN, f32::INFINITY] {
            let options = TransitionOptions {
                duration,
                ..TransitionOptions::default()
            };
            let err = ctl.go_to(&mut rig, TOP, Vec3::ZERO, Some(options));
            assert!(matches!(err, Err(VistaError::InvalidTarget { .. })));
        }
        assert!(rig.auto_rotate);
        assert_eq!(rig.position, P0);
        assert!(rig.aims.is_empty());
        assert!(!ctl.is_active());
    }

    #[test]
    fn negative_duration_snaps_like_zero() {
        let mut rig = rig_at(P0);
        let mut ctl = ViewTransitionController::default();
        let options = TransitionOptions {
            duration: -1.0,
            ..TransitionOptions::default()
        };
        ctl.go_to(&mut rig, TOP, Vec3::ZERO, Some(options)).unwrap();
        assert_eq!(rig.position, TOP);
        assert_eq!(rig.orbit_target, Vec3::ZERO);
        assert!(!rig.auto_rotate);
        assert!(!ctl.is_active());
        assert_eq!(ctl.update(&mut rig, 0.125), TransitionStep::Idle);
    }

    #[test]
    fn custom_duration_and_easing() {
        let mut rig = rig_at(Vec3::ZERO);
        let mut ctl = ViewTransitionController::new(TransitionOptions {
            duration: 2.0,
            easing: EasingFunction::Linear,
        });
        ctl.go_to(&mut rig, Vec3::new(10.0, 0.0, 0.0), Vec3::Y, None)
            .unwrap();
        let _ = ctl.update(&mut rig, 0.5);
        assert!((rig.position.x - 2.5).abs() < 1e-5);
        assert_eq!(ctl.active().unwrap().duration(), 2.0);
    }
}
