//! The viewer session: the single owner of camera, loading, and hotspot
//! state.
//!
//! A [`ViewerSession`] is built from [`Options`], drives a
//! [`ViewerSurface`], and is advanced once per rendered frame with
//! [`ViewerSession::tick`]. All interaction arrives as
//! [`ViewerCommand`]s through [`ViewerSession::execute`].

mod command;

use glam::{Vec2, Vec3};

pub use command::ViewerCommand;

use crate::assets::loader::{load_all, AssetLoader, AssetRequest, LoadReport};
use crate::assets::{Readiness, ReadinessObserver, ReadinessTracker};
use crate::camera::{
    Camera, CameraRig, OrbitControls, TransitionOptions, TransitionStep,
    ViewPreset, ViewPresets, ViewTransitionController,
};
use crate::error::VistaError;
use crate::hotspot::{ClickOutcome, HotspotInteraction, HotspotSet};
use crate::options::Options;
use crate::surface::ViewerSurface;
use crate::util::math::frame_bounds;

/// Every piece of mutable viewer state, passed by reference to the
/// component that needs it.
#[derive(Debug, Clone)]
pub struct ViewerContext {
    /// Orbit controls owning the live camera.
    pub orbit: OrbitControls,
    /// Eased view transitions.
    pub transitions: ViewTransitionController,
    /// Asset readiness barrier.
    pub tracker: ReadinessTracker,
    /// Hotspot hover and info-panel state.
    pub hotspots: HotspotInteraction,
    /// Named views.
    pub presets: ViewPresets,
    /// Starting pose, restored by [`ViewerCommand::ReturnToDefault`].
    pub default_view: ViewPreset,
}

impl ViewerContext {
    /// Build the initial state. No assets are registered yet.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        let cam = &options.camera;
        let camera = Camera {
            eye: cam.initial_position.into(),
            target: cam.initial_target.into(),
            fovy: cam.fovy,
            znear: cam.znear,
            zfar: cam.zfar,
            ..Camera::default()
        };
        Self {
            orbit: OrbitControls::new(camera, options.controls.clone()),
            transitions: ViewTransitionController::new(options.transition),
            tracker: ReadinessTracker::new(),
            hotspots: HotspotInteraction::new(HotspotSet::new(
                options.hotspots.hotspots(),
                options.hotspots.style(),
            )),
            presets: options.views.presets(),
            default_view: ViewPreset::new(
                cam.initial_position.into(),
                cam.initial_target.into(),
            ),
        }
    }
}

/// Frame deltas that are non-finite or negative count as zero.
fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() {
        dt.max(0.0)
    } else {
        0.0
    }
}

/// Routes tracker side effects to the surface.
struct SurfaceObserver<'a, S: ?Sized> {
    surface: &'a mut S,
    error_text: &'a str,
}

impl<S: ViewerSurface + ?Sized> ReadinessObserver for SurfaceObserver<'_, S> {
    fn on_all_ready(&mut self) {
        self.surface.set_loading_visible(false);
        self.surface.set_viewport_visible(true);
    }

    fn on_load_failed(&mut self, _name: &str, _cause: &str) {
        self.surface.set_loading_text(self.error_text);
    }
}

/// Top-level viewer: owns the [`ViewerContext`] and the surface it drives.
#[derive(Debug)]
pub struct ViewerSession<S: ViewerSurface> {
    ctx: ViewerContext,
    surface: S,
    requests: Vec<AssetRequest>,
    error_text: String,
}

impl<S: ViewerSurface> ViewerSession<S> {
    /// Register the configured assets, show the loading indicator, and hide
    /// the viewport until every asset has loaded. Every hotspot view must
    /// name a preset.
    pub fn new(options: &Options, mut surface: S) -> Result<Self, VistaError> {
        let mut ctx = ViewerContext::from_options(options);
        for hotspot in ctx.hotspots.set().hotspots() {
            if let Some(view) = &hotspot.view {
                if ctx.presets.get(view).is_none() {
                    return Err(VistaError::UnknownView(view.clone()));
                }
            }
        }
        let requests = options.assets.requests();
        for request in &requests {
            let _ = ctx.tracker.register(&request.name)?;
        }

        surface.set_viewport_visible(false);
        surface.hide_info_panel();
        surface.set_loading_visible(true);

        let mut session = Self {
            ctx,
            surface,
            requests,
            error_text: options.assets.error_text.clone(),
        };
        // Nothing to wait for.
        let mut observer = SurfaceObserver {
            surface: &mut session.surface,
            error_text: &session.error_text,
        };
        let _ = session.ctx.tracker.reveal_if_ready(&mut observer);
        log::info!(
            "Session started with {} assets, {} views, {} hotspots",
            session.requests.len(),
            session.ctx.presets.len(),
            session.ctx.hotspots.set().len()
        );
        Ok(session)
    }

    // ── Loading ──

    /// Requests for the assets this session waits on.
    #[must_use]
    pub fn requests(&self) -> &[AssetRequest] {
        &self.requests
    }

    /// Report that an asset finished loading.
    pub fn asset_loaded(&mut self, name: &str) -> Result<Readiness, VistaError> {
        let mut observer = SurfaceObserver {
            surface: &mut self.surface,
            error_text: &self.error_text,
        };
        self.ctx.tracker.mark_loaded(name, &mut observer)
    }

    /// Report that an asset failed to load. The session stays in its
    /// loading state with the error text shown.
    pub fn asset_failed(&mut self, name: &str, cause: &str) -> Result<(), VistaError> {
        let mut observer = SurfaceObserver {
            surface: &mut self.surface,
            error_text: &self.error_text,
        };
        self.ctx.tracker.mark_failed(name, cause, &mut observer)
    }

    /// Load every configured asset concurrently through `loader`.
    pub async fn load_assets<L: AssetLoader>(
        &mut self,
        loader: &L,
    ) -> LoadReport {
        let mut observer = SurfaceObserver {
            surface: &mut self.surface,
            error_text: &self.error_text,
        };
        load_all(loader, &self.requests, &mut self.ctx.tracker, &mut observer)
            .await
    }

    /// Whether every asset has loaded.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ctx.tracker.is_all_ready()
    }

    // ── Frame ──

    /// Advance one frame of `dt` seconds: orbit controls first, then the
    /// active transition (which wins any conflict), then hover tweens.
    /// Non-finite or negative deltas count as zero.
    pub fn tick(&mut self, dt: f32) -> TransitionStep {
        let dt = sanitize_dt(dt);
        let _ = self.ctx.orbit.update(dt);
        let step = self.ctx.transitions.update(&mut self.ctx.orbit, dt);
        self.ctx.hotspots.tick(dt);
        step
    }

    // ── Commands ──

    /// Perform a command.
    pub fn execute(&mut self, command: ViewerCommand) -> Result<(), VistaError> {
        match command {
            ViewerCommand::GoToView { name } => self.go_to_view(&name)?,
            ViewerCommand::GoTo { position, target } => {
                self.go_to(position, target, None)?;
            }
            ViewerCommand::ReturnToDefault => self.return_to_default()?,
            ViewerCommand::ToggleAutoRotate => {
                let enabled = !self.ctx.orbit.auto_rotate();
                self.ctx.orbit.set_auto_rotate(enabled);
            }
            ViewerCommand::RotateCamera { delta } => self.ctx.orbit.rotate(delta),
            ViewerCommand::Zoom { delta } => self.ctx.orbit.zoom(delta),
            ViewerCommand::HoverAt { ndc } => {
                let ray = self.ctx.orbit.camera.ndc_to_ray(ndc);
                let _ = self.ctx.hotspots.pointer_moved(&ray);
            }
            ViewerCommand::ClickAt { ndc } => {
                let _ = self.click(ndc)?;
            }
            ViewerCommand::ClosePanel => self.close_panel(),
            ViewerCommand::Resize { width, height } => self.resize(width, height),
        }
        Ok(())
    }

    /// Begin a transition to an arbitrary pose.
    pub fn go_to(
        &mut self,
        position: Vec3,
        target: Vec3,
        options: Option<TransitionOptions>,
    ) -> Result<(), VistaError> {
        self.ctx
            .transitions
            .go_to(&mut self.ctx.orbit, position, target, options)
    }

    /// Begin a transition to a named preset.
    pub fn go_to_view(&mut self, name: &str) -> Result<(), VistaError> {
        let preset = *self
            .ctx
            .presets
            .get(name)
            .ok_or_else(|| VistaError::UnknownView(name.to_owned()))?;
        log::debug!("Going to {name}");
        self.go_to(preset.position, preset.target, None)
    }

    /// Fly back to the starting pose, close the info panel, and resume
    /// auto-rotation.
    pub fn return_to_default(&mut self) -> Result<(), VistaError> {
        let view = self.ctx.default_view;
        self.go_to(view.position, view.target, None)?;
        self.ctx.orbit.set_auto_rotate(true);
        self.close_panel();
        Ok(())
    }

    /// Hit-test a click. A marker hit opens its panel and flies to its
    /// view; empty space with a panel open closes it and returns to the
    /// default view. A marker whose view has no preset leaves the panel
    /// closed.
    pub fn click(&mut self, ndc: Vec2) -> Result<ClickOutcome, VistaError> {
        let ray = self.ctx.orbit.camera.ndc_to_ray(ndc);
        let outcome = self.ctx.hotspots.clicked(&ray);
        match &outcome {
            ClickOutcome::Opened { index, view } => {
                let preset = match view {
                    Some(name) => match self.ctx.presets.get(name) {
                        Some(preset) => Some(*preset),
                        None => {
                            self.close_panel();
                            return Err(VistaError::UnknownView(name.clone()));
                        }
                    },
                    None => None,
                };
                if let Some(hotspot) = self.ctx.hotspots.set().get(*index) {
                    self.surface.show_info_panel(&hotspot.info);
                }
                if let Some(preset) = preset {
                    self.go_to(preset.position, preset.target, None)?;
                }
            }
            ClickOutcome::Closed => self.return_to_default()?,
            ClickOutcome::Ignored => {}
        }
        Ok(outcome)
    }

    /// Close the info panel.
    pub fn close_panel(&mut self) {
        let _ = self.ctx.hotspots.close_panel();
        self.surface.hide_info_panel();
    }

    /// Update the camera aspect ratio.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.ctx.orbit.camera.resize(width, height);
    }

    /// Rescale the standard views to a loaded model's bounds. Returns the
    /// offset that recenters the model on the origin.
    pub fn frame_model(&mut self, min: Vec3, max: Vec3) -> Vec3 {
        let (center, max_dim) = frame_bounds(min, max);
        for (name, preset) in ViewPresets::standard(max_dim).iter() {
            self.ctx.presets.insert(name, *preset);
        }
        log::debug!("Framed model: center {center}, max dimension {max_dim:.2}");
        -center
    }

    // ── Accessors ──

    /// The live camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.ctx.orbit.camera
    }

    /// Shared state.
    #[must_use]
    pub fn context(&self) -> &ViewerContext {
        &self.ctx
    }

    /// Mutable shared state.
    pub fn context_mut(&mut self) -> &mut ViewerContext {
        &mut self.ctx
    }

    /// The surface being driven.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// End the session: stop any transition, close the panel, and hand the
    /// surface back.
    pub fn teardown(mut self) -> S {
        self.ctx.transitions = ViewTransitionController::new(
            self.ctx.transitions.defaults(),
        );
        self.close_panel();
        log::info!("Session closed");
        self.surface
    }
}
