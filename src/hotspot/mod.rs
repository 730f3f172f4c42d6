//! Hotspot markers: 3D-anchored info points with hover and click handling.
//!
//! Pointer input is hit-tested against the marker set by casting a ray from
//! the camera. Two invariants hold at all times: at most one marker carries
//! the hovered appearance, and at most one info panel is open.

mod tween;

use glam::Vec3;
use rustc_hash::FxHashMap;

pub use tween::{HoverStyle, HoverTween, MarkerVisual};

use crate::camera::Ray;

/// Content shown in the info panel for a marker.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InfoPayload {
    /// Panel heading.
    pub title: String,
    /// Panel text.
    pub body: String,
    /// Optional image reference.
    pub image: Option<String>,
}

/// A fixed marker anchored in world space.
#[derive(Debug, Clone, PartialEq)]
pub struct Hotspot {
    /// Unique name.
    pub name: String,
    /// World-space anchor.
    pub anchor: Vec3,
    /// Hit-test sphere radius.
    pub radius: f32,
    /// Info panel content.
    pub info: InfoPayload,
    /// Preset view to fly to on click.
    pub view: Option<String>,
}

/// Ray-sphere intersection. Returns the nearest positive hit distance.
fn ray_sphere_intersect(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let a = ray.dir.dot(ray.dir);
    let b = 2.0 * oc.dot(ray.dir);
    let c = oc.dot(oc) - radius * radius;
    let discriminant = b * b - 4.0 * a * c;

    if discriminant < 0.0 {
        return None;
    }

    let t = (-b - discriminant.sqrt()) / (2.0 * a);
    if t > 0.0 {
        Some(t)
    } else {
        // Ray starts inside the sphere
        let t2 = (-b + discriminant.sqrt()) / (2.0 * a);
        (t2 > 0.0).then_some(t2)
    }
}

/// The marker set and each marker's animated appearance.
#[derive(Debug, Clone)]
pub struct HotspotSet {
    hotspots: Vec<Hotspot>,
    by_name: FxHashMap<String, usize>,
    visuals: Vec<MarkerVisual>,
    tweens: Vec<Option<HoverTween>>,
    style: HoverStyle,
}

impl HotspotSet {
    /// Build a set. Later markers with a repeated name are dropped.
    #[must_use]
    pub fn new(hotspots: Vec<Hotspot>, style: HoverStyle) -> Self {
        let mut kept = Vec::with_capacity(hotspots.len());
        let mut by_name = FxHashMap::default();
        for hotspot in hotspots {
            if by_name.contains_key(&hotspot.name) {
                log::warn!("Duplicate hotspot {} ignored", hotspot.name);
                continue;
            }
            let _ = by_name.insert(hotspot.name.clone(), kept.len());
            kept.push(hotspot);
        }
        let base = style.base();
        Self {
            visuals: vec![base; kept.len()],
            tweens: vec![None; kept.len()],
            hotspots: kept,
            by_name,
            style,
        }
    }

    /// Index of the closest marker hit by `ray`.
    #[must_use]
    pub fn hit_test(&self, ray: &Ray) -> Option<usize> {
        self.hotspots
            .iter()
            .enumerate()
            .filter_map(|(i, h)| {
                ray_sphere_intersect(ray, h.anchor, h.radius).map(|t| (i, t))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }

    /// Marker by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Hotspot> {
        self.hotspots.get(index)
    }

    /// Index of a marker by name.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// Current appearance of a marker.
    #[must_use]
    pub fn visual(&self, index: usize) -> Option<MarkerVisual> {
        self.visuals.get(index).copied()
    }

    /// All markers.
    #[must_use]
    pub fn hotspots(&self) -> &[Hotspot] {
        &self.hotspots
    }

    /// Number of markers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hotspots.len()
    }

    /// Whether the set has no markers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hotspots.is_empty()
    }

    fn animate_to(&mut self, index: usize, to: MarkerVisual) {
        self.tweens[index] =
            Some(HoverTween::new(self.visuals[index], to, self.style.duration));
    }

    /// Advance hover tweens by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        for (visual, slot) in self.visuals.iter_mut().zip(&mut self.tweens) {
            if let Some(tween) = slot {
                *visual = tween.advance(dt);
                if tween.is_finished() {
                    *slot = None;
                }
            }
        }
    }
}

/// What a click did to the info panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A marker was hit; its panel is now open.
    Opened {
        /// Marker index.
        index: usize,
        /// Preset view to fly to, if the marker names one.
        view: Option<String>,
    },
    /// Empty space was clicked while a panel was open; it closed.
    Closed,
    /// Empty space was clicked with no panel open.
    Ignored,
}

/// Hover and info-panel state machine over a [`HotspotSet`].
#[derive(Debug, Clone)]
pub struct HotspotInteraction {
    set: HotspotSet,
    hovered: Option<usize>,
    open_panel: Option<usize>,
}

impl HotspotInteraction {
    /// Wrap a marker set with nothing hovered and no panel open.
    #[must_use]
    pub fn new(set: HotspotSet) -> Self {
        Self {
            set,
            hovered: None,
            open_panel: None,
        }
    }

    /// Marker set.
    #[must_use]
    pub fn set(&self) -> &HotspotSet {
        &self.set
    }

    /// Index of the hovered marker.
    #[must_use]
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Index of the marker whose panel is open.
    #[must_use]
    pub fn open_panel(&self) -> Option<usize> {
        self.open_panel
    }

    /// Hit-test a pointer move. The previously hovered marker is reverted
    /// before the new one is highlighted. Returns whether hover changed.
    pub fn pointer_moved(&mut self, ray: &Ray) -> bool {
        let hit = self.set.hit_test(ray);
        if hit == self.hovered {
            return false;
        }
        if let Some(prev) = self.hovered.take() {
            let base = self.set.style.base();
            self.set.animate_to(prev, base);
        }
        if let Some(next) = hit {
            let hovered = self.set.style.hovered();
            self.set.animate_to(next, hovered);
            self.hovered = Some(next);
        }
        true
    }

    /// Hit-test a click and update the info panel.
    pub fn clicked(&mut self, ray: &Ray) -> ClickOutcome {
        match self.set.hit_test(ray) {
            Some(index) => {
                self.open_panel = Some(index);
                let view = self.set.hotspots[index].view.clone();
                log::debug!("Hotspot {} opened", self.set.hotspots[index].name);
                ClickOutcome::Opened { index, view }
            }
            None if self.open_panel.is_some() => {
                self.open_panel = None;
                ClickOutcome::Closed
            }
            None => ClickOutcome::Ignored,
        }
    }

    /// Close the info panel without a click. Returns whether it was open.
    pub fn close_panel(&mut self) -> bool {
        self.open_panel.take().is_some()
    }

    /// Advance hover tweens.
    pub fn tick(&mut self, dt: f32) {
        self.set.tick(dt);
    }
}
