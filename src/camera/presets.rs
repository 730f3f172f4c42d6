use glam::Vec3;

/// A literal camera pose: where to stand and what to face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewPreset {
    /// Camera position.
    pub position: Vec3,
    /// Look-at target.
    pub target: Vec3,
}

impl ViewPreset {
    /// Build a preset.
    #[must_use]
    pub const fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target }
    }
}

/// Named camera views, kept in insertion order for tours and UI listings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewPresets {
    views: Vec<(String, ViewPreset)>,
}

impl ViewPresets {
    /// Name of the wheel close-up view.
    pub const WHEEL: &'static str = "wheelView";
    /// Name of the overhead view.
    pub const TOP: &'static str = "topView";
    /// Name of the front view.
    pub const FRONT: &'static str = "frontView";
    /// Name of the side view.
    pub const SIDE: &'static str = "sideView";

    /// The four standard button views, scaled by the model's largest
    /// dimension and aimed at the origin.
    #[must_use]
    pub fn standard(max_dim: f32) -> Self {
        let mut presets = Self::default();
        for (name, position) in [
            (Self::WHEEL, Vec3::new(0.0, max_dim * 0.5, max_dim * 1.2)),
            (Self::TOP, Vec3::new(0.0, max_dim * 4.0, max_dim * 1.2)),
            (Self::FRONT, Vec3::new(0.0, max_dim * 0.8, max_dim * 2.0)),
            (Self::SIDE, Vec3::new(max_dim * 2.0, max_dim * 0.8, 0.0)),
        ] {
            presets.insert(name, ViewPreset::new(position, Vec3::ZERO));
        }
        presets
    }

    /// Add or replace a view. Replacing keeps the original position in the
    /// ordering.
    pub fn insert(&mut self, name: &str, preset: ViewPreset) {
        if let Some(slot) = self.views.iter_mut().find(|(n, _)| n == name) {
            slot.1 = preset;
        } else {
            self.views.push((name.to_owned(), preset));
        }
    }

    /// Look up a view by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ViewPreset> {
        self.views.iter().find(|(n, _)| n == name).map(|(_, p)| p)
    }

    /// View names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.views.iter().map(|(n, _)| n.as_str())
    }

    /// `(name, preset)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ViewPreset)> {
        self.views.iter().map(|(n, p)| (n.as_str(), p))
    }

    /// Number of views.
    #[must_use]
    pub fn len(&self) -> usize {
        self.views.len()
    }

    /// Whether no views are defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}
