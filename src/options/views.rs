use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::{ViewPreset, ViewPresets};

/// A named view beyond the four standard buttons.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct NamedView {
    /// Button or hotspot name that triggers this view.
    pub name: String,
    /// Camera position.
    pub position: [f32; 3],
    /// Look-at target.
    #[serde(default)]
    pub target: [f32; 3],
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Views", inline)]
#[serde(default)]
/// Preset camera views.
pub struct ViewOptions {
    /// Largest model dimension the standard views are scaled by.
    #[schemars(title = "Model Size", range(min = 1.0, max = 100.0), extend("step" = 0.5))]
    pub max_dim: f32,
    /// Additional or overriding named views.
    #[schemars(skip)]
    pub extra: Vec<NamedView>,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            max_dim: 14.0,
            extra: Vec::new(),
        }
    }
}

impl ViewOptions {
    /// Standard views for `max_dim`, then `extra` applied on top.
    #[must_use]
    pub fn presets(&self) -> ViewPresets {
        let mut presets = ViewPresets::standard(self.max_dim);
        for view in &self.extra {
            presets.insert(
                &view.name,
                ViewPreset::new(view.position.into(), view.target.into()),
            );
        }
        presets
    }
}
