//! Centralized viewer options with TOML preset support.
//!
//! Camera pose, orbit-control limits, transition timing, preset views,
//! the asset list, hotspot markers, and keybindings are consolidated here.
//! Options serialize to/from TOML so a viewer can be configured per model.

mod assets;
mod camera;
mod controls;
mod hotspots;
mod keybindings;
mod views;

use std::path::Path;

pub use assets::{AssetEntry, AssetOptions};
pub use camera::CameraOptions;
pub use controls::ControlOptions;
pub use hotspots::{HotspotEntry, HotspotOptions};
pub use keybindings::KeybindingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use views::{NamedView, ViewOptions};

pub use crate::camera::TransitionOptions;
use crate::error::VistaError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[controls]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema)]
#[serde(default)]
pub struct Options {
    /// Camera projection and starting pose.
    pub camera: CameraOptions,
    /// Orbit-control parameters.
    pub controls: ControlOptions,
    /// View transition timing.
    pub transition: TransitionOptions,
    /// Preset camera views.
    pub views: ViewOptions,
    /// Assets fetched at session start.
    #[schemars(skip)]
    pub assets: AssetOptions,
    /// Hotspot markers.
    pub hotspots: HotspotOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, VistaError> {
        let mut opts: Self = toml::from_str(content)
            .map_err(|e| VistaError::OptionsParse(e.to_string()))?;
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, VistaError> {
        let content = std::fs::read_to_string(path).map_err(VistaError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), VistaError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VistaError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VistaError::Io)?;
        }
        std::fs::write(path, content).map_err(VistaError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyAction;
    use crate::util::easing::EasingFunction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[transition]
duration = 2.0
easing = "ease-out"

[controls]
max_distance = 80.0
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.transition.duration, 2.0);
        assert_eq!(opts.transition.easing, EasingFunction::EaseOut);
        assert_eq!(opts.controls.max_distance, 80.0);
        // Everything else should be default
        assert_eq!(opts.controls.min_distance, 20.0);
        assert_eq!(opts.views.max_dim, 14.0);
        assert_eq!(opts.assets.entries.len(), 2);
        assert_eq!(
            opts.keybindings.lookup("Escape"),
            Some(KeyAction::ReturnToDefault)
        );
    }

    #[test]
    fn extra_views_and_markers_parse() {
        let toml_str = r#"
[views]
max_dim = 10.0

[[views.extra]]
name = "doorView"
position = [0.0, 2.0, 12.0]

[hotspots]
hover_scale = 1.5

[[hotspots.markers]]
name = "door"
anchor = [0.0, 1.0, 6.0]
title = "Door"
view = "doorView"
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        let presets = opts.views.presets();
        assert_eq!(presets.len(), 5);
        let door = presets.get("doorView").unwrap();
        assert_eq!(door.target, glam::Vec3::ZERO);

        let hotspots = opts.hotspots.hotspots();
        assert_eq!(hotspots.len(), 1);
        assert_eq!(hotspots[0].radius, 1.0);
        assert_eq!(hotspots[0].view.as_deref(), Some("doorView"));
        assert_eq!(opts.hotspots.style().hover_scale, 1.5);
    }

    #[test]
    fn bad_toml_is_an_options_error() {
        let err = Options::from_toml_str("[transition]\nduration = \"slow\"");
        assert!(matches!(err, Err(VistaError::OptionsParse(_))));
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir()
            .join(format!("vista-options-{}", std::process::id()));
        let path = dir.join("konark.toml");
        let mut opts = Options::default();
        opts.views.max_dim = 20.0;
        opts.save(&path).unwrap();

        assert_eq!(Options::load(&path).unwrap(), opts);
        assert_eq!(Options::list_presets(&dir), vec!["konark".to_owned()]);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("controls"));
        assert!(props.contains_key("transition"));
        assert!(props.contains_key("hotspots"));

        // Skipped sections should be absent
        assert!(!props.contains_key("assets"));
        assert!(!props.contains_key("keybindings"));

        let controls = &props["controls"]["properties"];
        assert!(controls.get("damping_factor").is_some());
        assert!(controls.get("min_polar_angle").is_none());
    }
}
