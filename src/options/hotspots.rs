use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::hotspot::{Hotspot, HoverStyle, InfoPayload};

/// Serialized form of one hotspot marker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HotspotEntry {
    /// Unique marker name.
    pub name: String,
    /// World-space anchor point.
    pub anchor: [f32; 3],
    /// Hit-test radius around the anchor.
    #[serde(default = "default_radius")]
    pub radius: f32,
    /// Info panel heading.
    pub title: String,
    /// Info panel text.
    #[serde(default)]
    pub body: String,
    /// Optional image shown in the info panel.
    #[serde(default)]
    pub image: Option<String>,
    /// Preset view to fly to when the marker is clicked.
    #[serde(default)]
    pub view: Option<String>,
}

fn default_radius() -> f32 {
    1.0
}

impl HotspotEntry {
    /// Build the runtime marker.
    #[must_use]
    pub fn to_hotspot(&self) -> Hotspot {
        Hotspot {
            name: self.name.clone(),
            anchor: self.anchor.into(),
            radius: self.radius,
            info: InfoPayload {
                title: self.title.clone(),
                body: self.body.clone(),
                image: self.image.clone(),
            },
            view: self.view.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Hotspots", inline)]
#[serde(default)]
/// Hotspot markers and their hover appearance.
pub struct HotspotOptions {
    /// Marker scale while hovered.
    #[schemars(title = "Hover Scale", range(min = 1.0, max = 2.0), extend("step" = 0.05))]
    pub hover_scale: f32,
    /// Marker opacity while hovered.
    #[schemars(title = "Hover Opacity", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub hover_opacity: f32,
    /// Marker opacity at rest.
    #[schemars(title = "Base Opacity", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub base_opacity: f32,
    /// Hover tween length in seconds.
    #[schemars(title = "Hover Duration", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub hover_duration: f32,
    /// Marker definitions.
    #[schemars(skip)]
    pub markers: Vec<HotspotEntry>,
}

impl Default for HotspotOptions {
    fn default() -> Self {
        Self {
            hover_scale: 1.3,
            hover_opacity: 1.0,
            base_opacity: 0.8,
            hover_duration: 0.2,
            markers: vec![
                HotspotEntry {
                    name: "wheel".into(),
                    anchor: [0.0, 0.0, 7.5],
                    radius: 1.0,
                    title: "Chariot Wheel".into(),
                    body: "One of the twenty-four carved wheels that turn the \
                           temple into the Sun's chariot; the spokes cast \
                           shadows that read as a sundial."
                        .into(),
                    image: None,
                    view: Some("wheelView".into()),
                },
                HotspotEntry {
                    name: "sanctum".into(),
                    anchor: [0.0, 6.0, 0.0],
                    radius: 1.5,
                    title: "Jagamohana".into(),
                    body: "The surviving audience hall with its stepped \
                           pyramidal roof."
                        .into(),
                    image: None,
                    view: Some("topView".into()),
                },
            ],
        }
    }
}

impl HotspotOptions {
    /// Hover appearance.
    #[must_use]
    pub fn style(&self) -> HoverStyle {
        HoverStyle {
            hover_scale: self.hover_scale,
            hover_opacity: self.hover_opacity,
            base_opacity: self.base_opacity,
            duration: self.hover_duration,
        }
    }

    /// Runtime markers, in definition order.
    #[must_use]
    pub fn hotspots(&self) -> Vec<Hotspot> {
        self.markers.iter().map(HotspotEntry::to_hotspot).collect()
    }
}
