use std::f32::consts::PI;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Controls", inline)]
#[serde(default)]
/// Orbit-control limits, damping, and auto-rotation.
pub struct ControlOptions {
    /// Smooth drag motion over several frames.
    #[schemars(title = "Damping")]
    pub enable_damping: bool,
    /// Fraction of queued motion applied per frame when damping.
    #[schemars(title = "Damping Factor", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub damping_factor: f32,
    /// Closest allowed orbit distance.
    #[schemars(title = "Min Distance", range(min = 1.0, max = 100.0), extend("step" = 1.0))]
    pub min_distance: f32,
    /// Farthest allowed orbit distance.
    #[schemars(title = "Max Distance", range(min = 1.0, max = 200.0), extend("step" = 1.0))]
    pub max_distance: f32,
    /// Smallest polar angle from +Y, in radians.
    #[schemars(skip)]
    pub min_polar_angle: f32,
    /// Largest polar angle from +Y, in radians.
    #[schemars(skip)]
    pub max_polar_angle: f32,
    /// Turntable rotation at session start.
    #[schemars(title = "Auto Rotate")]
    pub auto_rotate: bool,
    /// Turntable speed; 1.0 is one revolution per minute.
    #[schemars(title = "Auto Rotate Speed", range(min = 0.0, max = 5.0), extend("step" = 0.05))]
    pub auto_rotate_speed: f32,
    /// Drag rotation in radians per pixel.
    #[schemars(title = "Rotate Speed", range(min = 0.001, max = 0.05), extend("step" = 0.001))]
    pub rotate_speed: f32,
    /// Zoom sensitivity multiplier.
    #[schemars(title = "Zoom Speed", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub zoom_speed: f32,
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
            enable_damping: true,
            damping_factor: 0.05,
            min_distance: 20.0,
            max_distance: 50.0,
            min_polar_angle: PI / 12.0,
            max_polar_angle: PI / 2.0 - PI / 12.0,
            auto_rotate: true,
            auto_rotate_speed: 0.1,
            rotate_speed: 0.005,
            zoom_speed: 0.1,
        }
    }
}
