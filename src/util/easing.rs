//! Easing functions for camera and hover tweens.
//!
//! Every curve maps `[0, 1]` onto `[0, 1]` with exact endpoints, so a
//! transition sampled at `t = 1` lands on its end value without drift.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for interpolation curves.
///
/// Serialized by curve id: `"linear"`, `"ease-in"`, `"ease-out"`,
/// `"ease-in-out"`, `"cubic-in-out"`, or a `cubic-hermite` table.
#[derive(
    Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    EaseIn,
    /// Quadratic ease-out (fast start, slow end).
    EaseOut,
    /// Quadratic ease-in-out: slow at both ends, symmetric about `t = 0.5`.
    EaseInOut,
    /// Cubic ease-in-out, a steeper middle than [`Self::EaseInOut`].
    CubicInOut,
    /// Cubic Hermite interpolation with configurable control points.
    /// Formula: c1·3t(1-t)² + c2·3(1-t)t² + t³
    CubicHermite {
        /// First control value.
        c1: f32,
        /// Second control value.
        c2: f32,
    },
}

impl EasingFunction {
    /// Default easing for view transitions.
    pub const DEFAULT: EasingFunction = EasingFunction::EaseInOut;

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::EaseIn => t * t,
            EasingFunction::EaseOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u / 2.0
                }
            }
            EasingFunction::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
            EasingFunction::CubicHermite { c1, c2 } => {
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
        }
    }

    /// Curve id used in options files and host bindings.
    #[must_use]
    pub fn id(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseIn => "ease-in",
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
            Self::CubicInOut => "cubic-in-out",
            Self::CubicHermite { .. } => "cubic-hermite",
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for EasingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error returned when parsing an unrecognized curve id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEasing(
    /// The unrecognized id.
    pub String,
);

impl fmt::Display for UnknownEasing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown easing curve: {}", self.0)
    }
}

impl std::error::Error for UnknownEasing {}

impl FromStr for EasingFunction {
    type Err = UnknownEasing;

    /// Parses a curve id. The GSAP-style aliases `power2.inOut` and
    /// `power3.inOut` are accepted too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" | "none" => Ok(Self::Linear),
            "ease-in" | "power2.in" => Ok(Self::EaseIn),
            "ease-out" | "power2.out" => Ok(Self::EaseOut),
            "ease-in-out" | "power2.inOut" => Ok(Self::EaseInOut),
            "cubic-in-out" | "power3.inOut" => Ok(Self::CubicInOut),
            other => Err(UnknownEasing(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingFunction; 6] = [
        EasingFunction::Linear,
        EasingFunction::EaseIn,
        EasingFunction::EaseOut,
        EasingFunction::EaseInOut,
        EasingFunction::CubicInOut,
        EasingFunction::CubicHermite { c1: 0.33, c2: 1.0 },
    ];

    #[test]
    fn test_linear_endpoints() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(0.0), 0.0);
        assert_eq!(linear.evaluate(0.5), 0.5);
        assert_eq!(linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_endpoints_are_exact() {
        for f in ALL {
            assert_eq!(f.evaluate(0.0), 0.0, "{f} at 0");
            assert!((f.evaluate(1.0) - 1.0).abs() < 1e-6, "{f} at 1");
        }
        assert_eq!(EasingFunction::EaseInOut.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_ease_in_out_is_symmetric() {
        let f = EasingFunction::EaseInOut;
        assert_eq!(f.evaluate(0.5), 0.5);
        assert!((f.evaluate(0.25) - 0.125).abs() < 1e-6);
        assert!((f.evaluate(0.75) - 0.875).abs() < 1e-6);
        assert!(f.evaluate(0.1) < 0.1, "slow start");
        assert!(f.evaluate(0.9) > 0.9, "slow finish");
    }

    #[test]
    fn test_monotonic_without_overshoot() {
        for f in [
            EasingFunction::Linear,
            EasingFunction::EaseIn,
            EasingFunction::EaseOut,
            EasingFunction::EaseInOut,
            EasingFunction::CubicInOut,
        ] {
            let mut prev = 0.0;
            for i in 0..=100 {
                let v = f.evaluate(i as f32 / 100.0);
                assert!(v >= prev, "{f} decreased at step {i}");
                assert!(v <= 1.0, "{f} overshot at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn test_input_clamping() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(-0.5), 0.0);
        assert_eq!(linear.evaluate(1.5), 1.0);
        assert_eq!(EasingFunction::EaseInOut.evaluate(2.0), 1.0);
    }

    #[test]
    fn test_parse_curve_ids() {
        assert_eq!(
            "ease-in-out".parse::<EasingFunction>(),
            Ok(EasingFunction::EaseInOut)
        );
        assert_eq!(
            "power2.inOut".parse::<EasingFunction>(),
            Ok(EasingFunction::EaseInOut)
        );
        assert!("bounce".parse::<EasingFunction>().is_err());
    }

    #[test]
    fn test_serde_uses_curve_id() {
        let json = serde_json::to_string(&EasingFunction::EaseInOut).unwrap();
        assert_eq!(json, "\"ease-in-out\"");
        let parsed: EasingFunction = serde_json::from_str("\"ease-out\"").unwrap();
        assert_eq!(parsed, EasingFunction::EaseOut);
    }

    #[test]
    fn test_default_is_ease_in_out() {
        assert_eq!(EasingFunction::default(), EasingFunction::EaseInOut);
    }
}
