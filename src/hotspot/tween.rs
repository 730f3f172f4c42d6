use crate::util::easing::EasingFunction;

/// Scale and opacity of a marker sprite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerVisual {
    /// Uniform scale factor.
    pub scale: f32,
    /// Opacity in `[0, 1]`.
    pub opacity: f32,
}

/// Rest and hover appearance, plus the tween length between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverStyle {
    /// Scale while hovered. Rest scale is always 1.
    pub hover_scale: f32,
    /// Opacity while hovered.
    pub hover_opacity: f32,
    /// Opacity at rest.
    pub base_opacity: f32,
    /// Tween length in seconds.
    pub duration: f32,
}

impl Default for HoverStyle {
    fn default() -> Self {
        Self {
            hover_scale: 1.3,
            hover_opacity: 1.0,
            base_opacity: 0.8,
            duration: 0.2,
        }
    }
}

impl HoverStyle {
    /// Appearance at rest.
    #[must_use]
    pub fn base(&self) -> MarkerVisual {
        MarkerVisual {
            scale: 1.0,
            opacity: self.base_opacity,
        }
    }

    /// Appearance while hovered.
    #[must_use]
    pub fn hovered(&self) -> MarkerVisual {
        MarkerVisual {
            scale: self.hover_scale,
            opacity: self.hover_opacity,
        }
    }
}

/// An eased tween between two marker appearances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverTween {
    from: MarkerVisual,
    to: MarkerVisual,
    elapsed: f32,
    duration: f32,
}

impl HoverTween {
    /// Start a tween. A non-positive duration finishes on the first advance.
    #[must_use]
    pub fn new(from: MarkerVisual, to: MarkerVisual, duration: f32) -> Self {
        Self {
            from,
            to,
            elapsed: 0.0,
            duration: duration.max(0.0),
        }
    }

    /// Advance by `dt` seconds and return the current appearance.
    pub fn advance(&mut self, dt: f32) -> MarkerVisual {
        self.elapsed += dt.max(0.0);
        if self.is_finished() {
            return self.to;
        }
        let t = EasingFunction::EaseOut.evaluate(self.elapsed / self.duration);
        MarkerVisual {
            scale: self.from.scale + (self.to.scale - self.from.scale) * t,
            opacity: self.from.opacity + (self.to.opacity - self.from.opacity) * t,
        }
    }

    /// Whether the end appearance has been reached.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}
