use glam::Vec3;

/// Linear interpolation between two Vec3 positions.
///
/// Returns `end` exactly at `t == 1.0` so settled transitions do not carry
/// floating-point residue from `start + (end - start)`.
#[inline]
#[must_use]
pub fn lerp_vec3(t: f32, start: Vec3, end: Vec3) -> Vec3 {
    if t >= 1.0 {
        return end;
    }
    start + (end - start) * t
}

/// Whether every component of `v` is finite.
#[inline]
#[must_use]
pub fn is_finite_vec3(v: Vec3) -> bool {
    v.is_finite()
}

/// Center and largest extent of an axis-aligned bounding box.
///
/// Used to frame a freshly loaded model: presets are scaled by the returned
/// extent and the model is offset by the negated center.
#[must_use]
pub fn frame_bounds(min: Vec3, max: Vec3) -> (Vec3, f32) {
    let center = (min + max) * 0.5;
    let size = max - min;
    (center, size.max_element())
}
