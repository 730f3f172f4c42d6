use glam::{Mat4, Vec2, Vec3, Vec4};

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

/// World-space ray with a normalized direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Ray start point.
    pub origin: Vec3,
    /// Unit direction.
    pub dir: Vec3,
}

impl Ray {
    /// Point at parameter `t` along the ray.
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(15.0, 15.0, 30.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 16.0 / 9.0,
            fovy: 75.0,
            znear: 0.1,
            zfar: 1000.0,
        }
    }
}

impl Camera {
    /// Orient the camera toward `target` from its current eye position.
    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Unit vector from eye toward target.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).normalize_or_zero()
    }

    /// Up vector usable for a view matrix. Falls back to world Z when the
    /// view direction is parallel to `up` (looking straight down).
    fn safe_up(&self) -> Vec3 {
        let forward = self.forward();
        if forward.cross(self.up).length_squared() < 1e-8 {
            Vec3::NEG_Z
        } else {
            self.up
        }
    }

    /// View matrix for the current eye and target.
    #[must_use]
    pub fn build_view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.safe_up())
    }

    /// Projection matrix with a [0,1] depth range.
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * self.build_view()
    }

    /// Update the aspect ratio after a viewport resize. Zero-sized
    /// viewports (minimized windows) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Convert normalized device coordinates (x right, y up, both in
    /// `[-1, 1]`) to a world-space ray.
    #[must_use]
    pub fn ndc_to_ray(&self, ndc: Vec2) -> Ray {
        let inv_view_proj = self.build_matrix().inverse();

        let world_near = inv_view_proj * Vec4::new(ndc.x, ndc.y, 0.0, 1.0);
        let world_far = inv_view_proj * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);

        let origin = world_near.truncate() / world_near.w;
        let far = world_far.truncate() / world_far.w;

        Ray {
            origin,
            dir: (far - origin).normalize(),
        }
    }
}

/// Convert a pixel position (origin top-left) to normalized device
/// coordinates.
#[must_use]
pub fn pixel_to_ndc(pixel: Vec2, viewport: Vec2) -> Vec2 {
    Vec2::new(
        (pixel.x / viewport.x) * 2.0 - 1.0,
        1.0 - (pixel.y / viewport.y) * 2.0,
    )
}
