//! Perspective viewpoint that drifts toward the pointer and always faces
//! the origin.

use glam::{Mat4, Vec2, Vec3};

/// Move `current` a fraction `factor` of the way to `target`.
///
/// Repeated application converges on `target` and never overshoots while
/// `factor` is in (0, 1].
#[inline]
pub fn ease_toward(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

/// Camera position and projection.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewpoint {
    /// World-space camera position.
    pub position: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Width / height.
    pub aspect: f32,
    /// Near clip distance.
    pub near: f32,
    /// Far clip distance.
    pub far: f32,
}

impl Viewpoint {
    /// Camera on the +Z axis at `distance`, looking at the origin.
    pub fn new(distance: f32, fov_degrees: f32, near: f32, far: f32, aspect: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, distance),
            target: Vec3::ZERO,
            fov_y: fov_degrees.to_radians(),
            aspect,
            near,
            far,
        }
    }

    /// Ease X and Y toward `goal`, each axis independently. Z is untouched.
    pub fn ease_toward(&mut self, goal: Vec2, factor: f32) {
        self.position.x = ease_toward(self.position.x, goal.x, factor);
        self.position.y = ease_toward(self.position.y, goal.y, factor);
    }

    /// Update the aspect ratio for a new viewport. Zero-height sizes are ignored.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Calculate the view matrix for rendering.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    /// Calculate the projection matrix for rendering.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }
}

impl Default for Viewpoint {
    fn default() -> Self {
        Self::new(400.0, 75.0, 1.0, 2000.0, 16.0 / 9.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_converges_without_overshoot() {
        let mut x = 0.0;
        let mut last_gap = f32::INFINITY;
        for _ in 0..5000 {
            x = ease_toward(x, 100.0, 0.005);
            assert!(x <= 100.0);
            let gap = 100.0 - x;
            assert!(gap <= last_gap);
            last_gap = gap;
        }
        assert!(last_gap < 0.01);
    }

    #[test]
    fn test_full_factor_lands_on_target() {
        assert_eq!(ease_toward(3.0, -7.0, 1.0), -7.0);
    }

    #[test]
    fn test_view_faces_origin() {
        let mut view = Viewpoint::default();
        view.position = Vec3::new(120.0, -40.0, 400.0);

        // The origin must land on the view axis (-Z in view space).
        let origin = view.view_matrix().transform_point3(Vec3::ZERO);
        assert!(origin.x.abs() < 1e-3);
        assert!(origin.y.abs() < 1e-3);
        assert!(origin.z < 0.0);
    }

    #[test]
    fn test_set_viewport() {
        let mut view = Viewpoint::default();
        view.set_viewport(800, 400);
        assert_eq!(view.aspect, 2.0);

        view.set_viewport(800, 0);
        assert_eq!(view.aspect, 2.0);
    }
}
