//! Animation driver: the per-frame update of the starfield.
//!
//! [`Driver`] owns all mutable animation state: the twinkle clock, the
//! field's orientation, the viewpoint and the pointer. The window loop calls
//! [`Driver::step`] once per display refresh and submits the returned
//! uniforms; nothing here touches the GPU, so the whole update can be
//! exercised in tests without a rendering context.
//!
//! # Example
//!
//! ```ignore
//! let mut driver = Driver::new(&DriverConfig::default(), 800, 600);
//! driver.on_cursor_moved(500.0, 350.0);
//! let uniforms = driver.step(1.0 / 60.0);
//! ```

use crate::camera::Viewpoint;
use crate::config::DriverConfig;
use crate::input::Pointer;
use crate::time::{Clock, TimeStep};
use crate::uniforms::FrameUniforms;
use glam::{EulerRot, Mat4, Vec2};

/// Accumulated rotation of the star field.
///
/// Angles grow without bound; the rotation matrix consumes them modulo 2π.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drift {
    /// Rotation about X, radians.
    pub x: f32,
    /// Rotation about Y, radians.
    pub y: f32,
    rate_x: f32,
    rate_y: f32,
}

impl Drift {
    pub fn new(rate_x: f32, rate_y: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            rate_x,
            rate_y,
        }
    }

    /// Add `frames` worth of rotation on both axes.
    #[inline]
    pub fn advance(&mut self, frames: f32) {
        self.x += self.rate_x * frames;
        self.y += self.rate_y * frames;
    }

    /// Object-to-world transform of the field (XYZ Euler order).
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_euler(EulerRot::XYZ, self.x, self.y, 0.0)
    }
}

/// Easing factor for `frames` frames of a per-frame `factor`.
///
/// Compounds as `1 - (1 - factor)^frames` so that, for any split of time
/// into steps, the camera ends up at the same place.
#[inline]
fn compound_factor(factor: f32, frames: f32) -> f32 {
    if frames == 1.0 {
        factor
    } else {
        1.0 - (1.0 - factor).powf(frames)
    }
}

/// Explicit animation state, stepped once per frame.
#[derive(Debug, Clone)]
pub struct Driver {
    clock: Clock,
    drift: Drift,
    viewpoint: Viewpoint,
    pointer: Pointer,
    viewport: Vec2,
    easing: f32,
    size_attenuation: f32,
    timing: TimeStep,
}

impl Driver {
    /// Initial state for a `width` x `height` viewport.
    pub fn new(config: &DriverConfig, width: u32, height: u32) -> Self {
        let mut viewpoint = Viewpoint::new(
            config.camera_distance,
            config.fov_degrees,
            config.near,
            config.far,
            1.0,
        );
        viewpoint.set_viewport(width, height);

        Self {
            clock: Clock::new(config.time_step),
            drift: Drift::new(config.rotation_x, config.rotation_y),
            viewpoint,
            pointer: Pointer::new(width, height),
            viewport: Vec2::new(width as f32, height as f32),
            easing: config.easing,
            size_attenuation: config.size_attenuation,
            timing: config.timing,
        }
    }

    /// Advance one display frame and return the uniforms to render it with.
    ///
    /// `delta_secs` is the wall-clock time since the previous call. It only
    /// matters under [`TimeStep::PerSecond`]; per-frame timing ignores it.
    pub fn step(&mut self, delta_secs: f32) -> FrameUniforms {
        let frames = self.timing.frames(delta_secs);

        self.clock.advance(frames);
        self.drift.advance(frames);

        let factor = compound_factor(self.easing, frames);
        self.viewpoint.ease_toward(self.pointer.parallax_target(), factor);

        self.uniforms()
    }

    /// Uniforms for the current state, without advancing it.
    pub fn uniforms(&self) -> FrameUniforms {
        FrameUniforms::new(
            self.viewpoint.view_matrix() * self.drift.model_matrix(),
            self.viewpoint.projection_matrix(),
            self.viewport,
            self.clock.value(),
            self.size_attenuation,
        )
    }

    /// Record a cursor position in window pixels.
    pub fn on_cursor_moved(&mut self, x: f64, y: f64) {
        self.pointer.on_cursor_moved(x, y);
    }

    /// Set the window's physical-to-logical pixel ratio for pointer input.
    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.pointer.set_scale_factor(scale_factor);
    }

    /// Track a new window size: pointer centre, aspect ratio and viewport.
    pub fn on_resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.pointer.on_resize(width, height);
        self.viewpoint.set_viewport(width, height);
        self.viewport = Vec2::new(width as f32, height as f32);
    }

    pub(crate) fn pointer_mut(&mut self) -> &mut Pointer {
        &mut self.pointer
    }

    /// Current twinkle time.
    #[inline]
    pub fn time(&self) -> f32 {
        self.clock.value()
    }

    /// Number of steps taken.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.clock.frame()
    }

    pub fn drift(&self) -> &Drift {
        &self.drift
    }

    pub fn viewpoint(&self) -> &Viewpoint {
        &self.viewpoint
    }

    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn driver() -> Driver {
        Driver::new(&DriverConfig::default(), 800, 600)
    }

    #[test]
    fn test_initial_state() {
        let d = driver();
        assert_eq!(d.time(), 0.0);
        assert_eq!(d.viewpoint().position, Vec3::new(0.0, 0.0, 400.0));
        assert!((d.viewpoint().aspect - 800.0 / 600.0).abs() < 1e-6);
    }

    #[test]
    fn test_step_advances_time_and_drift() {
        let mut d = driver();
        let uniforms = d.step(0.0);

        assert!((d.time() - 0.02).abs() < 1e-7);
        assert_eq!(uniforms.time, d.time());
        assert!((d.drift().x - 0.0002).abs() < 1e-9);
        assert!((d.drift().y - 0.0005).abs() < 1e-9);
    }

    #[test]
    fn test_centred_pointer_keeps_camera_still() {
        let mut d = driver();
        for _ in 0..100 {
            d.step(1.0 / 60.0);
        }
        assert_eq!(d.viewpoint().position, Vec3::new(0.0, 0.0, 400.0));
    }

    #[test]
    fn test_compound_factor() {
        assert_eq!(compound_factor(0.005, 1.0), 0.005);
        assert_eq!(compound_factor(0.005, 0.0), 0.0);

        // Two frames at once equal two single frames
        let two = compound_factor(0.005, 2.0);
        let expected = 1.0 - 0.995f32 * 0.995;
        assert!((two - expected).abs() < 1e-6);
    }

    #[test]
    fn test_resize_updates_aspect_and_centre() {
        let mut d = driver();
        d.on_resize(1000, 500);
        assert!((d.viewpoint().aspect - 2.0).abs() < 1e-6);
        assert_eq!(d.uniforms().viewport, [1000.0, 500.0]);

        d.on_cursor_moved(500.0, 250.0);
        assert_eq!(d.pointer().offset(), Vec2::ZERO);

        // Minimized windows report zero size
        d.on_resize(0, 0);
        assert_eq!(d.uniforms().viewport, [1000.0, 500.0]);
    }
}
