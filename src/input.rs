//! Pointer tracking for mouse parallax.
//!
//! [`Pointer`] keeps the last cursor offset from the window centre, in
//! logical pixels, so parallax strength does not depend on display density. The event handler writes it, the driver reads it once per frame;
//! the latest write wins.

use glam::Vec2;
use winit::event::WindowEvent;

/// Last observed cursor offset from the window centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    offset: Vec2,
    /// Half the window size in physical pixels.
    half_size: Vec2,
    scale_factor: f32,
}

impl Default for Pointer {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            half_size: Vec2::ZERO,
            scale_factor: 1.0,
        }
    }
}

impl Pointer {
    /// Create a pointer for a window of the given size, resting at the centre.
    pub fn new(width: u32, height: u32) -> Self {
        let mut pointer = Self::default();
        pointer.on_resize(width, height);
        pointer
    }

    /// Offset from the window centre in logical pixels. X grows right, Y
    /// grows down.
    #[inline]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Camera target for this pointer: vertical axis inverted.
    #[inline]
    pub fn parallax_target(&self) -> Vec2 {
        Vec2::new(self.offset.x, -self.offset.y)
    }

    #[inline]
    pub fn half_size(&self) -> Vec2 {
        self.half_size
    }

    #[inline]
    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    /// Record a cursor position in physical window pixels.
    pub fn on_cursor_moved(&mut self, x: f64, y: f64) {
        self.offset = (Vec2::new(x as f32, y as f32) - self.half_size) / self.scale_factor;
    }

    /// Track the window's physical-to-logical pixel ratio. Non-positive
    /// values are ignored.
    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        if scale_factor > 0.0 {
            self.scale_factor = scale_factor as f32;
        }
    }

    /// Track a new window size in physical pixels.
    ///
    /// The stored offset keeps its value until the cursor moves again.
    pub fn on_resize(&mut self, width: u32, height: u32) {
        self.half_size = Vec2::new(width as f32, height as f32) * 0.5;
    }

    /// Process a winit window event: cursor motion and scale changes.
    /// Resizes go through [`Driver::on_resize`](crate::Driver::on_resize).
    pub(crate) fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.on_cursor_moved(position.x, position.y);
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.set_scale_factor(*scale_factor);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centre_is_zero() {
        let mut pointer = Pointer::new(800, 600);
        pointer.on_cursor_moved(400.0, 300.0);
        assert_eq!(pointer.offset(), Vec2::ZERO);
    }

    #[test]
    fn test_offset_and_inverted_target() {
        let mut pointer = Pointer::new(800, 600);
        pointer.on_cursor_moved(500.0, 350.0);

        assert_eq!(pointer.offset(), Vec2::new(100.0, 50.0));
        assert_eq!(pointer.parallax_target(), Vec2::new(100.0, -50.0));
    }

    #[test]
    fn test_resize_moves_centre() {
        let mut pointer = Pointer::new(800, 600);
        pointer.on_resize(1000, 1000);
        pointer.on_cursor_moved(500.0, 500.0);

        assert_eq!(pointer.half_size(), Vec2::new(500.0, 500.0));
        assert_eq!(pointer.offset(), Vec2::ZERO);
    }

    #[test]
    fn test_offset_is_logical_on_dense_display() {
        // 800x600 logical window at 2x
        let mut pointer = Pointer::new(1600, 1200);
        pointer.set_scale_factor(2.0);
        pointer.on_cursor_moved(1000.0, 700.0);

        assert_eq!(pointer.offset(), Vec2::new(100.0, 50.0));
        assert_eq!(pointer.parallax_target(), Vec2::new(100.0, -50.0));
    }

    #[test]
    fn test_invalid_scale_ignored() {
        let mut pointer = Pointer::new(800, 600);
        pointer.set_scale_factor(0.0);
        assert_eq!(pointer.scale_factor(), 1.0);
    }
}
