//! Per-frame uniform block shared by every star.
//!
//! The layout matches the `Uniforms` struct in `shader.wgsl`:
//!
//! | field              | offset | size |
//! |--------------------|--------|------|
//! | `model_view`       | 0      | 64   |
//! | `projection`       | 64     | 64   |
//! | `viewport`         | 128    | 8    |
//! | `time`             | 136    | 4    |
//! | `size_attenuation` | 140    | 4    |

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct FrameUniforms {
    pub model_view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    /// Render target size in pixels.
    pub viewport: [f32; 2],
    /// Twinkle time accumulator.
    pub time: f32,
    /// Pixel size numerator: a star of size `s` at view depth `d` covers
    /// `s * size_attenuation / d` pixels.
    pub size_attenuation: f32,
}

impl FrameUniforms {
    pub fn new(
        model_view: Mat4,
        projection: Mat4,
        viewport: Vec2,
        time: f32,
        size_attenuation: f32,
    ) -> Self {
        Self {
            model_view: model_view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
            viewport: viewport.max(Vec2::ONE).to_array(),
            time,
            size_attenuation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_size_is_16_aligned() {
        let size = std::mem::size_of::<FrameUniforms>();
        assert_eq!(size, 144);
        assert_eq!(size % 16, 0);
    }

    #[test]
    fn test_viewport_never_zero() {
        let u = FrameUniforms::new(Mat4::IDENTITY, Mat4::IDENTITY, Vec2::ZERO, 0.0, 300.0);
        assert_eq!(u.viewport, [1.0, 1.0]);
    }
}
