use bytemuck::{Pod, Zeroable};

pub const SHADER_SOURCE: &str = include_str!("shader.wgsl");

/// Twinkle amplitude around the mean brightness.
pub const TWINKLE_AMPLITUDE: f32 = 0.3;
/// Mean star brightness.
pub const TWINKLE_BASE: f32 = 0.7;

/// Per-star vertex data, one record per instance.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct StarInstance {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 3],
    pub phase: f32,
}

/// Brightness of a star with the given phase at `time`.
///
/// Mirrors the vertex shader: `sin(time + phase) * 0.3 + 0.7`, which stays
/// within [0.4, 1.0].
#[inline]
pub fn twinkle_alpha(time: f32, phase: f32) -> f32 {
    (time + phase).sin() * TWINKLE_AMPLITUDE + TWINKLE_BASE
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, TAU};

    #[test]
    fn test_twinkle_at_rest() {
        assert!((twinkle_alpha(0.0, 0.0) - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_twinkle_extremes() {
        assert!((twinkle_alpha(FRAC_PI_2, 0.0) - 1.0).abs() < 1e-6);
        assert!((twinkle_alpha(0.0, 3.0 * FRAC_PI_2) - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_twinkle_bounds_and_period() {
        for i in 0..400 {
            let time = i as f32 * 0.37;
            let phase = (i % 17) as f32 / 17.0 * TAU;
            let alpha = twinkle_alpha(time, phase);
            assert!(alpha >= 0.4 - 1e-6 && alpha <= 1.0 + 1e-6);
            assert!((alpha - twinkle_alpha(time + TAU, phase)).abs() < 1e-4);
        }
    }

    #[test]
    fn test_instance_layout() {
        assert_eq!(std::mem::size_of::<StarInstance>(), 32);
    }
}
