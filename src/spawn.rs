//! Random sampling helpers for star generation.
//!
//! [`SpawnContext`] wraps an injected RNG so that generation is reproducible
//! from a seed:
//!
//! ```ignore
//! use rand::{rngs::SmallRng, SeedableRng};
//!
//! let mut rng = SmallRng::seed_from_u64(7);
//! let mut ctx = SpawnContext::new(&mut rng);
//! let position = ctx.random_in_sphere(1000.0, RadialDistribution::Volume);
//! let color = ctx.random_hue(0.7, 0.8);
//! ```

use crate::field::RadialDistribution;
use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

/// Sampling context borrowed for the duration of a generation pass.
pub struct SpawnContext<'a, R: Rng> {
    rng: &'a mut R,
}

impl<'a, R: Rng> SpawnContext<'a, R> {
    /// Wrap an RNG.
    pub fn new(rng: &'a mut R) -> Self {
        Self { rng }
    }

    // ========== Random primitives ==========

    /// Random f32 in [0, 1).
    #[inline]
    pub fn random(&mut self) -> f32 {
        self.rng.gen()
    }

    /// Random f32 in [min, max). Returns `min` for an empty range.
    #[inline]
    pub fn random_range(&mut self, min: f32, max: f32) -> f32 {
        if min >= max {
            return min;
        }
        self.rng.gen_range(min..max)
    }

    /// Random angle in [0, 2π).
    #[inline]
    pub fn random_angle(&mut self) -> f32 {
        self.rng.gen_range(0.0..TAU)
    }

    // ========== Position helpers ==========

    /// Random point inside a sphere of given radius, centered at origin.
    ///
    /// The polar angle is drawn as `acos(u)` with `u` uniform in [-1, 1), so
    /// directions are uniform on the sphere with no clustering at the poles.
    /// The radial draw depends on `distribution`.
    pub fn random_in_sphere(&mut self, radius: f32, distribution: RadialDistribution) -> Vec3 {
        let r = match distribution {
            // Cube root for uniform volume distribution
            RadialDistribution::Volume => radius * self.random().cbrt(),
            RadialDistribution::Linear => radius * self.random(),
        };
        let theta = self.random_angle();
        let phi = self.rng.gen_range(-1.0f32..1.0).acos();

        Vec3::new(
            r * phi.sin() * theta.cos(),
            r * phi.sin() * theta.sin(),
            r * phi.cos(),
        )
    }

    // ========== Color helpers ==========

    /// Random color with given saturation and lightness (HSL model).
    ///
    /// Only the hue is randomized; high lightness gives a pastel palette.
    pub fn random_hue(&mut self, saturation: f32, lightness: f32) -> Vec3 {
        let hue = self.random();
        hsl_to_rgb(hue, saturation, lightness)
    }
}

/// Convert HSL to RGB.
///
/// * `h` - hue, wraps into [0, 1)
/// * `s` - saturation, clamped to [0, 1]
/// * `l` - lightness, clamped to [0, 1]
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Vec3 {
    let h = h.rem_euclid(1.0);
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);

    if s == 0.0 {
        return Vec3::splat(l);
    }

    let q = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Vec3::new(
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    )
}

fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * 6.0 * (2.0 / 3.0 - t)
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).abs().max_element() < 0.001
    }

    #[test]
    fn test_hsl_primaries() {
        assert!(close(hsl_to_rgb(0.0, 1.0, 0.5), Vec3::new(1.0, 0.0, 0.0)));
        assert!(close(hsl_to_rgb(1.0 / 3.0, 1.0, 0.5), Vec3::new(0.0, 1.0, 0.0)));
        assert!(close(hsl_to_rgb(2.0 / 3.0, 1.0, 0.5), Vec3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_hsl_gray_and_wrap() {
        assert!(close(hsl_to_rgb(0.42, 0.0, 0.3), Vec3::splat(0.3)));
        assert!(close(hsl_to_rgb(1.25, 0.7, 0.8), hsl_to_rgb(0.25, 0.7, 0.8)));
    }

    #[test]
    fn test_pastel_channels_stay_light() {
        // s = 0.7, l = 0.8 gives q = 0.94, p = 0.66
        for i in 0..100 {
            let c = hsl_to_rgb(i as f32 / 100.0, 0.7, 0.8);
            assert!(c.min_element() >= 0.66 - 0.001);
            assert!(c.max_element() <= 0.94 + 0.001);
        }
    }

    #[test]
    fn test_random_in_sphere_bounds() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut ctx = SpawnContext::new(&mut rng);
        for distribution in [RadialDistribution::Volume, RadialDistribution::Linear] {
            for _ in 0..500 {
                let pos = ctx.random_in_sphere(0.5, distribution);
                assert!(pos.length() <= 0.5 + 0.001);
            }
        }
    }

    #[test]
    fn test_random_range_empty() {
        let mut rng = SmallRng::seed_from_u64(2);
        let mut ctx = SpawnContext::new(&mut rng);
        assert_eq!(ctx.random_range(4.0, 4.0), 4.0);
        let v = ctx.random_range(3.0, 6.0);
        assert!((3.0..6.0).contains(&v));
    }
}
