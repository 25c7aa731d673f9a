//! The star field: a fixed-size point cloud generated once at startup.
//!
//! Attributes are stored as parallel arrays (position, size, color, phase),
//! one entry per star, in generation order. The field is immutable after
//! [`StarField::generate`]; the renderer uploads it once via
//! [`StarField::to_gpu`].
//!
//! # Example
//!
//! ```ignore
//! use rand::{rngs::SmallRng, SeedableRng};
//!
//! let mut rng = SmallRng::seed_from_u64(42);
//! let stars = StarField::generate(&FieldConfig::default(), &mut rng);
//! assert_eq!(stars.len(), 3000);
//! ```

use crate::config::FieldConfig;
use crate::shader::StarInstance;
use crate::spawn::SpawnContext;
use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// How star distances from the centre are sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RadialDistribution {
    /// Uniform by volume (`r = R * cbrt(u)`); density is constant
    /// throughout the sphere.
    #[default]
    Volume,
    /// Uniform in radius (`r = R * u`); stars crowd towards the centre.
    Linear,
}

/// A single star's attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub position: Vec3,
    pub size: f32,
    pub color: Vec3,
    pub phase: f32,
}

/// Fixed-cardinality point cloud.
#[derive(Debug, Clone)]
pub struct StarField {
    positions: Vec<Vec3>,
    sizes: Vec<f32>,
    colors: Vec<Vec3>,
    phases: Vec<f32>,
}

impl StarField {
    /// Generate `config.count` stars inside a sphere of `config.radius`.
    ///
    /// All randomness comes from `rng`; the same seed yields the same field.
    pub fn generate<R: Rng>(config: &FieldConfig, rng: &mut R) -> Self {
        let count = config.count as usize;
        let mut ctx = SpawnContext::new(rng);

        let mut positions = Vec::with_capacity(count);
        let mut sizes = Vec::with_capacity(count);
        let mut colors = Vec::with_capacity(count);
        let mut phases = Vec::with_capacity(count);

        for _ in 0..count {
            positions.push(ctx.random_in_sphere(config.radius, config.distribution));
            sizes.push(ctx.random_range(config.size_min, config.size_max));
            colors.push(ctx.random_hue(config.saturation, config.lightness));
            // Phase offset desynchronizes the twinkle
            phases.push(ctx.random_angle());
        }

        Self {
            positions,
            sizes,
            colors,
            phases,
        }
    }

    /// Number of stars.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    pub fn colors(&self) -> &[Vec3] {
        &self.colors
    }

    pub fn phases(&self) -> &[f32] {
        &self.phases
    }

    /// Positions as a flat `[x, y, z, x, y, z, ...]` slice.
    pub fn position_components(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Colors as a flat `[r, g, b, r, g, b, ...]` slice.
    pub fn color_components(&self) -> &[f32] {
        bytemuck::cast_slice(&self.colors)
    }

    /// Attributes of the star at `index`.
    pub fn star(&self, index: usize) -> Option<Star> {
        Some(Star {
            position: *self.positions.get(index)?,
            size: self.sizes[index],
            color: self.colors[index],
            phase: self.phases[index],
        })
    }

    /// Iterate over all stars in generation order.
    pub fn iter(&self) -> impl Iterator<Item = Star> + '_ {
        (0..self.len()).filter_map(|i| self.star(i))
    }

    /// Interleave the attribute arrays into per-instance GPU records.
    pub fn to_gpu(&self) -> Vec<StarInstance> {
        self.iter()
            .map(|s| StarInstance {
                position: s.position.to_array(),
                size: s.size,
                color: s.color.to_array(),
                phase: s.phase,
            })
            .collect()
    }
}
