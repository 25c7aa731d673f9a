//! # Starfield
//!
//! A rotating, twinkling 3D starfield for use as a full-window background,
//! with mouse parallax and optional background music.
//!
//! The crate is split into a pure core and the glue around it:
//!
//! - [`StarField`] generates the point cloud once: positions inside a
//!   sphere, sizes, pastel colors and twinkle phases.
//! - [`Driver`] holds the animation state and advances it one frame at a
//!   time, returning the [`FrameUniforms`] to render with.
//! - [`run`] opens a window, uploads the stars to the GPU and drives the
//!   loop; [`BackgroundAudio`] plays a random track alongside.
//!
//! ## Quick Start
//!
//! ```ignore
//! use starfield::prelude::*;
//!
//! fn main() -> Result<(), StarfieldError> {
//!     starfield::run(StarfieldConfig::default())
//! }
//! ```
//!
//! ## Testing without a window
//!
//! ```ignore
//! use rand::{rngs::SmallRng, SeedableRng};
//! use starfield::prelude::*;
//!
//! let stars = StarField::generate(&FieldConfig::default(), &mut SmallRng::seed_from_u64(1));
//! let mut driver = Driver::new(&DriverConfig::default(), 800, 600);
//! driver.on_cursor_moved(500.0, 350.0);
//! let uniforms = driver.step(1.0 / 60.0);
//! assert_eq!(uniforms.time, driver.time());
//! ```

pub mod audio;
pub mod camera;
pub mod config;
pub mod driver;
pub mod error;
pub mod field;
mod gpu;
pub mod input;
pub mod shader;
pub mod spawn;
pub mod time;
mod uniforms;
mod window;

pub use audio::BackgroundAudio;
pub use camera::Viewpoint;
pub use config::{AudioConfig, DriverConfig, FieldConfig, StarfieldConfig, WindowConfig};
pub use driver::{Drift, Driver};
pub use error::{AudioError, ConfigError, GpuError, StarfieldError};
pub use field::{RadialDistribution, Star, StarField};
pub use glam::{Vec2, Vec3};
pub use input::Pointer;
pub use shader::{twinkle_alpha, StarInstance};
pub use time::{Clock, TimeStep};
pub use uniforms::FrameUniforms;
pub use window::run;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use starfield::prelude::*;
/// ```
pub mod prelude {
    pub use crate::audio::BackgroundAudio;
    pub use crate::camera::Viewpoint;
    pub use crate::config::{AudioConfig, DriverConfig, FieldConfig, StarfieldConfig};
    pub use crate::driver::Driver;
    pub use crate::error::StarfieldError;
    pub use crate::field::{RadialDistribution, StarField};
    pub use crate::shader::twinkle_alpha;
    pub use crate::time::TimeStep;
    pub use crate::uniforms::FrameUniforms;
    pub use crate::{Vec2, Vec3};
}
