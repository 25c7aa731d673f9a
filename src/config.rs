//! Configuration for the starfield.
//!
//! Every value has a default, so a JSON file only needs the keys it
//! changes:
//!
//! ```json
//! {
//!     "field": { "count": 5000, "distribution": "linear", "seed": 7 },
//!     "driver": { "timing": { "per_second": { "reference_fps": 60.0 } } },
//!     "audio": { "volume": 0.1 }
//! }
//! ```

use crate::error::ConfigError;
use crate::field::RadialDistribution;
use crate::time::TimeStep;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Star field generation parameters.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FieldConfig {
    /// Number of stars.
    pub count: u32,
    /// Radius of the sphere containing every star.
    pub radius: f32,
    pub size_min: f32,
    pub size_max: f32,
    /// HSL saturation shared by all stars.
    pub saturation: f32,
    /// HSL lightness shared by all stars.
    pub lightness: f32,
    pub distribution: RadialDistribution,
    /// RNG seed. A random seed is drawn (and logged) when absent.
    pub seed: Option<u64>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: 3000,
            radius: 1000.0,
            size_min: 3.0,
            size_max: 6.0,
            saturation: 0.7,
            lightness: 0.8,
            distribution: RadialDistribution::Volume,
            seed: None,
        }
    }
}

/// Animation driver parameters. Increments are per frame unless `timing`
/// says otherwise.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DriverConfig {
    /// Twinkle time added each frame.
    pub time_step: f32,
    /// Field rotation about X per frame, radians.
    pub rotation_x: f32,
    /// Field rotation about Y per frame, radians.
    pub rotation_y: f32,
    /// Fraction of the remaining distance the camera covers per frame.
    pub easing: f32,
    /// Initial camera distance on +Z.
    pub camera_distance: f32,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Point-size attenuation numerator, in pixels.
    pub size_attenuation: f32,
    pub timing: TimeStep,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            time_step: 0.02,
            rotation_x: 0.0002,
            rotation_y: 0.0005,
            easing: 0.005,
            camera_distance: 400.0,
            fov_degrees: 75.0,
            near: 1.0,
            far: 2000.0,
            size_attenuation: 300.0,
            timing: TimeStep::PerFrame,
        }
    }
}

/// Background music.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AudioConfig {
    pub enabled: bool,
    pub volume: f32,
    /// One of these is picked at random on startup.
    pub tracks: Vec<PathBuf>,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            volume: 0.3,
            tracks: vec![
                PathBuf::from("audio/windows96.mp3"),
                PathBuf::from("audio/september.mp3"),
                PathBuf::from("audio/home.mp3"),
            ],
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Starfield".into(),
            width: 1280,
            height: 720,
        }
    }
}

/// Complete starfield configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StarfieldConfig {
    pub field: FieldConfig,
    pub driver: DriverConfig,
    pub audio: AudioConfig,
    pub window: WindowConfig,
}

impl StarfieldConfig {
    /// Load and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Parse and validate a JSON config string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Reject values the generator or driver cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let f = &self.field;
        if f.count == 0 {
            return Err(ConfigError::Invalid("field.count must be at least 1".into()));
        }
        if !(f.radius > 0.0) {
            return Err(ConfigError::Invalid("field.radius must be positive".into()));
        }
        if !(f.size_min > 0.0 && f.size_min <= f.size_max) {
            return Err(ConfigError::Invalid(
                "field sizes must satisfy 0 < size_min <= size_max".into(),
            ));
        }

        let d = &self.driver;
        // NaN fails these comparisons and is rejected with them
        if !(d.time_step >= 0.0) {
            return Err(ConfigError::Invalid("driver.time_step must be non-negative".into()));
        }
        if !(d.rotation_x >= 0.0 && d.rotation_y >= 0.0) {
            return Err(ConfigError::Invalid("driver rotation rates must be non-negative".into()));
        }
        if !(d.easing > 0.0 && d.easing <= 1.0) {
            return Err(ConfigError::Invalid("driver.easing must be in (0, 1]".into()));
        }
        if !(d.near > 0.0 && d.near < d.far) {
            return Err(ConfigError::Invalid("driver clip planes must satisfy 0 < near < far".into()));
        }
        if !(d.fov_degrees > 0.0 && d.fov_degrees < 180.0) {
            return Err(ConfigError::Invalid("driver.fov_degrees must be in (0, 180)".into()));
        }
        if let TimeStep::PerSecond { reference_fps } = d.timing {
            if !(reference_fps > 0.0) {
                return Err(ConfigError::Invalid("timing.reference_fps must be positive".into()));
            }
        }

        if !(0.0..=1.0).contains(&self.audio.volume) {
            return Err(ConfigError::Invalid("audio.volume must be in [0, 1]".into()));
        }
        Ok(())
    }
}
