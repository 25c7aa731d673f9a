//! Error types for the starfield.
//!
//! Generation and per-frame stepping cannot fail. Errors come from GPU
//! setup, configuration loading, window creation and audio playback.

use std::fmt;
use std::path::PathBuf;

/// Errors that can occur during GPU initialization.
#[derive(Debug)]
pub enum GpuError {
    /// Failed to create a surface for rendering.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    NoAdapter,
    /// Failed to create GPU device.
    DeviceCreation(wgpu::RequestDeviceError),
    /// The surface reports no usable texture format.
    NoSurfaceFormat,
}

impl fmt::Display for GpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuError::SurfaceCreation(e) => write!(f, "Failed to create GPU surface: {}", e),
            GpuError::NoAdapter => write!(f, "No compatible GPU adapter found. Ensure your system has a GPU with WebGPU/Vulkan/Metal/DX12 support."),
            GpuError::DeviceCreation(e) => write!(f, "Failed to create GPU device: {}", e),
            GpuError::NoSurfaceFormat => write!(f, "Surface is not compatible with the selected adapter"),
        }
    }
}

impl std::error::Error for GpuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GpuError::SurfaceCreation(e) => Some(e),
            GpuError::DeviceCreation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<wgpu::CreateSurfaceError> for GpuError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        GpuError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestDeviceError> for GpuError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        GpuError::DeviceCreation(e)
    }
}

/// Errors that can occur while loading or validating configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read or write the config file.
    Io(std::io::Error),
    /// The file is not valid JSON for [`StarfieldConfig`](crate::StarfieldConfig).
    Parse(serde_json::Error),
    /// A value is out of range.
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Failed to access config file: {}", e),
            ConfigError::Parse(e) => write!(f, "Failed to parse config: {}", e),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// Errors that can occur when starting background music.
///
/// None of these are fatal; the caller logs them and carries on.
#[derive(Debug)]
pub enum AudioError {
    /// Audio is switched off in the config or the `audio` feature is not built.
    Disabled,
    /// The track list is empty.
    NoTracks,
    /// No output device could be opened.
    #[cfg(feature = "audio")]
    Stream(rodio::StreamError),
    /// The chosen track could not be opened.
    Open { path: PathBuf, source: std::io::Error },
    /// The chosen track could not be decoded.
    #[cfg(feature = "audio")]
    Decode { path: PathBuf, source: rodio::decoder::DecoderError },
}

impl fmt::Display for AudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioError::Disabled => write!(f, "audio playback is disabled"),
            AudioError::NoTracks => write!(f, "no tracks to play"),
            #[cfg(feature = "audio")]
            AudioError::Stream(e) => write!(f, "no audio output available: {}", e),
            AudioError::Open { path, source } => {
                write!(f, "cannot open {}: {}", path.display(), source)
            }
            #[cfg(feature = "audio")]
            AudioError::Decode { path, source } => {
                write!(f, "cannot decode {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for AudioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            #[cfg(feature = "audio")]
            AudioError::Stream(e) => Some(e),
            AudioError::Open { source, .. } => Some(source),
            #[cfg(feature = "audio")]
            AudioError::Decode { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(feature = "audio")]
impl From<rodio::StreamError> for AudioError {
    fn from(e: rodio::StreamError) -> Self {
        AudioError::Stream(e)
    }
}

/// Errors that can occur when running the starfield.
#[derive(Debug)]
pub enum StarfieldError {
    /// Failed to create event loop.
    EventLoop(winit::error::EventLoopError),
    /// Failed to create window.
    Window(winit::error::OsError),
    /// GPU initialization failed.
    Gpu(GpuError),
    /// Configuration could not be loaded.
    Config(ConfigError),
}

impl fmt::Display for StarfieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StarfieldError::EventLoop(e) => write!(f, "Failed to create event loop: {}", e),
            StarfieldError::Window(e) => write!(f, "Failed to create window: {}", e),
            StarfieldError::Gpu(e) => write!(f, "GPU error: {}", e),
            StarfieldError::Config(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for StarfieldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StarfieldError::EventLoop(e) => Some(e),
            StarfieldError::Window(e) => Some(e),
            StarfieldError::Gpu(e) => Some(e),
            StarfieldError::Config(e) => Some(e),
        }
    }
}

impl From<winit::error::EventLoopError> for StarfieldError {
    fn from(e: winit::error::EventLoopError) -> Self {
        StarfieldError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for StarfieldError {
    fn from(e: winit::error::OsError) -> Self {
        StarfieldError::Window(e)
    }
}

impl From<GpuError> for StarfieldError {
    fn from(e: GpuError) -> Self {
        StarfieldError::Gpu(e)
    }
}

impl From<ConfigError> for StarfieldError {
    fn from(e: ConfigError) -> Self {
        StarfieldError::Config(e)
    }
}
