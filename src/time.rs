//! Time facilities for the animation.
//!
//! Two clocks live here:
//!
//! - [`Clock`] is the twinkle accumulator. It advances by a fixed step per
//!   frame and never resets.
//! - [`FrameTimer`] measures wall-clock frame deltas and FPS for the window
//!   loop.
//!
//! [`TimeStep`] decides how a wall-clock delta maps to animation frames.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// How per-frame increments relate to real time.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeStep {
    /// Every invocation advances by exactly one frame, whatever the
    /// display refresh rate.
    #[default]
    PerFrame,
    /// Increments are rates at `reference_fps`; each invocation advances by
    /// `delta_secs * reference_fps` frames.
    PerSecond { reference_fps: f32 },
}

impl TimeStep {
    /// Number of animation frames represented by `delta_secs`.
    #[inline]
    pub fn frames(&self, delta_secs: f32) -> f32 {
        match *self {
            TimeStep::PerFrame => 1.0,
            TimeStep::PerSecond { reference_fps } => (delta_secs * reference_fps).max(0.0),
        }
    }
}

/// Monotonic time accumulator feeding the shader's `time` uniform.
#[derive(Debug, Clone)]
pub struct Clock {
    value: f32,
    step: f32,
    frame_count: u64,
}

impl Clock {
    /// Create a clock at zero advancing `step` per frame.
    pub fn new(step: f32) -> Self {
        Self {
            value: 0.0,
            step,
            frame_count: 0,
        }
    }

    /// Advance by `frames` frames (fractional in per-second mode).
    ///
    /// Returns the new value.
    pub fn advance(&mut self, frames: f32) -> f32 {
        self.value += self.step * frames;
        self.frame_count += 1;
        self.value
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Number of `advance` calls so far.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }
}

/// Wall-clock frame timing for the render loop.
#[derive(Debug)]
pub struct FrameTimer {
    /// When the last frame occurred.
    last_frame: Instant,
    /// Time since last frame in seconds.
    delta_secs: f32,
    /// Total frames since start.
    frame_count: u64,
    /// Calculated FPS (updated periodically).
    fps: f32,
    /// Frame count at last FPS update.
    fps_frame_count: u64,
    /// Time of last FPS calculation.
    fps_update_time: Instant,
    /// How often to update FPS calculation.
    fps_update_interval: Duration,
}

impl FrameTimer {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            last_frame: now,
            delta_secs: 0.0,
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: now,
            fps_update_interval: Duration::from_secs(5),
        }
    }

    /// Restart delta measurement from now, e.g. once setup has finished.
    ///
    /// The next [`tick`](Self::tick) reports only the time since this call.
    pub fn reset(&mut self) {
        let now = Instant::now();
        self.last_frame = now;
        self.fps_update_time = now;
        self.fps_frame_count = self.frame_count;
    }

    /// Mark a new frame. Returns the delta since the previous one in seconds.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();

        self.delta_secs = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.frame_count += 1;

        let fps_elapsed = now.duration_since(self.fps_update_time);
        if fps_elapsed >= self.fps_update_interval {
            let frames_since = self.frame_count - self.fps_frame_count;
            self.fps = frames_since as f32 / fps_elapsed.as_secs_f32();
            self.fps_frame_count = self.frame_count;
            self.fps_update_time = now;
            log::debug!("{:.1} fps", self.fps);
        }

        self.delta_secs
    }

    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Frames per second over the last measurement window, 0 until the
    /// first window completes.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}
