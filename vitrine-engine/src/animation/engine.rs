// AnimationEngine trait and core types

use std::time::{Duration, Instant};

/// Motion parameters of one element at one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionSample {
    /// Vertical offset from the element's rest position
    pub dy: f32,
    /// Rotation in degrees
    pub rotation: f32,
    /// Uniform scale factor
    pub scale: f32,
}

impl MotionSample {
    pub const REST: MotionSample = MotionSample {
        dy: 0.0,
        rotation: 0.0,
        scale: 1.0,
    };
}

/// A single frame of continuous animation
#[derive(Debug, Clone)]
pub struct AnimationFrame {
    pub sample: MotionSample,
    /// Frame timestamp for pacing diagnostics
    pub timestamp: Instant,
}

impl AnimationFrame {
    pub fn new(sample: MotionSample) -> Self {
        Self {
            sample,
            timestamp: Instant::now(),
        }
    }
}

/// Frame-based animation interface
pub trait AnimationEngine: Send {
    /// Generate the next frame of animation.
    /// Returns None if animation is complete (continuous loops never do).
    fn next_frame(&mut self) -> Option<AnimationFrame>;

    /// Get the target FPS for this animation
    fn target_fps(&self) -> u32;

    /// Get the frame duration based on target FPS
    fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.target_fps() as f64)
    }

    /// Reset animation to initial state
    fn reset(&mut self);
}
