// Bob animation: vertical oscillation for the scroll indicator
// Rises and returns over a fixed period, forever.

use std::f32::consts::TAU;
use std::time::Duration;

use super::engine::{AnimationEngine, AnimationFrame, MotionSample};

/// Smooth vertical bob: dy swings from 0 up to -amplitude and back once per
/// period. Not gated by visibility; runs from mount to unmount.
pub struct BobAnimation {
    /// Peak upward travel in layout units
    amplitude: f32,
    /// Time for one full oscillation
    period: Duration,
    /// Current frame number
    frame_count: usize,
    /// Target frames per second
    fps: u32,
}

impl BobAnimation {
    pub fn new(amplitude: f32, period: Duration) -> Self {
        Self {
            amplitude,
            period,
            frame_count: 0,
            fps: 60,
        }
    }

    /// The hero scroll indicator: 20 units of travel every 2 seconds.
    pub fn scroll_indicator() -> Self {
        Self::new(20.0, Duration::from_secs(2))
    }

    /// The dot inside the indicator: 12 units every 1.5 seconds, downward.
    pub fn indicator_dot() -> Self {
        Self::new(-12.0, Duration::from_millis(1500))
    }

    /// Set custom FPS (for testing or performance tuning)
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    fn phase(&self) -> f32 {
        let t = self.frame_count as f32 / self.fps as f32;
        (t % self.period.as_secs_f32()) / self.period.as_secs_f32()
    }
}

impl AnimationEngine for BobAnimation {
    fn next_frame(&mut self) -> Option<AnimationFrame> {
        // Cosine shape: starts at rest, peaks mid-period, returns to rest
        let dy = -self.amplitude * 0.5 * (1.0 - (TAU * self.phase()).cos());
        self.frame_count += 1;

        Some(AnimationFrame::new(MotionSample {
            dy,
            ..MotionSample::REST
        }))
    }

    fn target_fps(&self) -> u32 {
        self.fps
    }

    fn reset(&mut self) {
        self.frame_count = 0;
    }
}
