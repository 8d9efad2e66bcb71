// Pulse animation: rotation/scale oscillation for icons and badges
// Sibling elements share the waveform but start phase-shifted by index.

use std::f32::consts::TAU;
use std::time::Duration;

use super::engine::{AnimationEngine, AnimationFrame, MotionSample};

/// Rocking + breathing loop: rotation swings between ±amplitude while scale
/// swells from 1.0 to 1.0 + scale_amplitude and back, once per period.
pub struct PulseAnimation {
    /// Peak rotation in degrees
    rotation_amplitude: f32,
    /// Peak scale growth above 1.0
    scale_amplitude: f32,
    /// Time for one full oscillation
    period: Duration,
    /// Start offset so siblings pulse out of step
    phase_offset: Duration,
    frame_count: usize,
    fps: u32,
}

impl PulseAnimation {
    pub fn new(
        rotation_amplitude: f32,
        scale_amplitude: f32,
        period: Duration,
        phase_offset: Duration,
    ) -> Self {
        Self {
            rotation_amplitude,
            scale_amplitude,
            period,
            phase_offset,
            frame_count: 0,
            fps: 60,
        }
    }

    /// Award card icon at `index`: phase-shifted half a second per card.
    pub fn award_icon(index: usize) -> Self {
        Self::new(
            5.0,
            0.1,
            Duration::from_secs(2),
            Duration::from_millis(500) * index as u32,
        )
    }

    /// Skill category icon at `index`: wider swing, 0.3s per-index shift.
    pub fn skill_icon(index: usize) -> Self {
        Self::new(
            10.0,
            0.2,
            Duration::from_secs(2),
            Duration::from_millis(300) * index as u32,
        )
    }

    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    fn phase(&self) -> f32 {
        let t = self.frame_count as f32 / self.fps as f32 + self.phase_offset.as_secs_f32();
        (t % self.period.as_secs_f32()) / self.period.as_secs_f32()
    }
}

impl AnimationEngine for PulseAnimation {
    fn next_frame(&mut self) -> Option<AnimationFrame> {
        let angle = TAU * self.phase();
        let rotation = self.rotation_amplitude * angle.sin();
        let scale = 1.0 + self.scale_amplitude * 0.5 * (1.0 - angle.cos());
        self.frame_count += 1;

        Some(AnimationFrame::new(MotionSample {
            dy: 0.0,
            rotation,
            scale,
        }))
    }

    fn target_fps(&self) -> u32 {
        self.fps
    }

    fn reset(&mut self) {
        self.frame_count = 0;
    }
}
