// Transition timing: stagger offsets, durations and the shared easing curve
//
// Stagger timing stays data: offset(i) = delay_children + i * stagger_children.
// All transitions share one cubic bezier profile for visual consistency.

use std::time::Duration;
use vitrine_content::{EntryMotion, Pose};

/// The easing profile shared by every entry transition.
pub const EASE_STANDARD: CubicBezier = CubicBezier::new(0.25, 0.46, 0.45, 0.94);

/// A cubic bezier easing curve anchored at (0,0) and (1,1)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl CubicBezier {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        CubicBezier { x1, y1, x2, y2 }
    }

    fn sample(t: f32, p1: f32, p2: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
    }

    fn sample_derivative(t: f32, p1: f32, p2: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * p1 * u * (1.0 - 3.0 * t) + 3.0 * p2 * t * (2.0 - 3.0 * t) + 3.0 * t * t
    }

    /// Find the curve parameter whose x-coordinate equals `x`. Newton's method
    /// with a bisection fallback when the derivative flattens out.
    fn solve_t(&self, x: f32) -> f32 {
        let mut t = x;
        for _ in 0..8 {
            let err = Self::sample(t, self.x1, self.x2) - x;
            if err.abs() < 1e-5 {
                return t;
            }
            let slope = Self::sample_derivative(t, self.x1, self.x2);
            if slope.abs() < 1e-6 {
                break;
            }
            t = (t - err / slope).clamp(0.0, 1.0);
        }

        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        for _ in 0..32 {
            let mid = (lo + hi) / 2.0;
            if Self::sample(mid, self.x1, self.x2) < x {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        (lo + hi) / 2.0
    }

    /// Map linear progress (0..=1) through the curve.
    pub fn ease(&self, progress: f32) -> f32 {
        let x = progress.clamp(0.0, 1.0);
        if x == 0.0 || x == 1.0 {
            return x;
        }
        Self::sample(self.solve_t(x), self.y1, self.y2)
    }
}

/// Stagger configuration for a child group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaggerSchedule {
    pub delay_children: Duration,
    pub stagger_children: Duration,
}

impl StaggerSchedule {
    pub fn new(delay_children: Duration, stagger_children: Duration) -> Self {
        StaggerSchedule {
            delay_children,
            stagger_children,
        }
    }

    /// Begin-time of child `index` relative to the parent trigger.
    pub fn offset(&self, index: usize) -> Duration {
        self.delay_children + self.stagger_children * index as u32
    }
}

impl Default for StaggerSchedule {
    fn default() -> Self {
        StaggerSchedule {
            delay_children: Duration::from_millis(100),
            stagger_children: Duration::from_millis(200),
        }
    }
}

/// One element's transition: motion vector, finite duration, shared easing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionSpec {
    pub motion: EntryMotion,
    pub duration: Duration,
    pub easing: CubicBezier,
}

impl TransitionSpec {
    pub fn for_motion(motion: EntryMotion) -> Self {
        let duration = match motion {
            EntryMotion::ScaleRotate => Duration::from_millis(600),
            EntryMotion::TiltRise => Duration::from_millis(700),
            EntryMotion::FadeRiseScale
            | EntryMotion::SlideLeft
            | EntryMotion::SlideRight
            | EntryMotion::SlidePair => Duration::from_millis(800),
        };
        TransitionSpec {
            motion,
            duration,
            easing: EASE_STANDARD,
        }
    }

    /// Interpolated pose `elapsed` into the transition; clamps at the settled
    /// pose once the duration has passed.
    pub fn pose_at(&self, elapsed: Duration) -> Pose {
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };
        let eased = self.easing.ease(progress);

        let from = self.motion.start_pose();
        let to = Pose::settled();
        Pose {
            opacity: lerp(from.opacity, to.opacity, eased),
            dx: lerp(from.dx, to.dx, eased),
            dy: lerp(from.dy, to.dy, eased),
            scale: lerp(from.scale, to.scale, eased),
            rotation: lerp(from.rotation, to.rotation, eased),
        }
    }

    pub fn is_settled(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
