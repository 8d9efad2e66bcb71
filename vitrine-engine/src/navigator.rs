// Section navigator
//
// Resolves a section id to a scroll target and plans the eased step sequence
// of a smooth scroll. Unknown ids and already-at-target calls plan nothing:
// navigation is a silent no-op there, never an error.

use log::debug;
use std::time::Duration;

use crate::layout::PageLayout;
use crate::timing::EASE_STANDARD;

/// Offsets closer than this count as "already there"
const AT_TARGET_EPSILON: f32 = 0.5;

/// An eased smooth-scroll: intermediate offsets plus the pacing between them
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollPlan {
    /// Final offset; the last step lands exactly here
    pub to: f32,
    /// Intermediate offsets, one per step, ending at `to`
    pub steps: Vec<f32>,
    /// Delay between consecutive steps
    pub step_interval: Duration,
}

/// Plans smooth scrolls toward named sections
pub struct Navigator {
    scroll_duration: Duration,
    scroll_fps: u32,
}

impl Navigator {
    pub fn new(scroll_duration: Duration, scroll_fps: u32) -> Self {
        Navigator {
            scroll_duration,
            // A zero rate would make the step interval non-finite
            scroll_fps: scroll_fps.max(1),
        }
    }

    /// Plan a smooth scroll that aligns `id`'s top edge with the viewport
    /// top. Returns None when the id resolves to no section (silent no-op —
    /// targets are static, a miss is a content-authoring defect) or when the
    /// viewport already sits at the target (idempotence).
    pub fn plan(
        &self,
        layout: &PageLayout,
        id: &str,
        current: f32,
        viewport_height: f32,
    ) -> Option<ScrollPlan> {
        let rect = match layout.rect_of(id) {
            Some(rect) => rect,
            None => {
                debug!("Navigation target '{}' resolves to no section", id);
                return None;
            }
        };

        let to = rect.top.min(layout.max_scroll(viewport_height));
        if (to - current).abs() < AT_TARGET_EPSILON {
            return None;
        }

        let step_count = ((self.scroll_duration.as_secs_f32() * self.scroll_fps as f32).round()
            as usize)
            .max(1);
        let steps = (1..=step_count)
            .map(|i| {
                let progress = i as f32 / step_count as f32;
                current + (to - current) * EASE_STANDARD.ease(progress)
            })
            .collect();

        Some(ScrollPlan {
            to,
            steps,
            step_interval: Duration::from_secs_f64(1.0 / self.scroll_fps as f64),
        })
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Navigator::new(Duration::from_millis(800), 60)
    }
}
