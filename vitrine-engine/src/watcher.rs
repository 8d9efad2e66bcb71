// Intersection watcher
//
// Pure visibility test over the scroll offset. The watcher reports which
// sections currently intersect the inset viewport; latching lives in the
// controller, so repeated reports for a visible section cost nothing.

use crate::layout::PageLayout;
use crate::viewport::Rect;

/// Does `rect` intersect the viewport inset by `margin` on both edges?
pub fn intersects(rect: &Rect, scroll_offset: f32, viewport_height: f32, margin: f32) -> bool {
    let view_top = scroll_offset + margin;
    let view_bottom = scroll_offset + viewport_height - margin;
    rect.top < view_bottom && rect.bottom() > view_top
}

/// Evaluates section visibility against the current scroll offset
pub struct IntersectionWatcher {
    viewport_height: f32,
}

impl IntersectionWatcher {
    pub fn new(viewport_height: f32) -> Self {
        IntersectionWatcher { viewport_height }
    }

    /// Ids of all sections intersecting their own visibility margin at
    /// `scroll_offset`, in layout order.
    pub fn intersecting_ids(&self, layout: &PageLayout, scroll_offset: f32) -> Vec<String> {
        layout
            .entries()
            .iter()
            .filter(|(section, rect)| {
                intersects(
                    rect,
                    scroll_offset,
                    self.viewport_height,
                    section.visibility_margin,
                )
            })
            .map(|(section, _)| section.id.clone())
            .collect()
    }
}
