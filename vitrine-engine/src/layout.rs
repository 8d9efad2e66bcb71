// Page layout
//
// Sections stack top to bottom into one vertical strip. The layout is fixed
// at mount; only the scroll offset moves.

use vitrine_content::Section;

use crate::viewport::Rect;

/// The section strip with resolved positions
pub struct PageLayout {
    entries: Vec<(Section, Rect)>,
}

impl PageLayout {
    /// Stack `sections` in declared order, assigning each its rect.
    pub fn stack(sections: Vec<Section>) -> Self {
        let mut cursor = 0.0;
        let entries = sections
            .into_iter()
            .map(|section| {
                let rect = Rect::new(cursor, section.height);
                cursor += section.height;
                (section, rect)
            })
            .collect();
        PageLayout { entries }
    }

    pub fn entries(&self) -> &[(Section, Rect)] {
        &self.entries
    }

    /// Resolve a section id to its rect. `None` for unknown ids; navigation
    /// treats that as a silent no-op.
    pub fn rect_of(&self, id: &str) -> Option<Rect> {
        self.entries
            .iter()
            .find(|(section, _)| section.id == id)
            .map(|(_, rect)| *rect)
    }

    pub fn total_height(&self) -> f32 {
        self.entries
            .last()
            .map(|(_, rect)| rect.bottom())
            .unwrap_or(0.0)
    }

    /// The largest reachable scroll offset for a viewport of `viewport_height`.
    pub fn max_scroll(&self, viewport_height: f32) -> f32 {
        (self.total_height() - viewport_height).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_content::{builtin_content, default_sections};

    fn layout() -> PageLayout {
        PageLayout::stack(default_sections(&builtin_content()))
    }

    #[test]
    fn test_sections_stack_contiguously() {
        let layout = layout();
        let mut expected_top = 0.0;
        for (section, rect) in layout.entries() {
            assert_eq!(rect.top, expected_top, "section {} misplaced", section.id);
            expected_top = rect.bottom();
        }
        assert_eq!(layout.total_height(), expected_top);
    }

    #[test]
    fn test_rect_of_known_and_unknown() {
        let layout = layout();
        assert!(layout.rect_of("projects").is_some());
        assert!(layout.rect_of("nonexistent").is_none());
    }

    #[test]
    fn test_hero_starts_at_top() {
        let layout = layout();
        assert_eq!(layout.rect_of("home").unwrap().top, 0.0);
    }

    #[test]
    fn test_max_scroll_clamps_to_zero() {
        let layout = layout();
        assert_eq!(layout.max_scroll(layout.total_height() + 100.0), 0.0);
        assert!(layout.max_scroll(800.0) > 0.0);
    }
}
