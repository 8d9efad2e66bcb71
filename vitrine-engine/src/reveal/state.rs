// Per-section animation state
//
// Two states, one direction. Once a section latches Visible it never goes
// back, regardless of later scroll events.

use vitrine_content::Section;

/// Visual state of a section or child element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    /// Initial state: not yet revealed
    Hidden,
    /// Terminal state: revealed, latched for the page lifetime
    Visible,
}

impl AnimationState {
    pub fn is_visible(&self) -> bool {
        matches!(self, AnimationState::Visible)
    }
}

/// One section's descriptor plus its latch and per-child states
#[derive(Debug, Clone)]
pub struct SectionState {
    section: Section,
    state: AnimationState,
    children: Vec<AnimationState>,
}

impl SectionState {
    pub fn new(section: Section) -> Self {
        let children = vec![AnimationState::Hidden; section.child_count];
        SectionState {
            section,
            state: AnimationState::Hidden,
            children,
        }
    }

    pub fn section(&self) -> &Section {
        &self.section
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Transition Hidden -> Visible. Returns true only on the first call;
    /// repeated crossings are no-ops because the state is already terminal.
    pub fn latch(&mut self) -> bool {
        if self.state.is_visible() {
            return false;
        }
        self.state = AnimationState::Visible;
        true
    }

    pub fn child_state(&self, index: usize) -> Option<AnimationState> {
        self.children.get(index).copied()
    }

    pub fn mark_child_visible(&mut self, index: usize) -> bool {
        match self.children.get_mut(index) {
            Some(state @ AnimationState::Hidden) => {
                *state = AnimationState::Visible;
                true
            }
            _ => false,
        }
    }

    pub fn all_children_visible(&self) -> bool {
        self.children.iter().all(|state| state.is_visible())
    }
}
