// Reveal controller
//
// Central registry of section states. A visibility crossing latches the
// section and produces the deterministic transition schedule: the section
// block at offset zero, then each child at delay + index * stagger.

use std::collections::HashMap;
use std::time::Duration;
use vitrine_content::Section;

use super::state::{AnimationState, SectionState};
use crate::timing::{StaggerSchedule, TransitionSpec};

/// What a scheduled transition applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionTarget {
    /// The section block itself
    Section,
    /// Child at this stagger index
    Child(usize),
}

/// One transition due at a fixed offset after its section's trigger
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledTransition {
    pub section_id: String,
    pub target: TransitionTarget,
    pub start_offset: Duration,
    pub spec: TransitionSpec,
}

/// Registry and state machine driver for every section on the page
pub struct RevealController {
    sections: HashMap<String, SectionState>,
    schedule: StaggerSchedule,
}

impl RevealController {
    pub fn new(schedule: StaggerSchedule) -> Self {
        RevealController {
            sections: HashMap::new(),
            schedule,
        }
    }

    pub fn register(&mut self, section: Section) {
        self.sections
            .insert(section.id.clone(), SectionState::new(section));
    }

    /// Trigger every mount-time section (the hero). Called once at startup.
    pub fn mount(&mut self) -> Vec<ScheduledTransition> {
        let ids: Vec<String> = self
            .sections
            .values()
            .filter(|state| state.section().trigger_at_mount)
            .map(|state| state.section().id.clone())
            .collect();

        ids.iter()
            .flat_map(|id| self.section_entered(id))
            .collect()
    }

    /// A section's bounding box crossed its visibility margin. Latches the
    /// section and returns its transition schedule; empty for unknown ids and
    /// for sections already in the terminal state.
    pub fn section_entered(&mut self, id: &str) -> Vec<ScheduledTransition> {
        let state = match self.sections.get_mut(id) {
            Some(state) => state,
            None => return Vec::new(),
        };
        if !state.latch() {
            return Vec::new();
        }
        Self::schedule_for(state.section(), &self.schedule)
    }

    fn schedule_for(section: &Section, schedule: &StaggerSchedule) -> Vec<ScheduledTransition> {
        let mut transitions = Vec::with_capacity(1 + section.child_count);

        transitions.push(ScheduledTransition {
            section_id: section.id.clone(),
            target: TransitionTarget::Section,
            start_offset: Duration::ZERO,
            spec: TransitionSpec::for_motion(section.motion),
        });

        for index in 0..section.child_count {
            transitions.push(ScheduledTransition {
                section_id: section.id.clone(),
                target: TransitionTarget::Child(index),
                start_offset: schedule.offset(index),
                spec: TransitionSpec::for_motion(section.child_motion.for_child(index)),
            });
        }

        transitions
    }

    /// Record that a scheduled child transition has begun.
    pub fn mark_child_visible(&mut self, id: &str, index: usize) -> bool {
        self.sections
            .get_mut(id)
            .map(|state| state.mark_child_visible(index))
            .unwrap_or(false)
    }

    pub fn state_of(&self, id: &str) -> Option<AnimationState> {
        self.sections.get(id).map(|state| state.state())
    }

    pub fn child_state(&self, id: &str, index: usize) -> Option<AnimationState> {
        self.sections.get(id).and_then(|s| s.child_state(index))
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.state_of(id).map(|s| s.is_visible()).unwrap_or(false)
    }

    /// Ids still awaiting their first visibility crossing.
    pub fn hidden_ids(&self) -> Vec<String> {
        self.sections
            .values()
            .filter(|state| !state.state().is_visible())
            .map(|state| state.section().id.clone())
            .collect()
    }
}
