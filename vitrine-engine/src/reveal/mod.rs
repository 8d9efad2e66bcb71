// Reveal state machine
//
// Per-section Hidden -> Visible latch plus the stagger orchestration that
// schedules child transitions once a section triggers.

mod controller;
mod state;

pub use controller::{RevealController, ScheduledTransition, TransitionTarget};
pub use state::{AnimationState, SectionState};
