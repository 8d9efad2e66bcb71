// Continuous animations
//
// Infinite looping motions decoupled from the reveal state machine. They
// start at mount, stop at unmount, and never consult section visibility.

mod bob;
mod engine;
mod pulse;

pub use bob::BobAnimation;
pub use engine::{AnimationEngine, AnimationFrame, MotionSample};
pub use pulse::PulseAnimation;
