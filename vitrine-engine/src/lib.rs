// Vitrine Engine
//
// The behavioral core of the page: a per-section Hidden/Visible state machine
// driven by viewport intersection, a deterministic stagger scheduler, smooth
// scroll navigation, and continuous looping animations that ignore visibility.

pub mod animation;
pub mod layout;
pub mod navigator;
pub mod reveal;
pub mod runtime;
pub mod timing;
pub mod viewport;
pub mod watcher;

pub use animation::{AnimationEngine, AnimationFrame, BobAnimation, MotionSample, PulseAnimation};
pub use layout::PageLayout;
pub use navigator::{Navigator, ScrollPlan};
pub use reveal::{AnimationState, RevealController, ScheduledTransition, TransitionTarget};
pub use runtime::{EngineCommand, EngineEvent, EngineHandle, EngineRuntime};
pub use timing::{CubicBezier, StaggerSchedule, TransitionSpec, EASE_STANDARD};
pub use viewport::{BasicViewport, MockViewport, Rect, Viewport, ViewportConfig};
pub use watcher::IntersectionWatcher;
