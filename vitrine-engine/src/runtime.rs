// Engine runtime
//
// Single-threaded, event-driven loop tying the pieces together: navigation
// commands and scroll events drive the watcher, the watcher drives the reveal
// controller, and a frame tick advances continuous animations. Scheduled
// reveals fire at their stagger offsets and run to completion; scrolling away
// cancels nothing.

use log::{debug, warn};
use std::time::Duration;

use tokio::sync::{mpsc, oneshot, watch};
use tokio::time::{interval, sleep_until, Instant};

use std::collections::VecDeque;

use crate::animation::{AnimationEngine, MotionSample};
use crate::layout::PageLayout;
use crate::navigator::{Navigator, ScrollPlan};
use crate::reveal::{AnimationState, RevealController, ScheduledTransition, TransitionTarget};
use crate::viewport::{Viewport, ViewportConfig};
use crate::watcher::IntersectionWatcher;

/// Commands accepted by the running engine
pub enum EngineCommand {
    /// Smooth-scroll to a named section (nav bar, call-to-actions)
    NavigateTo(String),
    /// Organic scrolling: move the viewport by a delta, clamped to the page
    ScrollBy(f32),
    /// Inspect a section's current state without consuming anything
    PeekSection {
        id: String,
        reply: oneshot::Sender<Option<AnimationState>>,
    },
    /// Stop the loop; in-flight state is simply dropped
    Shutdown,
}

/// Observable engine output
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// A section latched Visible and its block transition began
    SectionRevealed { id: String },
    /// A staggered child transition began
    ChildRevealed { id: String, index: usize },
    /// A smooth scroll or organic scroll settled at this offset
    ScrolledTo { offset: f32 },
}

/// Caller-side handles for a running engine
pub struct EngineHandle {
    pub commands: mpsc::Sender<EngineCommand>,
    pub events: mpsc::Receiver<EngineEvent>,
    /// Latest continuous-animation samples, refreshed every frame tick
    pub motion: watch::Receiver<Vec<MotionSample>>,
}

/// A transition queued against wall-clock time
struct PendingReveal {
    due: Instant,
    section_id: String,
    target: TransitionTarget,
}

/// A smooth scroll in progress, stepped from the main loop so frame ticks
/// and reveals keep interleaving with it
struct ActiveScroll {
    to: f32,
    steps: VecDeque<f32>,
    next_step_at: Instant,
    step_interval: Duration,
}

impl ActiveScroll {
    fn begin(plan: ScrollPlan) -> Self {
        ActiveScroll {
            to: plan.to,
            steps: plan.steps.into(),
            next_step_at: Instant::now() + plan.step_interval,
            step_interval: plan.step_interval,
        }
    }
}

/// The engine event loop
pub struct EngineRuntime<V: Viewport> {
    viewport: V,
    layout: PageLayout,
    controller: RevealController,
    navigator: Navigator,
    watcher: IntersectionWatcher,
    continuous: Vec<Box<dyn AnimationEngine>>,
    pending: Vec<PendingReveal>,
    active_scroll: Option<ActiveScroll>,
    cmd_rx: mpsc::Receiver<EngineCommand>,
    events_tx: mpsc::Sender<EngineEvent>,
    motion_tx: watch::Sender<Vec<MotionSample>>,
    frame_interval: Duration,
}

impl<V: Viewport> EngineRuntime<V> {
    pub fn new(
        viewport: V,
        layout: PageLayout,
        controller: RevealController,
        navigator: Navigator,
        config: &ViewportConfig,
    ) -> (Self, EngineHandle) {
        let (cmd_tx, cmd_rx) = mpsc::channel(32);
        // Bounded: a stalled consumer drops events instead of growing memory
        let (events_tx, events_rx) = mpsc::channel(100);
        let (motion_tx, motion_rx) = watch::channel(Vec::new());

        let watcher = IntersectionWatcher::new(viewport.height());
        let runtime = EngineRuntime {
            viewport,
            layout,
            controller,
            navigator,
            watcher,
            continuous: Vec::new(),
            pending: Vec::new(),
            active_scroll: None,
            cmd_rx,
            events_tx,
            motion_tx,
            frame_interval: Duration::from_secs_f64(1.0 / config.frame_fps.max(1) as f64),
        };
        let handle = EngineHandle {
            commands: cmd_tx,
            events: events_rx,
            motion: motion_rx,
        };
        (runtime, handle)
    }

    /// Mount a continuous animation. It starts on the first frame tick and
    /// stops only when the runtime itself stops.
    pub fn add_continuous(&mut self, animation: Box<dyn AnimationEngine>) {
        self.continuous.push(animation);
    }

    /// Run until shutdown. Mount-time sections reveal immediately; everything
    /// else waits for its visibility crossing.
    pub async fn run(mut self) {
        let mounted = self.controller.mount();
        self.queue(mounted);
        self.observe();

        let mut tick = interval(self.frame_interval);
        loop {
            let next_due = self.pending.iter().map(|p| p.due).min();
            let next_step = self.active_scroll.as_ref().map(|s| s.next_step_at);
            tokio::select! {
                cmd = self.cmd_rx.recv() => {
                    match cmd {
                        Some(EngineCommand::NavigateTo(id)) => self.navigate_to(&id),
                        Some(EngineCommand::ScrollBy(delta)) => self.scroll_by(delta).await,
                        Some(EngineCommand::PeekSection { id, reply }) => {
                            let _ = reply.send(self.controller.state_of(&id));
                        }
                        Some(EngineCommand::Shutdown) | None => break,
                    }
                }

                _ = tick.tick() => {
                    self.advance_frames();
                }

                _ = sleep_until(next_step.unwrap_or_else(Instant::now)), if next_step.is_some() => {
                    self.step_scroll().await;
                }

                _ = sleep_until(next_due.unwrap_or_else(Instant::now)), if next_due.is_some() => {
                    self.fire_due();
                }
            }
        }
        debug!("Engine runtime stopped");
    }

    /// Start a smooth scroll toward `id`. The scroll is stepped from the main
    /// loop; a later navigation command replaces it from the current offset.
    fn navigate_to(&mut self, id: &str) {
        let current = self.viewport.scroll_offset();
        let plan = match self
            .navigator
            .plan(&self.layout, id, current, self.viewport.height())
        {
            Some(plan) => plan,
            // Unknown target or already there: deliberate silent no-op
            None => return,
        };
        self.active_scroll = Some(ActiveScroll::begin(plan));
    }

    /// Issue one eased scroll step, observing visibility so reveals begin the
    /// moment a threshold is crossed mid-scroll.
    async fn step_scroll(&mut self) {
        let (offset, finished, to) = match self.active_scroll.as_mut() {
            Some(scroll) => match scroll.steps.pop_front() {
                Some(offset) => {
                    scroll.next_step_at += scroll.step_interval;
                    (offset, scroll.steps.is_empty(), scroll.to)
                }
                None => {
                    self.active_scroll = None;
                    return;
                }
            },
            None => return,
        };

        self.viewport.set_scroll_offset(offset).await;
        self.fire_due();
        self.observe();

        if finished {
            self.active_scroll = None;
            self.emit(EngineEvent::ScrolledTo { offset: to });
        }
    }

    async fn scroll_by(&mut self, delta: f32) {
        let max = self.layout.max_scroll(self.viewport.height());
        let offset = (self.viewport.scroll_offset() + delta).clamp(0.0, max);
        self.viewport.set_scroll_offset(offset).await;
        self.observe();
        self.emit(EngineEvent::ScrolledTo { offset });
    }

    /// Visibility pass: latch any hidden section now intersecting its margin.
    fn observe(&mut self) {
        let offset = self.viewport.scroll_offset();
        let ids = self.watcher.intersecting_ids(&self.layout, offset);
        for id in ids {
            let transitions = self.controller.section_entered(&id);
            self.queue(transitions);
        }
    }

    fn queue(&mut self, transitions: Vec<ScheduledTransition>) {
        let now = Instant::now();
        for transition in transitions {
            self.pending.push(PendingReveal {
                due: now + transition.start_offset,
                section_id: transition.section_id,
                target: transition.target,
            });
        }
    }

    /// Fire every reveal whose offset has elapsed, in due order.
    fn fire_due(&mut self) {
        let now = Instant::now();
        let (mut due, rest): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|p| p.due <= now);
        self.pending = rest;
        due.sort_by_key(|p| p.due);

        for reveal in due {
            match reveal.target {
                TransitionTarget::Section => {
                    self.emit(EngineEvent::SectionRevealed {
                        id: reveal.section_id,
                    });
                }
                TransitionTarget::Child(index) => {
                    if self.controller.mark_child_visible(&reveal.section_id, index) {
                        self.emit(EngineEvent::ChildRevealed {
                            id: reveal.section_id,
                            index,
                        });
                    }
                }
            }
        }
    }

    fn advance_frames(&mut self) {
        if self.continuous.is_empty() {
            return;
        }
        let samples: Vec<MotionSample> = self
            .continuous
            .iter_mut()
            .filter_map(|animation| animation.next_frame())
            .map(|frame| frame.sample)
            .collect();
        // No receivers is fine; continuous motion is a render-only concern
        let _ = self.motion_tx.send(samples);
    }

    fn emit(&mut self, event: EngineEvent) {
        if self.events_tx.try_send(event).is_err() {
            warn!("Engine event channel full, dropping event");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::BobAnimation;
    use crate::reveal::RevealController;
    use crate::timing::StaggerSchedule;
    use crate::viewport::MockViewport;
    use vitrine_content::{builtin_content, default_sections};

    fn start_engine() -> (MockViewport, EngineHandle, tokio::task::JoinHandle<()>) {
        let content = builtin_content();
        let sections = default_sections(&content);
        let config = ViewportConfig::default();

        let viewport = MockViewport::new(config.height);
        let observer = viewport.clone();

        let layout = PageLayout::stack(sections.clone());
        let mut controller = RevealController::new(StaggerSchedule::default());
        for section in sections {
            controller.register(section);
        }

        let (mut runtime, handle) = EngineRuntime::new(
            viewport,
            layout,
            controller,
            Navigator::default(),
            &config,
        );
        runtime.add_continuous(Box::new(BobAnimation::scroll_indicator()));

        let join = tokio::spawn(runtime.run());
        (observer, handle, join)
    }

    async fn peek(handle: &EngineHandle, id: &str) -> Option<AnimationState> {
        let (tx, rx) = oneshot::channel();
        handle
            .commands
            .send(EngineCommand::PeekSection {
                id: id.to_string(),
                reply: tx,
            })
            .await
            .unwrap();
        rx.await.unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_mount_reveals_hero_in_order() {
        let (_viewport, mut handle, join) = start_engine();

        tokio::time::sleep(Duration::from_secs(2)).await;
        handle.commands.send(EngineCommand::Shutdown).await.unwrap();
        join.await.unwrap();

        let mut events = Vec::new();
        while let Some(event) = handle.events.recv().await {
            events.push(event);
        }

        assert_eq!(
            events[0],
            EngineEvent::SectionRevealed {
                id: "home".to_string()
            }
        );
        let child_indices: Vec<usize> = events
            .iter()
            .filter_map(|e| match e {
                EngineEvent::ChildRevealed { id, index } if id == "home" => Some(*index),
                _ => None,
            })
            .collect();
        assert_eq!(child_indices, vec![0, 1, 2, 3]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_navigation_target_is_silent() {
        let (viewport, mut handle, join) = start_engine();

        handle
            .commands
            .send(EngineCommand::NavigateTo("nonexistent".to_string()))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_secs(1)).await;
        handle.commands.send(EngineCommand::Shutdown).await.unwrap();
        join.await.unwrap();

        assert_eq!(viewport.scroll_count(), 0);
        while let Some(event) = handle.events.recv().await {
            assert!(!matches!(event, EngineEvent::ScrolledTo { .. }));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_peek_reports_section_state() {
        let (_viewport, mut handle, join) = start_engine();

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(peek(&handle, "home").await, Some(AnimationState::Visible));
        assert_eq!(peek(&handle, "skills").await, Some(AnimationState::Hidden));
        assert_eq!(peek(&handle, "bogus").await, None);

        handle.commands.send(EngineCommand::Shutdown).await.unwrap();
        join.await.unwrap();
        handle.events.close();
    }

    #[tokio::test(start_paused = true)]
    async fn test_frames_keep_flowing_during_smooth_scroll() {
        let (_viewport, mut handle, join) = start_engine();
        tokio::time::sleep(Duration::from_millis(200)).await;

        let mut motion = handle.motion.clone();
        let recorder = tokio::spawn(async move {
            let mut stamps = Vec::new();
            while motion.changed().await.is_ok() {
                stamps.push(Instant::now());
            }
            stamps
        });

        handle
            .commands
            .send(EngineCommand::NavigateTo("footer".to_string()))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_secs(2)).await;
        handle.commands.send(EngineCommand::Shutdown).await.unwrap();
        join.await.unwrap();

        let stamps = recorder.await.unwrap();
        assert!(stamps.len() > 60, "only {} frames recorded", stamps.len());

        // Frame ticks must interleave with the 800ms scroll, not resume after it
        let max_gap = stamps
            .windows(2)
            .map(|pair| pair[1] - pair[0])
            .max()
            .unwrap();
        assert!(
            max_gap < Duration::from_millis(50),
            "largest inter-frame gap was {:?}",
            max_gap
        );
        handle.events.close();
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_fps_config_does_not_panic() {
        let content = builtin_content();
        let sections = default_sections(&content);
        let config = ViewportConfig {
            scroll_fps: 0,
            frame_fps: 0,
            ..ViewportConfig::default()
        };

        let viewport = MockViewport::new(config.height);
        let layout = PageLayout::stack(sections.clone());
        let mut controller = RevealController::new(StaggerSchedule::default());
        for section in sections {
            controller.register(section);
        }
        let navigator = Navigator::new(config.scroll_duration, config.scroll_fps);

        let (runtime, mut handle) =
            EngineRuntime::new(viewport, layout, controller, navigator, &config);
        let join = tokio::spawn(runtime.run());

        handle
            .commands
            .send(EngineCommand::NavigateTo("about".to_string()))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(peek(&handle, "about").await, Some(AnimationState::Visible));

        handle.commands.send(EngineCommand::Shutdown).await.unwrap();
        join.await.unwrap();
        handle.events.close();
    }

    #[tokio::test(start_paused = true)]
    async fn test_continuous_motion_updates() {
        let (_viewport, mut handle, join) = start_engine();

        tokio::time::sleep(Duration::from_millis(500)).await;
        let samples = handle.motion.borrow().clone();
        assert_eq!(samples.len(), 1);

        handle.commands.send(EngineCommand::Shutdown).await.unwrap();
        join.await.unwrap();
        handle.events.close();
    }
}
