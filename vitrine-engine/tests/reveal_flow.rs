// End-to-end reveal flow
//
// Drives a full engine over a mock viewport with paused time: mount reveal,
// smooth-scroll navigation, stagger ordering, latch-once semantics.

use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use vitrine_content::{builtin_content, default_sections};
use vitrine_engine::{
    AnimationState, EngineCommand, EngineEvent, EngineHandle, EngineRuntime, MockViewport,
    Navigator, PageLayout, RevealController, StaggerSchedule, ViewportConfig,
};

const SECTION_IDS: [&str; 7] = [
    "home",
    "about",
    "experience",
    "projects",
    "awards",
    "skills",
    "footer",
];

fn start_engine() -> (MockViewport, EngineHandle, JoinHandle<()>) {
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
    let navigator = Navigator::new(config.scroll_duration, config.scroll_fps);

    let (runtime, handle) = EngineRuntime::new(viewport, layout, controller, navigator, &config);
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

async fn navigate(handle: &EngineHandle, id: &str) {
    handle
        .commands
        .send(EngineCommand::NavigateTo(id.to_string()))
        .await
        .unwrap();
    // Scroll takes 800ms; the longest stagger tail is well under 2s
    tokio::time::sleep(Duration::from_secs(3)).await;
}

async fn shutdown_and_drain(mut handle: EngineHandle, join: JoinHandle<()>) -> Vec<EngineEvent> {
    handle.commands.send(EngineCommand::Shutdown).await.unwrap();
    join.await.unwrap();

    let mut events = Vec::new();
    while let Some(event) = handle.events.recv().await {
        events.push(event);
    }
    events
}

#[tokio::test(start_paused = true)]
async fn test_initial_load_reveals_only_hero() {
    let (viewport, handle, join) = start_engine();
    tokio::time::sleep(Duration::from_secs(2)).await;

    for id in SECTION_IDS {
        let expected = if id == "home" {
            AnimationState::Visible
        } else {
            AnimationState::Hidden
        };
        assert_eq!(peek(&handle, id).await, Some(expected), "section {}", id);
    }
    assert_eq!(viewport.scroll_count(), 0);

    let events = shutdown_and_drain(handle, join).await;
    assert!(events.contains(&EngineEvent::SectionRevealed {
        id: "home".to_string()
    }));
}

#[tokio::test(start_paused = true)]
async fn test_navigation_reveals_project_cards_in_order() {
    let (_viewport, handle, join) = start_engine();
    tokio::time::sleep(Duration::from_secs(2)).await;

    navigate(&handle, "projects").await;
    assert_eq!(
        peek(&handle, "projects").await,
        Some(AnimationState::Visible)
    );
    // Below the fold after the scroll settles
    assert_eq!(peek(&handle, "skills").await, Some(AnimationState::Hidden));
    assert_eq!(peek(&handle, "footer").await, Some(AnimationState::Hidden));

    let events = shutdown_and_drain(handle, join).await;
    let card_indices: Vec<usize> = events
        .iter()
        .filter_map(|event| match event {
            EngineEvent::ChildRevealed { id, index } if id == "projects" => Some(*index),
            _ => None,
        })
        .collect();
    assert_eq!(card_indices, vec![0, 1, 2]);
}

#[tokio::test(start_paused = true)]
async fn test_contact_aligns_footer_top_with_viewport() {
    let (viewport, handle, join) = start_engine();
    tokio::time::sleep(Duration::from_secs(2)).await;

    navigate(&handle, "footer").await;

    let content = builtin_content();
    let layout = PageLayout::stack(default_sections(&content));
    let footer_top = layout.rect_of("footer").unwrap().top;

    assert_eq!(viewport.offset(), footer_top);
    assert_eq!(peek(&handle, "footer").await, Some(AnimationState::Visible));

    let events = shutdown_and_drain(handle, join).await;
    assert!(events.contains(&EngineEvent::ScrolledTo { offset: footer_top }));
}

#[tokio::test(start_paused = true)]
async fn test_unknown_target_changes_nothing() {
    let (viewport, handle, join) = start_engine();
    tokio::time::sleep(Duration::from_secs(2)).await;

    navigate(&handle, "guestbook").await;

    assert_eq!(viewport.offset(), 0.0);
    assert_eq!(viewport.scroll_count(), 0);
    assert_eq!(peek(&handle, "about").await, Some(AnimationState::Hidden));

    let events = shutdown_and_drain(handle, join).await;
    assert!(!events
        .iter()
        .any(|e| matches!(e, EngineEvent::ScrolledTo { .. })));
}

#[tokio::test(start_paused = true)]
async fn test_organic_scrolling_clamps_and_reveals() {
    let (viewport, handle, join) = start_engine();
    tokio::time::sleep(Duration::from_secs(1)).await;

    // Scrolling up from the top pins at zero
    handle
        .commands
        .send(EngineCommand::ScrollBy(-500.0))
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(viewport.offset(), 0.0);

    // A wheel notch down crosses about's visibility margin
    handle
        .commands
        .send(EngineCommand::ScrollBy(300.0))
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_secs(2)).await;
    assert_eq!(viewport.offset(), 300.0);
    assert_eq!(peek(&handle, "about").await, Some(AnimationState::Visible));
    assert_eq!(peek(&handle, "skills").await, Some(AnimationState::Hidden));

    // An oversized delta clamps to the bottom of the page
    handle
        .commands
        .send(EngineCommand::ScrollBy(1_000_000.0))
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_secs(2)).await;

    let layout = PageLayout::stack(default_sections(&builtin_content()));
    assert_eq!(viewport.offset(), layout.max_scroll(800.0));
    assert_eq!(peek(&handle, "footer").await, Some(AnimationState::Visible));

    let events = shutdown_and_drain(handle, join).await;
    assert!(events.contains(&EngineEvent::ScrolledTo { offset: 0.0 }));
    assert!(events.contains(&EngineEvent::ScrolledTo { offset: 300.0 }));
}

#[tokio::test(start_paused = true)]
async fn test_repeat_navigation_is_idempotent() {
    let (viewport, handle, join) = start_engine();
    tokio::time::sleep(Duration::from_secs(2)).await;

    navigate(&handle, "about").await;
    let steps_after_first = viewport.scroll_count();
    assert!(steps_after_first > 0);

    navigate(&handle, "about").await;
    assert_eq!(viewport.scroll_count(), steps_after_first);

    let events = shutdown_and_drain(handle, join).await;
    let scroll_events = events
        .iter()
        .filter(|e| matches!(e, EngineEvent::ScrolledTo { .. }))
        .count();
    assert_eq!(scroll_events, 1);
}

#[tokio::test(start_paused = true)]
async fn test_reveals_latch_once_across_return_trips() {
    let (_viewport, handle, join) = start_engine();
    tokio::time::sleep(Duration::from_secs(2)).await;

    // Full trip down reveals everything, then back up, then down again
    navigate(&handle, "footer").await;
    navigate(&handle, "home").await;
    navigate(&handle, "footer").await;

    for id in SECTION_IDS {
        assert_eq!(peek(&handle, id).await, Some(AnimationState::Visible));
    }

    let events = shutdown_and_drain(handle, join).await;
    for id in SECTION_IDS {
        let reveals = events
            .iter()
            .filter(|e| matches!(e, EngineEvent::SectionRevealed { id: seen } if seen == id))
            .count();
        assert_eq!(reveals, 1, "section {} revealed {} times", id, reveals);
    }
}

#[tokio::test(start_paused = true)]
async fn test_stagger_orders_children_within_every_section() {
    let (_viewport, handle, join) = start_engine();
    tokio::time::sleep(Duration::from_secs(2)).await;

    navigate(&handle, "footer").await;

    let events = shutdown_and_drain(handle, join).await;
    for id in SECTION_IDS {
        let indices: Vec<usize> = events
            .iter()
            .filter_map(|event| match event {
                EngineEvent::ChildRevealed { id: seen, index } if seen == id => Some(*index),
                _ => None,
            })
            .collect();
        assert!(
            indices.windows(2).all(|pair| pair[0] < pair[1]),
            "section {} children out of order: {:?}",
            id,
            indices
        );
        assert!(!indices.is_empty(), "section {} revealed no children", id);
    }
}
