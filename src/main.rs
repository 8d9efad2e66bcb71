// Vitrine
//
// Headless driver for the portfolio page engine: loads content, builds the
// section strip, then walks every nav target while printing the reveal events
// the engine emits along the way.

use anyhow::Result;
use clap::Parser;
use log::info;
use std::path::PathBuf;
use std::time::Duration;

use vitrine_content::{default_nav_targets, default_sections, load_content};
use vitrine_engine::{
    BasicViewport, BobAnimation, EngineCommand, EngineEvent, EngineHandle, EngineRuntime,
    Navigator, PageLayout, PulseAnimation, RevealController, StaggerSchedule, ViewportConfig,
};

#[derive(Parser)]
#[clap(version, about)]
struct Cli {
    /// Path to a JSON content file; built-in content when omitted
    #[clap(long)]
    content: Option<PathBuf>,

    /// Viewport height in layout units
    #[clap(long, default_value_t = 800.0)]
    viewport_height: f32,

    /// Frame rate for smooth scrolling and continuous animations
    #[clap(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=240))]
    fps: u32,

    /// Print the section strip and nav targets, then exit
    #[clap(long)]
    list_sections: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let content = load_content(cli.content.as_deref());
    let sections = default_sections(&content);

    if cli.list_sections {
        println!("Sections:");
        for section in &sections {
            println!(
                "  {:<12} height {:>5.0}  margin {:>4.0}  {} children",
                section.id, section.height, section.visibility_margin, section.child_count
            );
        }
        println!("Nav targets:");
        for target in default_nav_targets() {
            println!("  {:<12} -> {}", target.label, target.section_id);
        }
        return Ok(());
    }

    let config = ViewportConfig {
        height: cli.viewport_height,
        scroll_fps: cli.fps,
        frame_fps: cli.fps,
        ..ViewportConfig::default()
    };

    let layout = PageLayout::stack(sections.clone());
    let mut controller = RevealController::new(StaggerSchedule::default());
    for section in sections {
        controller.register(section);
    }
    let navigator = Navigator::new(config.scroll_duration, config.scroll_fps);
    let viewport = BasicViewport::new(config.height);

    let (mut runtime, handle) = EngineRuntime::new(viewport, layout, controller, navigator, &config);
    runtime.add_continuous(Box::new(BobAnimation::scroll_indicator()));
    runtime.add_continuous(Box::new(BobAnimation::indicator_dot()));
    for index in 0..content.awards.len() {
        runtime.add_continuous(Box::new(PulseAnimation::award_icon(index)));
    }
    for index in 0..content.skill_categories.len() {
        runtime.add_continuous(Box::new(PulseAnimation::skill_icon(index)));
    }

    info!("Starting engine for {}", content.profile.name);
    let EngineHandle {
        commands,
        mut events,
        motion: _motion,
    } = handle;
    let engine = tokio::spawn(runtime.run());
    let printer = tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            match event {
                EngineEvent::SectionRevealed { id } => {
                    println!("section '{}' revealed", id);
                }
                EngineEvent::ChildRevealed { id, index } => {
                    println!("  child {} of '{}' revealed", index, id);
                }
                EngineEvent::ScrolledTo { offset } => {
                    println!("scrolled to offset {:.0}", offset);
                }
            }
        }
    });

    // Walk the nav bar top to bottom, leaving time for each stagger to finish
    for target in default_nav_targets() {
        info!("Navigating to {} ({})", target.label, target.section_id);
        commands
            .send(EngineCommand::NavigateTo(target.section_id))
            .await?;
        tokio::time::sleep(Duration::from_secs(2)).await;
    }

    commands.send(EngineCommand::Shutdown).await?;
    engine.await?;
    printer.await?;
    Ok(())
}
