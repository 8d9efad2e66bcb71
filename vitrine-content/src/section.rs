// Section descriptors and navigation targets
//
// A Section is a named region of the page with a one-shot reveal. Children of
// a section reveal in declared order on a shared stagger schedule.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::records::PortfolioContent;

/// How a section (or one of its children) enters the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryMotion {
    /// Fade in while rising and settling to full scale (generic blocks)
    FadeRiseScale,
    /// Slide in from the left with a slight counter-rotation
    SlideLeft,
    /// Slide in from the right with a slight rotation
    SlideRight,
    /// Scale up from small while unwinding a rotation (card-grid items)
    ScaleRotate,
    /// Rise while unwinding a perspective tilt (skill cards)
    TiltRise,
    /// Two-column pairing: even children slide from the left, odd from the right
    SlidePair,
}

impl EntryMotion {
    /// Resolve the motion for child `index`. `SlidePair` alternates sides;
    /// every other motion applies uniformly.
    pub fn for_child(&self, index: usize) -> EntryMotion {
        match self {
            EntryMotion::SlidePair => {
                if index % 2 == 0 {
                    EntryMotion::SlideLeft
                } else {
                    EntryMotion::SlideRight
                }
            }
            other => *other,
        }
    }

    /// The visual parameters an element starts from before its transition.
    pub fn start_pose(&self) -> Pose {
        match self {
            EntryMotion::FadeRiseScale => Pose {
                opacity: 0.0,
                dx: 0.0,
                dy: 60.0,
                scale: 0.95,
                rotation: 0.0,
            },
            EntryMotion::SlideLeft => Pose {
                opacity: 0.0,
                dx: -100.0,
                dy: 0.0,
                scale: 1.0,
                rotation: -5.0,
            },
            EntryMotion::SlideRight => Pose {
                opacity: 0.0,
                dx: 100.0,
                dy: 0.0,
                scale: 1.0,
                rotation: 5.0,
            },
            EntryMotion::ScaleRotate => Pose {
                opacity: 0.0,
                dx: 0.0,
                dy: 0.0,
                scale: 0.8,
                rotation: -10.0,
            },
            EntryMotion::TiltRise => Pose {
                opacity: 0.0,
                dx: 0.0,
                dy: 50.0,
                scale: 0.9,
                rotation: -15.0,
            },
            // A pair container itself only fades; its children carry the slide
            EntryMotion::SlidePair => Pose {
                opacity: 0.0,
                dx: 0.0,
                dy: 0.0,
                scale: 1.0,
                rotation: 0.0,
            },
        }
    }
}

impl fmt::Display for EntryMotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryMotion::FadeRiseScale => write!(f, "fade-rise-scale"),
            EntryMotion::SlideLeft => write!(f, "slide-left"),
            EntryMotion::SlideRight => write!(f, "slide-right"),
            EntryMotion::ScaleRotate => write!(f, "scale-rotate"),
            EntryMotion::TiltRise => write!(f, "tilt-rise"),
            EntryMotion::SlidePair => write!(f, "slide-pair"),
        }
    }
}

/// Interpolated visual parameters of one element at one point in time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    pub dx: f32,
    pub dy: f32,
    pub scale: f32,
    /// Degrees; settles to 0
    pub rotation: f32,
}

impl Pose {
    /// The terminal pose every transition settles into.
    pub fn settled() -> Self {
        Pose {
            opacity: 1.0,
            dx: 0.0,
            dy: 0.0,
            scale: 1.0,
            rotation: 0.0,
        }
    }
}

/// A named, uniquely identified region of the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    /// Always true in this system: the reveal latches and never reverses
    pub trigger_once: bool,
    /// Hero-style sections reveal at mount instead of on intersection
    pub trigger_at_mount: bool,
    /// Pre-entry viewport inset at which the reveal begins
    pub visibility_margin: f32,
    /// Entry motion of the section block itself
    pub motion: EntryMotion,
    /// Entry motion applied to children (resolved per index)
    pub child_motion: EntryMotion,
    /// Number of staggered children, derived from content lengths
    pub child_count: usize,
    /// Layout height of the section strip, in layout units
    pub height: f32,
}

impl Section {
    pub fn new(id: &str, motion: EntryMotion, child_motion: EntryMotion) -> Self {
        Section {
            id: id.to_string(),
            trigger_once: true,
            trigger_at_mount: false,
            visibility_margin: 100.0,
            motion,
            child_motion,
            child_count: 0,
            height: 600.0,
        }
    }

    pub fn at_mount(mut self) -> Self {
        self.trigger_at_mount = true;
        self
    }

    pub fn with_margin(mut self, margin: f32) -> Self {
        self.visibility_margin = margin;
        self
    }

    pub fn with_children(mut self, count: usize) -> Self {
        self.child_count = count;
        self
    }

    pub fn with_height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }
}

/// Mapping from a display label to a section id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavTarget {
    pub label: String,
    pub section_id: String,
}

impl NavTarget {
    pub fn new(label: &str, section_id: &str) -> Self {
        NavTarget {
            label: label.to_string(),
            section_id: section_id.to_string(),
        }
    }
}

/// The page's section strip, top to bottom. Child counts follow the content
/// collections; awards and skills are sections without nav targets.
pub fn default_sections(content: &PortfolioContent) -> Vec<Section> {
    vec![
        // Hero: heading, tagline, summary, call-to-action row
        Section::new("home", EntryMotion::FadeRiseScale, EntryMotion::FadeRiseScale)
            .at_mount()
            .with_children(4)
            .with_height(800.0),
        // About: heading block + journey column + one card per education entry
        Section::new("about", EntryMotion::FadeRiseScale, EntryMotion::SlidePair)
            .with_children(2 + content.education.len())
            .with_height(700.0),
        Section::new("experience", EntryMotion::FadeRiseScale, EntryMotion::ScaleRotate)
            .with_children(content.jobs.len())
            .with_height(700.0),
        Section::new("projects", EntryMotion::FadeRiseScale, EntryMotion::ScaleRotate)
            .with_children(content.projects.len())
            .with_height(650.0),
        Section::new("awards", EntryMotion::FadeRiseScale, EntryMotion::ScaleRotate)
            .with_children(content.awards.len())
            .with_height(500.0),
        Section::new("skills", EntryMotion::FadeRiseScale, EntryMotion::TiltRise)
            .with_children(content.skill_categories.len())
            .with_height(600.0),
        // Footer: heading + one link per social + copyright line; no margin.
        // Viewport-height so "Contact" can align its top edge with the top of
        // the viewport instead of clamping at max scroll.
        Section::new("footer", EntryMotion::FadeRiseScale, EntryMotion::ScaleRotate)
            .with_margin(0.0)
            .with_children(2 + content.socials.len())
            .with_height(800.0),
    ]
}

/// The five nav bar targets. The hero call-to-actions reuse "projects" and
/// "footer"; the scroll indicator targets "about".
pub fn default_nav_targets() -> Vec<NavTarget> {
    vec![
        NavTarget::new("Home", "home"),
        NavTarget::new("About", "about"),
        NavTarget::new("Experience", "experience"),
        NavTarget::new("Projects", "projects"),
        NavTarget::new("Contact", "footer"),
    ]
}
