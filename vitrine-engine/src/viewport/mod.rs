// Viewport abstraction
//
// The engine never touches a rendering surface directly; it talks to a
// Viewport trait so tests can drive it with a mock. The scroll offset is the
// single shared mutable resource of the whole system.

use async_trait::async_trait;
use std::time::Duration;

mod mock;

pub use mock::MockViewport;

/// A vertical slice of the page strip, in layout units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(top: f32, height: f32) -> Self {
        Rect { top, height }
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Viewport geometry and scroll pacing
#[derive(Debug, Clone)]
pub struct ViewportConfig {
    /// Visible height of the viewport, in layout units
    pub height: f32,

    /// Steps per second while smooth-scrolling
    pub scroll_fps: u32,

    /// Total duration of one smooth scroll
    pub scroll_duration: Duration,

    /// Frame tick rate for continuous animations
    pub frame_fps: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        ViewportConfig {
            height: 800.0,
            scroll_fps: 60,
            scroll_duration: Duration::from_millis(800),
            frame_fps: 60,
        }
    }
}

/// The rendering environment's scrollable surface.
///
/// Reads are cheap and non-exclusive; writing the scroll offset is reserved
/// for the navigator's smooth scroll and organic scrolling.
#[async_trait]
pub trait Viewport: Send {
    /// Current scroll offset from the top of the page strip.
    fn scroll_offset(&self) -> f32;

    /// Visible height of the viewport.
    fn height(&self) -> f32;

    /// Move the viewport to `offset`. One call is one scroll step; smooth
    /// motion comes from the caller issuing eased steps over time.
    async fn set_scroll_offset(&mut self, offset: f32);
}

/// Plain in-memory viewport used by the binary.
pub struct BasicViewport {
    offset: f32,
    height: f32,
}

impl BasicViewport {
    pub fn new(height: f32) -> Self {
        BasicViewport {
            offset: 0.0,
            height,
        }
    }
}

#[async_trait]
impl Viewport for BasicViewport {
    fn scroll_offset(&self) -> f32 {
        self.offset
    }

    fn height(&self) -> f32 {
        self.height
    }

    async fn set_scroll_offset(&mut self, offset: f32) {
        self.offset = offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_bottom() {
        let rect = Rect::new(800.0, 700.0);
        assert_eq!(rect.bottom(), 1500.0);
    }

    #[tokio::test]
    async fn test_basic_viewport_scrolls() {
        let mut viewport = BasicViewport::new(800.0);
        assert_eq!(viewport.scroll_offset(), 0.0);

        viewport.set_scroll_offset(1234.5).await;
        assert_eq!(viewport.scroll_offset(), 1234.5);
        assert_eq!(viewport.height(), 800.0);
    }

    #[test]
    fn test_config_defaults() {
        let config = ViewportConfig::default();
        assert_eq!(config.height, 800.0);
        assert_eq!(config.scroll_fps, 60);
        assert_eq!(config.scroll_duration, Duration::from_millis(800));
    }
}
