// Mock viewport for engine tests
//
// Records every scroll motion so tests can assert on positions, step counts
// and idempotence without a real rendering surface.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::Viewport;

struct Inner {
    offset: f32,
    height: f32,
    scroll_history: Vec<f32>,
}

/// Shared-handle mock viewport. Clones observe the same state, so a test can
/// keep one handle while the runtime owns another.
#[derive(Clone)]
pub struct MockViewport {
    inner: Arc<Mutex<Inner>>,
}

impl MockViewport {
    pub fn new(height: f32) -> Self {
        MockViewport {
            inner: Arc::new(Mutex::new(Inner {
                offset: 0.0,
                height,
                scroll_history: Vec::new(),
            })),
        }
    }

    /// Number of scroll steps issued so far.
    pub fn scroll_count(&self) -> usize {
        self.inner.lock().unwrap().scroll_history.len()
    }

    /// Every offset the viewport was moved to, in order.
    pub fn scroll_history(&self) -> Vec<f32> {
        self.inner.lock().unwrap().scroll_history.clone()
    }

    /// Current offset, readable from any clone.
    pub fn offset(&self) -> f32 {
        self.inner.lock().unwrap().offset
    }

    /// Clear recorded history (keeps the current offset).
    pub fn reset_history(&self) {
        self.inner.lock().unwrap().scroll_history.clear();
    }
}

#[async_trait]
impl Viewport for MockViewport {
    fn scroll_offset(&self) -> f32 {
        self.inner.lock().unwrap().offset
    }

    fn height(&self) -> f32 {
        self.inner.lock().unwrap().height
    }

    async fn set_scroll_offset(&mut self, offset: f32) {
        let mut inner = self.inner.lock().unwrap();
        inner.offset = offset;
        inner.scroll_history.push(offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_records_history() {
        let mut viewport = MockViewport::new(800.0);
        let observer = viewport.clone();

        viewport.set_scroll_offset(100.0).await;
        viewport.set_scroll_offset(250.0).await;

        assert_eq!(observer.offset(), 250.0);
        assert_eq!(observer.scroll_count(), 2);
        assert_eq!(observer.scroll_history(), vec![100.0, 250.0]);
    }

    #[tokio::test]
    async fn test_reset_history_keeps_offset() {
        let mut viewport = MockViewport::new(800.0);
        viewport.set_scroll_offset(42.0).await;

        viewport.reset_history();
        assert_eq!(viewport.scroll_count(), 0);
        assert_eq!(viewport.offset(), 42.0);
    }
}
