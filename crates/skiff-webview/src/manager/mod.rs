//! WebView lifecycle management.
//!
//! `WebViewManager` builds the chrome WebView and one page WebView per
//! mounted tab, and owns the queue their callbacks push events into.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use skiff_common::MountToken;

use crate::events::WebViewEvent;

mod handle;
pub mod handlers;
mod lifecycle;
mod types;

pub use handle::WebViewHandle;
pub use types::WebViewConfig;

pub(crate) type EventSink = Arc<Mutex<Vec<WebViewEvent>>>;

pub struct WebViewManager {
    /// Event sink: callbacks push here, the main loop drains.
    pub(crate) events: EventSink,
    next_token: AtomicU64,
}

impl WebViewManager {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            next_token: AtomicU64::new(1),
        }
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }

    /// A token no earlier mount has used.
    pub(crate) fn next_token(&self) -> MountToken {
        MountToken(self.next_token.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn push(events: &EventSink, event: WebViewEvent) {
    if let Ok(mut evts) = events.lock() {
        evts.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_unique_and_increasing() {
        let manager = WebViewManager::new();
        let a = manager.next_token();
        let b = manager.next_token();
        assert_ne!(a, b);
        assert!(b.0 > a.0);
    }

    #[test]
    fn drain_empties_queue_in_order() {
        let manager = WebViewManager::new();
        push(&manager.events, WebViewEvent::ChromeIpc { body: "1".into() });
        push(&manager.events, WebViewEvent::ChromeIpc { body: "2".into() });

        let drained = manager.drain_events();
        assert_eq!(
            drained,
            vec![
                WebViewEvent::ChromeIpc { body: "1".into() },
                WebViewEvent::ChromeIpc { body: "2".into() },
            ]
        );
        assert!(manager.drain_events().is_empty());
    }
}
