//! Event polling: WebView callbacks, config changes, chrome state pushes.

use std::time::Instant;

use winit::event_loop::ActiveEventLoop;

use skiff_browser::{RendererEvent, RendererOrigin};
use skiff_webview::{PageLoadState, WebViewEvent};

use super::core::SkiffApp;
use super::types::POLL_INTERVAL;

impl SkiffApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_webview_events();
            self.poll_config_changes();
            self.push_chrome_state();
        }

        event_loop.set_control_flow(winit::event_loop::ControlFlow::WaitUntil(
            Instant::now() + POLL_INTERVAL,
        ));
    }

    pub(super) fn poll_webview_events(&mut self) {
        let events = match &self.webviews {
            Some(manager) => manager.drain_events(),
            None => return,
        };
        for event in events {
            self.handle_webview_event(event);
        }
    }

    pub(super) fn handle_webview_event(&mut self, event: WebViewEvent) {
        match event {
            WebViewEvent::ChromeIpc { body } => self.handle_chrome_ipc(&body),
            other => {
                if let Some((origin, event)) = to_renderer_event(other) {
                    if self.browser.handle_renderer_event(origin, event) {
                        self.state_dirty = true;
                    }
                }
            }
        }
    }

    fn poll_config_changes(&mut self) {
        let changed = self
            .watcher
            .as_mut()
            .is_some_and(|watcher| watcher.poll_changed());
        if changed {
            self.reload_config();
        }
    }

    fn push_chrome_state(&mut self) {
        if !self.state_dirty {
            return;
        }
        if let Some(chrome) = &self.chrome {
            chrome.push_state(&self.browser.snapshot());
            self.state_dirty = false;
        }
    }
}

/// Translate a page WebView callback into the browser core's event.
pub(super) fn to_renderer_event(event: WebViewEvent) -> Option<(RendererOrigin, RendererEvent)> {
    match event {
        WebViewEvent::PageLoad {
            tab_id,
            token,
            state,
            url,
        } => {
            let event = match state {
                PageLoadState::Started => RendererEvent::LoadStarted { url },
                PageLoadState::Finished => RendererEvent::LoadEnd { url, title: None },
            };
            Some((RendererOrigin::new(tab_id, token), event))
        }
        WebViewEvent::TitleChanged {
            tab_id,
            token,
            title,
        } => Some((
            RendererOrigin::new(tab_id, token),
            RendererEvent::TitleChanged { title },
        )),
        // A link followed inside the page shows as loading before the
        // engine reports the load itself.
        WebViewEvent::NavigationRequested { tab_id, token, url } => Some((
            RendererOrigin::new(tab_id, token),
            RendererEvent::LoadStarted { url },
        )),
        WebViewEvent::ChromeIpc { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_state::core::SkiffApp;
    use skiff_common::{MountToken, TabId};
    use skiff_config::SkiffConfig;

    #[test]
    fn page_finished_becomes_load_end() {
        let (origin, event) = to_renderer_event(WebViewEvent::PageLoad {
            tab_id: TabId(2),
            token: MountToken(9),
            state: PageLoadState::Finished,
            url: "https://example.com".into(),
        })
        .unwrap();
        assert_eq!(origin, RendererOrigin::new(TabId(2), MountToken(9)));
        assert_eq!(
            event,
            RendererEvent::LoadEnd {
                url: "https://example.com".into(),
                title: None
            }
        );
    }

    #[test]
    fn page_started_becomes_load_started() {
        let (_, event) = to_renderer_event(WebViewEvent::PageLoad {
            tab_id: TabId(1),
            token: MountToken(1),
            state: PageLoadState::Started,
            url: "https://example.com".into(),
        })
        .unwrap();
        assert!(matches!(event, RendererEvent::LoadStarted { .. }));
    }

    #[test]
    fn title_change_is_forwarded() {
        let (_, event) = to_renderer_event(WebViewEvent::TitleChanged {
            tab_id: TabId(1),
            token: MountToken(1),
            title: "Example".into(),
        })
        .unwrap();
        assert_eq!(
            event,
            RendererEvent::TitleChanged {
                title: "Example".into()
            }
        );
    }

    #[test]
    fn chrome_ipc_is_not_a_renderer_event() {
        assert!(to_renderer_event(WebViewEvent::ChromeIpc { body: "{}".into() }).is_none());
    }

    #[test]
    fn navigation_request_becomes_load_started() {
        let (origin, event) = to_renderer_event(WebViewEvent::NavigationRequested {
            tab_id: TabId(3),
            token: MountToken(4),
            url: "https://example.com/next".into(),
        })
        .unwrap();
        assert_eq!(origin, RendererOrigin::new(TabId(3), MountToken(4)));
        assert_eq!(
            event,
            RendererEvent::LoadStarted {
                url: "https://example.com/next".into()
            }
        );
    }

    #[test]
    fn unmounted_page_events_are_dropped() {
        let mut app = SkiffApp::new(SkiffConfig::default(), None, None);
        app.state_dirty = false;
        app.handle_webview_event(WebViewEvent::PageLoad {
            tab_id: TabId(1),
            token: MountToken(1),
            state: PageLoadState::Finished,
            url: "https://late.example".into(),
        });
        assert!(!app.state_dirty);
        assert!(app.browser.history().is_empty());
    }

    #[test]
    fn chrome_ipc_event_reaches_dispatch() {
        let mut app = SkiffApp::new(SkiffConfig::default(), None, None);
        app.handle_webview_event(WebViewEvent::ChromeIpc {
            body: r#"{"kind":"new_tab","payload":null}"#.into(),
        });
        assert_eq!(app.browser.tabs().len(), 2);
    }
}
