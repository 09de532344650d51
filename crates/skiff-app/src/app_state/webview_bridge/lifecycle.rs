//! Page WebView lifecycle: create per tab, size to the layout.

use skiff_common::{Rect, TabId};
use skiff_webview::WebViewConfig;

use crate::app_state::core::SkiffApp;
use crate::app_state::layout::ChromeLayout;

use super::bounds::rect_to_wry;

impl SkiffApp {
    /// Window content area in logical pixels.
    pub(in crate::app_state) fn viewport(&self) -> Rect {
        match &self.window {
            Some(window) => {
                let size = window.inner_size().to_logical::<f64>(window.scale_factor());
                Rect {
                    x: 0.0,
                    y: 0.0,
                    width: size.width,
                    height: size.height,
                }
            }
            None => Rect {
                x: 0.0,
                y: 0.0,
                width: f64::from(self.config.window.width),
                height: f64::from(self.config.window.height),
            },
        }
    }

    fn page_rect(&self) -> Rect {
        ChromeLayout::from_config(&self.config.window)
            .page_rect(self.viewport(), self.browser.keyboard().is_visible())
    }

    /// Engine settings for a page WebView opening `url`.
    pub(in crate::app_state) fn page_config(&self, url: &str) -> WebViewConfig {
        let settings = &self.config.webview;
        WebViewConfig {
            javascript: settings.javascript,
            autoplay: settings.autoplay,
            back_forward_gestures: settings.back_forward_gestures,
            devtools: settings.devtools,
            clipboard: settings.clipboard,
            user_agent: Some(settings.user_agent.clone()).filter(|ua| !ua.is_empty()),
            // Visibility is decided by the controller once mounted.
            visible: false,
            ..WebViewConfig::with_url(url)
        }
    }

    /// Build a page WebView for `tab` and hand it to the controller.
    pub(in crate::app_state) fn mount_tab(&mut self, tab: TabId) {
        let Some(url) = self.browser.tabs().get(tab).map(|t| t.url.clone()) else {
            tracing::warn!(%tab, "Cannot mount: unknown tab");
            return;
        };
        let (Some(window), Some(manager)) = (&self.window, &self.webviews) else {
            tracing::warn!(%tab, "Cannot create page WebView: window not initialized");
            return;
        };

        let bounds = rect_to_wry(&self.page_rect());
        let config = self.page_config(&url);
        match manager.create_tab(tab, window.as_ref(), bounds, config) {
            Ok(handle) => {
                if let Some(old) = self.browser.unmount(tab) {
                    manager.destroy_tab(old);
                }
                self.browser.mount(tab, handle);
                tracing::info!(%tab, url = %url, "page WebView mounted");
            }
            Err(e) => tracing::error!(%tab, error = %e, "Failed to create page WebView"),
        }
    }

    /// Resize the chrome and every page WebView to the current layout.
    pub(in crate::app_state) fn sync_webview_bounds(&self) {
        let full = rect_to_wry(&self.viewport());
        if let Some(chrome) = &self.chrome {
            if let Err(e) = chrome.set_bounds(full) {
                tracing::warn!(error = %e, "Failed to resize chrome");
            }
        }

        let page = rect_to_wry(&self.page_rect());
        for tab in self.browser.bridge().mounted_tabs() {
            if let Some(handle) = self.browser.bridge().get(tab) {
                if let Err(e) = handle.set_bounds(page) {
                    tracing::warn!(%tab, error = %e, "Failed to resize page WebView");
                }
            }
        }
    }

    /// Send toolbar and keyboard geometry to the chrome.
    pub(in crate::app_state) fn push_chrome_layout(&self) {
        let Some(chrome) = &self.chrome else {
            return;
        };
        let layout = ChromeLayout::from_config(&self.config.window).to_json();
        if let Err(e) = chrome.send_ipc("layout", &layout) {
            tracing::warn!(error = %e, "Failed to push chrome layout");
        }
    }
}
