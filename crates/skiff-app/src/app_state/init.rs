//! Window creation and WebView setup.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use skiff_common::{Result, SkiffError};
use skiff_config::ConfigWatcher;
use skiff_webview::{WebViewConfig, WebViewManager};

use super::core::SkiffApp;
use super::types::CHROME_HTML;
use super::webview_bridge::bounds::rect_to_wry;

impl SkiffApp {
    /// Create the window, the WebView manager, and the chrome view.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                f64::from(self.config.window.width),
                f64::from(self.config.window.height),
            ));

        let window = event_loop
            .create_window(attrs)
            .map(Arc::new)
            .map_err(|e| SkiffError::Window(e.to_string()))?;
        self.window = Some(Arc::clone(&window));

        let manager = WebViewManager::new();
        let chrome_config = WebViewConfig {
            devtools: self.config.webview.devtools,
            ..WebViewConfig::with_html(CHROME_HTML)
        };
        let bounds = rect_to_wry(&self.viewport());
        let chrome = manager
            .create_chrome(window.as_ref(), bounds, chrome_config)
            .map_err(|e| SkiffError::WebView(format!("chrome: {e}")))?;
        self.chrome = Some(chrome);

        self.webviews = Some(manager);
        tracing::info!("Window and chrome initialized");
        Ok(())
    }

    /// Mount a renderer for the first tab and open the `--url` address.
    pub(super) fn mount_initial_tab(&mut self) {
        let first = self.browser.tabs().active_id();
        self.mount_tab(first);

        if let Some(url) = self.initial_url.take() {
            self.browser.set_address_text(url);
            let url = self.browser.submit_address();
            tracing::info!(url = %url, "opened startup address");
        }
        self.state_dirty = true;
    }

    pub(super) fn start_config_watcher(&mut self) {
        let Some(path) = self.config_path.clone() else {
            return;
        };
        match ConfigWatcher::start(path) {
            Ok(w) => self.watcher = Some(w),
            Err(e) => tracing::warn!("Config live reload disabled: {e}"),
        }
    }
}
