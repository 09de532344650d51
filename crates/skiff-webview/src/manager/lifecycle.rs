use std::sync::Arc;

use skiff_common::TabId;
use tracing::debug;
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::chrome::ChromeView;
use crate::ipc::IPC_INIT_SCRIPT;

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

impl WebViewManager {
    /// Create a page WebView for `tab_id` as a child of `window`.
    ///
    /// Each call stamps the view with a fresh mount token; every event
    /// the view emits carries it.
    pub fn create_tab<W: raw_window_handle::HasWindowHandle>(
        &self,
        tab_id: TabId,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        let token = self.next_token();
        let events = Arc::clone(&self.events);

        let mut builder = apply_config(WebViewBuilder::new().with_bounds(bounds), &config);

        builder = Self::attach_page_load_handler(builder, Arc::clone(&events), tab_id, token);
        builder = Self::attach_title_handler(builder, Arc::clone(&events), tab_id, token);
        builder = Self::attach_navigation_handler(builder, Arc::clone(&events), tab_id, token);

        let initial_url = config.url.clone().unwrap_or_else(|| "about:blank".to_string());
        builder = match (&config.url, &config.html) {
            (Some(url), _) => builder.with_url(url),
            (None, Some(html)) => builder.with_html(html),
            (None, None) => builder.with_url("about:blank"),
        };

        let webview = builder.build_as_child(window)?;
        debug!(tab = %tab_id, %token, url = %initial_url, "page WebView created");

        Ok(WebViewHandle {
            webview,
            tab_id,
            token,
        })
    }

    /// Drop a page WebView.
    pub fn destroy_tab(&self, handle: WebViewHandle) {
        let (tab_id, token) = (handle.tab_id, handle.token);
        drop(handle);
        debug!(tab = %tab_id, %token, "page WebView destroyed");
    }

    /// Create the chrome WebView that hosts the browser UI.
    pub fn create_chrome<W: raw_window_handle::HasWindowHandle>(
        &self,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<ChromeView, wry::Error> {
        let mut builder = apply_config(WebViewBuilder::new().with_bounds(bounds), &config)
            .with_initialization_script(IPC_INIT_SCRIPT);
        builder = Self::attach_chrome_ipc_handler(builder, Arc::clone(&self.events));

        builder = match (&config.html, &config.url) {
            (Some(html), _) => builder.with_html(html),
            (None, Some(url)) => builder.with_url(url),
            (None, None) => builder.with_html("<html><body></body></html>"),
        };

        let webview = builder.build_as_child(window)?;
        debug!("chrome WebView created");
        Ok(ChromeView::new(webview))
    }
}

fn apply_config<'a>(builder: WebViewBuilder<'a>, config: &WebViewConfig) -> WebViewBuilder<'a> {
    let mut builder = builder
        .with_devtools(config.devtools)
        .with_clipboard(config.clipboard)
        .with_autoplay(config.autoplay)
        .with_back_forward_navigation_gestures(config.back_forward_gestures)
        .with_visible(config.visible)
        .with_focused(false);

    if !config.javascript {
        builder = builder.with_javascript_disabled();
    }
    if let Some(ua) = config.user_agent.as_deref().filter(|ua| !ua.is_empty()) {
        builder = builder.with_user_agent(ua);
    }
    builder
}
