//! SkiffApp struct definition and constructor.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use skiff_browser::{BrowserController, HomePage, KeyboardLayout};
use skiff_config::{ConfigWatcher, SkiffConfig};
use skiff_webview::{ChromeView, WebViewHandle, WebViewManager};

/// Top-level application state.
pub struct SkiffApp {
    pub(super) config: SkiffConfig,
    pub(super) config_path: Option<PathBuf>,
    pub(super) watcher: Option<ConfigWatcher>,

    pub(super) browser: BrowserController<WebViewHandle>,
    /// Address from `--url`, opened once the first tab is mounted.
    pub(super) initial_url: Option<String>,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) webviews: Option<WebViewManager>,
    pub(super) chrome: Option<ChromeView>,

    pub(super) should_exit: bool,
    /// Set when browser state changed and the chrome needs a new snapshot.
    pub(super) state_dirty: bool,
    pub(super) last_poll: Instant,
}

impl SkiffApp {
    pub fn new(config: SkiffConfig, config_path: Option<PathBuf>, initial_url: Option<String>) -> Self {
        let browser = browser_from_config(&config);
        Self {
            config,
            config_path,
            watcher: None,
            browser,
            initial_url,
            window: None,
            webviews: None,
            chrome: None,
            should_exit: false,
            state_dirty: true,
            last_poll: Instant::now(),
        }
    }
}

pub(super) fn home_from_config(config: &SkiffConfig) -> HomePage {
    HomePage {
        url: config.browser.home_url.clone(),
        title: config.browser.home_title.clone(),
    }
}

pub(super) fn browser_from_config(config: &SkiffConfig) -> BrowserController<WebViewHandle> {
    BrowserController::new(
        home_from_config(config),
        KeyboardLayout::from_rows(&config.keyboard.rows),
    )
    .with_start_loading(config.webview.start_in_loading_state)
}
