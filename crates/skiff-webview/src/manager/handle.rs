use skiff_common::{InputCommand, MountToken, Renderer, RendererError, TabId};
use tracing::debug;
use wry::WebView;

use crate::script::{
    input_command_script, HISTORY_BACK_SCRIPT, HISTORY_FORWARD_SCRIPT, RELOAD_SCRIPT,
};

/// Handle to one tab's page WebView.
pub struct WebViewHandle {
    pub(super) webview: WebView,
    pub(super) tab_id: TabId,
    pub(super) token: MountToken,
}

impl WebViewHandle {
    /// Set the WebView bounds within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }

    fn run(&self, js: &str) -> Result<(), RendererError> {
        self.webview
            .evaluate_script(js)
            .map_err(|e| RendererError::Script(e.to_string()))
    }
}

impl Renderer for WebViewHandle {
    fn token(&self) -> MountToken {
        self.token
    }

    fn load_url(&mut self, url: &str) -> Result<(), RendererError> {
        debug!(tab = %self.tab_id, url, "load_url");
        self.webview
            .load_url(url)
            .map_err(|e| RendererError::Navigation(e.to_string()))
    }

    fn reload(&self) -> Result<(), RendererError> {
        self.run(RELOAD_SCRIPT)
    }

    fn go_back(&self) -> Result<(), RendererError> {
        self.run(HISTORY_BACK_SCRIPT)
    }

    fn go_forward(&self) -> Result<(), RendererError> {
        self.run(HISTORY_FORWARD_SCRIPT)
    }

    fn apply_input(&self, command: &InputCommand) -> Result<(), RendererError> {
        self.run(&input_command_script(command))
    }

    fn set_visible(&self, visible: bool) -> Result<(), RendererError> {
        self.webview
            .set_visible(visible)
            .map_err(|e| RendererError::Engine(e.to_string()))
    }
}
