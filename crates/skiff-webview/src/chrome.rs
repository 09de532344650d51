//! The chrome WebView: tab strip, address bar, panels, keyboard overlay.

use serde::Serialize;
use tracing::warn;
use wry::WebView;

use crate::ipc::js_dispatch_message;

pub struct ChromeView {
    webview: WebView,
}

impl ChromeView {
    pub(crate) fn new(webview: WebView) -> Self {
        Self { webview }
    }

    /// Send a typed message to the chrome's `window.skiff.ipc` handlers.
    pub fn send_ipc(&self, kind: &str, payload: &serde_json::Value) -> Result<(), wry::Error> {
        self.webview
            .evaluate_script(&js_dispatch_message(kind, payload))
    }

    /// Push a serializable state snapshot under the `state` kind.
    pub fn push_state<T: Serialize>(&self, state: &T) {
        let payload = match serde_json::to_value(state) {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, "failed to serialize chrome state");
                return;
            }
        };
        if let Err(e) = self.send_ipc("state", &payload) {
            warn!(error = %e, "failed to push chrome state");
        }
    }

    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }
}
