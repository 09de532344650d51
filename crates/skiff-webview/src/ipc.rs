//! IPC protocol between Rust and the chrome UI.
//!
//! - **JS -> Rust**: the chrome calls `window.skiff.ipc.send(kind, payload)`,
//!   which posts `{kind, payload}` JSON to the WebView's IPC handler.
//! - **Rust -> JS**: Rust evaluates `window.skiff.ipc._dispatch(kind, payload)`
//!   built by [`js_dispatch_message`].

use serde::{Deserialize, Serialize};

/// A typed IPC message from JavaScript to Rust.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpcMessage {
    /// The message type / command name.
    pub kind: String,
    /// The message payload.
    #[serde(default)]
    pub payload: IpcPayload,
}

/// Payload of an IPC message: a plain string or structured JSON.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IpcPayload {
    Text(String),
    Json(serde_json::Value),
    #[default]
    None,
}

impl IpcPayload {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            IpcPayload::Text(s) => Some(s),
            IpcPayload::Json(serde_json::Value::String(s)) => Some(s),
            _ => None,
        }
    }

    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            IpcPayload::Json(v) => Some(v),
            _ => None,
        }
    }
}

impl IpcMessage {
    /// Parse an IPC message from a raw JSON string (from JS postMessage).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

/// JavaScript snippet that sets up the IPC bridge in the chrome WebView.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    window.skiff = window.skiff || {};
    window.skiff.ipc = {
        send: function(kind, payload) {
            window.ipc.postMessage(JSON.stringify({
                kind: kind,
                payload: payload === undefined ? null : payload
            }));
        },
        _handlers: {},
        on: function(kind, callback) {
            this._handlers[kind] = callback;
        },
        _dispatch: function(kind, payload) {
            var handler = this._handlers[kind];
            if (handler) {
                handler(payload);
            }
        }
    };
})();
"#;

/// Generate a JS snippet that dispatches a message to the chrome's handler.
pub fn js_dispatch_message(kind: &str, payload: &serde_json::Value) -> String {
    let payload_json = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());
    format!(
        "window.skiff.ipc._dispatch({}, {});",
        serde_json::to_string(kind).unwrap_or_else(|_| "\"unknown\"".to_string()),
        payload_json,
    )
}
