//! Chrome IPC validation and dispatch.

use skiff_common::{Action, Panel, TabId, VirtualKey};
use skiff_webview::{IpcMessage, IpcPayload};

use crate::app_state::core::SkiffApp;

// =============================================================================
// IPC ALLOWLIST
// =============================================================================

/// Message kinds the chrome may send. Anything else is rejected and logged.
const ALLOWED_IPC_KINDS: &[&str] = &[
    "chrome_ready",
    "new_tab",
    "focus_tab",
    "edit_address",
    "submit_address",
    "open_url",
    "reload",
    "go_back",
    "go_forward",
    "add_favorite",
    "remove_history",
    "remove_favorite",
    "show_panel",
    "close_panel",
    "show_keyboard",
    "hide_keyboard",
    "press_key",
];

pub fn is_ipc_kind_allowed(kind: &str) -> bool {
    ALLOWED_IPC_KINDS.contains(&kind)
}

/// Resolve a chrome message to a browser action.
///
/// `None` for `chrome_ready` (handled by the app) and for payloads that do
/// not fit the kind.
pub(crate) fn action_from_ipc(msg: &IpcMessage) -> Option<Action> {
    let text = || msg.payload.as_text().map(str::to_string);
    match msg.kind.as_str() {
        "new_tab" => Some(Action::NewTab),
        "focus_tab" => tab_id(&msg.payload).map(Action::FocusTab),
        "edit_address" => Some(Action::EditAddress(text().unwrap_or_default())),
        "submit_address" => Some(Action::SubmitAddress),
        "open_url" => text().map(Action::OpenUrl),
        "reload" => Some(Action::Reload),
        "go_back" => Some(Action::GoBack),
        "go_forward" => Some(Action::GoForward),
        "add_favorite" => Some(Action::AddFavorite),
        "remove_history" => text().map(Action::RemoveHistory),
        "remove_favorite" => text().map(Action::RemoveFavorite),
        "show_panel" => match msg.payload.as_text() {
            Some("history") => Some(Action::ShowPanel(Panel::History)),
            Some("favorites") => Some(Action::ShowPanel(Panel::Favorites)),
            _ => None,
        },
        "close_panel" => Some(Action::ClosePanel),
        "show_keyboard" => Some(Action::ShowKeyboard),
        "hide_keyboard" => Some(Action::HideKeyboard),
        "press_key" => msg
            .payload
            .as_text()
            .and_then(VirtualKey::from_name)
            .map(Action::PressKey),
        _ => None,
    }
}

/// A tab id sent either as a bare number or as `{"id": n}`.
fn tab_id(payload: &IpcPayload) -> Option<TabId> {
    let value = payload.as_json()?;
    let n = value
        .as_u64()
        .or_else(|| value.get("id").and_then(|v| v.as_u64()))?;
    u32::try_from(n).ok().map(TabId)
}

// =============================================================================
// DISPATCH
// =============================================================================

impl SkiffApp {
    pub(in crate::app_state) fn handle_chrome_ipc(&mut self, body: &str) {
        let Some(msg) = IpcMessage::from_json(body) else {
            tracing::warn!(body_len = body.len(), "IPC message rejected: failed to parse");
            return;
        };

        if !is_ipc_kind_allowed(&msg.kind) {
            tracing::warn!(kind = %msg.kind, "IPC message rejected: unknown kind");
            return;
        }

        tracing::debug!(kind = %msg.kind, "IPC message dispatched");

        if msg.kind == "chrome_ready" {
            self.push_chrome_layout();
            self.state_dirty = true;
            return;
        }

        match action_from_ipc(&msg) {
            Some(action) => self.apply_action(action),
            None => tracing::warn!(kind = %msg.kind, "IPC message rejected: bad payload"),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
