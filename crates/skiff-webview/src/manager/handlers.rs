use skiff_common::{is_navigation_allowed, MountToken, TabId};
use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::{PageLoadState, WebViewEvent};

use super::{push, EventSink, WebViewManager};

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

impl WebViewManager {
    pub(super) fn attach_chrome_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();

            if serde_json::from_str::<serde_json::Value>(&body).is_err() {
                warn!(body_len = body.len(), "chrome IPC rejected: invalid JSON");
                return;
            }

            debug!(body_len = body.len(), "chrome IPC message");
            push(&events, WebViewEvent::ChromeIpc { body });
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        tab_id: TabId,
        token: MountToken,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(tab = %tab_id, %token, ?state, url = %url, "page load");
            push(
                &events,
                WebViewEvent::PageLoad {
                    tab_id,
                    token,
                    state,
                    url,
                },
            );
        })
    }

    pub(super) fn attach_title_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        tab_id: TabId,
        token: MountToken,
    ) -> WebViewBuilder<'a> {
        builder.with_document_title_changed_handler(move |title| {
            debug!(tab = %tab_id, %token, title = %title, "title changed");
            push(
                &events,
                WebViewEvent::TitleChanged {
                    tab_id,
                    token,
                    title,
                },
            );
        })
    }

    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        tab_id: TabId,
        token: MountToken,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            if !is_navigation_allowed(&url) {
                warn!(tab = %tab_id, url = %url, "navigation blocked: scheme not allowed");
                return false;
            }

            debug!(tab = %tab_id, url = %url, "navigation allowed");
            push(
                &events,
                WebViewEvent::NavigationRequested { tab_id, token, url },
            );
            true
        })
    }
}
