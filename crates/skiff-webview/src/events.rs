//! WebView event types.

use serde::{Deserialize, Serialize};
use skiff_common::{MountToken, TabId};

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded.
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events emitted by WebView callbacks, drained by the main loop.
///
/// Page events carry the token of the mount that produced them so the
/// browser core can drop events from views that were since replaced.
#[derive(Debug, Clone, PartialEq)]
pub enum WebViewEvent {
    PageLoad {
        tab_id: TabId,
        token: MountToken,
        state: PageLoadState,
        url: String,
    },
    TitleChanged {
        tab_id: TabId,
        token: MountToken,
        title: String,
    },
    /// An allowlisted navigation is about to happen.
    NavigationRequested {
        tab_id: TabId,
        token: MountToken,
        url: String,
    },
    /// A message posted by the chrome UI.
    ChromeIpc { body: String },
}
