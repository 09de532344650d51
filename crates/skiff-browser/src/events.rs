//! Renderer callbacks as seen by the browser core.

use skiff_common::{MountToken, TabId};

/// Which mount produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RendererOrigin {
    pub tab: TabId,
    pub token: MountToken,
}

impl RendererOrigin {
    pub fn new(tab: TabId, token: MountToken) -> Self {
        Self { tab, token }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RendererEvent {
    LoadStarted { url: String },
    /// Load finished. Engines that report the title separately send `None`
    /// here and a [`RendererEvent::TitleChanged`] later.
    LoadEnd { url: String, title: Option<String> },
    TitleChanged { title: String },
}
