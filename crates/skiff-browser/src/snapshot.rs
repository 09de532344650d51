//! Serializable view of the browser state for the chrome UI.

use serde::Serialize;
use skiff_common::{Panel, Renderer, TabId, VirtualKey};

use crate::controller::BrowserController;
use crate::favorites::Favorite;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabView {
    pub id: TabId,
    pub title: String,
    pub url: String,
    pub active: bool,
    pub loading: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyView {
    /// Name sent back in a `press_key` message.
    pub name: String,
    pub label: String,
}

impl From<VirtualKey> for KeyView {
    fn from(key: VirtualKey) -> Self {
        Self {
            name: key.name(),
            label: key.label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyboardView {
    pub visible: bool,
    pub rows: Vec<Vec<KeyView>>,
    pub close: KeyView,
}

/// Everything the chrome needs to redraw itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChromeState {
    pub tabs: Vec<TabView>,
    pub active_tab: TabId,
    pub address: String,
    /// Bumped whenever the browser, not the user, replaced `address`.
    pub address_revision: u64,
    pub loading: bool,
    pub history: Vec<String>,
    pub favorites: Vec<Favorite>,
    pub panel: Option<Panel>,
    pub keyboard: KeyboardView,
}

impl<R: Renderer> BrowserController<R> {
    pub fn snapshot(&self) -> ChromeState {
        let active = self.tabs.active_id();
        let tabs: Vec<TabView> = self
            .tabs
            .iter()
            .map(|tab| TabView {
                id: tab.id,
                title: tab.title.clone(),
                url: tab.url.clone(),
                active: tab.id == active,
                loading: tab.loading,
            })
            .collect();
        let loading = tabs.iter().any(|t| t.active && t.loading);

        ChromeState {
            tabs,
            active_tab: active,
            address: self.address.text().to_string(),
            address_revision: self.address.revision(),
            loading,
            history: self.history.iter().map(str::to_string).collect(),
            favorites: self.favorites.iter().cloned().collect(),
            panel: self.panel,
            keyboard: KeyboardView {
                visible: self.keyboard.is_visible(),
                rows: self
                    .keyboard
                    .layout()
                    .rows()
                    .iter()
                    .map(|row| row.iter().copied().map(KeyView::from).collect())
                    .collect(),
                close: KeyView::from(VirtualKey::Close),
            },
        }
    }
}
