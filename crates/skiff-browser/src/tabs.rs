//! Ordered tab list with a single active tab.

use serde::{Deserialize, Serialize};
use skiff_common::TabId;
use tracing::debug;

pub const DEFAULT_HOME_URL: &str = "https://www.google.com";
pub const DEFAULT_HOME_TITLE: &str = "Google";

/// Page every new tab starts on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomePage {
    pub url: String,
    pub title: String,
}

impl Default for HomePage {
    fn default() -> Self {
        Self {
            url: DEFAULT_HOME_URL.to_string(),
            title: DEFAULT_HOME_TITLE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tab {
    pub id: TabId,
    pub url: String,
    pub title: String,
    /// Set when a navigation starts, cleared on load end.
    pub loading: bool,
}

/// Tabs in creation order plus the active pointer.
///
/// Never empty: the registry is created with one tab and tabs are not
/// removed, so ids are always `1..=len`.
#[derive(Debug, Clone)]
pub struct TabRegistry {
    tabs: Vec<Tab>,
    active: TabId,
    home: HomePage,
    /// Initial `loading` flag of new tabs.
    start_loading: bool,
}

impl TabRegistry {
    pub fn new(home: HomePage) -> Self {
        let first = Tab {
            id: TabId(1),
            url: home.url.clone(),
            title: home.title.clone(),
            loading: true,
        };
        Self {
            tabs: vec![first],
            active: TabId(1),
            home,
            start_loading: true,
        }
    }

    /// Append a tab at the home page and make it active.
    pub fn add_tab(&mut self) -> TabId {
        let id = TabId(self.tabs.len() as u32 + 1);
        self.tabs.push(Tab {
            id,
            url: self.home.url.clone(),
            title: self.home.title.clone(),
            loading: self.start_loading,
        });
        self.active = id;
        debug!(%id, count = self.tabs.len(), "tab added");
        id
    }

    /// Switch the active tab. Unknown ids leave the current tab active.
    pub fn set_active(&mut self, id: TabId) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        self.active = id;
        true
    }

    pub fn update_url(&mut self, id: TabId, url: &str) {
        if let Some(tab) = self.get_mut(id) {
            tab.url = url.to_string();
        }
    }

    pub fn update_title(&mut self, id: TabId, title: &str) {
        if let Some(tab) = self.get_mut(id) {
            tab.title = title.to_string();
        }
    }

    pub fn set_loading(&mut self, id: TabId, loading: bool) {
        if let Some(tab) = self.get_mut(id) {
            tab.loading = loading;
        }
    }

    pub fn active_id(&self) -> TabId {
        self.active
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.get(self.active)
    }

    /// URL of the active tab, or the home page if the pointer does not resolve.
    pub fn active_url(&self) -> &str {
        self.active_tab()
            .map(|t| t.url.as_str())
            .unwrap_or(self.home.url.as_str())
    }

    pub fn get(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    fn get_mut(&mut self, id: TabId) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|t| t.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tab> {
        self.tabs.iter()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Whether tabs opened from now on start with `loading` set.
    pub fn set_start_loading(&mut self, on: bool) {
        self.start_loading = on;
    }

    pub fn home(&self) -> &HomePage {
        &self.home
    }

    /// Change the page future tabs open on. Existing tabs are untouched.
    pub fn set_home(&mut self, home: HomePage) {
        self.home = home;
    }
}

impl Default for TabRegistry {
    fn default() -> Self {
        Self::new(HomePage::default())
    }
}
