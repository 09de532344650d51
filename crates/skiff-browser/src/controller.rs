//! Single owner of all browser state.
//!
//! Every mutation goes through a method here; view layers read through
//! [`BrowserController::snapshot`] and write through
//! [`BrowserController::dispatch`].

use skiff_common::{Panel, Renderer, TabId, VirtualKey};
use tracing::{debug, info, warn};

use crate::address::AddressBar;
use crate::bridge::NavigationBridge;
use crate::events::{RendererEvent, RendererOrigin};
use crate::favorites::FavoritesStore;
use crate::history::HistoryLog;
use crate::keyboard::{KeyboardLayout, VirtualKeyboard};
use crate::tabs::{HomePage, TabRegistry};

pub struct BrowserController<R> {
    pub(crate) tabs: TabRegistry,
    pub(crate) history: HistoryLog,
    pub(crate) favorites: FavoritesStore,
    pub(crate) address: AddressBar,
    pub(crate) keyboard: VirtualKeyboard,
    pub(crate) panel: Option<Panel>,
    pub(crate) bridge: NavigationBridge<R>,
}

impl<R: Renderer> BrowserController<R> {
    pub fn new(home: HomePage, layout: KeyboardLayout) -> Self {
        let tabs = TabRegistry::new(home);
        let address = AddressBar::new(tabs.active_url());
        Self {
            tabs,
            history: HistoryLog::new(),
            favorites: FavoritesStore::new(),
            address,
            keyboard: VirtualKeyboard::new(layout),
            panel: None,
            bridge: NavigationBridge::new(),
        }
    }

    /// Choose whether tabs show as loading before their first page event.
    /// Applies to the initial tab and every tab opened later.
    pub fn with_start_loading(mut self, on: bool) -> Self {
        self.tabs.set_start_loading(on);
        let ids: Vec<TabId> = self.tabs.iter().map(|t| t.id).collect();
        for id in ids {
            self.tabs.set_loading(id, on);
        }
        self
    }

    pub fn tabs(&self) -> &TabRegistry {
        &self.tabs
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    pub fn address(&self) -> &AddressBar {
        &self.address
    }

    pub fn keyboard(&self) -> &VirtualKeyboard {
        &self.keyboard
    }

    pub fn panel(&self) -> Option<Panel> {
        self.panel
    }

    pub fn bridge(&self) -> &NavigationBridge<R> {
        &self.bridge
    }

    pub fn set_home(&mut self, home: HomePage) {
        self.tabs.set_home(home);
    }

    /// Loading flag for tabs opened from now on. Open tabs keep theirs.
    pub fn set_start_loading(&mut self, on: bool) {
        self.tabs.set_start_loading(on);
    }

    pub fn set_keyboard_layout(&mut self, layout: KeyboardLayout) {
        self.keyboard.set_layout(layout);
    }

    // -- Tabs --

    pub fn add_tab(&mut self) -> TabId {
        let id = self.tabs.add_tab();
        self.address.set_text(self.tabs.active_url());
        self.sync_visibility();
        info!(%id, "tab opened");
        id
    }

    /// Make `id` the active tab. Unknown ids change nothing.
    pub fn switch_tab(&mut self, id: TabId) -> bool {
        if !self.tabs.set_active(id) {
            warn!(%id, "switch ignored: unknown tab");
            return false;
        }
        self.address.set_text(self.tabs.active_url());
        self.sync_visibility();
        debug!(%id, "tab focused");
        true
    }

    // -- Address bar --

    /// Text typed into the address bar.
    pub fn set_address_text(&mut self, text: impl Into<String>) {
        self.address.edit(text);
    }

    /// Normalize the address bar text and navigate the active tab to it.
    pub fn submit_address(&mut self) -> String {
        let url = self.address.submit();
        self.navigate_active(&url);
        url
    }

    /// Navigate the active tab to a history or favorites entry. Stored
    /// entries are already complete URLs and load exactly as recorded.
    pub fn open_url(&mut self, url: &str) -> String {
        self.panel = None;
        let url = url.trim().to_string();
        self.address.set_text(url.as_str());
        self.navigate_active(&url);
        self.sync_visibility();
        url
    }

    fn navigate_active(&mut self, url: &str) {
        let tab = self.tabs.active_id();
        self.tabs.update_url(tab, url);
        self.tabs.update_title(tab, url);
        self.tabs.set_loading(tab, true);
        self.history.record(url);
        info!(%tab, url, "navigating");
        self.bridge.load_url(tab, url);
    }

    // -- Navigation --

    pub fn reload(&self) -> bool {
        self.bridge.reload(self.tabs.active_id())
    }

    pub fn go_back(&self) -> bool {
        self.bridge.go_back(self.tabs.active_id())
    }

    pub fn go_forward(&self) -> bool {
        self.bridge.go_forward(self.tabs.active_id())
    }

    // -- Lists --

    /// Bookmark the active tab's current url and title.
    pub fn add_active_to_favorites(&mut self) -> bool {
        let Some(tab) = self.tabs.active_tab() else {
            return false;
        };
        let (url, title) = (tab.url.clone(), tab.title.clone());
        self.favorites.add(&url, &title)
    }

    pub fn remove_history(&mut self, url: &str) -> bool {
        self.history.remove(url) > 0
    }

    pub fn remove_favorite(&mut self, url: &str) -> bool {
        self.favorites.remove(url)
    }

    /// Open a list panel over the page. The page is hidden meanwhile.
    pub fn show_panel(&mut self, panel: Panel) {
        self.panel = Some(panel);
        self.sync_visibility();
    }

    pub fn close_panel(&mut self) {
        self.panel = None;
        self.sync_visibility();
    }

    // -- Keyboard overlay --

    pub fn show_keyboard(&mut self) {
        self.keyboard.show();
    }

    pub fn hide_keyboard(&mut self) {
        self.keyboard.hide();
    }

    /// Press an overlay key. Returns whether an edit reached a renderer.
    pub fn press_key(&mut self, key: VirtualKey) -> bool {
        match self.keyboard.press(key) {
            Some(command) => self.bridge.apply_input(self.tabs.active_id(), &command),
            None => false,
        }
    }

    // -- Renderer lifecycle --

    /// Attach a freshly created renderer to `tab`. Renderers for unknown
    /// tabs are dropped.
    pub fn mount(&mut self, tab: TabId, renderer: R) -> bool {
        if self.tabs.get(tab).is_none() {
            warn!(%tab, token = %renderer.token(), "mount rejected: unknown tab");
            return false;
        }
        self.bridge.register(tab, renderer);
        self.sync_visibility();
        true
    }

    pub fn unmount(&mut self, tab: TabId) -> Option<R> {
        self.bridge.unregister(tab)
    }

    pub fn unmount_all(&mut self) -> Vec<(TabId, R)> {
        self.bridge.unregister_all()
    }

    /// Apply a renderer callback. Events from a mount that is no longer
    /// registered for their tab are dropped; returns whether it was applied.
    pub fn handle_renderer_event(&mut self, origin: RendererOrigin, event: RendererEvent) -> bool {
        if !self.bridge.is_current(origin.tab, origin.token) {
            debug!(
                tab = %origin.tab,
                token = %origin.token,
                ?event,
                "dropping stale renderer event"
            );
            return false;
        }

        let tab = origin.tab;
        match event {
            RendererEvent::LoadStarted { url } => {
                debug!(%tab, url = %url, "load started");
                self.tabs.set_loading(tab, true);
            }
            RendererEvent::LoadEnd { url, title } => {
                debug!(%tab, url = %url, "load finished");
                self.tabs.update_url(tab, &url);
                if let Some(title) = title.filter(|t| !t.is_empty()) {
                    self.tabs.update_title(tab, &title);
                }
                self.tabs.set_loading(tab, false);
                self.history.record(&url);
                if tab == self.tabs.active_id() {
                    self.address.set_text(url);
                }
            }
            RendererEvent::TitleChanged { title } => {
                if title.is_empty() {
                    return false;
                }
                self.tabs.update_title(tab, &title);
            }
        }
        true
    }

    /// Show only the active tab's renderer, and none while a panel is open.
    fn sync_visibility(&self) {
        let active = self.tabs.active_id();
        let page_visible = self.panel.is_none();
        for tab in self.bridge.mounted_tabs() {
            self.bridge.set_visible(tab, page_visible && tab == active);
        }
    }
}
