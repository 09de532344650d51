//! Tab id → renderer handle map with explicit mount/unmount.
//!
//! Commands addressed to a tab with no mounted renderer are dropped.
//! Renderer failures are logged and swallowed; nothing here is fatal.

use std::collections::HashMap;

use skiff_common::{InputCommand, MountToken, Renderer, RendererError, TabId};
use tracing::{debug, warn};

pub struct NavigationBridge<R> {
    handles: HashMap<TabId, R>,
}

impl<R: Renderer> NavigationBridge<R> {
    pub fn new() -> Self {
        Self {
            handles: HashMap::new(),
        }
    }

    /// Mount a renderer for `tab`. A previous handle for the same tab is
    /// returned, and its token stops being current.
    pub fn register(&mut self, tab: TabId, renderer: R) -> Option<R> {
        let token = renderer.token();
        let previous = self.handles.insert(tab, renderer);
        match &previous {
            Some(old) => debug!(%tab, %token, old = %old.token(), "renderer remounted"),
            None => debug!(%tab, %token, "renderer mounted"),
        }
        previous
    }

    /// Unmount the renderer for `tab`.
    pub fn unregister(&mut self, tab: TabId) -> Option<R> {
        let removed = self.handles.remove(&tab);
        if let Some(r) = &removed {
            debug!(%tab, token = %r.token(), "renderer unmounted");
        }
        removed
    }

    /// Unmount everything. Used during shutdown.
    pub fn unregister_all(&mut self) -> Vec<(TabId, R)> {
        self.handles.drain().collect()
    }

    /// Whether `token` belongs to the renderer currently mounted for `tab`.
    pub fn is_current(&self, tab: TabId, token: MountToken) -> bool {
        self.handles
            .get(&tab)
            .is_some_and(|r| r.token() == token)
    }

    pub fn get(&self, tab: TabId) -> Option<&R> {
        self.handles.get(&tab)
    }

    /// Tabs with a mounted renderer, in id order.
    pub fn mounted_tabs(&self) -> Vec<TabId> {
        let mut tabs: Vec<TabId> = self.handles.keys().copied().collect();
        tabs.sort();
        tabs
    }

    pub fn count(&self) -> usize {
        self.handles.len()
    }

    pub fn load_url(&mut self, tab: TabId, url: &str) -> bool {
        let Some(handle) = self.handles.get_mut(&tab) else {
            debug!(%tab, url, "load ignored: no renderer mounted");
            return false;
        };
        if let Err(e) = handle.load_url(url) {
            warn!(%tab, url, error = %e, "renderer failed to load url");
        }
        true
    }

    pub fn reload(&self, tab: TabId) -> bool {
        self.forward(tab, "reload", |r| r.reload())
    }

    pub fn go_back(&self, tab: TabId) -> bool {
        self.forward(tab, "back", |r| r.go_back())
    }

    pub fn go_forward(&self, tab: TabId) -> bool {
        self.forward(tab, "forward", |r| r.go_forward())
    }

    pub fn apply_input(&self, tab: TabId, command: &InputCommand) -> bool {
        self.forward(tab, "input", |r| r.apply_input(command))
    }

    pub fn set_visible(&self, tab: TabId, visible: bool) -> bool {
        self.forward(tab, "visibility", |r| r.set_visible(visible))
    }

    fn forward<F>(&self, tab: TabId, command: &'static str, f: F) -> bool
    where
        F: FnOnce(&R) -> Result<(), RendererError>,
    {
        let Some(handle) = self.handles.get(&tab) else {
            debug!(%tab, command, "command ignored: no renderer mounted");
            return false;
        };
        if let Err(e) = f(handle) {
            warn!(%tab, command, error = %e, "renderer command failed");
        }
        true
    }
}

impl<R: Renderer> Default for NavigationBridge<R> {
    fn default() -> Self {
        Self::new()
    }
}
