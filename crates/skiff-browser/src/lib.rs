//! Browser state for Skiff.
//!
//! Owns the tab registry, the history and favorites lists, the address
//! bar, the virtual keyboard overlay, and the bridge to mounted renderers.
//! Everything is driven through [`BrowserController`]; the engine behind
//! each tab is reached only through the [`skiff_common::Renderer`] trait.

pub mod address;
pub mod bridge;
pub mod controller;
pub mod dispatch;
pub mod events;
pub mod favorites;
pub mod history;
pub mod keyboard;
pub mod snapshot;
pub mod tabs;

#[cfg(test)]
pub(crate) mod test_support;

pub use address::{normalize_url, AddressBar};
pub use bridge::NavigationBridge;
pub use controller::BrowserController;
pub use dispatch::Dispatched;
pub use events::{RendererEvent, RendererOrigin};
pub use favorites::{Favorite, FavoritesStore};
pub use history::HistoryLog;
pub use keyboard::{KeyboardLayout, VirtualKeyboard, DEFAULT_KEY_ROWS};
pub use snapshot::{ChromeState, KeyView, KeyboardView, TabView};
pub use tabs::{HomePage, Tab, TabRegistry, DEFAULT_HOME_TITLE, DEFAULT_HOME_URL};
