//! WebView layer for Skiff.
//!
//! Wraps the `wry` crate to provide:
//! - One page WebView per tab, each tagged with a mount token
//! - The chrome WebView (tab strip, address bar, panels, keyboard)
//! - Bidirectional IPC between Rust and the chrome
//! - Navigation commands and focused-field text injection
//! - Event collection (page load, title change, navigation)

pub mod chrome;
pub mod events;
pub mod ipc;
pub mod manager;
pub mod script;

pub use chrome::ChromeView;
pub use events::{PageLoadState, WebViewEvent};
pub use ipc::{IpcMessage, IpcPayload};
pub use manager::{WebViewConfig, WebViewHandle, WebViewManager};
