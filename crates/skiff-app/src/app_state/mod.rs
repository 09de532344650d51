//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Coordinates config, the browser controller, and WebViews.

mod core;
mod dispatch;
mod event_handler;
mod init;
mod layout;
mod polling;
mod reload;
mod shutdown;
mod types;
mod webview_bridge;

pub use core::SkiffApp;
