//! File watcher for live config reload.
//!
//! Uses the `notify` crate to watch the config file for changes, with a
//! 500ms debounce so editor save sequences produce one reload.

mod config_watcher;


pub use config_watcher::{ConfigWatcher, DEBOUNCE};
