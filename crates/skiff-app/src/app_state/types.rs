//! Internal constants for the app state module.

use std::time::Duration;

/// How often to poll for WebView and config events (approx 120 Hz).
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(8);

/// The chrome UI, compiled into the binary.
pub(super) const CHROME_HTML: &str = include_str!("../../assets/chrome.html");
