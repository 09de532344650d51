//! Page renderer settings applied to every tab's WebView.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebViewSettings {
    pub javascript: bool,
    /// Allow media to play without a user gesture.
    pub autoplay: bool,
    /// Swipe back/forward (macOS).
    pub back_forward_gestures: bool,
    pub devtools: bool,
    pub clipboard: bool,
    /// Custom user agent. Empty uses the platform default.
    pub user_agent: String,
    /// Show the loading indicator from the moment a tab is created.
    pub start_in_loading_state: bool,
}

impl Default for WebViewSettings {
    fn default() -> Self {
        Self {
            javascript: true,
            autoplay: true,
            back_forward_gestures: true,
            devtools: false,
            clipboard: true,
            user_agent: String::new(),
            start_in_loading_state: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn webview_settings_defaults() {
        let s = WebViewSettings::default();
        assert!(s.javascript);
        assert!(s.autoplay);
        assert!(s.back_forward_gestures);
        assert!(!s.devtools);
        assert!(s.clipboard);
        assert!(s.user_agent.is_empty());
        assert!(s.start_in_loading_state);
    }

    #[test]
    fn webview_settings_partial_toml() {
        let s: WebViewSettings =
            toml::from_str("javascript = false\nuser_agent = \"Skiff/0.1\"").unwrap();
        assert!(!s.javascript);
        assert_eq!(s.user_agent, "Skiff/0.1");
        assert!(s.autoplay);
    }
}
