//! Live config reload.

use skiff_browser::KeyboardLayout;
use skiff_config::SkiffConfig;

use super::core::{home_from_config, SkiffApp};

impl SkiffApp {
    /// Re-read the config file. Invalid files keep the running config.
    pub(super) fn reload_config(&mut self) {
        let Some(path) = self.config_path.clone() else {
            return;
        };
        match skiff_config::load_config_from(&path) {
            Ok(config) => {
                self.apply_config(config);
                tracing::info!(path = %path.display(), "config reloaded");
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), "config reload rejected, keeping current: {e}");
            }
        }
    }

    /// Apply a new config to the running app.
    ///
    /// The home page, keyboard layout and new-tab loading flag take effect
    /// immediately. Existing tabs and already-built WebViews keep their
    /// current pages and engine settings.
    pub(super) fn apply_config(&mut self, config: SkiffConfig) {
        self.browser.set_home(home_from_config(&config));
        self.browser
            .set_start_loading(config.webview.start_in_loading_state);
        self.browser
            .set_keyboard_layout(KeyboardLayout::from_rows(&config.keyboard.rows));

        if let Some(window) = &self.window {
            if window.title() != config.window.title {
                window.set_title(&config.window.title);
            }
        }

        let layout_changed = config.window.toolbar_height != self.config.window.toolbar_height
            || config.window.keyboard_height != self.config.window.keyboard_height;
        self.config = config;

        if layout_changed {
            self.push_chrome_layout();
            self.sync_webview_bounds();
        }
        self.state_dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use crate::app_state::core::SkiffApp;
    use skiff_config::SkiffConfig;

    #[test]
    fn apply_config_updates_home_and_keyboard() {
        let mut app = SkiffApp::new(SkiffConfig::default(), None, None);
        let mut config = SkiffConfig::default();
        config.browser.home_url = "https://start.example".into();
        config.keyboard.rows = vec!["XY".into()];

        app.apply_config(config);

        assert_eq!(app.browser.tabs().home().url, "https://start.example");
        assert_eq!(app.browser.keyboard().layout().rows()[0].len(), 2);
        // The open tab keeps its page.
        assert_eq!(app.browser.tabs().active_url(), "https://www.google.com");
        assert!(app.state_dirty);
    }

    #[test]
    fn apply_config_sets_loading_flag_for_new_tabs_only() {
        let mut app = SkiffApp::new(SkiffConfig::default(), None, None);
        let first = app.browser.tabs().active_id();
        let mut config = SkiffConfig::default();
        config.webview.start_in_loading_state = false;

        app.apply_config(config);
        let added = app.browser.add_tab();

        assert!(app.browser.tabs().get(first).unwrap().loading);
        assert!(!app.browser.tabs().get(added).unwrap().loading);
    }

    #[test]
    fn reload_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[window]\nwidth = 1\n").unwrap();

        let mut app = SkiffApp::new(SkiffConfig::default(), Some(path), None);
        app.reload_config();
        assert_eq!(app.config.window.width, 1024);
    }

    #[test]
    fn reload_applies_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[browser]\nhome_title = \"Start\"\n").unwrap();

        let mut app = SkiffApp::new(SkiffConfig::default(), Some(path), None);
        app.reload_config();
        assert_eq!(app.config.browser.home_title, "Start");
        assert_eq!(app.browser.tabs().home().title, "Start");
    }
}
