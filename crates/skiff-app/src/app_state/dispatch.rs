//! Action dispatch: applies a user action to the browser and performs
//! the window-level follow-up it needs.

use skiff_browser::Dispatched;
use skiff_common::Action;

use super::core::SkiffApp;

impl SkiffApp {
    pub(super) fn apply_action(&mut self, action: Action) {
        let label = action.label();
        let keyboard_before = self.browser.keyboard().is_visible();

        match self.browser.dispatch(action) {
            Dispatched::TabOpened(id) => {
                self.mount_tab(id);
                self.state_dirty = true;
            }
            Dispatched::Handled => self.state_dirty = true,
            Dispatched::Ignored => {
                tracing::debug!(action = label, "action had no effect");
            }
        }

        if keyboard_before != self.browser.keyboard().is_visible() {
            self.sync_webview_bounds();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app_state::core::SkiffApp;
    use skiff_common::{Action, Panel, TabId};
    use skiff_config::SkiffConfig;

    fn app() -> SkiffApp {
        let mut app = SkiffApp::new(SkiffConfig::default(), None, None);
        app.state_dirty = false;
        app
    }

    #[test]
    fn handled_action_marks_state_dirty() {
        let mut app = app();
        app.apply_action(Action::ShowPanel(Panel::History));
        assert!(app.state_dirty);
        assert_eq!(app.browser.panel(), Some(Panel::History));
    }

    #[test]
    fn ignored_action_leaves_state_clean() {
        let mut app = app();
        app.apply_action(Action::Reload);
        assert!(!app.state_dirty);
    }

    #[test]
    fn new_tab_without_window_still_opens_tab() {
        let mut app = app();
        app.apply_action(Action::NewTab);
        assert_eq!(app.browser.tabs().active_id(), TabId(2));
        assert_eq!(app.browser.bridge().count(), 0);
        assert!(app.state_dirty);
    }

    #[test]
    fn submit_address_updates_active_tab() {
        let mut app = app();
        app.apply_action(Action::EditAddress("wikipedia.org".into()));
        app.apply_action(Action::SubmitAddress);
        assert_eq!(app.browser.tabs().active_url(), "https://wikipedia.org");
        assert!(app.browser.history().contains("https://wikipedia.org"));
    }
}
