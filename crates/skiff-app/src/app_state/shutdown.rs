//! Graceful shutdown: stop watching config, destroy WebViews.

use super::core::SkiffApp;

impl SkiffApp {
    /// Tear down in order: config watcher, page WebViews, chrome.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        self.watcher = None;

        let handles = self.browser.unmount_all();
        match &self.webviews {
            Some(manager) => {
                for (_, handle) in handles {
                    manager.destroy_tab(handle);
                }
            }
            None => drop(handles),
        }

        self.chrome = None;
        self.should_exit = true;

        tracing::info!("Graceful shutdown complete");
    }
}
