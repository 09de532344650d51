//! Action dispatch: routes user actions to the controller operation that
//! handles them.

use skiff_common::{Action, Renderer, TabId};
use tracing::debug;

use crate::controller::BrowserController;

/// What the shell has to do after an action was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatched {
    /// State changed (or was already as requested); push a new snapshot.
    Handled,
    /// Nothing changed.
    Ignored,
    /// A tab was opened and needs a renderer mounted.
    TabOpened(TabId),
}

impl Dispatched {
    fn from_changed(changed: bool) -> Self {
        if changed {
            Dispatched::Handled
        } else {
            Dispatched::Ignored
        }
    }
}

impl<R: Renderer> BrowserController<R> {
    pub fn dispatch(&mut self, action: Action) -> Dispatched {
        debug!(action = action.label(), "dispatch");
        match action {
            Action::NewTab => Dispatched::TabOpened(self.add_tab()),
            Action::FocusTab(id) => Dispatched::from_changed(self.switch_tab(id)),

            Action::EditAddress(text) => {
                self.set_address_text(text);
                Dispatched::Handled
            }
            Action::SubmitAddress => {
                self.submit_address();
                Dispatched::Handled
            }
            Action::OpenUrl(url) => {
                self.open_url(&url);
                Dispatched::Handled
            }

            Action::Reload => Dispatched::from_changed(self.reload()),
            Action::GoBack => Dispatched::from_changed(self.go_back()),
            Action::GoForward => Dispatched::from_changed(self.go_forward()),

            Action::AddFavorite => Dispatched::from_changed(self.add_active_to_favorites()),
            Action::RemoveHistory(url) => Dispatched::from_changed(self.remove_history(&url)),
            Action::RemoveFavorite(url) => Dispatched::from_changed(self.remove_favorite(&url)),
            Action::ShowPanel(panel) => {
                self.show_panel(panel);
                Dispatched::Handled
            }
            Action::ClosePanel => {
                self.close_panel();
                Dispatched::Handled
            }

            Action::ShowKeyboard => {
                self.show_keyboard();
                Dispatched::Handled
            }
            Action::HideKeyboard => {
                self.hide_keyboard();
                Dispatched::Handled
            }
            Action::PressKey(key) => {
                let was_visible = self.keyboard().is_visible();
                let injected = self.press_key(key);
                // Close changes overlay state without reaching the page.
                Dispatched::from_changed(injected || was_visible != self.keyboard().is_visible())
            }
        }
    }
}
