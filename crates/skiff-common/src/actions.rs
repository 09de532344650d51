use serde::{Deserialize, Serialize};

use crate::input::VirtualKey;
use crate::types::TabId;

/// List panels that can cover the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Panel {
    History,
    Favorites,
}

/// Every user-triggerable action in the browser.
///
/// The chrome UI and the CLI resolve to an `Action`; the controller
/// matches on it to route to tabs, lists, and the renderer bridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    // -- Tabs --
    NewTab,
    FocusTab(TabId),

    // -- Address bar --
    EditAddress(String),
    SubmitAddress,
    OpenUrl(String),

    // -- Navigation --
    Reload,
    GoBack,
    GoForward,

    // -- Lists --
    AddFavorite,
    RemoveHistory(String),
    RemoveFavorite(String),
    ShowPanel(Panel),
    ClosePanel,

    // -- Keyboard overlay --
    ShowKeyboard,
    HideKeyboard,
    PressKey(VirtualKey),
}

impl Action {
    /// Short name for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Action::NewTab => "New Tab",
            Action::FocusTab(_) => "Focus Tab",
            Action::EditAddress(_) => "Edit Address",
            Action::SubmitAddress => "Go",
            Action::OpenUrl(_) => "Open URL",
            Action::Reload => "Reload",
            Action::GoBack => "Back",
            Action::GoForward => "Forward",
            Action::AddFavorite => "Add to Favorites",
            Action::RemoveHistory(_) => "Remove from History",
            Action::RemoveFavorite(_) => "Remove from Favorites",
            Action::ShowPanel(Panel::History) => "Show History",
            Action::ShowPanel(Panel::Favorites) => "Show Favorites",
            Action::ClosePanel => "Close Panel",
            Action::ShowKeyboard => "Show Keyboard",
            Action::HideKeyboard => "Hide Keyboard",
            Action::PressKey(_) => "Key Press",
        }
    }
}
