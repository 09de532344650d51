//! The seam between browser state and the web engine.

use crate::errors::RendererError;
use crate::input::InputCommand;
use crate::types::MountToken;

/// Control surface of one mounted web view.
///
/// Implemented by the `wry` handle in `skiff-webview`; the browser core
/// only ever talks to this trait.
pub trait Renderer {
    /// Token of this mount. Events produced by the view carry it.
    fn token(&self) -> MountToken;

    fn load_url(&mut self, url: &str) -> Result<(), RendererError>;

    fn reload(&self) -> Result<(), RendererError>;

    fn go_back(&self) -> Result<(), RendererError>;

    fn go_forward(&self) -> Result<(), RendererError>;

    /// Apply an edit to whatever text field currently has focus in the page.
    fn apply_input(&self, command: &InputCommand) -> Result<(), RendererError>;

    fn set_visible(&self, visible: bool) -> Result<(), RendererError>;
}
