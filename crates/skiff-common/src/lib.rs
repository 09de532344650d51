pub mod actions;
pub mod errors;
pub mod input;
pub mod navigation;
pub mod renderer;
pub mod types;

pub use actions::{Action, Panel};
pub use errors::{ConfigError, RendererError, SkiffError};
pub use input::{InputCommand, VirtualKey};
pub use navigation::is_navigation_allowed;
pub use renderer::Renderer;
pub use types::{MountToken, Rect, TabId};

pub type Result<T> = std::result::Result<T, SkiffError>;
