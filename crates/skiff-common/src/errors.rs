use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config watch error: {0}")]
    WatchError(String),
}

/// Failure reported by the engine behind a [`crate::Renderer`].
#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    #[error("navigation failed: {0}")]
    Navigation(String),

    #[error("script evaluation failed: {0}")]
    Script(String),

    #[error("renderer error: {0}")]
    Engine(String),
}

/// Failure to bring up the native window or one of its WebViews.
#[derive(Debug, thiserror::Error)]
pub enum SkiffError {
    #[error("window error: {0}")]
    Window(String),

    #[error("webview error: {0}")]
    WebView(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("browser.home_url is empty".into());
        assert_eq!(
            err.to_string(),
            "config validation error: browser.home_url is empty"
        );

        let err = ConfigError::WatchError("inotify limit reached".into());
        assert_eq!(err.to_string(), "config watch error: inotify limit reached");
    }

    #[test]
    fn renderer_error_display() {
        let err = RendererError::Navigation("bad url".into());
        assert_eq!(err.to_string(), "navigation failed: bad url");

        let err = RendererError::Script("no document".into());
        assert_eq!(err.to_string(), "script evaluation failed: no document");
    }

    #[test]
    fn skiff_error_display() {
        assert_eq!(
            SkiffError::Window("no display".into()).to_string(),
            "window error: no display"
        );
        assert_eq!(
            SkiffError::WebView("build failed".into()).to_string(),
            "webview error: build failed"
        );
    }
}
