/// Configuration for creating a WebView.
#[derive(Debug, Clone, PartialEq)]
pub struct WebViewConfig {
    /// Initial URL to load (takes precedence over `html`).
    pub url: Option<String>,
    /// Initial HTML content to render.
    pub html: Option<String>,
    pub devtools: bool,
    pub javascript: bool,
    /// Custom user agent string.
    pub user_agent: Option<String>,
    pub clipboard: bool,
    /// Allow media to start without a user gesture.
    pub autoplay: bool,
    pub back_forward_gestures: bool,
    /// Whether the view is shown as soon as it is built.
    pub visible: bool,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            url: None,
            html: None,
            devtools: cfg!(debug_assertions),
            javascript: true,
            user_agent: None,
            clipboard: true,
            autoplay: true,
            back_forward_gestures: true,
            visible: true,
        }
    }
}

impl WebViewConfig {
    /// Create a config that loads a URL.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    /// Create a config that renders inline HTML.
    pub fn with_html(html: impl Into<String>) -> Self {
        Self {
            html: Some(html.into()),
            ..Default::default()
        }
    }
}
