//! Default TOML config template with inline documentation comments.

/// The file written on first launch. Everything is commented out so the
/// built-in defaults apply until the user overrides them.
pub fn default_config_toml() -> &'static str {
    r##"# Skiff Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[browser]
# home_url = "https://www.google.com"
# home_title = "Google"

[webview]
# javascript = true
# autoplay = true                 # false: media waits for a user gesture
# back_forward_gestures = true
# devtools = false
# clipboard = true
# user_agent = ""                 # empty: platform default
# start_in_loading_state = true

[window]
# title = "Skiff"
# width = 1024                    # 320-7680
# height = 768                    # 240-4320
# toolbar_height = 96             # 40-400
# keyboard_height = 260           # 100-600

[keyboard]
# rows = ["1234567890", "QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"]

[logging]
# level = "info"                  # trace, debug, info, warn, error
"##
}
