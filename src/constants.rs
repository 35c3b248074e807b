//! Application-wide constants.

/// The display name of the application.
pub const APP_NAME: &str = "Button Studio";

/// The binary name of the application.
pub const APP_BINARY_NAME: &str = "button-studio";

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "ButtonStudio";

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "BUTTON_STUDIO_CONFIG_DIR";

/// Storage key of the current layout snapshot.
pub const CURRENT_LAYOUT_KEY: &str = "widget-layout.current";

/// Storage key of the saved layouts list.
pub const SAVED_LAYOUTS_KEY: &str = "widget-layout.saved";
