//! Application constants
//!
//! Centralized location for user-facing strings and configuration defaults.

/// Default generation endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/generate";

/// Default log file, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "imagegen.log";

/// Config directory name under the user's home
pub const CONFIG_DIR_NAME: &str = ".imagegen";

/// Config file name inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Shown when submitting an empty prompt
pub const VALIDATION_MESSAGE: &str = "Please enter a prompt.";

/// Shown for every failed generation request
pub const GENERIC_ERROR_MESSAGE: &str = "Failed to generate image. Try again.";

/// Application name
pub const APP_NAME: &str = "Text-to-Image Generator";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
