// src/constants.rs
//
// Application-wide constants. Each constant is documented with its purpose and
// usage context.

/// Base URL used when neither flag, environment, nor config file provides one.
///
/// Used in: `infrastructure/config.rs`
pub const DEFAULT_BASE_URL: &str = "https://684f24b2f0c9c9848d2a331c.mockapi.io";

/// Environment variable overriding the configured API base URL.
///
/// Used in: `lib.rs`
pub const BASE_URL_ENV_VAR: &str = "NOTEPAD_API_URL";

/// Directory name below the platform config dir holding config and storage.
///
/// Used in: `infrastructure/config.rs`
pub const APP_DIR_NAME: &str = "notepad";

/// Local storage key of the persisted dark-mode preference.
///
/// The value is a JSON-encoded boolean (`"true"` / `"false"`).
///
/// Used in: `state/dark_mode.rs`
pub const DARK_MODE_STORAGE_KEY: &str = "darkMode";

/// Styling flag set on the document root while dark mode is enabled.
///
/// Used in: `state/dark_mode.rs`, `lib.rs`
pub const DARK_MODE_CLASS: &str = "dark";
