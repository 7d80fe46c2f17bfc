//! XDG Base Directory paths for consciencia.
//!
//! The questionnaire is a CLI tool, so it follows XDG paths on every
//! platform instead of platform-native locations.

use std::path::PathBuf;

const APP_DIR: &str = "consciencia";

/// Get the consciencia config directory.
///
/// Returns `$XDG_CONFIG_HOME/consciencia` if set, otherwise `~/.config/consciencia`.
/// The user-level `config.toml` lives here.
///
/// # Examples
///
/// ```
/// use consciencia_paths::config_dir;
///
/// let config = config_dir();
/// let user_config = config.join("config.toml");
/// ```
pub fn config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg_config).join(APP_DIR)
    } else if let Some(home) = dirs::home_dir() {
        home.join(".config").join(APP_DIR)
    } else {
        PathBuf::from(".config").join(APP_DIR)
    }
}

/// Get the consciencia data directory.
///
/// Returns `$XDG_DATA_HOME/consciencia` if set, otherwise `~/.local/share/consciencia`.
/// Saved assessment reports default to a subdirectory of this path.
///
/// # Examples
///
/// ```
/// use consciencia_paths::data_dir;
///
/// let reports = data_dir().join("relatorios");
/// ```
pub fn data_dir() -> PathBuf {
    if let Ok(xdg_data) = std::env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg_data).join(APP_DIR)
    } else if let Some(home) = dirs::home_dir() {
        home.join(".local/share").join(APP_DIR)
    } else {
        PathBuf::from(".local/share").join(APP_DIR)
    }
}

/// Default directory for persisted assessment reports.
pub fn reports_dir() -> PathBuf {
    data_dir().join("relatorios")
}
