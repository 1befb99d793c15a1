//! Settings and run configuration.
//!
//! Settings (endpoints, credentials, custom field ids) come from a TOML file
//! plus environment overrides; the per-run [`SyncConfig`] comes from flags.

mod error;
mod settings;
mod sync;

pub use error::ConfigError;
pub use settings::{
    CustomFields, Settings, DEFAULT_ACCOUNT_FIELD, DEFAULT_EPIC_FIELD, DEFAULT_GITLAB_URL,
};
pub use sync::{DescriptionMode, FailurePolicy, SyncConfig};

use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name looked up in the home directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = ".jira-sync.toml";

/// Returns `$HOME/.jira-sync.toml`, if a home directory is known.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(DEFAULT_CONFIG_FILE))
}

/// Loads settings from a TOML file and the process environment.
///
/// An explicit `path` must exist. Without one, `$HOME/.jira-sync.toml` is
/// read if present and otherwise settings come from the environment alone.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file is missing, unreadable or malformed.
/// The result is not validated; call [`Settings::validate`].
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let mut settings = match path {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::MissingFile {
                    path: path.display().to_string(),
                });
            }
            read_settings(path)?
        }
        None => match default_config_path() {
            Some(path) if path.exists() => read_settings(&path)?,
            _ => {
                debug!("No config file found, using environment only");
                Settings::default()
            }
        },
    };

    settings.apply_env(|var| std::env::var(var).ok());
    Ok(settings)
}

/// Reads and parses a single settings file.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file cannot be read or parsed.
pub fn read_settings(path: &Path) -> Result<Settings, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;
    let settings = toml::from_str(&content).map_err(|e| ConfigError::TomlError {
        path: path.display().to_string(),
        source: e,
    })?;
    info!(path = %path.display(), "Using config file");
    Ok(settings)
}
