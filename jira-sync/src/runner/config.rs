//! Runner configuration.

use crate::config::{ConfigError, Settings, SyncConfig};

/// Everything a run needs: tracker settings plus the run's options.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    settings: Settings,
    sync: SyncConfig,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(settings: Settings, sync: SyncConfig) -> Self {
        Self { settings, sync }
    }

    /// Returns the tracker settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the run options.
    pub fn sync(&self) -> &SyncConfig {
        &self.sync
    }

    /// Validates settings and run options together.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.settings.validate()?;
        self.sync.validate()
    }
}
