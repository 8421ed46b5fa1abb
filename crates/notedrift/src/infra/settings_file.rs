//! JSON-file settings persistence.

use std::fs;
use std::path::PathBuf;

use crate::app::settings::{Settings, SettingsError, SettingsStore};

/// Stores settings as pretty-printed JSON at a fixed path.
///
/// An absent file is not an error; it simply yields the defaults.
pub struct JsonSettingsStore {
    path: PathBuf,
}

impl JsonSettingsStore {
    /// Creates a store backed by the given file path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SettingsStore for JsonSettingsStore {
    fn load(&self) -> Result<Settings, SettingsError> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }

        let raw = fs::read_to_string(&self.path)?;

        Ok(serde_json::from_str(&raw)?)
    }

    fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let raw = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, raw)?;

        tracing::debug!(path = %self.path.display(), "saved settings");

        Ok(())
    }
}
