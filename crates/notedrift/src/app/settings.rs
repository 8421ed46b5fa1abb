use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Persisted user settings.
///
/// Serialized with camelCase keys so the on-disk file reads as
/// `{"expandToSubfolders": true}`.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Expands random selection into subfolders. When the selected note
    /// lives in a subfolder, the next selection is restricted to that
    /// folder.
    pub expand_to_subfolders: bool,
}

/// Errors raised while loading or saving settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to access settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings file: {0}")]
    Format(#[from] serde_json::Error),
}

/// Key-value settings boundary used by the app layer.
///
/// Production uses the JSON file store; tests can inject `MockSettingsStore`
/// to observe persistence without touching the filesystem.
#[cfg_attr(test, mockall::automock)]
pub trait SettingsStore {
    /// Loads persisted settings, falling back to defaults when absent.
    ///
    /// # Errors
    /// Returns an error when the backing store exists but cannot be read or
    /// parsed.
    fn load(&self) -> Result<Settings, SettingsError>;

    /// Persists the given settings.
    ///
    /// # Errors
    /// Returns an error when the backing store cannot be written.
    fn save(&self, settings: &Settings) -> Result<(), SettingsError>;
}
