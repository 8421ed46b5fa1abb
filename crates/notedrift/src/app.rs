//! App-layer composition root and shared state container.
//!
//! [`App`] owns the vault tree, the persisted settings, the sticky selection
//! state, and the current UI mode. Runtime mode handlers mutate it in
//! response to key events.

use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::app::command::{CommandOutcome, VaultWideFallback};
use crate::domain::sampler::SelectionState;
use crate::domain::vault::FolderNode;
use crate::ui::state::app_mode::AppMode;

pub mod command;
pub mod settings;

pub use command::NoteCommand;
pub use settings::{Settings, SettingsStore};

/// File name of the persisted settings inside the notedrift home.
pub const SETTINGS_FILE: &str = "settings.json";

/// Returns the notedrift home directory (`~/.notedrift`).
pub fn notedrift_home() -> PathBuf {
    if let Some(home_dir) = dirs::home_dir() {
        return home_dir.join(".notedrift");
    }

    PathBuf::from(".notedrift")
}

/// The currently open note and its loaded content.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ActiveNote {
    /// Vault-relative path of the note.
    pub path: String,
    /// Raw markdown content, loaded when the note was opened.
    pub content: String,
}

/// Top-level application state.
pub struct App {
    /// Current UI mode; drives key handling and rendering.
    pub mode: AppMode,
    /// Root of the scanned vault tree.
    pub vault_root: FolderNode,
    /// Absolute path of the vault on disk.
    pub vault_dir: PathBuf,
    /// Persisted user settings.
    pub settings: Settings,
    /// Sticky-folder memory for the include-subfolders policy.
    pub selection: SelectionState,
    active: Option<ActiveNote>,
    settings_store: Box<dyn SettingsStore>,
    rng: StdRng,
}

impl App {
    /// Creates the app with a freshly scanned vault and loaded settings.
    pub fn new(
        vault_dir: PathBuf,
        vault_root: FolderNode,
        settings: Settings,
        settings_store: Box<dyn SettingsStore>,
    ) -> Self {
        Self {
            mode: AppMode::Browse { scroll_offset: 0 },
            vault_root,
            vault_dir,
            settings,
            selection: SelectionState::default(),
            active: None,
            settings_store,
            rng: StdRng::from_entropy(),
        }
    }

    /// Returns the active note, if any.
    pub fn active_note(&self) -> Option<&ActiveNote> {
        self.active.as_ref()
    }

    /// Returns the command bound to the primary `r` hotkey.
    ///
    /// The persisted include-subfolders toggle selects which of the two
    /// actions the primary hotkey triggers.
    pub fn primary_command(&self) -> NoteCommand {
        if self.settings.expand_to_subfolders {
            NoteCommand::RandomNoteWithinFolderIncludeSubfolders
        } else {
            NoteCommand::RandomNoteWithinFolder
        }
    }

    /// Runs a random-note command and navigates when a note was selected.
    ///
    /// All failure branches are silent; the view simply stays where it is.
    pub fn run_command(&mut self, note_command: NoteCommand) {
        let active_path = self.active.as_ref().map(|note| note.path.clone());
        let mut fallback = VaultWideFallback::new(&self.vault_root);

        let outcome = command::run_note_command(
            note_command,
            &self.vault_root,
            active_path.as_deref(),
            &mut self.selection,
            &mut fallback,
            &mut self.rng,
        );

        match outcome {
            CommandOutcome::Opened { path }
            | CommandOutcome::FallbackOpened { path: Some(path) } => self.open_note(&path),
            CommandOutcome::FallbackOpened { path: None }
            | CommandOutcome::InvalidRoot
            | CommandOutcome::NoEligibleNotes => {}
        }
    }

    /// Opens a note in the preview pane and makes it the active note.
    pub fn open_note(&mut self, path: &str) {
        let content = match std::fs::read_to_string(self.vault_dir.join(path)) {
            Ok(content) => content,
            Err(error) => {
                tracing::warn!(%error, path, "failed to read note");
                String::new()
            }
        };

        self.active = Some(ActiveNote {
            path: path.to_string(),
            content,
        });

        if let AppMode::Browse { scroll_offset } = &mut self.mode {
            *scroll_offset = 0;
        }
    }

    /// Flips the include-subfolders toggle and persists it.
    pub fn toggle_expand_to_subfolders(&mut self) {
        self.settings.expand_to_subfolders = !self.settings.expand_to_subfolders;

        if let Err(error) = self.settings_store.save(&self.settings) {
            tracing::warn!(%error, "failed to persist settings");
        }
    }
}
