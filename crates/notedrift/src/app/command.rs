//! Dispatch for the two random-note actions.
//!
//! The dispatch function is pure with respect to navigation: it reports what
//! should happen through [`CommandOutcome`] and the caller opens the note.
//! All failure branches are silent no-ops; absence of navigation is the
//! user-visible signal.

use rand::Rng;

use crate::domain::sampler::{self, InclusionPolicy, SelectionState};
use crate::domain::vault::{FolderNode, parent_folder_path};

/// Invocable actions exposed through hotkeys and the command palette.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NoteCommand {
    /// Random note among the direct siblings of the active note.
    RandomNoteWithinFolder,
    /// Random note among all descendants, with sticky-folder memory.
    RandomNoteWithinFolderIncludeSubfolders,
}

impl NoteCommand {
    /// All commands, in palette order.
    pub const ALL: [Self; 2] = [
        Self::RandomNoteWithinFolder,
        Self::RandomNoteWithinFolderIncludeSubfolders,
    ];

    /// Stable command identifier.
    pub fn id(self) -> &'static str {
        match self {
            Self::RandomNoteWithinFolder => "open-random-note-within-folder",
            Self::RandomNoteWithinFolderIncludeSubfolders => {
                "open-random-note-within-folder-include-subfolders"
            }
        }
    }

    /// Human-readable palette label.
    pub fn name(self) -> &'static str {
        match self {
            Self::RandomNoteWithinFolder => "Open a random note within the current folder",
            Self::RandomNoteWithinFolderIncludeSubfolders => {
                "Open a random note within the current folder (include subfolders)"
            }
        }
    }

    /// Inclusion policy the command samples with.
    pub fn policy(self) -> InclusionPolicy {
        match self {
            Self::RandomNoteWithinFolder => InclusionPolicy::CurrentFolderOnly,
            Self::RandomNoteWithinFolderIncludeSubfolders => InclusionPolicy::IncludeSubfolders,
        }
    }
}

/// Result of dispatching a [`NoteCommand`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CommandOutcome {
    /// A note was selected and should be opened.
    Opened { path: String },
    /// No note was active; the fallback picked a note, or nothing.
    FallbackOpened { path: Option<String> },
    /// The resolved root is not a folder in the vault. Silent no-op.
    InvalidRoot,
    /// Traversal found no eligible note. Silent no-op.
    NoEligibleNotes,
}

/// External "open any random note" capability used when no note is active.
#[cfg_attr(test, mockall::automock)]
pub trait FallbackDispatcher {
    /// Picks any random note vault-wide, returning its path.
    fn open_any_random_note(&mut self) -> Option<String>;
}

/// Vault-wide fallback that samples any markdown note without exclusions.
pub struct VaultWideFallback<'a> {
    root: &'a FolderNode,
}

impl<'a> VaultWideFallback<'a> {
    /// Creates a fallback over the whole vault tree.
    pub fn new(root: &'a FolderNode) -> Self {
        Self { root }
    }
}

impl FallbackDispatcher for VaultWideFallback<'_> {
    fn open_any_random_note(&mut self) -> Option<String> {
        let mut rng = rand::thread_rng();

        sampler::select_random(self.root, "", InclusionPolicy::IncludeSubfolders, &mut rng)
            .map(|note| note.path.clone())
    }
}

/// Runs a note command against the vault tree.
///
/// Without an active note the sampler is never consulted; the fallback
/// dispatcher is invoked exactly once instead. Otherwise the traversal root
/// is the active note's parent folder, except under the include-subfolders
/// policy where a remembered sticky folder takes precedence. A successful
/// include-subfolders selection moves the sticky folder to the selected
/// note's parent.
pub fn run_note_command<R: Rng + ?Sized>(
    command: NoteCommand,
    vault_root: &FolderNode,
    active_note_path: Option<&str>,
    selection_state: &mut SelectionState,
    fallback: &mut dyn FallbackDispatcher,
    rng: &mut R,
) -> CommandOutcome {
    let Some(active_path) = active_note_path else {
        tracing::debug!(command = command.id(), "no active note, using fallback");

        return CommandOutcome::FallbackOpened {
            path: fallback.open_any_random_note(),
        };
    };

    let policy = command.policy();
    let root_path = resolve_root_path(active_path, policy, selection_state);
    let Some(root) = vault_root.find_folder(&root_path) else {
        tracing::debug!(command = command.id(), root = %root_path, "root is not a folder");

        return CommandOutcome::InvalidRoot;
    };

    let Some(note) = sampler::select_random(root, active_path, policy, rng) else {
        tracing::debug!(command = command.id(), root = %root_path, "no eligible notes");

        return CommandOutcome::NoEligibleNotes;
    };

    if policy == InclusionPolicy::IncludeSubfolders {
        selection_state.last_folder_path = Some(parent_folder_path(&note.path).to_string());
    }

    tracing::debug!(command = command.id(), note = %note.path, "selected note");

    CommandOutcome::Opened {
        path: note.path.clone(),
    }
}

/// Resolves the traversal root for a selection.
fn resolve_root_path(
    active_path: &str,
    policy: InclusionPolicy,
    selection_state: &SelectionState,
) -> String {
    if policy == InclusionPolicy::IncludeSubfolders
        && let Some(last_folder) = &selection_state.last_folder_path
    {
        return last_folder.clone();
    }

    parent_folder_path(active_path).to_string()
}
