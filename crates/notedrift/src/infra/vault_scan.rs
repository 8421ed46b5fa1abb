//! Builds the in-memory vault tree from disk.

use std::ffi::OsStr;
use std::path::Path;

use ignore::WalkBuilder;
use thiserror::Error;

use crate::domain::vault::{FolderNode, NoteFile, ROOT_FOLDER_PATH, VaultNode};

/// Errors raised while scanning the vault directory.
#[derive(Debug, Error)]
pub enum VaultError {
    #[error("vault root is not a directory: {path}")]
    NotADirectory { path: String },
}

/// Scans `root` recursively and builds the ordered vault tree.
///
/// Hidden entries and gitignored files are skipped. Entries are visited in
/// file-name order so the tree shape is stable across platforms; unreadable
/// entries are skipped silently.
///
/// # Errors
/// Returns [`VaultError::NotADirectory`] when `root` does not name a
/// directory.
pub fn scan_vault(root: &Path) -> Result<FolderNode, VaultError> {
    if !root.is_dir() {
        return Err(VaultError::NotADirectory {
            path: root.display().to_string(),
        });
    }

    let walker = WalkBuilder::new(root)
        .sort_by_file_name(OsStr::cmp)
        .build();

    let mut tree = FolderNode::new(ROOT_FOLDER_PATH);
    let mut file_count = 0_usize;

    // Parents are always yielded before their children, so every insert
    // finds its folder already in the tree.
    for entry in walker.filter_map(Result::ok) {
        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        if relative.as_os_str().is_empty() {
            continue;
        }

        let path = vault_path(relative);
        let is_dir = entry.file_type().is_some_and(|file_type| file_type.is_dir());
        if !is_dir {
            file_count += 1;
        }

        insert_node(&mut tree, &path, is_dir);
    }

    tracing::debug!(root = %root.display(), file_count, "scanned vault");

    Ok(tree)
}

/// Converts a relative filesystem path into a `/`-separated vault path.
fn vault_path(relative: &Path) -> String {
    let components: Vec<String> = relative
        .iter()
        .map(|component| component.to_string_lossy().into_owned())
        .collect();

    components.join("/")
}

/// Appends a node under its parent folder, if the parent exists.
fn insert_node(tree: &mut FolderNode, path: &str, is_dir: bool) {
    let parent_path = crate::domain::vault::parent_folder_path(path);
    let Some(parent) = tree.find_folder_mut(parent_path) else {
        return;
    };

    let node = if is_dir {
        VaultNode::Folder(FolderNode::new(path))
    } else {
        VaultNode::File(NoteFile::new(path))
    };
    parent.children.push(node);
}
