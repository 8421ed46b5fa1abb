use std::path::Path;

/// Vault-relative path of the vault root folder.
pub const ROOT_FOLDER_PATH: &str = "";

/// Type tag distinguishing markdown notes from every other file.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FileKind {
    Markdown,
    Other,
}

impl FileKind {
    /// Classifies a vault-relative path by its extension.
    pub fn from_path(path: &str) -> Self {
        let is_markdown = Path::new(path)
            .extension()
            .is_some_and(|extension| extension.eq_ignore_ascii_case("md"));

        if is_markdown {
            Self::Markdown
        } else {
            Self::Other
        }
    }
}

/// A file entry in the vault tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NoteFile {
    /// Vault-relative path (e.g. `Notes/ideas.md`).
    pub path: String,
    /// Type tag used by the eligibility check.
    pub kind: FileKind,
}

impl NoteFile {
    /// Creates a file entry, deriving its kind from the path extension.
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let kind = FileKind::from_path(&path);

        Self { path, kind }
    }
}

/// A folder entry with ordered children.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FolderNode {
    /// Vault-relative path; [`ROOT_FOLDER_PATH`] for the vault root.
    pub path: String,
    /// Child nodes in scan order.
    pub children: Vec<VaultNode>,
}

/// A single node of the vault tree: either a folder or a file.
///
/// The tree is built once at startup and only read afterwards; selection
/// code matches on the variant instead of probing node types at runtime.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum VaultNode {
    Folder(FolderNode),
    File(NoteFile),
}

impl FolderNode {
    /// Creates an empty folder node.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            children: Vec::new(),
        }
    }

    /// Looks up the folder at `path` within this subtree.
    ///
    /// Returns `None` when `path` does not exist or names a file.
    pub fn find_folder(&self, path: &str) -> Option<&FolderNode> {
        if self.path == path {
            return Some(self);
        }

        self.children.iter().find_map(|child| match child {
            VaultNode::Folder(folder) if contains_path(&folder.path, path) => {
                folder.find_folder(path)
            }
            _ => None,
        })
    }

    /// Mutable variant of [`FolderNode::find_folder`], used while the tree
    /// is being built.
    pub fn find_folder_mut(&mut self, path: &str) -> Option<&mut FolderNode> {
        if self.path == path {
            return Some(self);
        }

        self.children.iter_mut().find_map(|child| match child {
            VaultNode::Folder(folder) if contains_path(&folder.path, path) => {
                folder.find_folder_mut(path)
            }
            _ => None,
        })
    }
}

/// Returns the vault-relative path of the folder containing `path`.
///
/// Top-level entries resolve to [`ROOT_FOLDER_PATH`].
pub fn parent_folder_path(path: &str) -> &str {
    path.rsplit_once('/')
        .map_or(ROOT_FOLDER_PATH, |(parent, _)| parent)
}

/// Returns whether `path` equals `folder_path` or lies underneath it.
fn contains_path(folder_path: &str, path: &str) -> bool {
    match path.strip_prefix(folder_path) {
        Some(rest) => folder_path.is_empty() || rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> FolderNode {
        FolderNode {
            path: ROOT_FOLDER_PATH.to_string(),
            children: vec![
                VaultNode::File(NoteFile::new("a.md")),
                VaultNode::Folder(FolderNode {
                    path: "Notes".to_string(),
                    children: vec![
                        VaultNode::File(NoteFile::new("Notes/b.md")),
                        VaultNode::Folder(FolderNode::new("Notes/Sub")),
                    ],
                }),
            ],
        }
    }

    #[test]
    fn test_file_kind_classifies_markdown_extension() {
        // Arrange & Act
        let kind = FileKind::from_path("Notes/ideas.md");

        // Assert
        assert_eq!(kind, FileKind::Markdown);
    }

    #[test]
    fn test_file_kind_classifies_markdown_extension_case_insensitively() {
        // Arrange & Act
        let kind = FileKind::from_path("Notes/IDEAS.MD");

        // Assert
        assert_eq!(kind, FileKind::Markdown);
    }

    #[test]
    fn test_file_kind_classifies_other_extensions() {
        // Arrange & Act
        let kind = FileKind::from_path("Notes/photo.png");

        // Assert
        assert_eq!(kind, FileKind::Other);
    }

    #[test]
    fn test_file_kind_classifies_extensionless_path_as_other() {
        // Arrange & Act
        let kind = FileKind::from_path("Notes/README");

        // Assert
        assert_eq!(kind, FileKind::Other);
    }

    #[test]
    fn test_parent_folder_path_of_nested_file() {
        // Arrange & Act
        let parent = parent_folder_path("Notes/Sub/d.md");

        // Assert
        assert_eq!(parent, "Notes/Sub");
    }

    #[test]
    fn test_parent_folder_path_of_top_level_file_is_root() {
        // Arrange & Act
        let parent = parent_folder_path("a.md");

        // Assert
        assert_eq!(parent, ROOT_FOLDER_PATH);
    }

    #[test]
    fn test_find_folder_returns_root_for_root_path() {
        // Arrange
        let tree = sample_tree();

        // Act
        let folder = tree.find_folder(ROOT_FOLDER_PATH);

        // Assert
        assert_eq!(folder.map(|f| f.path.as_str()), Some(ROOT_FOLDER_PATH));
    }

    #[test]
    fn test_find_folder_locates_nested_folder() {
        // Arrange
        let tree = sample_tree();

        // Act
        let folder = tree.find_folder("Notes/Sub");

        // Assert
        assert_eq!(folder.map(|f| f.path.as_str()), Some("Notes/Sub"));
    }

    #[test]
    fn test_find_folder_returns_none_for_file_path() {
        // Arrange
        let tree = sample_tree();

        // Act
        let folder = tree.find_folder("Notes/b.md");

        // Assert
        assert!(folder.is_none());
    }

    #[test]
    fn test_find_folder_returns_none_for_missing_path() {
        // Arrange
        let tree = sample_tree();

        // Act
        let folder = tree.find_folder("Archive");

        // Assert
        assert!(folder.is_none());
    }

    #[test]
    fn test_find_folder_does_not_match_sibling_name_prefix() {
        // Arrange — "Notes" must not be treated as an ancestor of "Notesbook"
        let mut tree = sample_tree();
        tree.children
            .push(VaultNode::Folder(FolderNode::new("Notesbook")));

        // Act
        let folder = tree.find_folder("Notesbook");

        // Assert
        assert_eq!(folder.map(|f| f.path.as_str()), Some("Notesbook"));
    }

    #[test]
    fn test_find_folder_mut_locates_nested_folder() {
        // Arrange
        let mut tree = sample_tree();

        // Act
        let folder = tree.find_folder_mut("Notes/Sub");

        // Assert
        assert_eq!(folder.map(|f| f.path.as_str()), Some("Notes/Sub"));
    }
}
