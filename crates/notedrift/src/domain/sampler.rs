//! Folder-scoped uniform random note selection.
//!
//! The sampler collects every eligible note under a root folder and draws
//! one index uniformly. Traversal order does not affect the outcome because
//! all candidates are gathered before the draw.

use rand::Rng;

use crate::domain::vault::{FileKind, FolderNode, NoteFile, VaultNode};

/// Controls whether selection descends into nested folders.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InclusionPolicy {
    /// Only direct children of the root folder are considered.
    CurrentFolderOnly,
    /// Every folder reachable from the root is scanned.
    IncludeSubfolders,
}

/// Cross-invocation selection memory for the include-subfolders policy.
///
/// After a successful include-subfolders selection the parent folder of the
/// chosen note is remembered and used as the next traversal root, confining
/// repeated draws to whichever subfolder was last landed in. This is the
/// documented behavior of the feature, not an accident.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SelectionState {
    /// Vault-relative path of the last selected note's folder.
    pub last_folder_path: Option<String>,
}

/// Picks a uniformly random eligible note under `root`.
///
/// A note is eligible when it is a markdown file whose path differs from
/// `active_path`. Every eligible note is chosen with probability `1/N`.
///
/// Returns `None` when no note is eligible.
pub fn select_random<'a, R: Rng + ?Sized>(
    root: &'a FolderNode,
    active_path: &str,
    policy: InclusionPolicy,
    rng: &mut R,
) -> Option<&'a NoteFile> {
    let eligible = collect_eligible(root, active_path, policy);
    if eligible.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..eligible.len());

    Some(eligible[index])
}

/// Collects eligible notes depth-first into an ordered sequence.
fn collect_eligible<'a>(
    root: &'a FolderNode,
    active_path: &str,
    policy: InclusionPolicy,
) -> Vec<&'a NoteFile> {
    let mut eligible = Vec::new();

    for child in &root.children {
        match child {
            VaultNode::File(file) => {
                if file.kind == FileKind::Markdown && file.path != active_path {
                    eligible.push(file);
                }
            }
            VaultNode::Folder(folder) => {
                if policy == InclusionPolicy::IncludeSubfolders {
                    eligible.extend(collect_eligible(folder, active_path, policy));
                }
            }
        }
    }

    eligible
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::domain::vault::ROOT_FOLDER_PATH;

    /// `/Notes` with `a.md`, `b.md`, `c.txt` and `Sub/d.md`.
    fn notes_folder() -> FolderNode {
        FolderNode {
            path: "Notes".to_string(),
            children: vec![
                VaultNode::File(NoteFile::new("Notes/a.md")),
                VaultNode::File(NoteFile::new("Notes/b.md")),
                VaultNode::File(NoteFile::new("Notes/c.txt")),
                VaultNode::Folder(FolderNode {
                    path: "Notes/Sub".to_string(),
                    children: vec![VaultNode::File(NoteFile::new("Notes/Sub/d.md"))],
                }),
            ],
        }
    }

    #[test]
    fn test_select_random_folder_only_returns_sole_eligible_note() {
        // Arrange
        let folder = notes_folder();
        let mut rng = StdRng::seed_from_u64(7);

        // Act — repeated draws must always land on the only candidate
        for _ in 0..50 {
            let selected = select_random(
                &folder,
                "Notes/a.md",
                InclusionPolicy::CurrentFolderOnly,
                &mut rng,
            );

            // Assert
            assert_eq!(selected.map(|note| note.path.as_str()), Some("Notes/b.md"));
        }
    }

    #[test]
    fn test_select_random_never_returns_active_note() {
        // Arrange — the active note is the only markdown file in scope
        let folder = FolderNode {
            path: ROOT_FOLDER_PATH.to_string(),
            children: vec![VaultNode::File(NoteFile::new("only.md"))],
        };
        let mut rng = StdRng::seed_from_u64(7);

        // Act
        let selected = select_random(
            &folder,
            "only.md",
            InclusionPolicy::IncludeSubfolders,
            &mut rng,
        );

        // Assert
        assert!(selected.is_none());
    }

    #[test]
    fn test_select_random_folder_only_never_returns_nested_note() {
        // Arrange — the only other markdown file lives in a subfolder
        let folder = FolderNode {
            path: "Notes".to_string(),
            children: vec![
                VaultNode::File(NoteFile::new("Notes/a.md")),
                VaultNode::Folder(FolderNode {
                    path: "Notes/Sub".to_string(),
                    children: vec![VaultNode::File(NoteFile::new("Notes/Sub/d.md"))],
                }),
            ],
        };
        let mut rng = StdRng::seed_from_u64(7);

        // Act
        let selected = select_random(
            &folder,
            "Notes/a.md",
            InclusionPolicy::CurrentFolderOnly,
            &mut rng,
        );

        // Assert
        assert!(selected.is_none());
    }

    #[test]
    fn test_select_random_returns_none_without_eligible_notes() {
        // Arrange — only the active note and non-markdown files
        let folder = FolderNode {
            path: "Notes".to_string(),
            children: vec![
                VaultNode::File(NoteFile::new("Notes/a.md")),
                VaultNode::File(NoteFile::new("Notes/photo.png")),
                VaultNode::File(NoteFile::new("Notes/data.csv")),
            ],
        };
        let mut rng = StdRng::seed_from_u64(7);

        // Act & Assert — both policies yield nothing
        for policy in [
            InclusionPolicy::CurrentFolderOnly,
            InclusionPolicy::IncludeSubfolders,
        ] {
            assert!(select_random(&folder, "Notes/a.md", policy, &mut rng).is_none());
        }
    }

    #[test]
    fn test_select_random_include_subfolders_splits_between_levels() {
        // Arrange — eligible set is b.md (direct) and Sub/d.md (nested)
        let folder = notes_folder();
        let mut rng = StdRng::seed_from_u64(42);
        let trials = 2_000;
        let mut nested_count = 0;

        // Act
        for _ in 0..trials {
            let selected = select_random(
                &folder,
                "Notes/a.md",
                InclusionPolicy::IncludeSubfolders,
                &mut rng,
            )
            .expect("two notes are eligible");

            if selected.path == "Notes/Sub/d.md" {
                nested_count += 1;
            } else {
                assert_eq!(selected.path, "Notes/b.md");
            }
        }

        // Assert — nested note selected with probability ~ 1/2
        assert!((800..=1_200).contains(&nested_count), "{nested_count}");
    }

    #[test]
    fn test_select_random_converges_to_uniform_distribution() {
        // Arrange — four eligible notes, one excluded active note
        let folder = FolderNode {
            path: "Notes".to_string(),
            children: vec![
                VaultNode::File(NoteFile::new("Notes/active.md")),
                VaultNode::File(NoteFile::new("Notes/n0.md")),
                VaultNode::File(NoteFile::new("Notes/n1.md")),
                VaultNode::File(NoteFile::new("Notes/n2.md")),
                VaultNode::File(NoteFile::new("Notes/n3.md")),
            ],
        };
        let mut rng = StdRng::seed_from_u64(1234);
        let trials = 4_000;
        let mut counts = [0_u32; 4];

        // Act
        for _ in 0..trials {
            let selected = select_random(
                &folder,
                "Notes/active.md",
                InclusionPolicy::CurrentFolderOnly,
                &mut rng,
            )
            .expect("four notes are eligible");

            let index = match selected.path.as_str() {
                "Notes/n0.md" => 0,
                "Notes/n1.md" => 1,
                "Notes/n2.md" => 2,
                _ => 3,
            };
            counts[index] += 1;
        }

        // Assert — every note stays close to the expected 1000 draws
        for count in counts {
            assert!((850..=1_150).contains(&count), "{counts:?}");
        }
    }

    #[test]
    fn test_select_random_on_empty_folder_returns_none() {
        // Arrange
        let folder = FolderNode::new("Empty");
        let mut rng = StdRng::seed_from_u64(7);

        // Act
        let selected = select_random(&folder, "", InclusionPolicy::IncludeSubfolders, &mut rng);

        // Assert
        assert!(selected.is_none());
    }
}
