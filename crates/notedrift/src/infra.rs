//! Infrastructure adapters for vault scanning and settings persistence.

/// JSON-file backed settings store.
pub mod settings_file;
/// Gitignore-aware vault tree construction.
pub mod vault_scan;
