//! Path resolution for configured entries
//!
//! Pure path joining; no filesystem access. Entries are relative paths as
//! declared in the config, possibly nested and containing spaces
//! (e.g. `Library/Application Support/Code/User/settings.json`).

use std::path::{Path, PathBuf};

/// Resolve the path an entry is read from under `root`
pub fn source_path(root: &Path, entry: &str) -> PathBuf {
    root.join(entry)
}

/// Resolve the path an entry is written to under `root`
pub fn dest_path(root: &Path, entry: &str) -> PathBuf {
    root.join(entry)
}
