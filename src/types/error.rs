//! Error types for dotsnap

use std::path::PathBuf;
use thiserror::Error;

/// Error types for dotsnap operations
#[derive(Debug, Error)]
pub enum DotsnapError {
    /// Standard IO error (automatically converted via #[from])
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file exists but is not valid TOML
    #[error("Failed to parse config {}: {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },

    /// Backup path exists but is not a directory
    #[error("{} is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    /// Restore was invoked with no backup directory present
    #[error("Backup directory not found: {}", path.display())]
    BackupMissing { path: PathBuf },

    /// Copy source does not exist; keeps the raw filesystem error for diagnostics
    #[error("Source not found: {}: {source}", path.display())]
    SourceNotFound {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Home directory could not be determined for the current user
    #[error("Could not determine the current user's home directory")]
    HomeNotFound,
}

impl DotsnapError {
    /// Check if this error aborts the whole run rather than one entry
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            DotsnapError::ConfigParse { .. }
                | DotsnapError::NotADirectory { .. }
                | DotsnapError::BackupMissing { .. }
                | DotsnapError::HomeNotFound
        )
    }

    /// Check if this error means a copy source was missing
    pub fn is_source_missing(&self) -> bool {
        matches!(self, DotsnapError::SourceNotFound { .. })
    }
}
