//! HomeContext - Absolute paths derived once at manager construction

use std::path::{Path, PathBuf};

/// Config file name inside the home directory
pub const CONFIG_FILE_NAME: &str = ".dotfilesrc.toml";

/// Archive file name inside the home directory
pub const ARCHIVE_FILE_NAME: &str = ".dotfiles-backup.tar.gz";

/// Absolute paths a manager instance operates on.
///
/// Derived once from the home directory and the configured backup dir name,
/// immutable afterwards. Tests inject a temp dir as `home_dir` instead of the
/// real user home.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeContext {
    /// Root everything is resolved against
    pub home_dir: PathBuf,

    /// `<home>/.dotfilesrc.toml`
    pub config_path: PathBuf,

    /// `<home>/<backup_dir>` (default `<home>/.dotfiles`)
    pub backup_dir: PathBuf,
}

impl HomeContext {
    /// Derive the context for a home directory and backup dir name
    pub fn new(home_dir: impl Into<PathBuf>, backup_dir_name: &str) -> Self {
        let home_dir = home_dir.into();
        let config_path = home_dir.join(CONFIG_FILE_NAME);
        let backup_dir = home_dir.join(backup_dir_name);
        Self {
            home_dir,
            config_path,
            backup_dir,
        }
    }

    /// Path of the config file for a home directory, before any config is loaded
    pub fn config_path_for(home_dir: &Path) -> PathBuf {
        home_dir.join(CONFIG_FILE_NAME)
    }

    /// Fixed archive location: `<home>/.dotfiles-backup.tar.gz`
    pub fn archive_path(&self) -> PathBuf {
        self.home_dir.join(ARCHIVE_FILE_NAME)
    }
}
