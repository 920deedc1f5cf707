//! Archive creation
//!
//! Packages the backup directory into a single gzip-compressed tar file at
//! `<home>/.dotfiles-backup.tar.gz`. The archive is rebuilt in full on every
//! backup run; any pre-existing archive at that path is overwritten.

use crate::types::{DotsnapError, ARCHIVE_FILE_NAME};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Build the archive for `backup_dir` and return the archive path.
///
/// The sole top-level member is the backup directory, stored relative to
/// `home_dir` so extraction under home recreates the same layout.
pub fn build(home_dir: &Path, backup_dir: &Path) -> Result<PathBuf, DotsnapError> {
    let archive_path = home_dir.join(ARCHIVE_FILE_NAME);

    let member_name = backup_dir
        .strip_prefix(home_dir)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| {
            // Backup dir configured outside home; keep a single relative member
            backup_dir
                .file_name()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("backup"))
        });

    // File::create truncates, so a stale archive is fully replaced
    let file = File::create(&archive_path)?;
    let encoder = GzEncoder::new(file, Compression::default());
    let mut builder = tar::Builder::new(encoder);

    builder.append_dir_all(&member_name, backup_dir)?;

    let encoder = builder.into_inner()?;
    encoder.finish()?;

    Ok(archive_path)
}
