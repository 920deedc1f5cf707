//! Copy engine: directory-vs-file dispatch
//!
//! One `copy_path` call handles one configured entry. Directories are copied
//! recursively with existing destination files overwritten; single files go
//! through the atomic copy in [`copy`]. A failure partway through a directory
//! copy may leave a partially populated destination; there is no rollback.

pub mod copy;

pub use copy::copy_file;

use crate::types::DotsnapError;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Copy `src` to `dest`, dispatching on the source type.
///
/// The type check stats `src` following symlinks. A missing source maps to
/// [`DotsnapError::SourceNotFound`] with the raw filesystem error preserved.
pub fn copy_path(src: &Path, dest: &Path) -> Result<(), DotsnapError> {
    let metadata = fs::metadata(src).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            DotsnapError::SourceNotFound {
                path: src.to_path_buf(),
                source: e,
            }
        } else {
            DotsnapError::Io(e)
        }
    })?;

    if metadata.is_dir() {
        copy_dir_recursive(src, dest)
    } else {
        copy_file(src, dest).map(|_| ())
    }
}

/// Recursively copy a directory tree, creating `dest` and intermediates.
///
/// Succeeds when parts of `dest` already exist; files already present at the
/// destination are overwritten.
fn copy_dir_recursive(src: &Path, dest: &Path) -> Result<(), DotsnapError> {
    fs::create_dir_all(dest)?;

    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        let child_dest = dest.join(entry.file_name());

        if file_type.is_dir() {
            copy_dir_recursive(&entry.path(), &child_dest)?;
        } else {
            copy_file(&entry.path(), &child_dest)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_source_is_source_not_found() {
        let root = TempDir::new().expect("create tempdir");

        let err = copy_path(&root.path().join("absent"), &root.path().join("dest"))
            .expect_err("copy of a missing source should fail");

        assert!(err.is_source_missing());
        assert!(err.to_string().contains("absent"));
    }

    #[test]
    fn test_file_dispatch() {
        let root = TempDir::new().expect("create tempdir");
        fs::write(root.path().join("a.txt"), b"alpha").expect("write source");

        copy_path(&root.path().join("a.txt"), &root.path().join("out/a.txt"))
            .expect("file copy should succeed");

        assert_eq!(
            fs::read(root.path().join("out/a.txt")).expect("read copy"),
            b"alpha"
        );
    }

    #[test]
    fn test_directory_dispatch_copies_subtree() {
        let root = TempDir::new().expect("create tempdir");
        fs::create_dir_all(root.path().join("tree/inner")).expect("create source tree");
        fs::write(root.path().join("tree/top.txt"), b"top").expect("write top file");
        fs::write(root.path().join("tree/inner/leaf.txt"), b"leaf").expect("write leaf file");

        copy_path(&root.path().join("tree"), &root.path().join("copy"))
            .expect("directory copy should succeed");

        assert_eq!(
            fs::read(root.path().join("copy/top.txt")).expect("read top copy"),
            b"top"
        );
        assert_eq!(
            fs::read(root.path().join("copy/inner/leaf.txt")).expect("read leaf copy"),
            b"leaf"
        );
    }

    #[test]
    fn test_directory_copy_overwrites_existing_dest() {
        let root = TempDir::new().expect("create tempdir");
        fs::create_dir_all(root.path().join("tree")).expect("create source tree");
        fs::write(root.path().join("tree/file.txt"), b"new").expect("write source file");
        fs::create_dir_all(root.path().join("copy")).expect("pre-create dest");
        fs::write(root.path().join("copy/file.txt"), b"old").expect("write stale dest file");

        copy_path(&root.path().join("tree"), &root.path().join("copy"))
            .expect("copy into existing dest should succeed");

        assert_eq!(
            fs::read(root.path().join("copy/file.txt")).expect("read refreshed file"),
            b"new"
        );
    }
}
