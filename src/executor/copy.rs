//! Atomic file copy implementation

use crate::types::DotsnapError;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

/// Copy a single file using the write-then-rename strategy
///
/// 1. Create parent directories of `dest`
/// 2. Stream to a temporary `.part` file and sync it to disk
/// 3. Preserve metadata (permissions, mtime)
/// 4. Atomic rename to the final destination, replacing any existing file
///
/// # Returns
/// * `Ok(u64)` - Number of bytes copied
/// * `Err(DotsnapError)` - IO error or other failure
pub fn copy_file(src: &Path, dest: &Path) -> Result<u64, DotsnapError> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }

    let part_path = dest.with_extension("part");

    let mut src_file = File::open(src)?;
    let mut part_file = File::create(&part_path)?;

    // 128KB buffer
    let mut buffer = vec![0u8; 128 * 1024];
    let mut total_bytes = 0u64;

    loop {
        let bytes_read = src_file.read(&mut buffer)?;

        if bytes_read == 0 {
            break; // EOF
        }

        part_file.write_all(&buffer[0..bytes_read])?;
        total_bytes += bytes_read as u64;
    }

    part_file.sync_all()?;

    // Drop the file handle before rename (required on Windows)
    drop(part_file);

    let src_metadata = fs::metadata(src)?;
    fs::set_permissions(&part_path, src_metadata.permissions())?;

    let mtime = src_metadata.modified()?;
    let filetime_mtime = filetime::FileTime::from_system_time(mtime);
    filetime::set_file_mtime(&part_path, filetime_mtime)?;

    // Atomic on POSIX systems (single syscall); overwrites an existing dest
    fs::rename(&part_path, dest)?;

    Ok(total_bytes)
}
