//! Sync orchestration
//!
//! [`DotfileManager`] drives one backup or restore pass: it walks the
//! configured entries in declaration order, copies each one with per-entry
//! error isolation, and folds the outcomes into a [`RunReport`]. Only fatal
//! conditions (unparseable config, backup path not a directory, restore
//! without a backup) cross this boundary as `Err`.

use crate::types::{CopyOutcome, DotsnapError, HomeContext, RunReport};
use crate::{archive, config, executor, resolve};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// One manager instance owns the home context and entry list for its run.
///
/// Two instances operating on the same home directory concurrently have
/// undefined interleaving; that is out of scope.
#[derive(Debug)]
pub struct DotfileManager {
    ctx: HomeContext,
    entries: Vec<String>,
}

impl DotfileManager {
    /// Load (or initialize) the config under `home_dir` and build a manager.
    ///
    /// Config auto-creation happens here, explicitly, before the context is
    /// derived; construction never proceeds without a parsed config.
    pub fn load(home_dir: impl Into<PathBuf>) -> Result<Self, DotsnapError> {
        let home_dir = home_dir.into();
        let config = config::load_or_init(&HomeContext::config_path_for(&home_dir))?;
        let ctx = HomeContext::new(home_dir, &config.backup_dir);

        Ok(Self {
            ctx,
            entries: config.entries,
        })
    }

    /// Paths this manager operates on
    pub fn context(&self) -> &HomeContext {
        &self.ctx
    }

    /// Configured entries in declaration order
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Copy every configured entry from home into the backup directory, then
    /// rebuild the archive.
    ///
    /// Backup is a snapshot refresh: existing backup content is overwritten.
    /// A failed entry is recorded and the run continues.
    pub fn backup(&self) -> Result<RunReport, DotsnapError> {
        self.ensure_backup_dir()?;

        let mut report = RunReport::default();
        for entry in &self.entries {
            let src = resolve::source_path(&self.ctx.home_dir, entry);
            let dest = resolve::dest_path(&self.ctx.backup_dir, entry);

            let outcome = match executor::copy_path(&src, &dest) {
                Ok(()) => CopyOutcome::Copied,
                Err(e) => CopyOutcome::Failed(e.to_string()),
            };
            report.record(entry, outcome);
        }

        report.archive = Some(archive::build(&self.ctx.home_dir, &self.ctx.backup_dir)?);
        Ok(report)
    }

    /// Copy configured entries from the backup directory back into home.
    ///
    /// Restore never overwrites: an entry whose destination already exists is
    /// recorded as failed and left untouched. An entry missing from the
    /// backup is a skip, not a failure.
    pub fn restore(&self) -> Result<RunReport, DotsnapError> {
        if !self.ctx.backup_dir.exists() {
            return Err(DotsnapError::BackupMissing {
                path: self.ctx.backup_dir.clone(),
            });
        }

        let mut report = RunReport::default();
        for entry in &self.entries {
            let src = resolve::source_path(&self.ctx.backup_dir, entry);
            let dest = resolve::dest_path(&self.ctx.home_dir, entry);

            let outcome = if !src.exists() {
                CopyOutcome::Skipped("not in backup".to_string())
            } else if dest.exists() {
                CopyOutcome::Failed(format!("already exists at {}", dest.display()))
            } else {
                match executor::copy_path(&src, &dest) {
                    Ok(()) => CopyOutcome::Copied,
                    Err(e) => CopyOutcome::Failed(e.to_string()),
                }
            };
            report.record(entry, outcome);
        }

        Ok(report)
    }

    /// Create the backup directory if missing; fatal if the path exists but
    /// is not a directory. Safe to call repeatedly.
    fn ensure_backup_dir(&self) -> Result<(), DotsnapError> {
        match fs::symlink_metadata(&self.ctx.backup_dir) {
            Ok(metadata) if metadata.is_dir() => Ok(()),
            Ok(_) => Err(DotsnapError::NotADirectory {
                path: self.ctx.backup_dir.clone(),
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                fs::create_dir_all(&self.ctx.backup_dir)?;
                Ok(())
            }
            Err(e) => Err(DotsnapError::Io(e)),
        }
    }
}
