//! Backup command

use super::resolve_home;
use crate::sync::DotfileManager;
use crate::types::DotsnapError;
use crate::ui;
use std::path::PathBuf;

/// Run a backup pass against `home_override` or the current user's home.
///
/// Per-entry failures are reported and do not fail the command; only fatal
/// conditions return `Err`.
pub fn run(home_override: Option<PathBuf>) -> Result<(), DotsnapError> {
    let home = resolve_home(home_override)?;
    let manager = DotfileManager::load(home)?;

    println!();
    println!("[Backup] Copying dotfiles to backup directory...");
    println!();

    let report = manager.backup()?;
    ui::print_report(&report);

    if let Some(archive) = &report.archive {
        println!("Backup complete! Archive: {}", archive.display());
    }

    Ok(())
}
