//! Restore command

use super::resolve_home;
use crate::sync::DotfileManager;
use crate::types::DotsnapError;
use crate::ui;
use std::path::PathBuf;

/// Run a restore pass against `home_override` or the current user's home.
///
/// Fails fatally when the backup directory does not exist; entries already
/// present in the home directory are reported as failures and left untouched.
pub fn run(home_override: Option<PathBuf>) -> Result<(), DotsnapError> {
    let home = resolve_home(home_override)?;
    let manager = DotfileManager::load(home)?;

    println!();
    println!("[Restore] Copying dotfiles from backup to home directory...");
    println!();

    let report = manager.restore()?;
    ui::print_report(&report);

    println!("Restore complete!");

    Ok(())
}
