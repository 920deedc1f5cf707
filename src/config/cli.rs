//! Command-line interface definition

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Declarative dotfiles backup and restore
#[derive(Debug, Parser)]
#[command(name = "dotsnap", version, about, long_about = None)]
pub struct Cli {
    /// Operate on this directory instead of the current user's home
    #[arg(long, global = true, value_name = "DIR")]
    pub home: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands; running with none performs a backup
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Copy configured dotfiles into the backup directory and archive them (default)
    Backup,

    /// Copy dotfiles from the backup back into the home directory
    Restore,
}
