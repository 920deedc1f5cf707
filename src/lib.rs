//! # dotsnap - Declarative Dotfiles Backup & Restore
//!
//! Snapshot your configs, restore them safely.
//!
//! A small CLI that reads a declarative file list from `~/.dotfilesrc.toml`,
//! copies every entry into a backup directory, packages the backup into a
//! gzip-compressed tar archive, and can restore entries back into the home
//! directory without ever overwriting existing files.

// Module declarations
pub mod archive;
pub mod commands;
pub mod config;
pub mod executor;
pub mod resolve;
pub mod sync;
pub mod types;
pub mod ui;

// Re-export commonly used types
pub use config::Config;
pub use sync::DotfileManager;
pub use types::{CopyOutcome, DotsnapError, EntryReport, HomeContext, RunReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
