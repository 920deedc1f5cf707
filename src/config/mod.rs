//! Configuration management
//!
//! The config file lives at `<home>/.dotfilesrc.toml` and declares which
//! relative paths get backed up. Loading is self-healing: a missing file is
//! replaced by a documented default before the first parse. A file that
//! exists but fails to parse is a fatal error.

mod cli;

pub use cli::{Cli, Command};

use crate::types::DotsnapError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Backup directory name used when the config omits `settings.backup_dir`
pub const DEFAULT_BACKUP_DIR: &str = ".dotfiles";

/// Default config document written on first run
const DEFAULT_CONFIG: &str = r#"# ~/.dotfilesrc.toml

[settings]
backup_dir = ".dotfiles"

[files]
list = [
  # Shell
  ".zshrc",
  ".bashrc",
  ".bash_profile",

  # Git
  ".gitconfig",
  ".gitignore_global",

  # Editor - Vim/Neovim
  ".vimrc",
  ".config/nvim",

  # Editor - VS Code
  "Library/Application Support/Code/User/settings.json",
  "Library/Application Support/Code/User/keybindings.json",
  "Library/Application Support/Code/User/snippets",

  # Editor - Cursor
  "Library/Application Support/Cursor/User/settings.json",
  "Library/Application Support/Cursor/User/keybindings.json",
  "Library/Application Support/Cursor/User/snippets",

  # Tools
  ".tmux.conf",
  ".config/starship.toml",

  # Node
  ".npmrc",
]
"#;

/// Raw TOML document shape; both sections optional
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    settings: Option<Settings>,
    files: Option<Files>,
}

#[derive(Debug, Default, Deserialize)]
struct Settings {
    backup_dir: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Files {
    list: Option<Vec<String>>,
}

/// Resolved configuration for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Backup directory name, relative to home
    pub backup_dir: String,

    /// Declared relative paths, in declaration order
    pub entries: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backup_dir: DEFAULT_BACKUP_DIR.to_string(),
            entries: Vec::new(),
        }
    }
}

/// Load the config at `config_path`, creating the default document first if
/// the file does not exist.
///
/// This is the explicit two-step load-or-initialize operation: the write
/// happens before the parse, so a first run and every later run read the
/// same bytes.
pub fn load_or_init(config_path: &Path) -> Result<Config, DotsnapError> {
    if !config_path.exists() {
        fs::write(config_path, DEFAULT_CONFIG)?;
    }

    let content = fs::read_to_string(config_path)?;
    parse(&content).map_err(|message| DotsnapError::ConfigParse {
        path: config_path.to_path_buf(),
        message,
    })
}

fn parse(content: &str) -> Result<Config, String> {
    let raw: ConfigFile = toml::from_str(content).map_err(|e| e.message().to_string())?;

    let backup_dir = raw
        .settings
        .and_then(|s| s.backup_dir)
        .unwrap_or_else(|| DEFAULT_BACKUP_DIR.to_string());
    let entries = raw.files.and_then(|f| f.list).unwrap_or_default();

    Ok(Config {
        backup_dir,
        entries,
    })
}
