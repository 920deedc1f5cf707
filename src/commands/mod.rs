//! Command entry points consumed by the binary

pub mod backup;
pub mod restore;

use crate::types::DotsnapError;
use directories::BaseDirs;
use std::path::PathBuf;

/// Pick the run's root directory: an explicit override wins, otherwise the
/// operating system's notion of the current user's home.
fn resolve_home(home_override: Option<PathBuf>) -> Result<PathBuf, DotsnapError> {
    match home_override {
        Some(home) => Ok(home),
        None => BaseDirs::new()
            .map(|dirs| dirs.home_dir().to_path_buf())
            .ok_or(DotsnapError::HomeNotFound),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_override_wins() {
        let home = resolve_home(Some(PathBuf::from("/tmp/injected-home")))
            .expect("override should resolve");
        assert_eq!(home, PathBuf::from("/tmp/injected-home"));
    }
}
