use std::path::{Path, PathBuf};

use super::theme::Theme;

/// Per-session state carried between commands.
///
/// `current_dir` is never the host process's working directory; it is only
/// replaced with a path that was verified to be a directory at that moment.
#[derive(Debug, Clone)]
pub struct Session {
    current_dir: PathBuf,
    pub theme: Theme,
}

impl Session {
    /// Returns `None` when `dir` is not an existing directory.
    pub fn new(dir: impl Into<PathBuf>) -> Option<Self> {
        let dir = dir.into();
        if !dir.is_absolute() || !dir.is_dir() {
            return None;
        }
        Some(Self {
            current_dir: dir,
            theme: Theme::default(),
        })
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    /// Replaces the current directory if `dir` is an existing directory.
    pub fn change_dir(&mut self, dir: PathBuf) -> bool {
        if !dir.is_dir() {
            return false;
        }
        self.current_dir = dir;
        true
    }

    pub fn prompt(&self) -> String {
        format!("{}> ", self.current_dir.display())
    }
}
