use std::path::{Component, Path, PathBuf};

use crate::error::ShellError;

/// Turns user-supplied path arguments into absolute, lexically normalized paths.
#[derive(Clone)]
pub struct PathExpander;

impl Default for PathExpander {
    fn default() -> Self {
        Self::new()
    }
}

impl PathExpander {
    pub fn new() -> Self {
        Self
    }

    /// Resolves `arg` against `base`. Absolute arguments replace `base`.
    pub fn resolve(&self, base: &Path, arg: &str) -> Result<PathBuf, ShellError> {
        let expanded = self.expand(arg)?;
        Ok(normalize(&base.join(expanded)))
    }

    pub fn expand(&self, path: &str) -> Result<PathBuf, ShellError> {
        if self.is_home_path(path) {
            self.expand_tilde(path)
        } else {
            Ok(Path::new(path).to_path_buf())
        }
    }

    fn expand_tilde(&self, path: &str) -> Result<PathBuf, ShellError> {
        let home = self.get_home_dir()?;
        match path[1..].strip_prefix(['/', '\\']) {
            Some(rest) if !rest.is_empty() => Ok(home.join(rest)),
            _ => Ok(home),
        }
    }

    /// `~` and `~/...` only; `~user` is left alone.
    pub fn is_home_path(&self, path: &str) -> bool {
        path == "~" || path.starts_with("~/") || path.starts_with("~\\")
    }

    pub fn get_home_dir(&self) -> Result<PathBuf, ShellError> {
        dirs::home_dir().ok_or(ShellError::HomeDirNotFound)
    }
}

/// Drops `.` and folds `..` without touching the filesystem.
/// `..` at the root stays at the root.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                let at_root = out.parent().is_none();
                if !at_root {
                    out.pop();
                }
            }
            Component::Normal(part) => out.push(part),
        }
    }
    out
}
