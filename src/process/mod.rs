use std::path::{Path, PathBuf};

pub mod executor;

pub use executor::ShellRunner;

/// What one external invocation produced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExternalResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl ExternalResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("failed to launch '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("working directory does not exist: {}", .0.display())]
    MissingWorkingDir(PathBuf),
}

/// Runs one command line to completion in a given directory.
pub trait ProcessRunner {
    fn run(&self, command_line: &str, working_dir: &Path) -> Result<ExternalResult, ProcessError>;
}
