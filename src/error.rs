use std::path::PathBuf;

use crate::flags::FlagError;

#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Home directory not found")]
    HomeDirNotFound,
    #[error("Not a directory: {}", .0.display())]
    InvalidStartDir(PathBuf),
    #[error("Flag error: {0}")]
    Flag(#[from] FlagError),
    #[error("Ctrl-C error: {0}")]
    CtrlC(#[from] ctrlc::Error),
}
