use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, warn};

use super::{ExternalResult, ProcessError, ProcessRunner};

#[cfg(windows)]
const SHELL: (&str, &str) = ("cmd", "/C");
#[cfg(not(windows))]
const SHELL: (&str, &str) = ("sh", "-c");

/// Appends the line after the shell flag. `cmd` does its own splitting and
/// does not understand the backslash escaping `arg` would add, so on Windows
/// the line goes through untouched.
#[cfg(windows)]
fn push_command_line(command: &mut Command, command_line: &str) {
    use std::os::windows::process::CommandExt;
    command.raw_arg(command_line);
}

#[cfg(not(windows))]
fn push_command_line(command: &mut Command, command_line: &str) {
    command.arg(command_line);
}

/// Runs command lines through the platform shell so its own built-ins and
/// word splitting apply.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

impl ShellRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for ShellRunner {
    fn run(&self, command_line: &str, working_dir: &Path) -> Result<ExternalResult, ProcessError> {
        if !working_dir.is_dir() {
            return Err(ProcessError::MissingWorkingDir(working_dir.to_path_buf()));
        }

        let (program, flag) = SHELL;
        debug!(program, command_line, dir = %working_dir.display(), "spawning");

        // `output` drains both pipes and waits, so the child is reaped on every path.
        let mut command = Command::new(program);
        command.arg(flag);
        push_command_line(&mut command, command_line);

        let output = command
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| {
                warn!(command_line, error = %source, "spawn failed");
                ProcessError::Spawn {
                    command: command_line.to_string(),
                    source,
                }
            })?;

        // Killed by a signal.
        let exit_code = output.status.code().unwrap_or(-1);
        debug!(exit_code, "process finished");

        Ok(ExternalResult {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code,
        })
    }
}


#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_captures_stdout() {
        let temp = TempDir::new().expect("temp dir");
        let result = ShellRunner::new()
            .run("echo hi", temp.path())
            .expect("run echo");
        assert_eq!(result.stdout, "hi\n");
        assert!(result.stderr.is_empty());
        assert!(result.success());
    }

    #[test]
    fn test_streams_stay_separate() {
        let temp = TempDir::new().expect("temp dir");
        let result = ShellRunner::new()
            .run("echo out; echo err 1>&2; exit 3", temp.path())
            .expect("run");
        assert_eq!(result.stdout, "out\n");
        assert_eq!(result.stderr, "err\n");
        assert_eq!(result.exit_code, 3);
    }

    #[test]
    fn test_runs_in_working_dir() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(temp.path().join("marker.txt"), "x").expect("write marker");
        let result = ShellRunner::new().run("ls", temp.path()).expect("run ls");
        assert!(result.stdout.contains("marker.txt"));
    }

    #[test]
    fn test_missing_working_dir() {
        let temp = TempDir::new().expect("temp dir");
        let missing = temp.path().join("gone");
        assert!(matches!(
            ShellRunner::new().run("true", &missing),
            Err(ProcessError::MissingWorkingDir(_))
        ));
    }
}
