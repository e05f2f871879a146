use super::{Command, CommandError, Context, Outcome};
use crate::core::output::{LineStyle, OutputLine, OutputSink};
use crate::process::ExternalResult;

#[derive(Clone, Default)]
pub struct ExecCommand;

impl ExecCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExecCommand {
    fn execute(&self, ctx: &mut Context<'_>, args: &str) -> Result<Outcome, CommandError> {
        if args.trim().is_empty() {
            ctx.emit("Usage: exec <command> [args]", LineStyle::Warning);
            return Ok(Outcome::Continue);
        }
        run_external(ctx, args)
    }
}

/// Hands `command_line` to the runner in the session directory and renders
/// what came back.
pub fn run_external(ctx: &mut Context<'_>, command_line: &str) -> Result<Outcome, CommandError> {
    let result = ctx.runner.run(command_line, ctx.session.current_dir())?;
    render_result(ctx.sink, &result);
    Ok(Outcome::Continue)
}

fn render_result(sink: &mut dyn OutputSink, result: &ExternalResult) {
    for line in result.stdout.lines() {
        sink.append(OutputLine::plain(line));
    }

    let stderr = result.stderr.trim_end();
    if !stderr.is_empty() {
        sink.append(OutputLine::error(format!("ERROR: {}", stderr)));
    }

    if !result.success() && stderr.trim().is_empty() {
        sink.append(OutputLine::new(
            format!("Process exited with status: {}", result.exit_code),
            LineStyle::Warning,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::testing::{run_command, FakeRunner};
    use crate::core::output::ScrollbackSink;
    use crate::core::state::Session;
    use tempfile::TempDir;

    fn runner_with(stdout: &str, stderr: &str, exit_code: i32) -> FakeRunner {
        FakeRunner {
            result: ExternalResult {
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
                exit_code,
            },
            ..FakeRunner::default()
        }
    }

    #[test]
    fn test_exec_forwards_argument_verbatim() {
        let temp = TempDir::new().expect("temp dir");
        let mut session = Session::new(temp.path()).expect("session");
        let mut sink = ScrollbackSink::new();
        let runner = runner_with("a\nb\n", "", 0);

        run_command(&ExecCommand::new(), &mut session, &mut sink, &runner, "ping  -c 1 host")
            .expect("exec");

        let calls = runner.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "ping  -c 1 host");
        assert_eq!(calls[0].1, temp.path());
        assert_eq!(sink.texts(), vec!["a", "b"]);
        assert!(sink.lines().iter().all(|l| l.style == LineStyle::Plain));
    }

    #[test]
    fn test_stderr_rendered_as_error() {
        let temp = TempDir::new().expect("temp dir");
        let mut session = Session::new(temp.path()).expect("session");
        let mut sink = ScrollbackSink::new();
        let runner = runner_with("", "a\nb\nc\n", 2);

        run_command(&ExecCommand::new(), &mut session, &mut sink, &runner, "make")
            .expect("exec");

        assert_eq!(sink.texts(), vec!["ERROR: a\nb\nc"]);
        assert_eq!(sink.with_style(LineStyle::Error).len(), 1);
        assert!(sink.with_style(LineStyle::Warning).is_empty());
    }

    #[test]
    fn test_silent_failure_reports_status() {
        let temp = TempDir::new().expect("temp dir");
        let mut session = Session::new(temp.path()).expect("session");
        let mut sink = ScrollbackSink::new();
        let runner = runner_with("", "", 1);

        run_command(&ExecCommand::new(), &mut session, &mut sink, &runner, "false")
            .expect("exec");

        assert_eq!(sink.texts(), vec!["Process exited with status: 1"]);
    }

    #[test]
    fn test_spawn_failure_is_an_error() {
        let temp = TempDir::new().expect("temp dir");
        let mut session = Session::new(temp.path()).expect("session");
        let mut sink = ScrollbackSink::new();
        let runner = FakeRunner {
            fail_spawn: true,
            ..FakeRunner::default()
        };

        let result = run_command(&ExecCommand::new(), &mut session, &mut sink, &runner, "x");
        assert!(matches!(result, Err(CommandError::Spawn(_))));
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn test_exec_without_command_warns() {
        let temp = TempDir::new().expect("temp dir");
        let mut session = Session::new(temp.path()).expect("session");
        let mut sink = ScrollbackSink::new();
        let runner = FakeRunner::default();

        run_command(&ExecCommand::new(), &mut session, &mut sink, &runner, "").expect("exec");
        assert!(runner.calls.borrow().is_empty());
        assert_eq!(sink.with_style(LineStyle::Warning).len(), 1);
    }
}
