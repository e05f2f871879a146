use super::{Command, CommandError, Context, Outcome};

#[derive(Clone, Default)]
pub struct ExitCommand;

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    fn execute(&self, _ctx: &mut Context<'_>, _args: &str) -> Result<Outcome, CommandError> {
        Ok(Outcome::Exit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::testing::{run_command, FakeRunner};
    use crate::core::output::ScrollbackSink;
    use crate::core::state::Session;
    use tempfile::TempDir;

    #[test]
    fn test_exit_command() {
        let temp = TempDir::new().expect("temp dir");
        let mut session = Session::new(temp.path()).expect("session");
        let mut sink = ScrollbackSink::new();

        let outcome = run_command(
            &ExitCommand::new(),
            &mut session,
            &mut sink,
            &FakeRunner::default(),
            "now",
        )
        .expect("exit");
        assert_eq!(outcome, Outcome::Exit);
        assert!(sink.lines().is_empty());
    }
}
