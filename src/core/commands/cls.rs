use super::{Command, CommandError, Context, Outcome};

/// Wipes the scrollback. Nothing is appended in its place.
#[derive(Clone, Default)]
pub struct ClsCommand;

impl ClsCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ClsCommand {
    fn execute(&self, ctx: &mut Context<'_>, _args: &str) -> Result<Outcome, CommandError> {
        ctx.sink.clear();
        Ok(Outcome::Continue)
    }
}
