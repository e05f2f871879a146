use super::{Command, CommandError, Context, Outcome};
use crate::path::PathExpander;
use tracing::info;

#[derive(Clone)]
pub struct CdCommand {
    path_expander: PathExpander,
}

impl Default for CdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CdCommand {
    pub fn new() -> Self {
        Self {
            path_expander: PathExpander::new(),
        }
    }
}

impl Command for CdCommand {
    fn execute(&self, ctx: &mut Context<'_>, args: &str) -> Result<Outcome, CommandError> {
        if args.trim().is_empty() {
            let current = ctx.session.current_dir().display().to_string();
            ctx.print(current);
            return Ok(Outcome::Continue);
        }

        let target = self
            .path_expander
            .resolve(ctx.session.current_dir(), args)?;

        if !ctx.session.change_dir(target) {
            return Err(CommandError::PathNotFound(args.to_string()));
        }

        let current = ctx.session.current_dir().display().to_string();
        info!(dir = %current, "directory changed");
        ctx.print(format!("Directory changed to: {}", current));
        Ok(Outcome::Continue)
    }
}
