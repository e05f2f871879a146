use std::{fs, io};

use super::{Command, CommandError, Context, Outcome};
use crate::core::output::LineStyle;

/// Creates one directory level under the session directory.
#[derive(Clone, Default)]
pub struct MkdirCommand;

impl MkdirCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for MkdirCommand {
    fn execute(&self, ctx: &mut Context<'_>, args: &str) -> Result<Outcome, CommandError> {
        if args.trim().is_empty() {
            ctx.emit("Usage: mkdir <folder_name>", LineStyle::Warning);
            return Ok(Outcome::Continue);
        }

        // Anything at that name counts, dangling links included.
        let path = ctx.session.current_dir().join(args);
        if fs::symlink_metadata(&path).is_ok() {
            return Err(CommandError::AlreadyExists(args.to_string()));
        }

        fs::create_dir(&path).map_err(|source| match source.kind() {
            io::ErrorKind::AlreadyExists => CommandError::AlreadyExists(args.to_string()),
            _ => CommandError::Io {
                action: "creating folder",
                source,
            },
        })?;
        ctx.print(format!("Folder '{}' created.", args));
        Ok(Outcome::Continue)
    }
}
