use std::collections::BTreeMap;

mod cd;
mod cls;
mod color;
mod exec;
mod exit;
mod help;
mod ls;
mod mkdir;

pub use cd::CdCommand;
pub use cls::ClsCommand;
pub use color::{ColorCommand, ColorLayer};
pub use exec::{run_external, ExecCommand};
pub use exit::ExitCommand;
pub use help::HelpCommand;
pub use ls::LsCommand;
pub use mkdir::MkdirCommand;

use crate::core::output::{LineStyle, OutputLine, OutputSink};
use crate::core::state::Session;
use crate::error::ShellError;
use crate::process::{ProcessError, ProcessRunner};

/// Failures a single command can hit. Each one is shown to the user as one
/// error line; none of them ends the session.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("Error: the directory '{0}' does not exist.")]
    PathNotFound(String),
    #[error("Error: the folder '{0}' already exists.")]
    AlreadyExists(String),
    #[error("Color '{name}' not recognized. Try standard colors such as {hint}.")]
    UnrecognizedColor { name: String, hint: &'static str },
    #[error("Error running external command: {0}")]
    Spawn(#[from] ProcessError),
    #[error("Error {action}: {source}")]
    Io {
        action: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("Error resolving path: {0}")]
    Path(#[from] ShellError),
}

impl CommandError {
    pub(crate) fn io(action: &'static str) -> impl FnOnce(std::io::Error) -> Self {
        move |source| CommandError::Io { action, source }
    }
}

/// What the host should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit,
}

/// Everything a built-in may touch while it runs.
pub struct Context<'a> {
    pub session: &'a mut Session,
    pub sink: &'a mut dyn OutputSink,
    pub runner: &'a dyn ProcessRunner,
}

impl Context<'_> {
    pub fn emit(&mut self, text: impl Into<String>, style: LineStyle) {
        self.sink.append(OutputLine::new(text, style));
    }

    pub fn print(&mut self, text: impl Into<String>) {
        self.emit(text, LineStyle::Plain);
    }
}

pub trait Command {
    fn execute(&self, ctx: &mut Context<'_>, args: &str) -> Result<Outcome, CommandError>;
}

#[derive(Clone)]
pub(crate) enum CommandType {
    Help(HelpCommand),
    Cd(CdCommand),
    Ls(LsCommand),
    Mkdir(MkdirCommand),
    Cls(ClsCommand),
    Color(ColorCommand),
    Exec(ExecCommand),
    Exit(ExitCommand),
}

impl Command for CommandType {
    fn execute(&self, ctx: &mut Context<'_>, args: &str) -> Result<Outcome, CommandError> {
        match self {
            CommandType::Help(cmd) => cmd.execute(ctx, args),
            CommandType::Cd(cmd) => cmd.execute(ctx, args),
            CommandType::Ls(cmd) => cmd.execute(ctx, args),
            CommandType::Mkdir(cmd) => cmd.execute(ctx, args),
            CommandType::Cls(cmd) => cmd.execute(ctx, args),
            CommandType::Color(cmd) => cmd.execute(ctx, args),
            CommandType::Exec(cmd) => cmd.execute(ctx, args),
            CommandType::Exit(cmd) => cmd.execute(ctx, args),
        }
    }
}

/// The fixed set of built-ins, keyed by lower-case verb.
pub(crate) fn builtins() -> BTreeMap<&'static str, CommandType> {
    let mut commands = BTreeMap::new();
    commands.insert("help", CommandType::Help(HelpCommand::new()));
    commands.insert("cd", CommandType::Cd(CdCommand::new()));
    commands.insert("ls", CommandType::Ls(LsCommand::new()));
    commands.insert("mkdir", CommandType::Mkdir(MkdirCommand::new()));
    commands.insert("cls", CommandType::Cls(ClsCommand::new()));
    commands.insert(
        "bgcolor",
        CommandType::Color(ColorCommand::new(ColorLayer::Background)),
    );
    commands.insert(
        "fgcolor",
        CommandType::Color(ColorCommand::new(ColorLayer::Foreground)),
    );
    commands.insert("exec", CommandType::Exec(ExecCommand::new()));
    commands.insert("exit", CommandType::Exit(ExitCommand::new()));
    commands
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_every_verb() {
        let commands = builtins();
        for verb in [
            "help", "cd", "ls", "mkdir", "cls", "bgcolor", "fgcolor", "exec", "exit",
        ] {
            assert!(commands.contains_key(verb), "missing {}", verb);
        }
        assert_eq!(commands.len(), 9);
    }

    #[test]
    fn test_command_error_display() {
        let errors = vec![
            CommandError::PathNotFound("docs".to_string()),
            CommandError::AlreadyExists("out".to_string()),
            CommandError::UnrecognizedColor {
                name: "blurple".to_string(),
                hint: "Black, Blue",
            },
            CommandError::Io {
                action: "listing",
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            },
        ];

        for error in errors {
            let text = error.to_string();
            assert!(!text.is_empty());
            assert!(!text.contains('\n'));
        }
    }
}
