use std::collections::BTreeMap;

use tracing::debug;

use super::commands::{builtins, run_external, Command, CommandType, Context, Outcome};
use super::output::{LineStyle, OutputLine, OutputSink};
use super::state::Session;
use crate::process::{ProcessRunner, ShellRunner};

/// A submitted line split into its verb and the untouched remainder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    pub verb: String,
    pub argument: &'a str,
}

impl<'a> ParsedLine<'a> {
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim();
        match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => Self {
                verb: verb.to_lowercase(),
                argument: rest.trim_start(),
            },
            None => Self {
                verb: line.to_lowercase(),
                argument: "",
            },
        }
    }
}

/// Runs one line at a time against a [`Session`], writing through an
/// [`OutputSink`]. Unknown verbs go to the [`ProcessRunner`] as whole lines.
pub struct Interpreter<R = ShellRunner> {
    commands: BTreeMap<&'static str, CommandType>,
    runner: R,
}

impl Default for Interpreter<ShellRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter<ShellRunner> {
    pub fn new() -> Self {
        Self::with_runner(ShellRunner::new())
    }
}

impl<R: ProcessRunner> Interpreter<R> {
    pub fn with_runner(runner: R) -> Self {
        Self {
            commands: builtins(),
            runner,
        }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn is_builtin(&self, verb: &str) -> bool {
        self.commands.contains_key(verb.to_lowercase().as_str())
    }

    /// Echoes, dispatches and, unless the line was `exit`, appends the next prompt.
    pub fn execute(
        &self,
        line: &str,
        session: &mut Session,
        sink: &mut dyn OutputSink,
    ) -> Outcome {
        let line = line.trim();
        sink.append(OutputLine::new(format!("> {}", line), LineStyle::Echo));

        let outcome = if line.is_empty() {
            Outcome::Continue
        } else {
            self.dispatch(line, session, sink)
        };

        if outcome == Outcome::Continue {
            self.prompt(session, sink);
        }
        outcome
    }

    pub fn prompt(&self, session: &Session, sink: &mut dyn OutputSink) {
        sink.append(OutputLine::new(session.prompt(), LineStyle::Prompt));
    }

    fn dispatch(&self, line: &str, session: &mut Session, sink: &mut dyn OutputSink) -> Outcome {
        let parsed = ParsedLine::parse(line);
        let mut ctx = Context {
            session,
            sink,
            runner: &self.runner,
        };

        let result = match self.commands.get(parsed.verb.as_str()) {
            Some(cmd) => {
                debug!(verb = %parsed.verb, "built-in");
                cmd.execute(&mut ctx, parsed.argument)
            }
            None => {
                debug!(line, "forwarding to external runner");
                run_external(&mut ctx, line)
            }
        };

        result.unwrap_or_else(|e| {
            debug!(error = %e, "command failed");
            ctx.sink.append(OutputLine::error(e.to_string()));
            Outcome::Continue
        })
    }
}
