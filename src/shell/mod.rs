use std::env;

use rustyline::{error::ReadlineError, history::DefaultHistory, Editor};
use tracing::{debug, error};

mod sink;

pub use sink::TerminalSink;

use crate::{
    core::{Interpreter, OutputLine, OutputSink, Outcome, Session},
    error::ShellError,
    flags::Flags,
    highlight::Painter,
    input::InputHelper,
    path::PathExpander,
};

pub struct Shell {
    pub(crate) editor: Editor<InputHelper, DefaultHistory>,
    pub(crate) session: Session,
    pub(crate) interpreter: Interpreter,
    pub(crate) sink: TerminalSink,
    pub(crate) flags: Flags,
}

impl Shell {
    pub fn new(flags: Flags) -> Result<Self, ShellError> {
        let session = initial_session(&flags)?;

        let painter = if flags.is_set("no-color") {
            Painter::plain()
        } else {
            Painter::new()
        };
        let mut sink = TerminalSink::stdout(painter);
        sink.apply_theme(&session.theme);

        let mut editor = Editor::new()?;
        editor.set_helper(Some(InputHelper::new(painter, sink.theme_handle())));

        // Keep the shell alive while a child owns the terminal.
        ctrlc::set_handler(move || {
            println!("\nUse 'exit' to exit the shell");
        })?;

        Ok(Shell {
            editor,
            session,
            interpreter: Interpreter::new(),
            sink,
            flags,
        })
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        if !self.flags.is_set("quiet") {
            for line in banner(&self.session, &user_name()) {
                self.sink.append(line);
            }
        }
        self.interpreter.prompt(&self.session, &mut self.sink);

        loop {
            let prompt = self
                .sink
                .take_prompt()
                .unwrap_or_else(|| self.session.prompt());

            match self.editor.readline(&prompt) {
                Ok(line) => {
                    let outcome = self
                        .interpreter
                        .execute(&line, &mut self.session, &mut self.sink);
                    if outcome == Outcome::Exit {
                        debug!("exit requested");
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    if !self.flags.is_set("quiet") {
                        println!("Use 'exit' to exit the shell");
                    }
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    debug!("end of input");
                    break;
                }
                Err(e) => {
                    error!(error = %e, "readline failed");
                    continue;
                }
            }
        }
        Ok(())
    }
}

/// The process directory, or `--directory` resolved against it.
fn initial_session(flags: &Flags) -> Result<Session, ShellError> {
    let cwd = env::current_dir()?;
    let start = match flags.get_value("directory") {
        Some(dir) => PathExpander::new().resolve(&cwd, dir)?,
        None => cwd,
    };
    Session::new(start.clone()).ok_or(ShellError::InvalidStartDir(start))
}

fn user_name() -> String {
    env::var("USER")
        .or_else(|_| env::var("USERNAME"))
        .unwrap_or_else(|_| "user".to_string())
}

pub fn banner(session: &Session, user: &str) -> Vec<OutputLine> {
    vec![
        OutputLine::plain(format!("Hello, {}! Welcome to tinta.", user)),
        OutputLine::plain(format!(
            "Current directory: {}",
            session.current_dir().display()
        )),
        OutputLine::plain("Type 'help' to see the available commands."),
        OutputLine::plain(""),
    ]
}
