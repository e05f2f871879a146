use super::{Command, CommandError, Context, Outcome};

const USAGE: &[&str] = &[
    "Available commands:",
    "  cd <path>              - Change the current directory.",
    "  ls [path]              - List folders and files.",
    "  mkdir <name>           - Create a new folder.",
    "  cls                    - Clear the screen.",
    "  bgcolor <color_name>   - Change the background color (e.g. black, blue, red).",
    "  fgcolor <color_name>   - Change the text color (e.g. limegreen, white, yellow).",
    "  exec <command> [args]  - Run an external command (e.g. ping example.com).",
    "  help                   - Show this help.",
    "  exit                   - Close the terminal.",
    "Anything else is run as an external command.",
];

#[derive(Clone, Default)]
pub struct HelpCommand;

impl HelpCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for HelpCommand {
    fn execute(&self, ctx: &mut Context<'_>, _args: &str) -> Result<Outcome, CommandError> {
        for line in USAGE {
            ctx.print(*line);
        }
        Ok(Outcome::Continue)
    }
}
