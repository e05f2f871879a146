pub mod commands;
pub mod interpreter;
pub mod output;
pub mod state;
pub mod theme;

pub use commands::{CommandError, Outcome};
pub use interpreter::{Interpreter, ParsedLine};
pub use output::{LineStyle, OutputLine, OutputSink, ScrollbackSink};
pub use state::Session;
pub use theme::{NamedColor, Theme};
