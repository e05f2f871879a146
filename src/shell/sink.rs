use std::io::{self, Stdout, Write};

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use tracing::warn;

use crate::core::output::{LineStyle, OutputLine, OutputSink};
use crate::core::theme::Theme;
use crate::highlight::Painter;
use crate::input::ThemeHandle;

/// Scrollback backed by a terminal.
///
/// The line editor already shows what the user typed after the prompt, so
/// echo lines are dropped and prompt lines are held back to become the next
/// editor prompt.
pub struct TerminalSink<W: Write = Stdout> {
    out: W,
    painter: Painter,
    theme: ThemeHandle,
    prompt: Option<String>,
}

impl TerminalSink<Stdout> {
    pub fn stdout(painter: Painter) -> Self {
        Self::new(io::stdout(), painter)
    }
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W, painter: Painter) -> Self {
        Self {
            out,
            painter,
            theme: ThemeHandle::default(),
            prompt: None,
        }
    }

    /// The most recent prompt, if one arrived since the last call.
    pub fn take_prompt(&mut self) -> Option<String> {
        self.prompt.take()
    }

    /// The theme cell this sink paints with; `apply_theme` updates it.
    pub fn theme_handle(&self) -> ThemeHandle {
        ThemeHandle::clone(&self.theme)
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    fn write_line(&mut self, line: &OutputLine) -> io::Result<()> {
        let theme = self.theme.get();
        let painted = self
            .painter
            .paint(&line.text, line.style.color(&theme), theme.background);
        writeln!(self.out, "{}", painted)?;
        self.out.flush()
    }
}

impl<W: Write> OutputSink for TerminalSink<W> {
    fn append(&mut self, line: OutputLine) {
        match line.style {
            LineStyle::Echo => {}
            LineStyle::Prompt => self.prompt = Some(line.text),
            _ => {
                if let Err(e) = self.write_line(&line) {
                    warn!(error = %e, "failed to write output line");
                }
            }
        }
    }

    fn clear(&mut self) {
        self.prompt = None;
        if let Err(e) = execute!(
            self.out,
            Clear(ClearType::Purge),
            Clear(ClearType::All),
            MoveTo(0, 0)
        ) {
            warn!(error = %e, "failed to clear terminal");
        }
    }

    fn apply_theme(&mut self, theme: &Theme) {
        self.theme.set(*theme);
    }
}
