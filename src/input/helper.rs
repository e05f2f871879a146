use std::{borrow::Cow, cell::Cell, rc::Rc};

use rustyline::{
    completion::Completer,
    highlight::{CmdKind, Highlighter},
    hint::Hinter,
    validate::Validator,
    Helper,
};

use crate::core::{LineStyle, NamedColor, Theme};
use crate::highlight::Painter;

/// Theme shared between the output sink and the line editor.
pub type ThemeHandle = Rc<Cell<Theme>>;

/// Line editor helper that paints the prompt and the typed input in the
/// session colors.
#[derive(Clone)]
pub struct InputHelper {
    painter: Painter,
    theme: ThemeHandle,
}

impl InputHelper {
    pub fn new(painter: Painter, theme: ThemeHandle) -> Self {
        Self { painter, theme }
    }

    pub fn prompt_colors(&self) -> (NamedColor, NamedColor) {
        let theme = self.theme.get();
        (LineStyle::Prompt.color(&theme), theme.background)
    }

    pub fn input_colors(&self) -> (NamedColor, NamedColor) {
        let theme = self.theme.get();
        (theme.foreground, theme.background)
    }
}

impl Helper for InputHelper {}

impl Highlighter for InputHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if self.painter.is_plain() {
            return Cow::Borrowed(line);
        }
        let (fg, bg) = self.input_colors();
        Cow::Owned(self.painter.paint(line, fg, bg))
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        _default: bool,
    ) -> Cow<'b, str> {
        if self.painter.is_plain() {
            return Cow::Borrowed(prompt);
        }
        let (fg, bg) = self.prompt_colors();
        Cow::Owned(self.painter.paint(prompt, fg, bg))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }
}

impl Hinter for InputHelper {
    type Hint = String;
}

impl Validator for InputHelper {}

impl Completer for InputHelper {
    type Candidate = String;
}
