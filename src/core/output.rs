use super::theme::{NamedColor, Theme};

/// How a line should be rendered, independent of any concrete toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// Rendered in the current foreground.
    Plain,
    /// The submitted line, echoed back.
    Echo,
    Directory,
    File,
    Error,
    Warning,
    Prompt,
}

impl LineStyle {
    pub fn color(&self, theme: &Theme) -> NamedColor {
        match self {
            LineStyle::Plain | LineStyle::Echo => theme.foreground,
            LineStyle::Directory => NamedColor::CYAN,
            LineStyle::File => NamedColor::WHITE,
            LineStyle::Error => NamedColor::RED,
            LineStyle::Warning => NamedColor::YELLOW,
            LineStyle::Prompt => NamedColor::LIGHT_GRAY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub text: String,
    pub style: LineStyle,
}

impl OutputLine {
    pub fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, LineStyle::Plain)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, LineStyle::Error)
    }
}

/// The scrollback the interpreter writes to. Owned by the host.
pub trait OutputSink {
    fn append(&mut self, line: OutputLine);

    fn clear(&mut self);

    /// Called after the session theme changes. Hosts that render colors
    /// repaint their output and input surfaces here.
    fn apply_theme(&mut self, _theme: &Theme) {}
}

/// In-memory scrollback.
#[derive(Debug, Default, Clone)]
pub struct ScrollbackSink {
    lines: Vec<OutputLine>,
    theme: Theme,
}

impl ScrollbackSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[OutputLine] {
        &self.lines
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.text.as_str()).collect()
    }

    pub fn with_style(&self, style: LineStyle) -> Vec<&OutputLine> {
        self.lines.iter().filter(|l| l.style == style).collect()
    }

    pub fn last(&self) -> Option<&OutputLine> {
        self.lines.last()
    }
}

impl OutputSink for ScrollbackSink {
    fn append(&mut self, line: OutputLine) {
        self.lines.push(line);
    }

    fn clear(&mut self) {
        self.lines.clear();
    }

    fn apply_theme(&mut self, theme: &Theme) {
        self.theme = *theme;
    }
}
