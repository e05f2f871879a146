use tracing::info;

use super::{Command, CommandError, Context, Outcome};
use crate::core::theme::NamedColor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorLayer {
    Foreground,
    Background,
}

impl ColorLayer {
    fn label(&self) -> &'static str {
        match self {
            ColorLayer::Foreground => "Text",
            ColorLayer::Background => "Background",
        }
    }

    fn hint(&self) -> &'static str {
        match self {
            ColorLayer::Foreground => "LimeGreen, White, Yellow, Cyan",
            ColorLayer::Background => "Black, Blue, Green, Red, White",
        }
    }
}

/// `bgcolor` and `fgcolor`.
#[derive(Clone)]
pub struct ColorCommand {
    layer: ColorLayer,
}

impl ColorCommand {
    pub fn new(layer: ColorLayer) -> Self {
        Self { layer }
    }
}

impl Command for ColorCommand {
    fn execute(&self, ctx: &mut Context<'_>, args: &str) -> Result<Outcome, CommandError> {
        let color: NamedColor = args
            .parse()
            .map_err(|_| CommandError::UnrecognizedColor {
                name: args.trim().to_string(),
                hint: self.layer.hint(),
            })?;

        let theme = &mut ctx.session.theme;
        match self.layer {
            ColorLayer::Foreground => theme.foreground = color,
            ColorLayer::Background => theme.background = color,
        }
        let theme = *theme;
        ctx.sink.apply_theme(&theme);

        info!(layer = ?self.layer, color = color.name(), "theme changed");
        ctx.print(format!("{} color changed to: {}", self.layer.label(), color));
        Ok(Outcome::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::testing::{run_command, FakeRunner};
    use crate::core::output::{LineStyle, OutputSink, ScrollbackSink};
    use crate::core::state::Session;
    use crate::core::theme::Theme;
    use tempfile::TempDir;

    #[test]
    fn test_bgcolor_updates_session_and_sink() {
        let temp = TempDir::new().expect("temp dir");
        let mut session = Session::new(temp.path()).expect("session");
        let mut sink = ScrollbackSink::new();
        let cmd = ColorCommand::new(ColorLayer::Background);

        run_command(&cmd, &mut session, &mut sink, &FakeRunner::default(), "navy")
            .expect("bgcolor");

        assert_eq!(session.theme.background.name(), "Navy");
        assert_eq!(session.theme.foreground, NamedColor::LIME_GREEN);
        assert_eq!(sink.theme().background.name(), "Navy");
        assert_eq!(sink.texts(), vec!["Background color changed to: Navy"]);
    }

    #[test]
    fn test_fgcolor_updates_plain_style() {
        let temp = TempDir::new().expect("temp dir");
        let mut session = Session::new(temp.path()).expect("session");
        let mut sink = ScrollbackSink::new();
        let cmd = ColorCommand::new(ColorLayer::Foreground);

        run_command(&cmd, &mut session, &mut sink, &FakeRunner::default(), "Yellow")
            .expect("fgcolor");

        assert_eq!(session.theme.foreground, NamedColor::YELLOW);
        assert_eq!(LineStyle::Plain.color(&session.theme), NamedColor::YELLOW);
    }

    #[test]
    fn test_unknown_color_leaves_theme() {
        let temp = TempDir::new().expect("temp dir");
        let mut session = Session::new(temp.path()).expect("session");
        let mut sink = ScrollbackSink::new();
        sink.apply_theme(&session.theme);

        let result = run_command(
            &ColorCommand::new(ColorLayer::Background),
            &mut session,
            &mut sink,
            &FakeRunner::default(),
            "notacolor",
        );

        match result {
            Err(CommandError::UnrecognizedColor { name, hint }) => {
                assert_eq!(name, "notacolor");
                assert!(hint.contains("Black"));
            }
            other => panic!("expected UnrecognizedColor, got {:?}", other),
        }
        assert_eq!(session.theme, Theme::default());
        assert_eq!(*sink.theme(), Theme::default());
    }
}
