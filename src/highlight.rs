use inksac::prelude::*;

use crate::core::theme::NamedColor;

/// Paints text in named colors when the terminal supports it.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    color_support: ColorSupport,
}

impl Default for Painter {
    fn default() -> Self {
        Self::new()
    }
}

impl Painter {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    /// Never emits escape sequences.
    pub fn plain() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self.color_support, ColorSupport::NoColor)
    }

    pub fn paint(&self, text: &str, foreground: NamedColor, background: NamedColor) -> String {
        if self.is_plain() || text.is_empty() {
            return text.to_string();
        }

        let style = Style::builder()
            .foreground(to_inksac(foreground))
            .background(to_inksac(background))
            .build();

        text.style(style).to_string()
    }
}

fn to_inksac(color: NamedColor) -> Color {
    let (r, g, b) = color.rgb();
    Color::RGB(r, g, b)
}
