use inksac::prelude::*;

/// Styles prompt and diagnostic text, falling back to plain output when
/// the terminal reports no color support.
#[derive(Debug, Clone, Copy)]
pub struct Styler {
    color_support: ColorSupport,
}

impl Default for Styler {
    fn default() -> Self {
        Self::new()
    }
}

impl Styler {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    pub fn prompt(&self, text: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return text.to_string();
        }

        let prompt_style = Style::builder().foreground(Color::Green).bold().build();
        text.style(prompt_style).to_string()
    }

    pub fn error(&self, message: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return message.to_string();
        }

        let error_style = Style::builder().foreground(Color::Red).bold().build();
        message.style(error_style).to_string()
    }
}
