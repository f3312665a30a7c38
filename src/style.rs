use inksac::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct StatusStyle {
    color_support: ColorSupport,
}

impl Default for StatusStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusStyle {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    pub fn banner(&self, text: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return text.to_string();
        }

        let banner_style = Style::builder()
            .foreground(Color::Cyan)
            .bold()
            .build();

        text.style(banner_style).to_string()
    }

    pub fn command(&self, rendered: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return rendered.to_string();
        }

        let mut parts: Vec<String> = rendered.split_whitespace().map(String::from).collect();
        if parts.is_empty() {
            return rendered.to_string();
        }

        // Program name in cyan
        let program_style = Style::builder()
            .foreground(Color::Cyan)
            .bold()
            .build();
        parts[0] = parts[0].clone().style(program_style).to_string();

        // Flag-like arguments in yellow
        for i in 1..parts.len() {
            if parts[i].starts_with('-') {
                let flag_style = Style::builder()
                    .foreground(Color::Yellow)
                    .build();
                parts[i] = parts[i].clone().style(flag_style).to_string();
            }
        }

        parts.join(" ")
    }

    pub fn error(&self, message: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return message.to_string();
        }

        let error_style = Style::builder()
            .foreground(Color::Red)
            .bold()
            .build();

        message.style(error_style).to_string()
    }

    pub fn success(&self, message: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return message.to_string();
        }

        let success_style = Style::builder()
            .foreground(Color::Green)
            .build();

        message.style(success_style).to_string()
    }

    pub fn dim(&self, message: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return message.to_string();
        }

        let dim_style = Style::builder()
            .foreground(Color::RGB(128, 128, 128))
            .build();

        message.style(dim_style).to_string()
    }
}
