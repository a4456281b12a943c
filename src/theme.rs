use std::fmt::Display;

use crossterm::style::{Attribute, Color, ContentStyle};
use serde::Deserialize;

fn fg(color: Color) -> ContentStyle {
    ContentStyle {
        foreground_color: Some(color),
        ..ContentStyle::default()
    }
}

fn bold(mut style: ContentStyle) -> ContentStyle {
    style.attributes.set(Attribute::Bold);
    style
}

fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb { r, g, b }
}

/// Styles for every piece of output the reminder loop prints.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub enabled: bool,
    pub header: ContentStyle,
    pub id: ContentStyle,
    pub date: ContentStyle,
    pub today: ContentStyle,
    pub error: ContentStyle,
    pub prompt: ContentStyle,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            enabled: true,
            header: bold(fg(Color::White)),
            id: fg(Color::Cyan),
            date: fg(Color::DarkGrey),
            today: bold(fg(Color::Yellow)),
            error: fg(Color::Red),
            prompt: bold(fg(Color::Green)),
        }
    }
}

impl Theme {
    /// No escape sequences at all; output is the bare text.
    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn paint<D: Display>(&self, style: ContentStyle, text: D) -> String {
        if self.enabled {
            style.apply(text).to_string()
        } else {
            text.to_string()
        }
    }

    /// Get a built-in preset by name.
    pub fn preset(name: &str) -> Self {
        match name {
            "dracula" => Self::dracula(),
            "gruvbox" => Self::gruvbox(),
            "nord" => Self::nord(),
            _ => Self::default(),
        }
    }

    fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            enabled: true,
            header: bold(fg(rgb(248, 248, 242))),
            id: fg(rgb(139, 233, 253)), // cyan
            date: fg(rgb(98, 114, 164)),
            today: bold(fg(rgb(189, 147, 249))), // purple
            error: fg(rgb(255, 85, 85)),
            prompt: bold(fg(rgb(80, 250, 123))),
        }
    }

    fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            enabled: true,
            header: bold(fg(rgb(235, 219, 178))),
            id: fg(rgb(131, 165, 152)), // aqua
            date: fg(rgb(146, 131, 116)),
            today: bold(fg(rgb(250, 189, 47))), // yellow
            error: fg(rgb(251, 73, 52)),
            prompt: bold(fg(rgb(184, 187, 38))),
        }
    }

    fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            enabled: true,
            header: bold(fg(rgb(229, 233, 240))),
            id: fg(rgb(136, 192, 208)), // frost
            date: fg(rgb(76, 86, 106)),
            today: bold(fg(rgb(235, 203, 139))), // yellow
            error: fg(rgb(191, 97, 106)),
            prompt: bold(fg(rgb(163, 190, 140))),
        }
    }
}

// ── TOML config types ──

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ThemeConfig {
    pub preset: Option<String>,
    pub header_fg: Option<String>,
    pub id_fg: Option<String>,
    pub date_fg: Option<String>,
    pub today_fg: Option<String>,
    pub error_fg: Option<String>,
    pub prompt_fg: Option<String>,
}

impl ThemeConfig {
    pub fn into_theme(self) -> Theme {
        // Start from preset or default
        let mut theme = self
            .preset
            .as_deref()
            .map(Theme::preset)
            .unwrap_or_default();

        let overrides = [
            (&self.header_fg, &mut theme.header),
            (&self.id_fg, &mut theme.id),
            (&self.date_fg, &mut theme.date),
            (&self.today_fg, &mut theme.today),
            (&self.error_fg, &mut theme.error),
            (&self.prompt_fg, &mut theme.prompt),
        ];
        for (value, style) in overrides {
            if let Some(c) = value.as_deref().and_then(parse_color) {
                style.foreground_color = Some(c);
            }
        }

        theme
    }
}

/// Parse a color string: hex "#rrggbb", or named colors.
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if s.starts_with('#') && s.len() == 7 {
        let r = u8::from_str_radix(&s[1..3], 16).ok()?;
        let g = u8::from_str_radix(&s[3..5], 16).ok()?;
        let b = u8::from_str_radix(&s[5..7], 16).ok()?;
        return Some(rgb(r, g, b));
    }
    match s.to_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "gray" | "grey" => Some(Color::Grey),
        "darkgray" | "darkgrey" => Some(Color::DarkGrey),
        "darkred" => Some(Color::DarkRed),
        "darkgreen" => Some(Color::DarkGreen),
        "darkyellow" => Some(Color::DarkYellow),
        "darkblue" => Some(Color::DarkBlue),
        "darkmagenta" => Some(Color::DarkMagenta),
        "darkcyan" => Some(Color::DarkCyan),
        _ => None,
    }
}
