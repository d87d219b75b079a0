use ratatui::style::Color;

use crate::model::UiConfig;
use crate::model::color::{Rgb, parse_hex};

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub panel: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    pub red: Color,
    pub yellow: Color,
    pub green: Color,
    /// Focus borders, selection and today marker. Follows the stored accent.
    pub accent: Color,
    pub selection_bg: Color,
    pub note_marker: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x10, 0x14, 0x1C),
            panel: Color::Rgb(0x18, 0x1E, 0x2A),
            text: Color::Rgb(0xC8, 0xD0, 0xDC),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x6A, 0x74, 0x86),
            red: Color::Rgb(0xFF, 0x55, 0x55),
            yellow: Color::Rgb(0xFF, 0xD7, 0x00),
            green: Color::Rgb(0x50, 0xC8, 0x78),
            accent: Color::Rgb(0x4A, 0x90, 0xE2),
            selection_bg: Color::Rgb(0x24, 0x34, 0x4C),
            note_marker: Color::Rgb(0xF5, 0xA6, 0x23),
        }
    }
}

pub fn rgb_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

impl Theme {
    /// Create a theme from the UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            let Some(color) = parse_hex(value).map(rgb_color) else {
                log::warn!("ignoring color override {} = {:?}", key, value);
                continue;
            };
            match key.as_str() {
                "background" => theme.background = color,
                "panel" => theme.panel = color,
                "text" => theme.text = color,
                "text_bright" => theme.text_bright = color,
                "dim" => theme.dim = color,
                "red" => theme.red = color,
                "yellow" => theme.yellow = color,
                "green" => theme.green = color,
                "selection_bg" => theme.selection_bg = color,
                "note_marker" => theme.note_marker = color,
                _ => log::warn!("unknown theme color: {}", key),
            }
        }

        theme
    }

    pub fn set_accent(&mut self, rgb: Rgb) {
        self.accent = rgb_color(rgb);
    }
}
