//! Keypad colors, configurable from the settings file.

use crate::kernel::ButtonKind;
use crate::services::ThemeSettings;
use ratatui::style::Color;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalcTheme {
    pub display_fg: Color,
    pub digit_bg: Color,
    pub operator_bg: Color,
    pub function_bg: Color,
    pub label_fg: Color,
}

impl Default for CalcTheme {
    fn default() -> Self {
        Self {
            display_fg: Color::White,
            digit_bg: Color::Indexed(238),
            operator_bg: Color::Indexed(208),
            function_bg: Color::Indexed(247),
            label_fg: Color::White,
        }
    }
}

impl CalcTheme {
    pub fn from_settings(settings: &ThemeSettings) -> Self {
        let mut theme = Self::default();
        theme.apply_settings(settings);
        theme
    }

    pub fn apply_settings(&mut self, settings: &ThemeSettings) {
        let slots = [
            (&settings.display_fg, &mut self.display_fg),
            (&settings.digit_bg, &mut self.digit_bg),
            (&settings.operator_bg, &mut self.operator_bg),
            (&settings.function_bg, &mut self.function_bg),
            (&settings.label_fg, &mut self.label_fg),
        ];
        for (value, slot) in slots {
            let Some(value) = value else {
                continue;
            };
            match parse_color(value) {
                Some(c) => *slot = c,
                None => tracing::warn!(value = %value, "unknown theme color"),
            }
        }
    }

    pub fn button_bg(&self, kind: ButtonKind) -> Color {
        match kind {
            ButtonKind::Digit => self.digit_bg,
            ButtonKind::Operator => self.operator_bg,
            ButtonKind::Function => self.function_bg,
        }
    }
}

pub fn parse_color(value: &str) -> Option<Color> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }

    if let Some(hex) = v.strip_prefix('#') {
        if hex.len() == 6 && hex.is_ascii() {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
        return None;
    }

    let v = v.to_ascii_lowercase();
    let c = match v.as_str() {
        "reset" => Color::Reset,
        "black" => Color::Indexed(0),
        "red" => Color::Indexed(1),
        "green" => Color::Indexed(2),
        "yellow" => Color::Indexed(3),
        "blue" => Color::Indexed(4),
        "magenta" => Color::Indexed(5),
        "cyan" => Color::Indexed(6),
        "gray" | "grey" => Color::Indexed(7),
        "dark_gray" | "darkgrey" => Color::Indexed(8),
        "orange" => Color::Indexed(208),
        "white" => Color::Indexed(15),
        _ => return None,
    };

    Some(c)
}

#[cfg(test)]
#[path = "../../tests/unit/app/theme.rs"]
mod tests;
