//! UI theme: every configurable color in one place instead of scattered through
//! the render code.

use crate::kernel::services::ports::ThemeSettings;
use ratatui::style::Color;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiTheme {
    pub focus_border: Color,
    pub inactive_border: Color,
    pub accent_fg: Color,
    pub header_fg: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
    pub folder_fg: Color,
    pub modified_fg: Color,
    pub success_fg: Color,
    pub error_fg: Color,
    pub muted_fg: Color,
    pub popup_bg: Color,
    pub popup_fg: Color,
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            focus_border: Color::Indexed(6),    // Cyan
            inactive_border: Color::Indexed(8), // DarkGray
            accent_fg: Color::Indexed(3),       // Yellow
            header_fg: Color::Indexed(6),
            selection_bg: Color::Indexed(8),
            selection_fg: Color::Indexed(15), // White
            folder_fg: Color::Indexed(4),     // Blue
            modified_fg: Color::Indexed(3),
            success_fg: Color::Indexed(2), // Green
            error_fg: Color::Indexed(1),   // Red
            muted_fg: Color::Indexed(8),
            popup_bg: Color::Reset,
            popup_fg: Color::Indexed(15),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalColorSupport {
    TrueColor,
    Ansi256,
    Ansi16,
}

pub fn detect_terminal_color_support() -> TerminalColorSupport {
    if let Ok(value) = std::env::var("TREEPAD_COLOR_SUPPORT") {
        match value.trim().to_ascii_lowercase().as_str() {
            "truecolor" | "24bit" | "rgb" => return TerminalColorSupport::TrueColor,
            "256" | "ansi256" => return TerminalColorSupport::Ansi256,
            "16" | "ansi16" | "basic" => return TerminalColorSupport::Ansi16,
            _ => {}
        }
    }

    let colorterm = std::env::var("COLORTERM")
        .unwrap_or_default()
        .to_ascii_lowercase();
    let term = std::env::var("TERM")
        .unwrap_or_default()
        .to_ascii_lowercase();
    if ["truecolor", "24bit", "direct"]
        .iter()
        .any(|tag| colorterm.contains(tag) || term.contains(tag))
    {
        return TerminalColorSupport::TrueColor;
    }
    if term.contains("256color") {
        return TerminalColorSupport::Ansi256;
    }
    TerminalColorSupport::Ansi16
}

impl UiTheme {
    pub fn adapt_to_terminal_capabilities(&mut self) {
        self.apply_color_support(detect_terminal_color_support());
    }

    pub fn apply_color_support(&mut self, support: TerminalColorSupport) {
        if support == TerminalColorSupport::TrueColor {
            return;
        }
        for color in self.colors_mut() {
            *color = downgrade_color(*color, support);
        }
    }

    /// Overrides colors named in settings; unknown names keep the current color.
    pub fn apply_settings(&mut self, settings: &ThemeSettings) {
        let overrides = [
            (&mut self.focus_border, &settings.focus_border),
            (&mut self.inactive_border, &settings.inactive_border),
            (&mut self.accent_fg, &settings.accent_fg),
            (&mut self.header_fg, &settings.header_fg),
            (&mut self.selection_bg, &settings.selection_bg),
            (&mut self.folder_fg, &settings.folder_fg),
            (&mut self.modified_fg, &settings.modified_fg),
            (&mut self.success_fg, &settings.success_fg),
            (&mut self.error_fg, &settings.error_fg),
            (&mut self.muted_fg, &settings.muted_fg),
        ];
        for (slot, value) in overrides {
            let Some(value) = value.as_deref() else {
                continue;
            };
            match parse_color(value) {
                Some(color) => *slot = color,
                None => tracing::warn!(value, "unknown theme color"),
            }
        }
    }

    fn colors_mut(&mut self) -> [&mut Color; 13] {
        [
            &mut self.focus_border,
            &mut self.inactive_border,
            &mut self.accent_fg,
            &mut self.header_fg,
            &mut self.selection_bg,
            &mut self.selection_fg,
            &mut self.folder_fg,
            &mut self.modified_fg,
            &mut self.success_fg,
            &mut self.error_fg,
            &mut self.muted_fg,
            &mut self.popup_bg,
            &mut self.popup_fg,
        ]
    }
}

fn downgrade_color(color: Color, support: TerminalColorSupport) -> Color {
    let Color::Rgb(r, g, b) = color else {
        return color;
    };
    match support {
        TerminalColorSupport::TrueColor => color,
        TerminalColorSupport::Ansi256 => Color::Indexed(rgb_to_ansi256_index(r, g, b)),
        TerminalColorSupport::Ansi16 => Color::Indexed(rgb_to_ansi16_index(r, g, b)),
    }
}

fn rgb_to_ansi256_index(r: u8, g: u8, b: u8) -> u8 {
    if r == g && g == b {
        if r < 8 {
            return 16;
        }
        if r > 248 {
            return 231;
        }
        return 232 + ((u16::from(r) - 8) * 24 / 247) as u8;
    }
    let level = |c: u8| (u16::from(c) * 5 / 255) as u8;
    16 + 36 * level(r) + 6 * level(g) + level(b)
}

fn rgb_to_ansi16_index(r: u8, g: u8, b: u8) -> u8 {
    let bit = |c: u8| u8::from(c >= 128);
    let base = bit(r) | (bit(g) << 1) | (bit(b) << 2);
    let bright = r.max(g).max(b) >= 200;
    if bright {
        base + 8
    } else {
        base
    }
}

pub fn parse_color(value: &str) -> Option<Color> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }

    if let Some(hex) = v.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }

    let c = match v.to_ascii_lowercase().as_str() {
        "reset" | "default" => Color::Reset,
        "black" => Color::Indexed(0),
        "red" => Color::Indexed(1),
        "green" => Color::Indexed(2),
        "yellow" => Color::Indexed(3),
        "blue" => Color::Indexed(4),
        "magenta" => Color::Indexed(5),
        "cyan" => Color::Indexed(6),
        "gray" | "grey" => Color::Indexed(7),
        "dark_gray" | "dark_grey" | "darkgray" | "darkgrey" => Color::Indexed(8),
        "light_red" => Color::Indexed(9),
        "light_green" => Color::Indexed(10),
        "light_yellow" => Color::Indexed(11),
        "light_blue" => Color::Indexed(12),
        "light_magenta" => Color::Indexed(13),
        "light_cyan" => Color::Indexed(14),
        "white" => Color::Indexed(15),
        _ => return None,
    };
    Some(c)
}

#[cfg(test)]
#[path = "../../tests/unit/app/theme.rs"]
mod tests;
