//! Highlight color pairs used when rendering columns.
//!
//! A [`HighlightColor`] is plain data: the highlighting rules that decide
//! *which* lines get which colors live with the host. `droidcol` itself only
//! uses them to paint level letters and tags in the terminal.

use std::fmt;
use std::str::FromStr;

use owo_colors::Style;
use serde::Deserialize;

use crate::error::DroidcolError;

/// An ARGB color. Alpha `0` means "leave the terminal's color alone".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const TRANSPARENT: Self = Self::argb(0, 0, 0, 0);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const GRAY: Self = Self::rgb(128, 128, 128);
    pub const RED: Self = Self::rgb(205, 49, 49);
    pub const GREEN: Self = Self::rgb(13, 188, 121);
    pub const YELLOW: Self = Self::rgb(229, 229, 16);
    pub const BLUE: Self = Self::rgb(36, 114, 200);
    pub const MAGENTA: Self = Self::rgb(188, 63, 188);
    pub const CYAN: Self = Self::rgb(17, 168, 205);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::argb(255, r, g, b)
    }

    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

impl FromStr for Color {
    type Err = DroidcolError;

    /// Accepts `#rrggbb`, `#aarrggbb`, or a basic color name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| DroidcolError::Color(s.to_string()));
        }
        let color = match s.to_lowercase().as_str() {
            "none" | "transparent" | "default" => Self::TRANSPARENT,
            "black" => Self::BLACK,
            "white" => Self::WHITE,
            "gray" | "grey" => Self::GRAY,
            "red" => Self::RED,
            "green" => Self::GREEN,
            "yellow" => Self::YELLOW,
            "blue" => Self::BLUE,
            "magenta" | "purple" => Self::MAGENTA,
            "cyan" => Self::CYAN,
            _ => return Err(DroidcolError::Color(s.to_string())),
        };
        Ok(color)
    }
}

impl TryFrom<String> for Color {
    type Error = DroidcolError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.is_ascii() {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    match hex.len() {
        6 => Some(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Color::argb(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.a, self.r, self.g, self.b)
        }
    }
}

/// A foreground/background pair with a free-form description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightColor {
    pub background: Color,
    pub foreground: Color,
    pub text: String,
}

impl HighlightColor {
    pub fn new(background: Color, foreground: Color) -> Self {
        Self {
            background,
            foreground,
            text: String::new(),
        }
    }

    /// Terminal style for this pair. Transparent colors are left unset.
    pub fn style(&self) -> Style {
        let mut style = Style::new().bold();
        if !self.foreground.is_transparent() {
            let Color { r, g, b, .. } = self.foreground;
            style = style.truecolor(r, g, b);
        }
        if !self.background.is_transparent() {
            let Color { r, g, b, .. } = self.background;
            style = style.on_truecolor(r, g, b);
        }
        style
    }
}
