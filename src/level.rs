//! Logcat priority letters.
//!
//! Android tags every line with one of `V`, `D`, `I`, `W`, `E`, `F`. The
//! discriminants follow `android.util.Log` (`VERBOSE = 2` .. `ASSERT = 7`),
//! which makes the enum usable for `>=` filtering via [`Ord`].

use std::fmt;

use crate::highlight::{Color, HighlightColor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Verbose = 2,
    Debug = 3,
    Info = 4,
    Warn = 5,
    Error = 6,
    Fatal = 7,
}

impl Level {
    pub const ALL: [Self; 6] = [
        Self::Verbose,
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
        Self::Fatal,
    ];

    /// The single-letter form used in the level column.
    pub const fn letter(self) -> char {
        match self {
            Self::Verbose => 'V',
            Self::Debug => 'D',
            Self::Info => 'I',
            Self::Warn => 'W',
            Self::Error => 'E',
            Self::Fatal => 'F',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Verbose => "verbose",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Fatal => "fatal",
        }
    }

    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'V' => Some(Self::Verbose),
            'D' => Some(Self::Debug),
            'I' => Some(Self::Info),
            'W' => Some(Self::Warn),
            'E' => Some(Self::Error),
            'F' => Some(Self::Fatal),
            _ => None,
        }
    }

    /// Parse a level column value (exactly one letter).
    pub fn from_column(value: &str) -> Option<Self> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }

    /// Parse a letter or full level name, case-insensitive.
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "v" | "verbose" => Some(Self::Verbose),
            "d" | "debug" => Some(Self::Debug),
            "i" | "info" => Some(Self::Info),
            "w" | "warn" | "warning" => Some(Self::Warn),
            "e" | "error" => Some(Self::Error),
            "f" | "fatal" | "assert" | "wtf" => Some(Self::Fatal),
            _ => None,
        }
    }

    /// Built-in colors for the level letter and tag.
    pub fn default_highlight(self) -> HighlightColor {
        let (background, foreground) = match self {
            Self::Verbose => (Color::TRANSPARENT, Color::GRAY),
            Self::Debug => (Color::TRANSPARENT, Color::BLUE),
            Self::Info => (Color::TRANSPARENT, Color::GREEN),
            Self::Warn => (Color::TRANSPARENT, Color::YELLOW),
            Self::Error => (Color::TRANSPARENT, Color::RED),
            Self::Fatal => (Color::RED, Color::WHITE),
        };
        let mut highlight = HighlightColor::new(background, foreground);
        highlight.text = self.name().to_string();
        highlight
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
