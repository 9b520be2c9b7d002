//! Configuration management with TOML file support.
//!
//! Merges settings from three sources (highest precedence first):
//! 1. CLI flags
//! 2. Config file (`~/.config/droidcol/config.toml` or `$XDG_CONFIG_HOME/droidcol/config.toml`)
//! 3. Built-in defaults

use std::collections::HashMap;
use std::path::PathBuf;

use jiff::Zoned;
use serde::Deserialize;

use crate::android::AndroidColumnizer;
use crate::cli::{Cli, ColorMode, OutputFormat};
use crate::columnizer::LineColumnizer;
use crate::error::DroidcolError;
use crate::highlight::{Color, HighlightColor};
use crate::level::Level;

/// Runtime configuration merged from defaults, config file, and CLI arguments.
///
/// Use [`Config::from_cli`] to build from parsed CLI arguments, or
/// [`Config::default`] for built-in defaults (useful in tests and benchmarks).
#[derive(Debug, Clone)]
pub struct Config {
    /// Color output mode (auto/always/never).
    pub color_mode: ColorMode,
    /// Minimum log level to display; lines below this are suppressed.
    pub min_level: Option<Level>,
    /// Output layout.
    pub output_format: OutputFormat,
    /// Millisecond shift applied to displayed timestamps.
    pub time_offset_ms: i64,
    /// Year assumed for dates without one; `None` uses the current year.
    pub year: Option<i16>,
    /// Colors for each level's letter and tag.
    pub highlights: HashMap<Level, HighlightColor>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color_mode: ColorMode::Auto,
            min_level: None,
            output_format: OutputFormat::Text,
            time_offset_ms: 0,
            year: None,
            highlights: Level::ALL
                .into_iter()
                .map(|level| (level, level.default_highlight()))
                .collect(),
        }
    }
}

impl Config {
    /// Build a [`Config`] from CLI arguments, loading the config file if present.
    ///
    /// Merge precedence: CLI flags > config file > defaults.
    pub fn from_cli(cli: &Cli) -> Result<Self, DroidcolError> {
        let mut config = Self::default();

        let config_path = cli.config.clone().unwrap_or_else(Self::default_config_path);

        if config_path.exists() {
            let file_config = FileConfig::load(&config_path)?;
            config.apply_file_config(file_config);
        } else if cli.config.is_some() {
            return Err(DroidcolError::Config(format!(
                "config file {} does not exist",
                config_path.display()
            )));
        }

        // CLI overrides
        config.color_mode = cli.color;

        if let Some(ref level_str) = cli.level {
            config.min_level = Level::from_str_loose(level_str);
        }
        if let Some(format) = cli.format {
            config.output_format = format;
        }
        if let Some(offset) = cli.offset_ms {
            config.time_offset_ms = offset;
        }
        if cli.year.is_some() {
            config.year = cli.year;
        }

        Ok(config)
    }

    /// Default config file path: `$XDG_CONFIG_HOME/droidcol/config.toml` or `~/.config/droidcol/config.toml`.
    fn default_config_path() -> PathBuf {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(xdg).join("droidcol").join("config.toml")
        } else if let Some(home) = std::env::var_os("HOME") {
            PathBuf::from(home)
                .join(".config")
                .join("droidcol")
                .join("config.toml")
        } else {
            PathBuf::from(".config/droidcol/config.toml")
        }
    }

    /// A columnizer set up with this configuration's year and offset.
    ///
    /// Without a configured year the current one is pinned here, once.
    pub fn columnizer(&self) -> AndroidColumnizer {
        let year = self.year.unwrap_or_else(|| Zoned::now().year());
        let mut columnizer = AndroidColumnizer::new().with_default_year(year);
        columnizer.set_time_offset(self.time_offset_ms);
        columnizer
    }

    /// Highlight for `level`, falling back to the built-in colors.
    pub fn highlight(&self, level: Level) -> HighlightColor {
        self.highlights
            .get(&level)
            .cloned()
            .unwrap_or_else(|| level.default_highlight())
    }

    /// Apply settings from a parsed config file.
    fn apply_file_config(&mut self, file: FileConfig) {
        if let Some(color) = file.color {
            self.color_mode = match color.as_str() {
                "always" => ColorMode::Always,
                "never" => ColorMode::Never,
                _ => ColorMode::Auto,
            };
        }

        if let Some(level) = file.level {
            self.min_level = Level::from_str_loose(&level);
        }

        if let Some(format) = file.format {
            self.output_format = match format.as_str() {
                "tsv" => OutputFormat::Tsv,
                "json" => OutputFormat::Json,
                _ => OutputFormat::Text,
            };
        }

        if let Some(offset) = file.time_offset_ms {
            self.time_offset_ms = offset;
        }

        if file.year.is_some() {
            self.year = file.year;
        }

        for (key, colors) in file.highlight.unwrap_or_default() {
            let Some(level) = Level::from_str_loose(&key) else {
                tracing::warn!(key = %key, "ignoring highlight for unknown level");
                continue;
            };
            let entry = self
                .highlights
                .entry(level)
                .or_insert_with(|| level.default_highlight());
            if let Some(fg) = colors.foreground {
                entry.foreground = fg;
            }
            if let Some(bg) = colors.background {
                entry.background = bg;
            }
            tracing::debug!(
                %level,
                foreground = %entry.foreground,
                background = %entry.background,
                "highlight override"
            );
            if let Some(text) = colors.text {
                entry.text = text;
            }
        }
    }
}

/// Config file structure (TOML deserialization).
#[derive(Debug, Deserialize)]
struct FileConfig {
    color: Option<String>,
    level: Option<String>,
    format: Option<String>,
    time_offset_ms: Option<i64>,
    year: Option<i16>,
    highlight: Option<HashMap<String, HighlightConfig>>,
}

#[derive(Debug, Deserialize)]
struct HighlightConfig {
    foreground: Option<Color>,
    background: Option<Color>,
    text: Option<String>,
}

impl FileConfig {
    fn load(path: &PathBuf) -> Result<Self, DroidcolError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DroidcolError::Config(format!("cannot read config file {}: {e}", path.display()))
        })?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}
