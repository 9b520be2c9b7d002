//! Command-line argument definitions for `droidcol`.
//!
//! Uses [`clap`] derive macros for argument parsing.

use clap::{Parser, ValueEnum};
use clap_complete::Shell;

/// Split Android logcat lines from stdin into columns.
///
/// Reads `adb logcat -v threadtime` output from stdin and writes one
/// formatted record per line to stdout. Lines that are not logcat records are
/// passed through unchanged.
#[derive(Debug, Parser)]
#[command(name = "droidcol", version, about, long_about = None)]
pub struct Cli {
    /// Control color output.
    ///
    /// `auto` enables colors only when stdout is a TTY and `NO_COLOR` is unset.
    #[arg(short = 'c', long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Minimum priority to display (V, D, I, W, E, F or the full name).
    ///
    /// Lines below this level are suppressed. Unparsed lines always pass through.
    #[arg(short = 'l', long, value_parser = parse_level_arg)]
    pub level: Option<String>,

    /// Output layout.
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Shift displayed timestamps by this many milliseconds.
    #[arg(short = 'o', long, allow_hyphen_values = true)]
    pub offset_ms: Option<i64>,

    /// Year assumed for logcat dates, which carry none. Defaults to the current year.
    #[arg(long)]
    pub year: Option<i16>,

    /// Path to configuration file.
    #[arg(long)]
    pub config: Option<std::path::PathBuf>,

    /// Score stdin as a sample instead of formatting it.
    ///
    /// Prints `well-supported` when more sampled lines start with a
    /// recognizable timestamp than not, `not-supported` otherwise.
    #[arg(short = 's', long)]
    pub score: bool,

    /// Number of lines read from stdin by `--score`.
    #[arg(long, default_value_t = 100, requires = "score")]
    pub sample_size: usize,

    /// Print a shell completion script and exit.
    #[arg(long, value_enum)]
    pub completions: Option<Shell>,
}

/// Color output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Enable colors only when stdout is a TTY.
    Auto,
    /// Always enable colors.
    Always,
    /// Never enable colors.
    Never,
}

/// How each parsed line is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned, optionally colored columns.
    #[default]
    Text,
    /// The seven column values separated by tabs.
    Tsv,
    /// One JSON object per line; unparsed lines are dropped.
    Json,
}

/// Parse level argument as a case-insensitive letter or name.
fn parse_level_arg(s: &str) -> Result<String, String> {
    match crate::level::Level::from_str_loose(s) {
        Some(level) => Ok(level.name().to_string()),
        None => Err(format!(
            "invalid level '{s}': expected one of V, D, I, W, E, F (or verbose, debug, info, warn, error, fatal)"
        )),
    }
}
