//! Output formatter for columnized logcat lines.
//!
//! Three layouts, chosen by [`OutputFormat`]:
//! - `text`: aligned columns, level letter and tag in the level's highlight colors
//! - `tsv`: the seven column values separated by tabs
//! - `json`: one object per line keyed by column name, plus the parsed timestamp
//!
//! When the columnizer carries a non-zero time offset, the date and time
//! columns show the shifted timestamp. The underlying line is never changed.

use std::fmt::Write;

use jiff::civil;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::android::{AndroidColumnizer, OVERFLOW_COLUMN, TIME_COLUMN};
use crate::cli::OutputFormat;
use crate::columnizer::LineColumnizer;
use crate::config::Config;
use crate::format::FormatDetector;
use crate::level::Level;
use crate::line::{ColumnizedLine, LogLine};

const LEVEL_COLUMN: usize = 4;

/// Width the pid and tid columns are right-aligned to.
const ID_WIDTH: usize = 5;

/// Format a single line for output.
///
/// Unparsed lines pass through unchanged (oversized lines show their
/// truncated overflow column) unless the layout is JSON, where they are
/// dropped. Lines below the configured minimum level leave `out` empty.
///
/// The result is written into `out`.
pub fn format_line<D: FormatDetector>(
    line: &LogLine,
    columnizer: &AndroidColumnizer<D>,
    config: &Config,
    use_color: bool,
    out: &mut String,
) {
    let mut cols = columnizer.split_line(line);

    if cols.value(0).is_empty() {
        if config.output_format == OutputFormat::Json {
            out.clear();
            return;
        }
        let overflow = cols.value(OVERFLOW_COLUMN);
        out.push_str(if overflow.is_empty() {
            line.full_line.as_str()
        } else {
            overflow
        });
        return;
    }

    let level = Level::from_column(cols.value(LEVEL_COLUMN));
    if should_filter(level, config) {
        out.clear();
        return;
    }

    // Only shifted columns and JSON records need the parsed timestamp.
    let timestamp = if columnizer.time_offset() != 0 || config.output_format == OutputFormat::Json {
        columnizer
            .columns_timestamp(&cols)
            .map(|ts| columnizer.apply_offset(ts))
    } else {
        None
    };
    if columnizer.time_offset() != 0
        && let Some(ts) = timestamp
    {
        cols.set_value(0, ts.strftime("%m-%d").to_string());
        cols.set_value(TIME_COLUMN, ts.strftime("%H:%M:%S%.3f").to_string());
    }

    match config.output_format {
        OutputFormat::Text => format_text(&cols, level, config, use_color, out),
        OutputFormat::Tsv => format_tsv(&cols, out),
        OutputFormat::Json => format_json(&cols, columnizer.column_names(), timestamp, out),
    }
}

/// Check if a line should be filtered out by level.
fn should_filter(level: Option<Level>, config: &Config) -> bool {
    match (config.min_level, level) {
        (Some(min_level), Some(level)) => level < min_level,
        // No recognizable level → show the line (can't evaluate)
        _ => false,
    }
}

/// ```text
/// 12-14 15:40:35.103  1923  1923 E CarEvSettingAdapter: onChangeEvent beanId is empty!
/// ```
fn format_text(
    cols: &ColumnizedLine<'_>,
    level: Option<Level>,
    config: &Config,
    use_color: bool,
    out: &mut String,
) {
    let _ = write!(
        out,
        "{} {} {:>ID_WIDTH$} {:>ID_WIDTH$} ",
        cols.value(0),
        cols.value(1),
        cols.value(2),
        cols.value(3),
    );

    let (letter, tag) = (cols.value(LEVEL_COLUMN), cols.value(5));
    match level {
        Some(level) if use_color => {
            let style = config.highlight(level).style();
            let _ = write!(out, "{} {}:", letter.style(style), tag.style(style));
        }
        _ => {
            let _ = write!(out, "{letter} {tag}:");
        }
    }

    out.push(' ');
    out.push_str(cols.value(6));
}

fn format_tsv(cols: &ColumnizedLine<'_>, out: &mut String) {
    for (i, value) in cols.values().enumerate() {
        if i > 0 {
            out.push('\t');
        }
        out.push_str(value);
    }
}

#[derive(Serialize)]
struct JsonRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
    #[serde(flatten)]
    columns: serde_json::Map<String, serde_json::Value>,
}

fn format_json(
    cols: &ColumnizedLine<'_>,
    names: &[&str],
    timestamp: Option<civil::DateTime>,
    out: &mut String,
) {
    let columns = names
        .iter()
        .zip(cols.values())
        .map(|(name, value)| ((*name).to_string(), value.into()))
        .collect();
    let record = JsonRecord {
        timestamp: timestamp.map(|ts| ts.strftime("%Y-%m-%dT%H:%M:%S%.3f").to_string()),
        columns,
    };
    if let Ok(json) = serde_json::to_string(&record) {
        out.push_str(&json);
    }
}
