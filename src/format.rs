//! Date/time format detection.
//!
//! A [`FormatDetector`] looks at the start of a raw line (or at a bare clock
//! value) and reports which strftime-style pattern describes it. The
//! columnizer never hardcodes a timestamp format: it asks the detector and
//! parses with whatever comes back, so a host can plug in its own rules.
//!
//! [`TimeFormatDeterminer`] is the built-in detector. It walks a table of
//! anchored regex shapes, most specific first, and returns the formats of the
//! first shape that matches.

use std::sync::OnceLock;

use jiff::civil;
use jiff::fmt::strtime::BrokenDownTime;
use regex::Regex;

use crate::error::DroidcolError;

/// Locale rules a detected format belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Culture {
    /// Culture-neutral numeric formats (ISO-like, logcat).
    #[default]
    Invariant,
    /// Month-first slash dates.
    EnUs,
    /// Day-first dotted dates.
    DeDe,
}

impl Culture {
    /// BCP 47 tag, empty for [`Culture::Invariant`].
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Invariant => "",
            Self::EnUs => "en-US",
            Self::DeDe => "de-DE",
        }
    }
}

/// How to parse a detected timestamp.
///
/// Both patterns use [`jiff::fmt::strtime`] syntax. `date_time_format`
/// describes `"<date> <time>"`; `time_format` describes the clock part alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatInfo {
    pub date_time_format: String,
    pub time_format: String,
    pub culture: Culture,
}

impl FormatInfo {
    pub fn new(
        date_time_format: impl Into<String>,
        time_format: impl Into<String>,
        culture: Culture,
    ) -> Self {
        Self {
            date_time_format: date_time_format.into(),
            time_format: time_format.into(),
            culture,
        }
    }

    /// Parse `text` with [`date_time_format`](Self::date_time_format).
    ///
    /// Formats without a year (logcat's `MM-DD`) are completed with
    /// `default_year`.
    pub fn parse_date_time(
        &self,
        text: &str,
        default_year: i16,
    ) -> Result<civil::DateTime, DroidcolError> {
        let mut tm = BrokenDownTime::parse(&self.date_time_format, text)?;
        if tm.year().is_none() {
            tm.set_year(Some(default_year))?;
        }
        Ok(tm.to_datetime()?)
    }

    /// Parse `text` with [`time_format`](Self::time_format).
    pub fn parse_time(&self, text: &str) -> Result<civil::Time, DroidcolError> {
        Ok(civil::Time::strptime(&self.time_format, text)?)
    }
}

/// Pluggable date/time format detection.
pub trait FormatDetector {
    /// Detect the date-time format at the start of a raw log line.
    fn detect_date_time(&self, line: &str) -> Option<FormatInfo>;

    /// Detect the format of a bare clock value such as `"15:40:35.103"`.
    ///
    /// The whole value must fit the shape, so `"15:40:35"` and
    /// `"15:40:35.1"` report different formats (or none).
    fn detect_time(&self, value: &str) -> Option<FormatInfo>;
}

/// One row of the detection table.
struct Shape {
    pattern: Regex,
    date_time_format: &'static str,
    time_format: &'static str,
    culture: Culture,
}

impl Shape {
    fn new(
        pattern: &str,
        date_time_format: &'static str,
        time_format: &'static str,
        culture: Culture,
    ) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("shape pattern is valid and should always compile"),
            date_time_format,
            time_format,
            culture,
        }
    }

    fn info(&self) -> FormatInfo {
        FormatInfo::new(self.date_time_format, self.time_format, self.culture)
    }
}

const TIME_MS: &str = "%H:%M:%S%.f";
const TIME_MS_COMMA: &str = "%H:%M:%S,%f";
const TIME_S: &str = "%H:%M:%S";

fn date_time_shapes() -> &'static [Shape] {
    static SHAPES: OnceLock<Vec<Shape>> = OnceLock::new();
    SHAPES.get_or_init(|| {
        use Culture::{DeDe, EnUs, Invariant};
        vec![
            // logcat threadtime: 12-14 15:40:35.103
            Shape::new(r"^\d{2}-\d{2} \d{2}:\d{2}:\d{2}\.\d{3}", "%m-%d %H:%M:%S%.f", TIME_MS, Invariant),
            Shape::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\.\d{3}", "%Y-%m-%d %H:%M:%S%.f", TIME_MS, Invariant),
            Shape::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2},\d{3}", "%Y-%m-%d %H:%M:%S,%f", TIME_MS_COMMA, Invariant),
            Shape::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\.\d{3}", "%Y-%m-%dT%H:%M:%S%.f", TIME_MS, Invariant),
            Shape::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}", "%Y-%m-%d %H:%M:%S", TIME_S, Invariant),
            Shape::new(r"^\d{4}/\d{2}/\d{2} \d{2}:\d{2}:\d{2}\.\d{3}", "%Y/%m/%d %H:%M:%S%.f", TIME_MS, Invariant),
            Shape::new(r"^\d{4}/\d{2}/\d{2} \d{2}:\d{2}:\d{2}", "%Y/%m/%d %H:%M:%S", TIME_S, Invariant),
            Shape::new(r"^\d{2}\.\d{2}\.\d{4} \d{2}:\d{2}:\d{2}\.\d{3}", "%d.%m.%Y %H:%M:%S%.f", TIME_MS, DeDe),
            Shape::new(r"^\d{2}\.\d{2}\.\d{4} \d{2}:\d{2}:\d{2}", "%d.%m.%Y %H:%M:%S", TIME_S, DeDe),
            Shape::new(r"^\d{2}/\d{2}/\d{4} \d{2}:\d{2}:\d{2}", "%m/%d/%Y %H:%M:%S", TIME_S, EnUs),
        ]
    })
}

fn time_shapes() -> &'static [Shape] {
    static SHAPES: OnceLock<Vec<Shape>> = OnceLock::new();
    SHAPES.get_or_init(|| {
        vec![
            Shape::new(r"^\d{2}:\d{2}:\d{2}\.\d{3}$", TIME_MS, TIME_MS, Culture::Invariant),
            Shape::new(r"^\d{2}:\d{2}:\d{2},\d{3}$", TIME_MS_COMMA, TIME_MS_COMMA, Culture::Invariant),
            Shape::new(r"^\d{2}:\d{2}:\d{2}$", TIME_S, TIME_S, Culture::Invariant),
        ]
    })
}

/// The built-in table-driven [`FormatDetector`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeFormatDeterminer;

impl TimeFormatDeterminer {
    pub const fn new() -> Self {
        Self
    }

    fn first_match(shapes: &[Shape], text: &str) -> Option<FormatInfo> {
        shapes
            .iter()
            .find(|shape| shape.pattern.is_match(text))
            .map(Shape::info)
    }
}

impl FormatDetector for TimeFormatDeterminer {
    fn detect_date_time(&self, line: &str) -> Option<FormatInfo> {
        Self::first_match(date_time_shapes(), line)
    }

    fn detect_time(&self, value: &str) -> Option<FormatInfo> {
        Self::first_match(time_shapes(), value.trim())
    }
}
