//! Columnizer for Android logcat `threadtime` output.
//!
//! ```text
//! 0     1             2     3    4 5                    6
//! 12-14 15:40:35.103  1923  1923 E CarEvSettingAdapter: onChangeEvent beanId is empty!
//! ```
//!
//! Every line becomes seven columns: date, time, pid, tid, level, tag, and
//! the remaining message text. Nothing here fails loudly: a line that does
//! not fit yields empty columns, a timestamp that cannot be parsed yields
//! `None`, and an unparseable time edit leaves the offset where it was.

use std::sync::OnceLock;

use jiff::{SignedDuration, Zoned, civil};
use regex::Regex;

use crate::columnizer::{LineColumnizer, Priority, PriorityRankable};
use crate::error::DroidcolError;
use crate::format::{FormatDetector, TimeFormatDeterminer};
use crate::line::{ColumnizedLine, LogLine};

/// Lines longer than this many characters are not matched; their first
/// `LOG_MAX_LENGTH` characters are shown in the overflow column instead.
pub const LOG_MAX_LENGTH: usize = 10 * 1024;

/// Column receiving the truncated text of an oversized line.
pub const OVERFLOW_COLUMN: usize = 3;

/// Index of the clock column; the only one whose edits shift the offset.
pub const TIME_COLUMN: usize = 1;

pub const COLUMN_NAMES: [&str; 7] = ["date", "time", "pid", "tid", "level", "tag", "txt"];

/// Group 0 plus the seven named groups.
const LINE_GROUPS: usize = 8;

fn line_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?<date>\d+-\d+) (?<time>\d{2}:\d{2}:\d{2}\.\d{3})\s+(?<pid>\d+)\s+(?<tid>\d+)\s+(?<level>[I|V|W|E|D|F])\s+(?<tag>.*?): (?<txt>.*)",
        )
        .expect("line_regex: pattern is valid and should always compile")
    })
}

/// Splits logcat lines and tracks the user's time offset for one view.
#[derive(Debug, Clone, Default)]
pub struct AndroidColumnizer<D = TimeFormatDeterminer> {
    detector: D,
    /// Year for dates that carry none; `None` means the current year.
    default_year: Option<i16>,
    time_offset: i64,
}

impl AndroidColumnizer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D: FormatDetector> AndroidColumnizer<D> {
    /// Build a columnizer that asks `detector` for timestamp formats.
    pub fn with_detector(detector: D) -> Self {
        Self {
            detector,
            default_year: None,
            time_offset: 0,
        }
    }

    /// Pin the year used for logcat dates, which carry none.
    #[must_use]
    pub fn with_default_year(mut self, year: i16) -> Self {
        self.default_year = Some(year);
        self
    }

    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// The pinned year, if any.
    pub fn default_year(&self) -> Option<i16> {
        self.default_year
    }

    fn resolved_year(&self) -> i16 {
        self.default_year.unwrap_or_else(|| Zoned::now().year())
    }

    /// Shift `timestamp` by the current offset.
    ///
    /// Returns the input unchanged if the shift would leave jiff's range.
    pub fn apply_offset(&self, timestamp: civil::DateTime) -> civil::DateTime {
        if self.time_offset == 0 {
            return timestamp;
        }
        timestamp
            .checked_add(SignedDuration::from_millis(self.time_offset))
            .unwrap_or(timestamp)
    }

    /// Timestamp of an already split line, without re-running the split.
    pub fn columns_timestamp(&self, cols: &ColumnizedLine<'_>) -> Option<civil::DateTime> {
        match self.try_timestamp(cols) {
            Ok(timestamp) => Some(timestamp),
            Err(e) => {
                tracing::debug!(line = cols.log_line().line_number, error = %e, "no timestamp");
                None
            }
        }
    }

    fn try_timestamp(&self, cols: &ColumnizedLine<'_>) -> Result<civil::DateTime, DroidcolError> {
        let line = cols.log_line();
        let (date, time) = (cols.value(0), cols.value(TIME_COLUMN));
        if cols.len() < 2 || date.is_empty() || time.is_empty() {
            return Err(DroidcolError::NoFormat(line.full_line.clone()));
        }
        let info = self
            .detector
            .detect_date_time(&line.full_line)
            .ok_or_else(|| DroidcolError::NoFormat(line.full_line.clone()))?;
        tracing::trace!(
            format = %info.date_time_format,
            culture = info.culture.tag(),
            "detected timestamp format"
        );
        info.parse_date_time(&format!("{date} {time}"), self.resolved_year())
    }

    fn try_offset(&self, new_value: &str, old_value: &str) -> Result<i64, DroidcolError> {
        let info = self
            .detector
            .detect_time(old_value)
            .ok_or_else(|| DroidcolError::NoFormat(old_value.to_string()))?;
        // The edit must keep the clock's shape, e.g. no dropped fraction.
        if self
            .detector
            .detect_time(new_value)
            .is_none_or(|new_info| new_info.time_format != info.time_format)
        {
            return Err(DroidcolError::NoFormat(new_value.to_string()));
        }
        let new_time = info.parse_time(new_value)?;
        let old_time = info.parse_time(old_value)?;
        Ok(millis_of_day(new_time) - millis_of_day(old_time))
    }
}

/// Milliseconds since midnight, truncating sub-millisecond precision.
fn millis_of_day(time: civil::Time) -> i64 {
    i64::from(time.hour()) * 3_600_000
        + i64::from(time.minute()) * 60_000
        + i64::from(time.second()) * 1_000
        + i64::from(time.millisecond())
}

/// First `max` characters of `s`, or `None` if `s` is not longer than that.
fn truncate_chars(s: &str, max: usize) -> Option<&str> {
    s.char_indices().nth(max).map(|(idx, _)| &s[..idx])
}

impl<D: FormatDetector> LineColumnizer for AndroidColumnizer<D> {
    fn name(&self) -> &'static str {
        "Android Columnizer"
    }

    fn description(&self) -> &'static str {
        "Splits every line into 7 fields: Date, Time, PID, TID, Level, Tag and the rest of the log message"
    }

    fn column_names(&self) -> &'static [&'static str] {
        &COLUMN_NAMES
    }

    fn split_line<'a>(&self, line: &'a LogLine) -> ColumnizedLine<'a> {
        let mut cols = ColumnizedLine::empty(line, COLUMN_NAMES.len());

        if let Some(head) = truncate_chars(&line.full_line, LOG_MAX_LENGTH) {
            tracing::debug!(
                line = line.line_number,
                "line exceeds {LOG_MAX_LENGTH} characters, truncating into overflow column"
            );
            cols.set_value(OVERFLOW_COLUMN, head);
            return cols;
        }

        let Some(caps) = line_regex().captures(&line.full_line) else {
            return cols;
        };
        if caps.len() != LINE_GROUPS {
            return cols;
        }
        for (index, name) in COLUMN_NAMES.iter().enumerate() {
            if let Some(m) = caps.name(name) {
                cols.set_value(index, m.as_str());
            }
        }
        cols
    }

    fn timestamp(&self, line: &LogLine) -> Option<civil::DateTime> {
        self.columns_timestamp(&self.split_line(line))
    }

    fn push_value(&mut self, column: usize, new_value: &str, old_value: &str) {
        if column != TIME_COLUMN {
            return;
        }
        match self.try_offset(new_value, old_value) {
            Ok(offset) => self.time_offset = offset,
            Err(e) => {
                tracing::debug!(new_value, old_value, error = %e, "ignoring time edit");
            }
        }
    }

    fn is_timeshift_implemented(&self) -> bool {
        true
    }

    fn time_offset(&self) -> i64 {
        self.time_offset
    }

    fn set_time_offset(&mut self, offset_ms: i64) {
        self.time_offset = offset_ms;
    }
}

impl<D: FormatDetector> PriorityRankable for AndroidColumnizer<D> {
    /// More recognizable timestamps than unrecognizable ones wins. The file
    /// name does not take part.
    fn priority(&self, _file_name: &str, samples: &[LogLine]) -> Priority {
        let score: i64 = samples
            .iter()
            .filter(|line| !line.full_line.is_empty())
            .map(|line| {
                if self.detector.detect_date_time(&line.full_line).is_some() {
                    1
                } else {
                    -1
                }
            })
            .sum();

        if score > 0 {
            Priority::WellSupported
        } else {
            Priority::NotSupported
        }
    }
}
