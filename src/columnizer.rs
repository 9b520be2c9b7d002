//! Capability traits shared by all columnizers.
//!
//! [`LineColumnizer`] is what every format handler must provide.
//! [`PriorityRankable`] is optional: handlers that implement it can be
//! auto-selected for a file by [`select_columnizer`].

use jiff::civil;

use crate::line::{ColumnizedLine, LogLine};

/// Splits raw lines into named columns and extracts their timestamps.
pub trait LineColumnizer {
    /// Fixed display label.
    fn name(&self) -> &'static str;

    /// Human-readable summary of the columns produced.
    fn description(&self) -> &'static str;

    fn column_count(&self) -> usize {
        self.column_names().len()
    }

    fn column_names(&self) -> &'static [&'static str];

    /// Split one line. Always yields [`column_count`](Self::column_count)
    /// columns; unrecognized lines come back with every column empty.
    fn split_line<'a>(&self, line: &'a LogLine) -> ColumnizedLine<'a>;

    /// Timestamp of the line, or `None` when it cannot be determined.
    fn timestamp(&self, line: &LogLine) -> Option<civil::DateTime>;

    /// React to an interactive edit of column `column` from `old_value` to
    /// `new_value`.
    fn push_value(&mut self, column: usize, new_value: &str, old_value: &str);

    fn is_timeshift_implemented(&self) -> bool {
        false
    }

    /// Millisecond shift applied to displayed timestamps.
    fn time_offset(&self) -> i64 {
        0
    }

    fn set_time_offset(&mut self, _offset_ms: i64) {}
}

/// How confidently a columnizer handles a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    NotSupported,
    WellSupported,
}

impl Priority {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotSupported => "not-supported",
            Self::WellSupported => "well-supported",
        }
    }
}

/// Optional capability: score a sample of a file's lines.
pub trait PriorityRankable {
    fn priority(&self, file_name: &str, samples: &[LogLine]) -> Priority;
}

/// Columnizer that can both split lines and rank itself for a file.
pub trait RankedColumnizer: LineColumnizer + PriorityRankable {}

impl<T: LineColumnizer + PriorityRankable> RankedColumnizer for T {}

/// Pick the candidate with the highest priority for `samples`.
///
/// Returns `None` when no candidate reports more than
/// [`Priority::NotSupported`]. Ties go to the earliest candidate.
pub fn select_columnizer<'c>(
    candidates: &'c [&'c dyn RankedColumnizer],
    file_name: &str,
    samples: &[LogLine],
) -> Option<&'c dyn RankedColumnizer> {
    let mut best: Option<(Priority, &'c dyn RankedColumnizer)> = None;
    for &candidate in candidates {
        let priority = candidate.priority(file_name, samples);
        tracing::debug!(
            columnizer = candidate.name(),
            priority = priority.as_str(),
            "scored candidate"
        );
        if priority == Priority::NotSupported {
            continue;
        }
        if best.is_none_or(|(current, _)| priority > current) {
            best = Some((priority, candidate));
        }
    }
    best.map(|(_, columnizer)| columnizer)
}
