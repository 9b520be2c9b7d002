//! `droidcol` — Split Android logcat lines into structured columns.
//!
//! This library provides the columnizer behind the `droidcol` CLI. It splits
//! `threadtime` logcat lines into seven columns (date, time, pid, tid, level,
//! tag, message), derives timestamps through a pluggable format detector,
//! tracks a user-editable time offset, and scores sample lines so a host can
//! pick the best columnizer for a file.
//!
//! # Example
//!
//! ```
//! use droidcol::{AndroidColumnizer, LineColumnizer, LogLine};
//!
//! let columnizer = AndroidColumnizer::new();
//! let line = LogLine::new("12-14 15:40:35.103  1923  1923 E Adapter: beanId is empty!", 1);
//! let cols = columnizer.split_line(&line);
//!
//! assert_eq!(cols.value(4), "E");
//! assert_eq!(cols.value(5), "Adapter");
//! assert_eq!(cols.value(6), "beanId is empty!");
//! ```

pub mod android;
pub mod cli;
pub mod columnizer;
pub mod config;
pub mod error;
pub mod format;
pub mod formatter;
pub mod highlight;
pub mod level;
pub mod line;

// Re-export primary API types for convenience.
pub use android::AndroidColumnizer;
pub use columnizer::{LineColumnizer, Priority, PriorityRankable, RankedColumnizer, select_columnizer};
pub use config::Config;
pub use error::DroidcolError;
pub use format::{Culture, FormatDetector, FormatInfo, TimeFormatDeterminer};
pub use formatter::format_line;
pub use highlight::{Color, HighlightColor};
pub use level::Level;
pub use line::{Column, ColumnizedLine, LogLine};
