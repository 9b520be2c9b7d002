//! Error types for `droidcol`.
//!
//! Uses [`thiserror`] for ergonomic error derivation. The columnizer core never
//! surfaces these to its callers: parse failures degrade to empty columns or a
//! missing timestamp. They exist for the internal fallible helpers and for the
//! binary's configuration and I/O paths.

use thiserror::Error;

/// Errors that can occur in `droidcol`.
///
/// Maps to exit codes: [`Config`](Self::Config), [`Toml`](Self::Toml) and
/// [`Color`](Self::Color) → exit 1, [`Io`](Self::Io) → exit 2.
#[derive(Debug, Error)]
pub enum DroidcolError {
    /// Configuration error (invalid flag combination, unreadable config file).
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error during read or write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML deserialization error.
    #[error("config file error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Date or time text did not match the detected format.
    #[error("timestamp error: {0}")]
    Timestamp(#[from] jiff::Error),

    /// No known date/time shape matched the input.
    #[error("no date/time format recognized in {0:?}")]
    NoFormat(String),

    /// Unrecognized color specification.
    #[error("invalid color: {0}")]
    Color(String),
}
