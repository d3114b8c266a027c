//! Error types for hue

use std::io;
use thiserror::Error;

/// Main error type for hue operations
#[derive(Error, Debug)]
pub enum HueError {
    /// Decode attempted on a value shorter than the minimum encoded length
    #[error("can't decode {len}-byte value (minimum length is {min})")]
    Length {
        /// Length of the rejected value
        len: usize,
        /// Minimum valid encoded length
        min: usize,
    },

    /// Invalid regular expression given to a rule
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// The output sink failed part way through a colorized write
    #[error("Sink error after {written} bytes: {source}")]
    Sink {
        /// Bytes accepted by the sink before the failure
        written: usize,
        /// The sink's own error
        #[source]
        source: io::Error,
    },

    /// Color name not present in the color table
    #[error("Unknown color: {0}")]
    UnknownColor(String),

    /// Integer color code outside the palette
    #[error("Invalid color code: {0}")]
    InvalidColorCode(u8),

    /// Decoded payload is not valid UTF-8
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// IO error outside a colorized write
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl HueError {
    /// Bytes written to the sink before a [`HueError::Sink`] failure.
    ///
    /// Every other variant fails before anything reaches a sink, so they
    /// report zero.
    pub fn written(&self) -> usize {
        match self {
            HueError::Sink { written, .. } => *written,
            _ => 0,
        }
    }
}

impl From<HueError> for io::Error {
    fn from(err: HueError) -> Self {
        match err {
            HueError::Sink { source, .. } | HueError::Io(source) => source,
            other => io::Error::new(io::ErrorKind::InvalidData, other),
        }
    }
}

/// Result type alias for hue operations
pub type Result<T> = std::result::Result<T, HueError>;
