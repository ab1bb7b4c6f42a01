//! Error types for color variant container parsing.

use thiserror::Error;

/// Errors that can occur when reading a color variant container.
///
/// Every variant means the whole container is unreadable; callers should
/// fall back to "no variant colors available".
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Common library error (truncated input).
    #[error("{0}")]
    Common(#[from] pso2_common::Error),

    /// Invalid magic bytes (not a NIFL file).
    #[error("invalid NIFL magic: expected 'NIFL', got {actual:?}")]
    InvalidMagic { actual: Vec<u8> },

    /// The section after the NIFL header is not REL0.
    #[error("could not find REL0 header, got {actual:?}")]
    MissingRel0Header { actual: Vec<u8> },

    /// REL0 size does not describe a whole number of records.
    #[error("REL0 size {size} with data offset {data_offset} is not a whole number of records")]
    CorruptRecordCount { size: u32, data_offset: usize },
}

impl Error {
    /// Whether the input ended before a required read.
    pub fn is_truncated(&self) -> bool {
        matches!(self, Self::Common(e) if e.is_truncated())
    }
}

/// Result type for color variant container operations.
pub type Result<T> = std::result::Result<T, Error>;
