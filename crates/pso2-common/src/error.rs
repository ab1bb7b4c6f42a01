//! Error types for pso2-common.

use thiserror::Error;

/// Common error type for chunk reading.
#[derive(Debug, Error)]
pub enum Error {
    /// Buffer is shorter than a required read or seek.
    #[error("truncated input: needed {needed} bytes but only {available} available")]
    TruncatedInput { needed: usize, available: usize },

    /// Invalid magic bytes encountered.
    #[error("invalid magic: expected {expected:?}, got {actual:?}")]
    InvalidMagic {
        expected: Vec<u8>,
        actual: Vec<u8>,
    },
}

impl Error {
    /// Whether this error was caused by running out of input.
    pub fn is_truncated(&self) -> bool {
        matches!(self, Self::TruncatedInput { .. })
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
