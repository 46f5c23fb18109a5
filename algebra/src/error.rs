//! This module defines the errors surfaced by the arithmetic kernel.
use thiserror::Error;

/// Errors reported by ring operations, buffers and the omega cache.
#[derive(Debug, Error)]
pub enum AlgebraError {
    /// An argument violated a documented size or domain constraint.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Checked element access beyond the end of a buffer.
    #[error("index {index} out of range for buffer of size {size}")]
    OutOfRange {
        /// The offending index.
        index: usize,
        /// The buffer size.
        size: usize,
    },
    /// No discrete logarithm exists for the given base and value.
    #[error("discrete logarithm has no solution")]
    NoSolution,
    /// No admissible code length at or above the requested minimum.
    #[error("no code length >= {min} divides the group order")]
    NoCodeLength {
        /// The requested lower bound.
        min: u128,
    },
    /// The omega cache could not be read or written.
    #[error("omega cache I/O failure")]
    Io(#[from] std::io::Error),
    /// The omega cache held unusable content.
    #[error("omega cache corrupted: {0}")]
    Cache(String),
}
