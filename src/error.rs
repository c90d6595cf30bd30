//! Error types.
//!
//! Culling never fails: empty inputs and zero scores are ordinary data. For
//! seed enumeration only a mismatch between the requested strategy and the
//! configured shapes or reduction is an error, and it is reported before any
//! worker starts. [`TableError`] covers reading HSP tables.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SeedError {
    /// The contiguous fast path only exists for a few packed widths.
    #[error("unsupported contiguous seed: length {length}, {bits} bits per letter")]
    UnsupportedContiguousSeed { length: usize, bits: u32 },

    /// Hashed seeds only exist for a few reduction widths.
    #[error("unsupported reduction for hashed seeds: {bits} bits per letter")]
    UnsupportedReduction { bits: u32 },

    /// The letters packed into one key do not fit 64 bits.
    #[error("{letters} letters do not fit a 64-bit key at {bits} bits per letter")]
    ShapeSpanTooWide { letters: usize, bits: u32 },

    #[error("invalid shape: {0}")]
    InvalidShape(String),

    #[error("invalid reduction: {0}")]
    InvalidReduction(String),

    #[error("shape range {begin}..{end} outside of a table with {count} shapes")]
    ShapeRange { begin: usize, end: usize, count: usize },

    /// One sink is needed per partition, i.e. `boundaries.len() == sinks + 1`.
    #[error("{sinks} sinks for {boundaries} partition boundaries")]
    PartitionMismatch { sinks: usize, boundaries: usize },
}

pub type Result<T> = std::result::Result<T, SeedError>;

/// Malformed HSP table input
#[derive(Debug, Error)]
pub enum TableError {
    #[error("line {line}: expected {expected} columns, found {found}")]
    Columns { line: usize, expected: usize, found: usize },

    #[error("line {line}: invalid {field} '{value}'")]
    Field {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
