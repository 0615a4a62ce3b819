//! Error types for arrangement enumeration.

use thiserror::Error;

/// Error variants for counting and enumeration operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The shape parameters do not describe a feasible arrangement
    /// (`r > n`, `r < 0`, or `n < 0`).
    #[error("invalid range: n={n}, r={r}")]
    InvalidRange {
        /// Cardinality of the source set (for frequency vectors, the clamped sum).
        n: i64,
        /// Number of items per arrangement.
        r: i64,
    },

    /// The arrangement count does not fit in a signed 64-bit integer.
    #[error("arrangement count overflows i64 for n={n}, r={r}")]
    Overflow {
        /// Cardinality of the source set.
        n: i64,
        /// Number of items per arrangement.
        r: i64,
    },

    /// A rank outside `[0, total_count() - 1]` was passed to a checked lookup.
    #[error("rank out of range: {0}")]
    RankOutOfRange(i64),
}

/// A specialized Result type for enumeration operations.
pub type Result<T> = std::result::Result<T, Error>;
