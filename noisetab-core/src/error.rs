//! Errors produced while validating table parameters.

use thiserror::Error;

/// Largest table that will be generated, in vectors.
///
/// Angles are computed as `2π·i/N` in `f64`; at this size every index and
/// the resulting scalar count are exactly representable, and the consuming
/// side can still address the table with 32-bit indices.
pub const MAX_TABLE_LEN: usize = 1 << 20;

/// Largest number of fractional digits the literal formatter will emit.
pub const MAX_PRECISION: usize = 64;

/// Broad category of a [`TableError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A caller supplied a count, range, or layout value that can never be valid.
    InvalidArgument,
    /// The arguments are well-formed but would push the arithmetic past what `f64` can represent.
    ArithmeticDegenerate,
}

/// An error raised before any table is generated or written.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    /// The requested vector count is zero or negative.
    #[error("table count must be positive, got {0}")]
    InvalidCount(i64),
    /// The requested vector count exceeds [`MAX_TABLE_LEN`].
    #[error("table count {count} exceeds the supported maximum of {max}")]
    CountTooLarge {
        /// Requested count.
        count: usize,
        /// Upper bound.
        max: usize,
    },
    /// The sampling range is empty, inverted, or not finite.
    #[error("random range [{lo}, {hi}] is degenerate, expected finite bounds with lo < hi")]
    DegenerateRange {
        /// Lower bound.
        lo: f64,
        /// Upper bound.
        hi: f64,
    },
    /// The width of the sampling range overflows `f64`.
    #[error("random range [{lo}, {hi}] is too wide to sample")]
    RangeOverflow {
        /// Lower bound.
        lo: f64,
        /// Upper bound.
        hi: f64,
    },
    /// The number of vectors per output line is zero or negative.
    #[error("row width must be positive, got {0}")]
    InvalidRowWidth(i64),
    /// The number of fractional digits exceeds [`MAX_PRECISION`].
    #[error("precision {0} exceeds the supported maximum of {max}", max = MAX_PRECISION)]
    InvalidPrecision(usize),
    /// Two tables would be emitted under the same Rust identifier.
    #[error("tables \"{first}\" and \"{second}\" both map to the static name {name}")]
    DuplicateName {
        /// Shared identifier.
        name: String,
        /// Label of the earlier table.
        first: String,
        /// Label of the later table.
        second: String,
    },
}

impl TableError {
    /// Returns the category this error belongs to.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::CountTooLarge { .. } | Self::RangeOverflow { .. } => {
                ErrorKind::ArithmeticDegenerate
            }
            Self::InvalidCount(_)
            | Self::DegenerateRange { .. }
            | Self::InvalidRowWidth(_)
            | Self::InvalidPrecision(_)
            | Self::DuplicateName { .. } => ErrorKind::InvalidArgument,
        }
    }
}

/// Converts a signed count from configuration into a table length.
pub fn checked_count(count: i64) -> Result<usize, TableError> {
    let len = usize::try_from(count)
        .ok()
        .filter(|&len| len > 0)
        .ok_or(TableError::InvalidCount(count))?;
    validate_len(len)?;
    Ok(len)
}

/// Rejects empty tables and tables larger than [`MAX_TABLE_LEN`].
pub(crate) fn validate_len(len: usize) -> Result<(), TableError> {
    if len == 0 {
        return Err(TableError::InvalidCount(0));
    }
    if len > MAX_TABLE_LEN {
        return Err(TableError::CountTooLarge {
            count: len,
            max: MAX_TABLE_LEN,
        });
    }
    Ok(())
}
