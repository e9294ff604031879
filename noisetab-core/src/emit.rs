//! Fixed-precision literal emission.
//!
//! The output is pasted verbatim into a constant-array initializer by the
//! consuming engine, so the layout is byte-exact:
//!
//! ```text
//! Perlin noise gradients [8]:
//!  1.00000000000000000, 0.00000000000000000, 0.00000000000000006, 1.00000000000000000,
//!  -1.00000000000000000, 0.00000000000000012, -0.00000000000000018, -1.00000000000000000,
//!
//! ```
//!
//! Every vector is written as `" {x}, {y},"`. A line break follows each
//! full row and a trailing partial row, and one blank line closes the table.

use std::fmt::{self, Write};
use std::num::NonZeroUsize;

use crate::error::{MAX_PRECISION, TableError};
use crate::table::NamedTable;

/// Default number of fractional digits, enough for an exact `f64` round trip.
pub const DEFAULT_PRECISION: usize = 17;

/// Default number of vectors per output line.
pub const DEFAULT_ROW_WIDTH: NonZeroUsize = NonZeroUsize::new(2).expect("2 is non-zero");

/// Layout parameters for literal emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiteralFormat {
    precision: usize,
    row_width: NonZeroUsize,
}

impl LiteralFormat {
    /// Creates a format, rejecting precisions above [`MAX_PRECISION`].
    pub const fn new(precision: usize, row_width: NonZeroUsize) -> Result<Self, TableError> {
        if precision > MAX_PRECISION {
            return Err(TableError::InvalidPrecision(precision));
        }
        Ok(Self {
            precision,
            row_width,
        })
    }

    /// Converts a signed row width from configuration.
    pub fn row_width_from(width: i64) -> Result<NonZeroUsize, TableError> {
        usize::try_from(width)
            .ok()
            .and_then(NonZeroUsize::new)
            .ok_or(TableError::InvalidRowWidth(width))
    }

    /// Fractional digits per literal.
    #[must_use]
    pub const fn precision(self) -> usize {
        self.precision
    }

    /// Vectors per output line.
    #[must_use]
    pub const fn row_width(self) -> NonZeroUsize {
        self.row_width
    }

    /// Number of data lines (excluding header and separator) for `len` vectors.
    #[must_use]
    pub const fn line_count(self, len: usize) -> usize {
        len.div_ceil(self.row_width.get())
    }
}

impl Default for LiteralFormat {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            row_width: DEFAULT_ROW_WIDTH,
        }
    }
}

/// Writes named tables as row-wrapped numeric literals.
///
/// Output depends only on the table, its label, and the format.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableEmitter {
    format: LiteralFormat,
}

impl TableEmitter {
    /// Creates an emitter with the given layout.
    #[must_use]
    pub const fn new(format: LiteralFormat) -> Self {
        Self { format }
    }

    /// The layout this emitter writes.
    #[must_use]
    pub const fn format(&self) -> LiteralFormat {
        self.format
    }

    /// Writes one table, including its header and trailing separator line.
    pub fn emit<W: Write + ?Sized>(&self, named: NamedTable<'_>, out: &mut W) -> fmt::Result {
        let precision = self.format.precision;
        let row_width = self.format.row_width.get();

        writeln!(out, "{} [{}]:", named.label, named.table.scalar_count())?;
        for row in named.table.chunks(row_width) {
            for v in row {
                write!(out, " {:.precision$}, {:.precision$},", v.x, v.y)?;
            }
            out.write_char('\n')?;
        }
        out.write_char('\n')
    }

    /// Renders one table into a new string.
    #[must_use]
    pub fn render(&self, named: NamedTable<'_>) -> String {
        let mut out = String::new();
        self.emit(named, &mut out)
            .expect("writing to a String cannot fail");
        out
    }
}
