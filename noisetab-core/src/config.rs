//! Table generation settings.
//!
//! Counts and row widths are kept signed here so that out-of-range values
//! from a config file or the command line reach validation instead of
//! failing inside the deserializer with a less useful message.

use serde::Deserialize;

use crate::cellular::{CELLULAR_LABEL, DEFAULT_CELLULAR_COUNT, SampleRange};
use crate::emit::{DEFAULT_PRECISION, DEFAULT_ROW_WIDTH};
use crate::gradient::{DEFAULT_GRADIENT_COUNT, GRADIENT_LABEL};

/// Top-level configuration for a generation run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TablesConfig {
    /// Fractional digits per emitted literal.
    pub precision: usize,
    /// Gradient table settings.
    pub gradient: GradientConfig,
    /// Random offset table settings.
    pub cellular: CellularConfig,
}

impl Default for TablesConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            gradient: GradientConfig::default(),
            cellular: CellularConfig::default(),
        }
    }
}

/// Settings for the gradient table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GradientConfig {
    /// Header text.
    pub label: String,
    /// Number of gradient vectors.
    pub count: i64,
    /// Vectors per output line.
    pub row_width: i64,
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            label: GRADIENT_LABEL.to_owned(),
            count: DEFAULT_GRADIENT_COUNT as i64,
            row_width: DEFAULT_ROW_WIDTH.get() as i64,
        }
    }
}

/// Settings for the random offset table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CellularConfig {
    /// Header text.
    pub label: String,
    /// Number of random vectors.
    pub count: i64,
    /// Vectors per output line.
    pub row_width: i64,
    /// Inclusive component range, written as `[lo, hi]`.
    pub range: SampleRange,
    /// Seed for the random source. A fresh seed is drawn when absent.
    pub seed: Option<u64>,
}

impl Default for CellularConfig {
    fn default() -> Self {
        Self {
            label: CELLULAR_LABEL.to_owned(),
            count: DEFAULT_CELLULAR_COUNT as i64,
            row_width: DEFAULT_ROW_WIDTH.get() as i64,
            range: SampleRange::default(),
            seed: None,
        }
    }
}
