//! Unit gradient directions for Perlin-style noise.
//!
//! The table holds `N` unit vectors whose angles are evenly spaced around
//! the circle, starting at angle zero. Index order follows angle order and
//! is part of the contract with the sampler, so entries are never sorted
//! or deduplicated.

use std::f64::consts::TAU;

use crate::error::{TableError, validate_len};
use crate::table::{Vector2, VectorTable};

/// Default number of gradient directions.
pub const DEFAULT_GRADIENT_COUNT: usize = 64;

/// Default header label for the gradient table.
pub const GRADIENT_LABEL: &str = "Perlin noise gradients";

/// Angle of gradient `index` in a table of `count` directions, in radians.
#[inline]
#[must_use]
pub fn gradient_angle(index: usize, count: usize) -> f64 {
    TAU * index as f64 / count as f64
}

/// Builds a table of `count` unit vectors evenly spaced by angle.
///
/// Element `i` is `(cos θ, sin θ)` with `θ = 2π·i/count`. The result is
/// fully deterministic.
pub fn generate_gradients(count: usize) -> Result<VectorTable, TableError> {
    validate_len(count)?;

    let vectors = (0..count)
        .map(|i| {
            let angle = gradient_angle(i, count);
            Vector2::new(angle.cos(), angle.sin())
        })
        .collect();

    tracing::debug!(count, "generated gradient table");
    Ok(VectorTable::from_vec(vectors))
}
