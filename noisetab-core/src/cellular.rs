//! Random feature-point offsets for cellular (Worley) noise.

use rand::Rng;
use rand::distributions::{Distribution, Uniform};
use serde::{Deserialize, Serialize};

use crate::error::{TableError, validate_len};
use crate::table::{Vector2, VectorTable};

/// Default number of random offsets.
pub const DEFAULT_CELLULAR_COUNT: usize = 256;

/// Default header label for the random offset table.
pub const CELLULAR_LABEL: &str = "Cellular noise randoms";

/// Closed interval `[lo, hi]` that random components are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct SampleRange {
    /// Inclusive lower bound.
    pub lo: f64,
    /// Inclusive upper bound.
    pub hi: f64,
}

impl SampleRange {
    /// Creates a range without validating it.
    #[must_use]
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// Checks that the bounds are finite, ordered, and samplable.
    pub fn validate(self) -> Result<Self, TableError> {
        let Self { lo, hi } = self;
        if !lo.is_finite() || !hi.is_finite() || lo >= hi {
            return Err(TableError::DegenerateRange { lo, hi });
        }
        if !(hi - lo).is_finite() {
            return Err(TableError::RangeOverflow { lo, hi });
        }
        Ok(self)
    }

    /// Whether `value` lies within the closed interval.
    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        self.lo <= value && value <= self.hi
    }
}

impl Default for SampleRange {
    fn default() -> Self {
        Self::new(-1.0, 1.0)
    }
}

impl From<[f64; 2]> for SampleRange {
    fn from([lo, hi]: [f64; 2]) -> Self {
        Self::new(lo, hi)
    }
}

impl From<SampleRange> for [f64; 2] {
    fn from(range: SampleRange) -> Self {
        [range.lo, range.hi]
    }
}

/// Builds a table of `count` vectors whose components are drawn
/// independently and uniformly from `range`.
///
/// This is a plain i.i.d. sampler: no spacing, jitter, or magnitude
/// guarantees. Reproducibility depends entirely on how `rng` was seeded.
pub fn generate_randoms<R: Rng + ?Sized>(
    count: usize,
    range: SampleRange,
    rng: &mut R,
) -> Result<VectorTable, TableError> {
    validate_len(count)?;
    let range = range.validate()?;

    let dist = Uniform::new_inclusive(range.lo, range.hi);
    let vectors = (0..count)
        .map(|_| {
            let x = dist.sample(rng);
            let y = dist.sample(rng);
            Vector2::new(x, y)
        })
        .collect();

    tracing::debug!(count, lo = range.lo, hi = range.hi, "generated random table");
    Ok(VectorTable::from_vec(vectors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn components_stay_in_range() {
        let mut rng = Pcg64::seed_from_u64(7);
        for range in [
            SampleRange::default(),
            SampleRange::new(0.0, 1.0),
            SampleRange::new(-0.25, 0.5),
            SampleRange::new(100.0, 100.5),
        ] {
            let table = generate_randoms(DEFAULT_CELLULAR_COUNT, range, &mut rng).unwrap();
            assert_eq!(table.len(), DEFAULT_CELLULAR_COUNT);
            assert!(table.scalars().all(|s| range.contains(s)));
        }
    }

    #[test]
    fn same_seed_same_table() {
        let a = generate_randoms(64, SampleRange::default(), &mut Pcg64::seed_from_u64(42));
        let b = generate_randoms(64, SampleRange::default(), &mut Pcg64::seed_from_u64(42));
        assert_eq!(a.unwrap(), b.unwrap());
    }

    #[test]
    fn different_seeds_differ() {
        let a = generate_randoms(64, SampleRange::default(), &mut Pcg64::seed_from_u64(1));
        let b = generate_randoms(64, SampleRange::default(), &mut Pcg64::seed_from_u64(2));
        assert_ne!(a.unwrap(), b.unwrap());
    }

    #[test]
    fn samples_spread_across_range() {
        let mut rng = Pcg64::seed_from_u64(3);
        let table = generate_randoms(DEFAULT_CELLULAR_COUNT, SampleRange::default(), &mut rng)
            .unwrap();
        assert!(table.scalars().any(|s| s < -0.5));
        assert!(table.scalars().any(|s| s > 0.5));
    }

    #[test]
    fn single_offset() {
        let mut rng = Pcg64::seed_from_u64(0);
        let table = generate_randoms(1, SampleRange::new(-1.0, 1.0), &mut rng).unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.scalars().all(|s| (-1.0..=1.0).contains(&s)));
    }

    #[test]
    fn degenerate_ranges_are_rejected() {
        let mut rng = Pcg64::seed_from_u64(0);
        for (lo, hi) in [(1.0, 1.0), (1.0, 0.0), (f64::NAN, 1.0), (0.0, f64::INFINITY)] {
            let err = generate_randoms(5, SampleRange::new(lo, hi), &mut rng).unwrap_err();
            assert!(matches!(err, TableError::DegenerateRange { .. }), "{err}");
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        }
    }

    #[test]
    fn overflowing_range_is_rejected() {
        let err = SampleRange::new(-f64::MAX, f64::MAX).validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArithmeticDegenerate);
    }

    #[test]
    fn zero_count_is_rejected() {
        let mut rng = Pcg64::seed_from_u64(0);
        let err = generate_randoms(0, SampleRange::default(), &mut rng).unwrap_err();
        assert_eq!(err, TableError::InvalidCount(0));
    }
}
