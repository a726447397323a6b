//! The integer-bounded region a lattice covers.

use crate::error::LatticeError;
use std::ops::Range;

/// An ordered list of `d >= 1` half-open integer intervals `[lo, hi)`.
///
/// # Examples
///
/// ```
/// use rips_lattice::BoxSpec;
///
/// let spec = BoxSpec::new(vec![-2..4, 3..10]).unwrap();
/// assert_eq!(spec.dimension(), 2);
/// assert_eq!(spec.cell_count(), 6 * 7);
/// assert!(spec.contains(&[-2.0, 9.5]));
/// assert!(!spec.contains(&[4.0, 5.0]));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoxSpec {
    ranges: Vec<Range<i32>>,
}

impl BoxSpec {
    /// Validate and wrap the given intervals.
    ///
    /// Returns `Err(LatticeError::InvalidDimension)` for an empty list and
    /// `Err(LatticeError::EmptyInterval)` for any interval with `hi <= lo`.
    pub fn new(ranges: Vec<Range<i32>>) -> Result<Self, LatticeError> {
        if ranges.is_empty() {
            return Err(LatticeError::InvalidDimension);
        }
        for (axis, r) in ranges.iter().enumerate() {
            if r.end <= r.start {
                return Err(LatticeError::EmptyInterval {
                    axis,
                    lo: r.start,
                    hi: r.end,
                });
            }
        }
        Ok(Self { ranges })
    }

    /// Number of intervals, i.e. the dimension of the box.
    pub fn dimension(&self) -> usize {
        self.ranges.len()
    }

    /// The intervals in axis order.
    pub fn ranges(&self) -> &[Range<i32>] {
        &self.ranges
    }

    /// Number of unit cells: the product of the interval lengths.
    pub fn cell_count(&self) -> usize {
        self.ranges
            .iter()
            .map(|r| (r.end as i64 - r.start as i64) as usize)
            .product()
    }

    /// Whether `absolute` lies in the box (lower bounds inclusive, upper
    /// bounds exclusive). Wrong-length input is never contained.
    pub fn contains(&self, absolute: &[f64]) -> bool {
        absolute.len() == self.ranges.len()
            && self
                .ranges
                .iter()
                .zip(absolute)
                .all(|(r, &x)| x >= r.start as f64 && x < r.end as f64)
    }
}
