//! Acceptance filters applied to every sampled point.
//!
//! A filter restricts the region the cloud is generated on: rejected
//! points are kept in the generation result but excluded from the
//! accepted set that feeds the complex.

use rips_lattice::{BoundingBox, Point};
use std::fmt;

/// Decides whether a sampled point is accepted.
pub trait PointFilter: fmt::Debug + Send + Sync {
    /// `true` to accept `point`, `false` to reject it.
    fn evaluate(&self, point: &Point) -> bool;
}

/// Accepts every point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AcceptAll;

impl PointFilter for AcceptAll {
    fn evaluate(&self, _point: &Point) -> bool {
        true
    }
}

/// Rejects every point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RejectAll;

impl PointFilter for RejectAll {
    fn evaluate(&self, _point: &Point) -> bool {
        false
    }
}

/// Accepts points whose absolute position lies in a closed box.
#[derive(Clone, Debug, PartialEq)]
pub struct RegionFilter {
    region: BoundingBox,
}

impl RegionFilter {
    /// Accept points inside `region`.
    pub fn new(region: BoundingBox) -> Self {
        Self { region }
    }

    /// The accepted region.
    pub fn region(&self) -> &BoundingBox {
        &self.region
    }
}

impl PointFilter for RegionFilter {
    fn evaluate(&self, point: &Point) -> bool {
        self.region.contains(point.absolute())
    }
}

/// Adapter turning a predicate into a [`PointFilter`].
#[derive(Clone, Copy)]
pub struct FnFilter<F>(pub F);

impl<F> PointFilter for FnFilter<F>
where
    F: Fn(&Point) -> bool + Send + Sync,
{
    fn evaluate(&self, point: &Point) -> bool {
        (self.0)(point)
    }
}

impl<F> fmt::Debug for FnFilter<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnFilter(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rips_core::PointId;
    use rips_lattice::LatticeIndex;
    use smallvec::smallvec;

    fn point(at: &[f64]) -> Point {
        let lattice = LatticeIndex::build(vec![0..4, 0..4]).unwrap();
        Point::locate(PointId(0), at, &lattice).unwrap()
    }

    #[test]
    fn constant_filters() {
        let p = point(&[1.5, 1.5]);
        assert!(AcceptAll.evaluate(&p));
        assert!(!RejectAll.evaluate(&p));
    }

    #[test]
    fn region_filter_uses_absolute_position() {
        let region = BoundingBox::new(smallvec![1.0, 1.0], smallvec![2.0, 2.0]).unwrap();
        let f = RegionFilter::new(region);
        assert!(f.evaluate(&point(&[1.5, 2.0])));
        assert!(!f.evaluate(&point(&[2.5, 1.5])));
    }

    #[test]
    fn closure_filter() {
        let disk = FnFilter(|p: &Point| {
            let [x, y] = [p.absolute()[0] - 2.0, p.absolute()[1] - 2.0];
            x * x + y * y <= 1.0
        });
        assert!(disk.evaluate(&point(&[2.5, 2.5])));
        assert!(!disk.evaluate(&point(&[0.5, 0.5])));
    }
}
