//! Axis-aligned bounding boxes of point sets.

use crate::cluster::SpatialCluster;
use rips_core::Position;

/// The smallest closed axis-aligned box containing a set of positions.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundingBox {
    lower: Position,
    upper: Position,
}

impl BoundingBox {
    /// Build a box from explicit corners. Returns `None` if the corners
    /// differ in length or `lower > upper` on some axis.
    pub fn new(lower: Position, upper: Position) -> Option<Self> {
        if lower.len() != upper.len() || lower.iter().zip(&upper).any(|(l, u)| l > u) {
            return None;
        }
        Some(Self { lower, upper })
    }

    /// The degenerate box holding the single `position`.
    pub fn at(position: &[f64]) -> Self {
        let lower: Position = position.iter().copied().collect();
        Self {
            upper: lower.clone(),
            lower,
        }
    }

    /// Component-wise min/max over `positions`.
    ///
    /// Returns `None` for an empty iterator or positions of differing
    /// length.
    pub fn from_positions<'a, I>(positions: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a [f64]>,
    {
        let mut iter = positions.into_iter();
        let first = iter.next()?;
        let mut lower: Position = first.iter().copied().collect();
        let mut upper = lower.clone();
        for p in iter {
            if p.len() != lower.len() {
                return None;
            }
            for (i, &x) in p.iter().enumerate() {
                lower[i] = lower[i].min(x);
                upper[i] = upper[i].max(x);
            }
        }
        Some(Self { lower, upper })
    }

    /// The smallest box containing `self` and `position`.
    ///
    /// Coordinates beyond the box's dimension are ignored.
    pub fn extended(&self, position: &[f64]) -> Self {
        let mut lower = self.lower.clone();
        let mut upper = self.upper.clone();
        for (i, &x) in position.iter().enumerate().take(lower.len()) {
            lower[i] = lower[i].min(x);
            upper[i] = upper[i].max(x);
        }
        Self { lower, upper }
    }

    /// Dimension of the box.
    pub fn dimension(&self) -> usize {
        self.lower.len()
    }

    /// Lower corner (inclusive).
    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    /// Upper corner (inclusive).
    pub fn upper(&self) -> &[f64] {
        &self.upper
    }

    /// Whether `position` lies in the closed box.
    pub fn contains(&self, position: &[f64]) -> bool {
        position.len() == self.dimension()
            && position
                .iter()
                .zip(self.lower.iter().zip(&self.upper))
                .all(|(&x, (&lo, &hi))| lo <= x && x <= hi)
    }

    /// Whether the box lies entirely inside the half-open span of `cluster`.
    ///
    /// A box of a different dimension is never contained.
    pub fn contained_in(&self, cluster: &SpatialCluster) -> bool {
        self.dimension() == cluster.dimension()
            && self
                .lower
                .iter()
                .zip(&self.upper)
                .zip(cluster.lower_bound().iter().zip(cluster.upper_bound()))
                .all(|((&lo, &hi), (&c_lo, &c_hi))| lo >= c_lo as f64 && hi < c_hi as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LatticeIndex;
    use smallvec::smallvec;

    #[test]
    fn from_positions_takes_componentwise_extremes() {
        let pts: [&[f64]; 3] = [&[1.0, 5.0], &[3.0, 2.0], &[2.0, 4.0]];
        let bbox = BoundingBox::from_positions(pts).unwrap();
        assert_eq!(bbox.lower(), &[1.0, 2.0]);
        assert_eq!(bbox.upper(), &[3.0, 5.0]);
        assert!(bbox.contains(&[3.0, 5.0]));
        assert!(!bbox.contains(&[3.1, 5.0]));
    }

    #[test]
    fn single_position_box_is_degenerate() {
        let bbox = BoundingBox::at(&[1.5, -2.0]);
        assert_eq!(bbox.lower(), bbox.upper());
        assert!(bbox.contains(&[1.5, -2.0]));
        assert!(!bbox.contains(&[1.5, -1.9]));
    }

    #[test]
    fn extended_grows_only_where_needed() {
        let bbox = BoundingBox::new(smallvec![1.0, 1.0], smallvec![2.0, 2.0]).unwrap();
        let grown = bbox.extended(&[0.5, 1.5]);
        assert_eq!(grown.lower(), &[0.5, 1.0]);
        assert_eq!(grown.upper(), &[2.0, 2.0]);
        assert_eq!(bbox.extended(&[1.5, 1.5]), bbox);
    }

    #[test]
    fn from_positions_rejects_empty_and_ragged() {
        assert!(BoundingBox::from_positions(std::iter::empty::<&[f64]>()).is_none());
        let ragged: [&[f64]; 2] = [&[1.0, 5.0], &[3.0]];
        assert!(BoundingBox::from_positions(ragged).is_none());
    }

    #[test]
    fn new_rejects_inverted_corners() {
        assert!(BoundingBox::new(smallvec![1.0], smallvec![0.0]).is_none());
        assert!(BoundingBox::new(smallvec![0.0, 0.0], smallvec![1.0]).is_none());
    }

    #[test]
    fn containment_in_cluster_is_strict_at_upper_bound() {
        let lattice = LatticeIndex::build(vec![0..4, 0..4]).unwrap();
        let cluster = lattice.neighborhood(lattice.cell_by_base(&[1, 1]).unwrap(), 1);
        // cluster spans [0, 3) x [0, 3)
        let inside = BoundingBox::new(smallvec![0.0, 0.5], smallvec![2.99, 2.0]).unwrap();
        let touching = BoundingBox::new(smallvec![0.0, 0.5], smallvec![3.0, 2.0]).unwrap();
        let flat = BoundingBox::new(smallvec![0.5], smallvec![1.0]).unwrap();
        assert!(inside.contained_in(&cluster));
        assert!(cluster.contains_box(&inside));
        assert!(!touching.contained_in(&cluster));
        assert!(!flat.contained_in(&cluster));
    }
}
