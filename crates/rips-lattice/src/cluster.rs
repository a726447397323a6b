//! Unions of cells used as spatial-pruning neighborhoods.

use crate::bbox::BoundingBox;
use crate::cell::Cell;
use crate::error::LatticeError;
use rips_core::{CellId, Coord};
use tracing::debug;

/// An immutable, non-empty set of cells with cached corner bounds.
///
/// `lower_bound` is the component-wise minimum of the member bases and
/// `upper_bound` the component-wise maximum plus one, so the cluster
/// spans the half-open box `[lower_bound, upper_bound)`. Both are
/// computed once at construction; containment queries are O(d).
///
/// Cells are referenced by id: the owning
/// [`LatticeIndex`](crate::LatticeIndex) keeps the cells themselves.
#[derive(Clone, Debug, PartialEq)]
pub struct SpatialCluster {
    cells: Vec<CellId>,
    lower: Coord,
    upper: Coord,
}

impl SpatialCluster {
    /// Build a cluster from explicit cells.
    ///
    /// Returns `Err(LatticeError::EmptyCluster)` if `cells` is empty and
    /// `Err(LatticeError::DimensionMismatch)` if the cells disagree on
    /// their dimension.
    pub fn new(cells: &[&Cell]) -> Result<Self, LatticeError> {
        let first = cells.first().ok_or(LatticeError::EmptyCluster)?;
        let dim = first.dimension();
        if let Some(bad) = cells.iter().find(|c| c.dimension() != dim) {
            return Err(LatticeError::DimensionMismatch {
                expected: dim,
                got: bad.dimension(),
            });
        }

        let lower: Coord = (0..dim)
            .map(|i| cells.iter().map(|c| c.base()[i]).min().unwrap_or(0))
            .collect();
        let upper: Coord = (0..dim)
            .map(|i| cells.iter().map(|c| c.base()[i]).max().unwrap_or(0) + 1)
            .collect();

        debug!(
            lower = ?lower.as_slice(),
            upper = ?upper.as_slice(),
            cells = cells.len(),
            "cluster created"
        );
        Ok(Self {
            cells: cells.iter().map(|c| c.id()).collect(),
            lower,
            upper,
        })
    }

    /// Assemble a cluster whose bounds the caller already knows.
    pub(crate) fn from_parts(cells: Vec<CellId>, lower: Coord, upper: Coord) -> Self {
        Self {
            cells,
            lower,
            upper,
        }
    }

    /// Member cells, in canonical lattice order when built by
    /// [`LatticeIndex::neighborhood`](crate::LatticeIndex::neighborhood).
    pub fn cells(&self) -> &[CellId] {
        &self.cells
    }

    /// Number of member cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the cluster has no cells. Only possible for a
    /// neighborhood of a cell from a different lattice.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Dimension of the cluster's bounds.
    pub fn dimension(&self) -> usize {
        self.lower.len()
    }

    /// Component-wise minimum of the member bases (inclusive).
    pub fn lower_bound(&self) -> &Coord {
        &self.lower
    }

    /// Component-wise maximum of the member bases plus one (exclusive).
    pub fn upper_bound(&self) -> &Coord {
        &self.upper
    }

    /// Whether the absolute position lies in `[lower_bound, upper_bound)`.
    pub fn contains(&self, absolute: &[f64]) -> bool {
        absolute.len() == self.dimension()
            && absolute
                .iter()
                .zip(self.lower.iter().zip(&self.upper))
                .all(|(&x, (&lo, &hi))| lo as f64 <= x && x < hi as f64)
    }

    /// Whether the whole bounding box lies inside the cluster.
    pub fn contains_box(&self, bbox: &BoundingBox) -> bool {
        bbox.contained_in(self)
    }

    /// Whether `cell` is one of the member cells.
    pub fn contains_cell(&self, cell: CellId) -> bool {
        self.cells.contains(&cell)
    }
}
