//! The lattice index: every unit cell of a box, keyed by base position.

use crate::box_spec::BoxSpec;
use crate::cell::Cell;
use crate::cluster::SpatialCluster;
use crate::error::LatticeError;
use indexmap::IndexMap;
use rips_core::{CellId, Coord};
use smallvec::SmallVec;
use std::ops::Range;
use tracing::{debug, trace};

/// All unit cells covering a [`BoxSpec`].
///
/// Cells are stored in canonical order: lexicographic over base
/// positions, first axis slowest. `CellId(n)` is the n-th cell of that
/// order, and every iteration over cells in this workspace follows it.
/// The index is read-only after construction.
///
/// # Examples
///
/// ```
/// use rips_lattice::LatticeIndex;
///
/// let lattice = LatticeIndex::build(vec![0..4, 0..4]).unwrap();
/// assert_eq!(lattice.cell_count(), 16);
///
/// let cell = lattice.cell_at(&[2.5, 0.1]).unwrap();
/// assert_eq!(cell.base().as_slice(), &[2, 0]);
///
/// // The radius-1 neighborhood of a corner cell is clipped to the box.
/// let corner = lattice.cell_by_base(&[0, 0]).unwrap();
/// assert_eq!(lattice.neighborhood(corner, 1).len(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct LatticeIndex {
    spec: BoxSpec,
    cells: IndexMap<Coord, Cell>,
}

impl LatticeIndex {
    /// Build the index for a validated box specification.
    pub fn new(spec: BoxSpec) -> Self {
        let lower: Coord = spec.ranges().iter().map(|r| r.start).collect();
        let upper: Coord = spec.ranges().iter().map(|r| r.end - 1).collect();

        let mut cells = IndexMap::with_capacity(spec.cell_count());
        for (i, base) in lattice_points(&lower, &upper).into_iter().enumerate() {
            let cell = Cell::new(CellId(i as u32), base.clone());
            cells.insert(base, cell);
        }

        debug!(
            dimension = spec.dimension(),
            cell_count = cells.len(),
            "lattice created"
        );
        Self { spec, cells }
    }

    /// Validate `ranges` and build the index.
    ///
    /// Returns `Err(LatticeError::InvalidDimension)` if `ranges` is empty.
    pub fn build(ranges: Vec<Range<i32>>) -> Result<Self, LatticeError> {
        Ok(Self::new(BoxSpec::new(ranges)?))
    }

    /// The box this lattice covers.
    pub fn box_spec(&self) -> &BoxSpec {
        &self.spec
    }

    /// Dimension of the box.
    pub fn dimension(&self) -> usize {
        self.spec.dimension()
    }

    /// Number of cells, equal to the product of the interval lengths.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Iterate cells in canonical order.
    pub fn cells(&self) -> impl ExactSizeIterator<Item = &Cell> + '_ {
        self.cells.values()
    }

    /// Look up a cell by id. Ids from another lattice may miss.
    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.get_index(id.0 as usize).map(|(_, c)| c)
    }

    /// Look up the cell whose lower corner is `base`.
    pub fn cell_by_base(&self, base: &[i32]) -> Option<&Cell> {
        self.cells.get(base)
    }

    /// The cell containing the absolute position, if it lies in the box.
    ///
    /// Each coordinate is floored and the result looked up by key.
    /// Positions outside the box, of the wrong dimension, or with
    /// non-finite coordinates miss.
    pub fn cell_at(&self, absolute: &[f64]) -> Option<&Cell> {
        if absolute.len() != self.dimension() {
            return None;
        }
        let mut key: Coord = SmallVec::with_capacity(absolute.len());
        for &x in absolute {
            let floored = x.floor();
            if !floored.is_finite() || floored < i32::MIN as f64 || floored > i32::MAX as f64 {
                return None;
            }
            key.push(floored as i32);
        }
        self.cells.get(&key)
    }

    /// All cells whose base lies in `[cell.base - radius, cell.base + radius]`
    /// (inclusive on both ends), intersected with the box.
    ///
    /// Cells beyond the box boundary are simply absent. The result always
    /// contains `cell` itself when `cell` belongs to this lattice.
    pub fn neighborhood(&self, cell: &Cell, radius: u32) -> SpatialCluster {
        let r = radius as i64;
        let mut lower: Coord = SmallVec::with_capacity(self.dimension());
        let mut upper: Coord = SmallVec::with_capacity(self.dimension());
        for (range, &b) in self.spec.ranges().iter().zip(cell.base()) {
            let lo = (b as i64 - r).max(range.start as i64);
            let hi = (b as i64 + r).min(range.end as i64 - 1);
            lower.push(lo as i32);
            upper.push(hi as i32);
        }

        let members: Vec<CellId> = lattice_points(&lower, &upper)
            .iter()
            .filter_map(|base| self.cells.get(base).map(Cell::id))
            .collect();

        trace!(
            base = ?cell.base().as_slice(),
            radius,
            cells = members.len(),
            "neighborhood computed"
        );

        // The clipped corners are cell bases; the cube upper bound is one past.
        let upper_bound = upper.iter().map(|&u| u + 1).collect();
        SpatialCluster::from_parts(members, lower, upper_bound)
    }
}

/// Every integer point `p` with `lower[i] <= p[i] <= upper[i]` on each axis,
/// in lexicographic order (first axis slowest).
///
/// Returns an empty list if any axis has `lower > upper` or if the corners
/// differ in length.
///
/// ```
/// use rips_lattice::lattice_points;
///
/// let pts = lattice_points(&[0, 5], &[1, 6]);
/// let flat: Vec<Vec<i32>> = pts.iter().map(|p| p.to_vec()).collect();
/// assert_eq!(flat, vec![vec![0, 5], vec![0, 6], vec![1, 5], vec![1, 6]]);
/// ```
pub fn lattice_points(lower: &[i32], upper: &[i32]) -> Vec<Coord> {
    if lower.len() != upper.len() || lower.iter().zip(upper).any(|(l, u)| l > u) {
        return Vec::new();
    }
    let total: usize = lower
        .iter()
        .zip(upper)
        .map(|(&l, &u)| (u as i64 - l as i64 + 1) as usize)
        .product();

    let mut out = Vec::with_capacity(total);
    let mut current: Coord = lower.iter().copied().collect();
    loop {
        out.push(current.clone());
        // Odometer increment, last axis fastest.
        let mut axis = lower.len();
        loop {
            if axis == 0 {
                return out;
            }
            axis -= 1;
            if current[axis] < upper[axis] {
                current[axis] += 1;
                break;
            }
            current[axis] = lower[axis];
        }
    }
}
