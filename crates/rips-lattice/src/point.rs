//! Points placed in lattice cells.

use crate::cell::Cell;
use crate::error::LatticeError;
use crate::lattice::LatticeIndex;
use rips_core::{CellId, PointId, Position};

/// A point of the cloud: id, owning cell and coordinates.
///
/// `uniform` is the position relative to the owning cell's base, in
/// `[0, 1)^d`; `absolute` is `cell.absolute(uniform)`, computed once at
/// construction. Points are immutable after creation and refer to their
/// cell by id.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    id: PointId,
    cell: CellId,
    uniform: Position,
    absolute: Position,
}

impl Point {
    /// Place a point at cell-relative coordinates `uniform` in `cell`.
    ///
    /// Returns `Err(LatticeError::DimensionMismatch)` if `uniform` does
    /// not match the cell's dimension.
    pub fn new(id: PointId, uniform: Position, cell: &Cell) -> Result<Self, LatticeError> {
        if uniform.len() != cell.dimension() {
            return Err(LatticeError::DimensionMismatch {
                expected: cell.dimension(),
                got: uniform.len(),
            });
        }
        let absolute = cell.absolute(&uniform);
        Ok(Self {
            id,
            cell: cell.id(),
            uniform,
            absolute,
        })
    }

    /// Place a point at absolute coordinates, finding its cell.
    ///
    /// Returns `Err(LatticeError::DimensionMismatch)` for coordinates of
    /// the wrong length and `Err(LatticeError::OutsideBox)` if no cell
    /// contains the position.
    pub fn locate(
        id: PointId,
        absolute: &[f64],
        lattice: &LatticeIndex,
    ) -> Result<Self, LatticeError> {
        if absolute.len() != lattice.dimension() {
            return Err(LatticeError::DimensionMismatch {
                expected: lattice.dimension(),
                got: absolute.len(),
            });
        }
        let cell = lattice
            .cell_at(absolute)
            .ok_or_else(|| LatticeError::OutsideBox {
                position: absolute.iter().copied().collect(),
            })?;
        Ok(Self {
            id,
            cell: cell.id(),
            uniform: cell.relative(absolute),
            absolute: absolute.iter().copied().collect(),
        })
    }

    /// The point's id.
    pub fn id(&self) -> PointId {
        self.id
    }

    /// The owning cell.
    pub fn cell(&self) -> CellId {
        self.cell
    }

    /// Cell-relative coordinates.
    pub fn uniform(&self) -> &[f64] {
        &self.uniform
    }

    /// Absolute coordinates.
    pub fn absolute(&self) -> &[f64] {
        &self.absolute
    }

    /// Dimension of the ambient space.
    pub fn dimension(&self) -> usize {
        self.absolute.len()
    }
}
