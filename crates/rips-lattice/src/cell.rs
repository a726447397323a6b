//! Unit cells of a lattice.

use rips_core::{CellId, Coord, Position};

/// A unit cube `{base} + [0, 1)^d` of a [`LatticeIndex`](crate::LatticeIndex).
///
/// The lower bound of every axis is inclusive and the upper bound
/// exclusive, so each position of the box belongs to exactly one cell.
/// Cells are created by the lattice and immutable afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    id: CellId,
    base: Coord,
    midpoint: Position,
}

impl Cell {
    pub(crate) fn new(id: CellId, base: Coord) -> Self {
        let midpoint = base.iter().map(|&b| b as f64 + 0.5).collect();
        Self { id, base, midpoint }
    }

    /// Position of this cell in the lattice's canonical ordering.
    pub fn id(&self) -> CellId {
        self.id
    }

    /// The lower corner of the cube.
    pub fn base(&self) -> &Coord {
        &self.base
    }

    /// Dimension of the ambient box.
    pub fn dimension(&self) -> usize {
        self.base.len()
    }

    /// `base + (0.5, ..., 0.5)`.
    pub fn midpoint(&self) -> &[f64] {
        &self.midpoint
    }

    /// Translate cell-relative coordinates to absolute ones.
    ///
    /// Relative coordinates in `[0, 1)` stay inside the cell even when
    /// the sum rounds up to the next cell's face.
    pub fn absolute(&self, relative: &[f64]) -> Position {
        relative
            .iter()
            .zip(&self.base)
            .map(|(&r, &b)| {
                let face = b as f64 + 1.0;
                let a = r + b as f64;
                if a >= face && r < 1.0 {
                    face.next_down()
                } else {
                    a
                }
            })
            .collect()
    }

    /// Translate absolute coordinates to cell-relative ones.
    pub fn relative(&self, absolute: &[f64]) -> Position {
        absolute
            .iter()
            .zip(&self.base)
            .map(|(&a, &b)| a - b as f64)
            .collect()
    }

    /// Whether `absolute` lies inside this cube.
    pub fn contains(&self, absolute: &[f64]) -> bool {
        absolute.len() == self.base.len()
            && absolute.iter().zip(&self.base).all(|(&a, &b)| {
                let lo = b as f64;
                a >= lo && a < lo + 1.0
            })
    }
}
