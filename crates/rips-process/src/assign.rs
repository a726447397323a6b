//! Per-cell assignment of generation parameters.

use rips_lattice::Cell;
use std::fmt;
use std::sync::Arc;

/// Chooses a value (a distribution, a filter) for each cell.
///
/// `Constant` hands every cell a clone of the same value; `PerCell`
/// calls a function with the cell, which allows spatially varying
/// intensities or filters.
///
/// ```
/// use rips_lattice::LatticeIndex;
/// use rips_process::Assigner;
///
/// let lattice = LatticeIndex::build(vec![0..2]).unwrap();
/// let by_axis = Assigner::per_cell(|cell| cell.base()[0] as usize * 10);
/// let counts: Vec<usize> = lattice.cells().map(|c| by_axis.assign(c)).collect();
/// assert_eq!(counts, vec![0, 10]);
/// ```
pub enum Assigner<T> {
    /// The same value for every cell.
    Constant(T),
    /// A value computed from the cell.
    PerCell(Arc<dyn Fn(&Cell) -> T + Send + Sync>),
}

impl<T: Clone> Assigner<T> {
    /// Assign `value` to every cell.
    pub fn constant(value: T) -> Self {
        Self::Constant(value)
    }

    /// Assign `f(cell)` to each cell.
    pub fn per_cell<F>(f: F) -> Self
    where
        F: Fn(&Cell) -> T + Send + Sync + 'static,
    {
        Self::PerCell(Arc::new(f))
    }

    /// The value for `cell`.
    pub fn assign(&self, cell: &Cell) -> T {
        match self {
            Self::Constant(v) => v.clone(),
            Self::PerCell(f) => f(cell),
        }
    }
}

impl<T: Clone> Clone for Assigner<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Constant(v) => Self::Constant(v.clone()),
            Self::PerCell(f) => Self::PerCell(Arc::clone(f)),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Assigner<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(v) => f.debug_tuple("Constant").field(v).finish(),
            Self::PerCell(_) => f.write_str("PerCell(..)"),
        }
    }
}
