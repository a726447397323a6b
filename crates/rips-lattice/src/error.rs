//! Error types for lattice construction and point placement.

use rips_core::Position;
use std::fmt;

/// Errors arising from lattice construction or point placement.
///
/// Lookups that simply miss (a position outside the box, an unknown
/// base position) are not errors; they return `None`.
#[derive(Debug, Clone, PartialEq)]
pub enum LatticeError {
    /// The box specification has no intervals.
    InvalidDimension,
    /// An interval of the box specification is empty (`hi <= lo`).
    EmptyInterval {
        /// Axis of the offending interval.
        axis: usize,
        /// Inclusive lower bound.
        lo: i32,
        /// Exclusive upper bound.
        hi: i32,
    },
    /// Attempted to build a cluster from zero cells.
    EmptyCluster,
    /// A coordinate vector does not match the lattice dimension.
    DimensionMismatch {
        /// Dimension of the lattice.
        expected: usize,
        /// Length of the supplied coordinates.
        got: usize,
    },
    /// An absolute position lies outside the box.
    OutsideBox {
        /// The offending position.
        position: Position,
    },
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension => {
                write!(f, "box specification must have at least one interval")
            }
            Self::EmptyInterval { axis, lo, hi } => {
                write!(f, "interval [{lo}, {hi}) on axis {axis} is empty")
            }
            Self::EmptyCluster => write!(f, "cluster must contain at least one cell"),
            Self::DimensionMismatch { expected, got } => {
                write!(f, "expected {expected}D coordinates, got {got}D")
            }
            Self::OutsideBox { position } => {
                write!(f, "position {:?} is outside the box", position.as_slice())
            }
        }
    }
}

impl std::error::Error for LatticeError {}
