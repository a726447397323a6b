//! Error types for complex construction.

use rips_core::{CellId, PointId};
use std::fmt;

/// Errors from building a Vietoris-Rips complex.
///
/// Adjacency queries on unknown ids are not errors; they read as "not
/// connected".
#[derive(Debug, Clone, PartialEq)]
pub enum ComplexError {
    /// A parameter is out of range (negative maximum dimension, negative
    /// or NaN threshold).
    InvalidConfiguration {
        /// What went wrong.
        reason: String,
    },
    /// A complex needs at least one vertex.
    EmptyVertexSet,
    /// A point's dimension differs from its space.
    DimensionMismatch {
        /// The offending point.
        point: PointId,
        /// Dimension of the space.
        expected: usize,
        /// Dimension of the point.
        got: usize,
    },
    /// A point refers to a cell the lattice does not have.
    UnknownCell {
        /// The offending point.
        point: PointId,
        /// The cell it refers to.
        cell: CellId,
    },
}

impl fmt::Display for ComplexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration { reason } => write!(f, "invalid configuration: {reason}"),
            Self::EmptyVertexSet => write!(f, "a complex needs at least one vertex"),
            Self::DimensionMismatch {
                point,
                expected,
                got,
            } => write!(f, "point {point} is {got}D, expected {expected}D"),
            Self::UnknownCell { point, cell } => {
                write!(f, "point {point} refers to unknown cell {cell}")
            }
        }
    }
}

impl std::error::Error for ComplexError {}
