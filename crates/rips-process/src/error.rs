//! Error types for point generation.

use rips_lattice::LatticeError;
use std::error::Error;
use std::fmt;

/// Errors from configuring or running a point process.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessError {
    /// A distribution parameter is out of range.
    InvalidDistribution {
        /// What went wrong.
        reason: String,
    },
    /// The sampled point counts overflow the `u32` id space.
    TooManyPoints {
        /// Total number of points requested so far.
        requested: u64,
    },
    /// Placing a sampled point in its cell failed.
    Lattice(LatticeError),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDistribution { reason } => write!(f, "invalid distribution: {reason}"),
            Self::TooManyPoints { requested } => {
                write!(f, "{requested} points exceed the u32 id space")
            }
            Self::Lattice(e) => write!(f, "lattice: {e}"),
        }
    }
}

impl Error for ProcessError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Lattice(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LatticeError> for ProcessError {
    fn from(e: LatticeError) -> Self {
        Self::Lattice(e)
    }
}
