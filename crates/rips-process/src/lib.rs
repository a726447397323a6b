//! Stochastic point generation over a unit-cell lattice.
//!
//! Every cell of a [`LatticeIndex`](rips_lattice::LatticeIndex) is
//! assigned a [`CountDistribution`], a [`PositionDistribution`] and a
//! [`PointFilter`] through an [`Assigner`]. [`PointGenerator::generate`]
//! then samples each cell independently on a worker pool and merges the
//! per-cell samples into a [`GenerationResult`].
//!
//! # Determinism
//!
//! Each cell draws from its own ChaCha8 stream, keyed by the run seed
//! and the cell id. Point ids are minted in cell order before any
//! worker starts. A fixed seed therefore reproduces identical ids,
//! coordinates and accept/reject partitions regardless of the number
//! of workers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod assign;
pub mod distribution;
pub mod error;
pub mod filter;
pub mod generator;

pub use assign::Assigner;
pub use distribution::{CountDistribution, PositionDistribution};
pub use error::ProcessError;
pub use filter::{AcceptAll, FnFilter, PointFilter, RegionFilter, RejectAll};
pub use generator::{CellSummary, GenerationResult, PointGenerator};
