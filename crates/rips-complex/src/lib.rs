//! Vietoris-Rips complexes over lattice-indexed point clouds.
//!
//! [`RipsComplexBuilder`] computes an [`AdjacencyMatrix`] over a vertex
//! set with the pruning provided by the lattice neighborhoods, then
//! enumerates the simplices of a [`SimplicialComplex`] by increasing
//! dimension. [`ConnectivityAnalyzer`] partitions the vertices of any
//! adjacency relation into [`GraphComponent`]s.
//!
//! # Determinism
//!
//! The set of simplices (and so the f-vector) never depends on the
//! worker count. Simplex ids are minted from a shared counter while
//! cells are processed in parallel, so they are only reproducible with
//! a single worker. Compare simplices by
//! [`identifier`](Simplex::identifier), not by id.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod adjacency;
pub mod complex;
pub mod connectivity;
pub mod error;
pub mod rips;
pub mod simplex;

pub use adjacency::AdjacencyMatrix;
pub use complex::SimplicialComplex;
pub use connectivity::{ConnectivityAnalyzer, GraphComponent};
pub use error::ComplexError;
pub use rips::RipsComplexBuilder;
pub use simplex::{Simplex, Vertices};
