//! Core types for Vietoris-Rips complex construction.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the identifiers and coordinate aliases shared by every other crate,
//! the [`Metric`] abstraction used to decide adjacency, and the
//! [`WorkerPool`] that runs per-cell work in parallel.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod id;
pub mod metric;
pub mod pool;

pub use id::{CellId, ComponentId, Coord, PointId, Position, SimplexId};
pub use metric::{Euclidean, Metric, MetricFn, SquaredEuclidean, Uniform};
pub use pool::WorkerPool;
