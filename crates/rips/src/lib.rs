//! Vietoris-Rips complexes of random point clouds on integer lattices.
//!
//! This is the facade crate: it re-exports the sub-crates and adds a
//! validated [`RipsConfig`] plus the one-call [`Pipeline`].
//!
//! # Quick start
//!
//! ```rust
//! use rips::prelude::*;
//!
//! let lattice = LatticeIndex::build(vec![0..3, 0..3]).unwrap();
//! let generation = PointGenerator::simple(&lattice, 3.0)
//!     .unwrap()
//!     .seed(11)
//!     .generate()
//!     .unwrap();
//!
//! let mut builder =
//!     RipsComplexBuilder::new(&lattice, generation.accepted_points(), Euclidean, 0.8).unwrap();
//! let complex = builder.generate(Some(2)).unwrap();
//! assert_eq!(complex.simplices(0).len(), generation.accepted().len());
//!
//! let mut analyzer = ConnectivityAnalyzer::new(
//!     builder.complex().vertices().keys().copied(),
//!     builder.adjacency(),
//! );
//! assert!(!analyzer.calculate_connected_components().is_empty());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `rips-core` | Ids, metrics, worker pool |
//! | [`lattice`] | `rips-lattice` | Box, cells, neighborhoods, points |
//! | [`process`] | `rips-process` | Distributions, filters, point generation |
//! | [`complex`] | `rips-complex` | Adjacency, simplices, connectivity |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod pipeline;

/// Ids, metrics and the worker pool (`rips-core`).
pub use rips_core as types;

/// Box specification, cells, clusters and points (`rips-lattice`).
pub use rips_lattice as lattice;

/// Count and position distributions, filters and the point generator
/// (`rips-process`).
pub use rips_process as process;

/// Adjacency, simplex enumeration and connected components
/// (`rips-complex`).
pub use rips_complex as complex;

pub use config::{ConfigError, RipsConfig};
pub use pipeline::{Pipeline, PipelineError, RipsOutput};

/// Common imports for typical usage.
///
/// ```rust
/// use rips::prelude::*;
/// ```
pub mod prelude {
    // Core
    pub use rips_core::{
        Euclidean, Metric, MetricFn, PointId, SquaredEuclidean, Uniform, WorkerPool,
    };

    // Lattice
    pub use rips_lattice::{BoundingBox, LatticeIndex, Point, SpatialCluster};

    // Point process
    pub use rips_process::{
        AcceptAll, Assigner, CountDistribution, FnFilter, PointFilter, PointGenerator,
        PositionDistribution, RegionFilter, RejectAll,
    };

    // Complex
    pub use rips_complex::{
        AdjacencyMatrix, ConnectivityAnalyzer, GraphComponent, RipsComplexBuilder, Simplex,
        SimplicialComplex,
    };

    // Facade
    pub use crate::{Pipeline, RipsConfig};
}
