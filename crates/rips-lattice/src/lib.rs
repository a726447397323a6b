//! Spatial segmentation of an integer-bounded box into unit cells.
//!
//! A [`BoxSpec`] names `d` half-open integer intervals. The
//! [`LatticeIndex`] built from it owns one [`Cell`] per unit cube of the
//! box and answers point-to-cell lookups and neighborhood queries. A
//! neighborhood is returned as a [`SpatialCluster`], whose cached corner
//! bounds make point and [`BoundingBox`] containment O(d).
//!
//! [`Point`] is the arena record of a generated point: its id, owning
//! cell, and cell-relative and absolute coordinates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bbox;
pub mod box_spec;
pub mod cell;
pub mod cluster;
pub mod error;
pub mod lattice;
pub mod point;

pub use bbox::BoundingBox;
pub use box_spec::BoxSpec;
pub use cell::Cell;
pub use cluster::SpatialCluster;
pub use error::LatticeError;
pub use lattice::{lattice_points, LatticeIndex};
pub use point::Point;
