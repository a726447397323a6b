//! Test fixtures shared across the rips crates.
//!
//! The scenarios here are small, hand-placed point sets whose complexes
//! and components are known exactly. See [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    binomial, complete_edges, grid_lattice, grid_points, points_at, seven_point_lattice,
    seven_points, GRID_POINTS, SEVEN_POINTS,
};
