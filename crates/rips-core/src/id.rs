//! Strongly-typed identifiers and the [`Coord`] / [`Position`] type aliases.

use smallvec::SmallVec;
use std::fmt;

/// Identifies a generated point.
///
/// Points are numbered by a single global sequence in cell-processing
/// order. `PointId(n)` is the n-th point drawn by a generation run,
/// whether or not it was later accepted by the filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub u32);

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PointId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies a unit cell of a lattice.
///
/// `CellId(n)` is the n-th cell in the lattice's canonical
/// (lexicographic) ordering. It is only meaningful for the lattice
/// that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub u32);

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for CellId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies a simplex within a simplicial complex.
///
/// Vertices receive the first ids, higher-dimensional simplices are
/// numbered from a shared atomic counter as they are discovered. Two
/// runs with different worker scheduling may number the same simplex
/// differently; compare simplices by their vertex set instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SimplexId(pub u64);

impl fmt::Display for SimplexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for SimplexId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Identifies a connected component, in root-discovery order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(pub u32);

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An integer lattice position (the base corner of a unit cell).
///
/// Uses `SmallVec<[i32; 4]>` to avoid heap allocation for boxes up to
/// 4 dimensions. Higher-dimensional boxes spill to the heap transparently.
pub type Coord = SmallVec<[i32; 4]>;

/// A real-valued position, absolute or cell-relative.
pub type Position = SmallVec<[f64; 4]>;
