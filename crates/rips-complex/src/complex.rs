//! The simplicial complex: vertices plus simplices grouped by dimension.

use crate::adjacency::AdjacencyMatrix;
use crate::error::ComplexError;
use crate::simplex::Simplex;
use indexmap::IndexMap;
use rips_core::{CellId, PointId, SimplexId};
use rips_lattice::Point;
use std::collections::BTreeMap;

/// A simplicial complex over a fixed vertex set.
///
/// Vertices are stored sorted by id. Dimension 0 holds one simplex per
/// vertex from construction on, with simplex ids `0..n` in vertex order.
#[derive(Clone, Debug, PartialEq)]
pub struct SimplicialComplex {
    vertices: IndexMap<PointId, Point>,
    simplices: BTreeMap<usize, Vec<Simplex>>,
}

impl SimplicialComplex {
    /// A complex holding only the 0-simplices of `points`.
    ///
    /// # Errors
    ///
    /// `EmptyVertexSet` for no points, `DimensionMismatch` if the points
    /// differ in dimension.
    pub fn new(points: Vec<Point>) -> Result<Self, ComplexError> {
        let dimension = points
            .first()
            .map(Point::dimension)
            .ok_or(ComplexError::EmptyVertexSet)?;
        if let Some(p) = points.iter().find(|p| p.dimension() != dimension) {
            return Err(ComplexError::DimensionMismatch {
                point: p.id(),
                expected: dimension,
                got: p.dimension(),
            });
        }

        let mut vertices: IndexMap<PointId, Point> =
            points.into_iter().map(|p| (p.id(), p)).collect();
        vertices.sort_keys();

        let mut zero = Vec::with_capacity(vertices.len());
        for (slot, point) in vertices.values().enumerate() {
            zero.push(Simplex::new(SimplexId(slot as u64), &[point])?);
        }
        let mut simplices = BTreeMap::new();
        simplices.insert(0, zero);
        Ok(Self {
            vertices,
            simplices,
        })
    }

    /// Vertices keyed by id, in ascending id order.
    pub fn vertices(&self) -> &IndexMap<PointId, Point> {
        &self.vertices
    }

    /// The vertex with `id`, if any.
    pub fn vertex(&self, id: PointId) -> Option<&Point> {
        self.vertices.get(&id)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Dimension of the ambient space.
    pub fn space_dimension(&self) -> usize {
        self.vertices.values().next().map_or(0, Point::dimension)
    }

    /// The simplices of dimension `dim`; empty if none were generated.
    pub fn simplices(&self, dim: usize) -> &[Simplex] {
        self.simplices.get(&dim).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every simplex, by ascending dimension.
    pub fn iter(&self) -> impl Iterator<Item = &Simplex> + '_ {
        self.simplices.values().flatten()
    }

    /// Total number of simplices.
    pub fn len(&self) -> usize {
        self.simplices.values().map(Vec::len).sum()
    }

    /// Always `false`: a complex has at least one vertex.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Highest dimension with at least one simplex.
    pub fn max_dimension(&self) -> usize {
        self.simplices
            .iter()
            .rev()
            .find(|(_, s)| !s.is_empty())
            .map_or(0, |(&d, _)| d)
    }

    /// Number of simplices per dimension, omitting empty dimensions.
    pub fn f_vector(&self) -> BTreeMap<usize, usize> {
        self.simplices
            .iter()
            .filter(|(_, s)| !s.is_empty())
            .map(|(&d, s)| (d, s.len()))
            .collect()
    }

    /// The relation induced by the 1-simplices.
    pub fn adjacency_from_edges(&self) -> AdjacencyMatrix {
        let mut adjacency = AdjacencyMatrix::new(self.vertices.keys().copied());
        for edge in self.simplices(1) {
            if let [x, y] = edge.vertices() {
                adjacency.connect(*x, *y);
            }
        }
        adjacency
    }

    /// Absolute coordinates of each vertex of `simplex`, in vertex order.
    /// Vertices foreign to this complex are skipped.
    pub fn coordinates(&self, simplex: &Simplex) -> Vec<&[f64]> {
        simplex
            .vertices()
            .iter()
            .filter_map(|id| self.vertices.get(id))
            .map(Point::absolute)
            .collect()
    }

    /// Vertex ids grouped by owning cell. Groups appear in order of their
    /// lowest vertex id; ids inside a group are ascending.
    pub fn points_by_cell(&self) -> IndexMap<CellId, Vec<PointId>> {
        let mut groups: IndexMap<CellId, Vec<PointId>> = IndexMap::new();
        for p in self.vertices.values() {
            groups.entry(p.cell()).or_default().push(p.id());
        }
        groups
    }

    /// Drop every simplex of dimension `>= dim`. Dimension 0 is kept.
    pub(crate) fn truncate(&mut self, dim: usize) {
        let _ = self.simplices.split_off(&dim.max(1));
    }

    /// Store the simplices of dimension `dim`.
    pub(crate) fn insert(&mut self, dim: usize, simplices: Vec<Simplex>) {
        self.simplices.insert(dim, simplices);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rips_lattice::LatticeIndex;

    fn points(coords: &[[f64; 2]]) -> Vec<Point> {
        let lattice = LatticeIndex::build(vec![0..4, 0..4]).unwrap();
        coords
            .iter()
            .enumerate()
            .map(|(i, at)| Point::locate(PointId(i as u32), at, &lattice).unwrap())
            .collect()
    }

    #[test]
    fn seeds_zero_simplices_in_id_order() {
        let mut pts = points(&[[0.5, 0.5], [1.5, 0.5], [2.5, 3.5]]);
        pts.reverse();
        let complex = SimplicialComplex::new(pts).unwrap();
        let zero = complex.simplices(0);
        assert_eq!(zero.len(), 3);
        for (i, s) in zero.iter().enumerate() {
            assert_eq!(s.id(), SimplexId(i as u64));
            assert_eq!(s.vertices(), &[PointId(i as u32)]);
        }
        assert_eq!(complex.f_vector(), BTreeMap::from([(0, 3)]));
        assert_eq!(complex.max_dimension(), 0);
        assert!(complex.simplices(1).is_empty());
    }

    #[test]
    fn empty_vertex_set_fails() {
        assert_eq!(
            SimplicialComplex::new(Vec::new()),
            Err(ComplexError::EmptyVertexSet)
        );
    }

    #[test]
    fn mixed_dimensions_fail() {
        let mut pts = points(&[[0.5, 0.5]]);
        let line = LatticeIndex::build(vec![0..2]).unwrap();
        pts.push(Point::locate(PointId(7), &[1.5], &line).unwrap());
        assert_eq!(
            SimplicialComplex::new(pts),
            Err(ComplexError::DimensionMismatch {
                point: PointId(7),
                expected: 2,
                got: 1
            })
        );
    }

    #[test]
    fn edges_induce_adjacency() {
        let pts = points(&[[0.5, 0.5], [1.5, 0.5], [2.5, 3.5]]);
        let mut complex = SimplicialComplex::new(pts).unwrap();
        let edge = Simplex::new(
            SimplexId(3),
            &[complex.vertex(PointId(0)).unwrap(), complex.vertex(PointId(2)).unwrap()],
        )
        .unwrap();
        complex.insert(1, vec![edge]);

        let adj = complex.adjacency_from_edges();
        assert!(adj.get(PointId(2), PointId(0)));
        assert_eq!(adj.count(), 1);
        assert_eq!(complex.max_dimension(), 1);
        assert_eq!(
            complex.coordinates(&complex.simplices(1)[0]),
            vec![&[0.5, 0.5][..], &[2.5, 3.5][..]]
        );

        complex.truncate(1);
        assert_eq!(complex.f_vector(), BTreeMap::from([(0, 3)]));
    }

    #[test]
    fn groups_points_by_cell() {
        let pts = points(&[[0.5, 0.5], [1.5, 0.5], [0.25, 0.75]]);
        let complex = SimplicialComplex::new(pts).unwrap();
        let groups = complex.points_by_cell();
        assert_eq!(groups.len(), 2);
        let first: Vec<_> = groups.values().next().unwrap().clone();
        assert_eq!(first, vec![PointId(0), PointId(2)]);
    }
}
