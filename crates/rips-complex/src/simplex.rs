//! Simplices: sorted vertex sets with cached bounding boxes.

use crate::error::ComplexError;
use rips_core::{PointId, SimplexId};
use rips_lattice::{BoundingBox, Point, SpatialCluster};
use smallvec::SmallVec;

/// Vertex list of a simplex, sorted by id.
pub type Vertices = SmallVec<[PointId; 4]>;

/// A `k`-simplex on `k + 1` points.
///
/// Vertices are kept sorted by id, which makes [`identifier`](Self::identifier)
/// canonical. The bounding box over the vertices' absolute positions is
/// computed once and drives the spatial pruning of higher simplices.
#[derive(Clone, Debug, PartialEq)]
pub struct Simplex {
    id: SimplexId,
    vertices: Vertices,
    bbox: BoundingBox,
}

impl Simplex {
    /// Build a simplex on `points`.
    ///
    /// # Errors
    ///
    /// `EmptyVertexSet` for no points, `DimensionMismatch` if the points
    /// live in spaces of different dimension.
    pub fn new(id: SimplexId, points: &[&Point]) -> Result<Self, ComplexError> {
        let first = points.first().ok_or(ComplexError::EmptyVertexSet)?;
        if let Some(p) = points.iter().find(|p| p.dimension() != first.dimension()) {
            return Err(ComplexError::DimensionMismatch {
                point: p.id(),
                expected: first.dimension(),
                got: p.dimension(),
            });
        }
        let bbox = BoundingBox::from_positions(points.iter().map(|p| p.absolute()))
            .ok_or(ComplexError::EmptyVertexSet)?;
        let mut vertices: Vertices = points.iter().map(|p| p.id()).collect();
        vertices.sort_unstable();
        vertices.dedup();
        Ok(Self { id, vertices, bbox })
    }

    /// The edge between two points of the same dimension, `low` before
    /// `high` in id order.
    pub(crate) fn edge(id: SimplexId, low: &Point, high: &Point) -> Self {
        debug_assert!(low.id() < high.id());
        Self {
            id,
            vertices: Vertices::from_slice(&[low.id(), high.id()]),
            bbox: BoundingBox::at(low.absolute()).extended(high.absolute()),
        }
    }

    /// The simplex on `point` and the vertices of `self`.
    ///
    /// `point` must precede every vertex (`point.id() < lowest_vertex()`),
    /// which keeps the vertex list sorted without re-sorting.
    pub(crate) fn extend(&self, id: SimplexId, point: &Point) -> Self {
        debug_assert!(point.id() < self.lowest_vertex());
        let mut vertices = Vertices::with_capacity(self.vertices.len() + 1);
        vertices.push(point.id());
        vertices.extend_from_slice(&self.vertices);
        Self {
            id,
            vertices,
            bbox: self.bbox.extended(point.absolute()),
        }
    }

    /// The simplex id.
    pub fn id(&self) -> SimplexId {
        self.id
    }

    /// Number of vertices minus one.
    pub fn dimension(&self) -> usize {
        self.vertices.len() - 1
    }

    /// Vertex ids in ascending order.
    pub fn vertices(&self) -> &[PointId] {
        &self.vertices
    }

    /// The smallest vertex id.
    pub fn lowest_vertex(&self) -> PointId {
        self.vertices[0]
    }

    /// Canonical identifier: the sorted vertex ids joined by commas,
    /// e.g. `"0,3,5"`.
    pub fn identifier(&self) -> String {
        let ids: Vec<String> = self.vertices.iter().map(|v| v.0.to_string()).collect();
        ids.join(",")
    }

    /// Whether `id` is one of the vertices.
    pub fn contains_vertex(&self, id: PointId) -> bool {
        self.vertices.binary_search(&id).is_ok()
    }

    /// Bounding box over the vertices' absolute positions.
    pub fn bounding_box(&self) -> &BoundingBox {
        &self.bbox
    }

    /// Whether the bounding box lies inside `cluster`.
    pub fn contained_in(&self, cluster: &SpatialCluster) -> bool {
        self.bbox.contained_in(cluster)
    }

    /// Dimension of the ambient space.
    pub fn space_dimension(&self) -> usize {
        self.bbox.dimension()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rips_lattice::LatticeIndex;

    fn points() -> (LatticeIndex, Vec<Point>) {
        let lattice = LatticeIndex::build(vec![0..4, 0..4]).unwrap();
        let pts = [[1.5, 2.5], [0.5, 0.25], [3.0, 1.0]]
            .iter()
            .zip([5, 0, 3])
            .map(|(at, id)| Point::locate(PointId(id), at, &lattice).unwrap())
            .collect();
        (lattice, pts)
    }

    #[test]
    fn vertices_are_sorted() {
        let (_, pts) = points();
        let refs: Vec<&Point> = pts.iter().collect();
        let s = Simplex::new(SimplexId(9), &refs).unwrap();
        assert_eq!(s.vertices(), &[PointId(0), PointId(3), PointId(5)]);
        assert_eq!(s.identifier(), "0,3,5");
        assert_eq!(s.dimension(), 2);
        assert_eq!(s.lowest_vertex(), PointId(0));
        assert!(s.contains_vertex(PointId(3)));
        assert!(!s.contains_vertex(PointId(4)));
    }

    #[test]
    fn edge_matches_validated_construction() {
        let (_, pts) = points();
        let (low, high) = (&pts[1], &pts[0]);
        let edge = Simplex::edge(SimplexId(4), low, high);
        assert_eq!(edge, Simplex::new(SimplexId(4), &[high, low]).unwrap());
        assert_eq!(edge.identifier(), "0,5");
        assert_eq!(edge.bounding_box().lower(), &[0.5, 0.25]);
        assert_eq!(edge.bounding_box().upper(), &[1.5, 2.5]);
    }

    #[test]
    fn bounding_box_spans_vertices() {
        let (_, pts) = points();
        let refs: Vec<&Point> = pts.iter().collect();
        let s = Simplex::new(SimplexId(0), &refs).unwrap();
        assert_eq!(s.bounding_box().lower(), &[0.5, 0.25]);
        assert_eq!(s.bounding_box().upper(), &[3.0, 2.5]);
        assert_eq!(s.space_dimension(), 2);
    }

    #[test]
    fn empty_simplex_is_rejected() {
        assert_eq!(
            Simplex::new(SimplexId(0), &[]),
            Err(ComplexError::EmptyVertexSet)
        );
    }

    #[test]
    fn extend_prepends_lower_vertex() {
        let (_, pts) = points();
        let edge = Simplex::new(SimplexId(1), &[&pts[0], &pts[2]]).unwrap();
        let tri = edge.extend(SimplexId(2), &pts[1]);
        assert_eq!(tri.identifier(), "0,3,5");
        let direct = Simplex::new(SimplexId(3), &[&pts[0], &pts[1], &pts[2]]).unwrap();
        assert_eq!(tri.bounding_box(), direct.bounding_box());
    }

    #[test]
    fn containment_in_neighborhood() {
        let (lattice, pts) = points();
        let s = Simplex::new(SimplexId(0), &[&pts[1]]).unwrap();
        let origin = lattice.cell_by_base(&[0, 0]).unwrap();
        assert!(s.contained_in(&lattice.neighborhood(origin, 0)));
        let far = Simplex::new(SimplexId(1), &[&pts[1], &pts[2]]).unwrap();
        assert!(!far.contained_in(&lattice.neighborhood(origin, 1)));
        assert!(far.contained_in(&lattice.neighborhood(origin, 3)));
    }
}
