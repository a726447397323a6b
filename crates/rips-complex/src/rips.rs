//! Vietoris-Rips construction with lattice-based pruning.
//!
//! Two points are adjacent when their distance is strictly below
//! `delta`. Every candidate search is restricted to the neighborhood
//! cluster of the cell being processed: the cells within
//! `cluster_extension` steps along every axis (by default
//! `ceil(delta)`). Points farther apart than that cannot be adjacent,
//! so the restriction never loses an edge or a simplex.
//!
//! Simplices of dimension `k >= 2` are grown from `(k-1)`-simplices by
//! prepending a point with a smaller id that is adjacent to every
//! vertex. Each `k`-simplex is therefore found exactly once: from its
//! face without the lowest vertex, in the cell of that vertex.

use crate::adjacency::AdjacencyMatrix;
use crate::complex::SimplicialComplex;
use crate::error::ComplexError;
use crate::simplex::Simplex;
use indexmap::IndexMap;
use rips_core::{CellId, Metric, PointId, SimplexId, WorkerPool};
use rips_lattice::{LatticeIndex, Point, SpatialCluster};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info};

/// Builds the Vietoris-Rips complex of a point set on a lattice.
///
/// ```
/// use rips_complex::RipsComplexBuilder;
/// use rips_core::{Euclidean, PointId};
/// use rips_lattice::{LatticeIndex, Point};
///
/// let lattice = LatticeIndex::build(vec![0..3, 0..3]).unwrap();
/// let points = [[0.5, 0.5], [1.2, 0.5], [0.5, 1.1], [2.5, 2.5]]
///     .iter()
///     .enumerate()
///     .map(|(i, at)| Point::locate(PointId(i as u32), at, &lattice).unwrap())
///     .collect();
///
/// let mut builder = RipsComplexBuilder::new(&lattice, points, Euclidean, 1.0).unwrap();
/// let complex = builder.generate(None).unwrap();
/// assert_eq!(complex.simplices(1).len(), 3);
/// assert_eq!(complex.simplices(2).len(), 1);
/// ```
pub struct RipsComplexBuilder<'a> {
    lattice: &'a LatticeIndex,
    metric: Box<dyn Metric>,
    delta: f64,
    extension: u32,
    pool: WorkerPool,
    complex: SimplicialComplex,
    adjacency: AdjacencyMatrix,
    adjacency_ready: bool,
    /// Vertex ids per non-empty cell, ascending, in lattice cell order.
    by_cell: IndexMap<CellId, Vec<PointId>>,
    /// Neighborhood cluster per non-empty cell.
    neighborhoods: IndexMap<CellId, SpatialCluster>,
}

impl<'a> RipsComplexBuilder<'a> {
    /// Prepare a builder over `points` located on `lattice`.
    ///
    /// Only the 0-simplices exist until [`generate`](Self::generate) runs.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` for a negative or NaN `delta`,
    /// `EmptyVertexSet` for no points, `DimensionMismatch` for a point
    /// whose dimension differs from the lattice, `UnknownCell` for a
    /// point whose cell is not part of `lattice`.
    pub fn new<M>(
        lattice: &'a LatticeIndex,
        points: Vec<Point>,
        metric: M,
        delta: f64,
    ) -> Result<Self, ComplexError>
    where
        M: Metric + 'static,
    {
        if delta.is_nan() || delta < 0.0 {
            return Err(ComplexError::InvalidConfiguration {
                reason: format!("delta must be >= 0, got {delta}"),
            });
        }
        for p in &points {
            if p.dimension() != lattice.dimension() {
                return Err(ComplexError::DimensionMismatch {
                    point: p.id(),
                    expected: lattice.dimension(),
                    got: p.dimension(),
                });
            }
            if lattice.cell(p.cell()).is_none() {
                return Err(ComplexError::UnknownCell {
                    point: p.id(),
                    cell: p.cell(),
                });
            }
        }

        let complex = SimplicialComplex::new(points)?;
        let adjacency = AdjacencyMatrix::new(complex.vertices().keys().copied());

        let grouped = complex.points_by_cell();
        let mut by_cell = IndexMap::with_capacity(grouped.len());
        for cell in lattice.cells() {
            if let Some(ids) = grouped.get(&cell.id()) {
                by_cell.insert(cell.id(), ids.clone());
            }
        }

        let mut builder = Self {
            lattice,
            metric: Box::new(metric),
            delta,
            extension: default_extension(delta),
            pool: WorkerPool::auto(),
            complex,
            adjacency,
            adjacency_ready: false,
            by_cell,
            neighborhoods: IndexMap::new(),
        };
        builder.compute_neighborhoods();
        Ok(builder)
    }

    /// Override the neighborhood radius in cells.
    ///
    /// The radius must cover `delta` in the metric's units: for a
    /// squared metric with `delta = 5.76` a radius of 3 suffices, while
    /// the default `ceil(delta)` would be 6.
    pub fn cluster_extension(mut self, extension: u32) -> Self {
        if extension != self.extension {
            self.extension = extension;
            self.compute_neighborhoods();
            self.adjacency_ready = false;
        }
        self
    }

    /// Set the worker pool.
    pub fn pool(mut self, pool: WorkerPool) -> Self {
        self.pool = pool;
        self
    }

    /// The adjacency threshold.
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// The neighborhood radius in cells.
    pub fn extension(&self) -> u32 {
        self.extension
    }

    /// The lattice the vertices live on.
    pub fn lattice(&self) -> &'a LatticeIndex {
        self.lattice
    }

    /// The cached neighborhood of `cell`, if the cell holds a vertex.
    pub fn neighborhood(&self, cell: CellId) -> Option<&SpatialCluster> {
        self.neighborhoods.get(&cell)
    }

    /// The complex as generated so far.
    pub fn complex(&self) -> &SimplicialComplex {
        &self.complex
    }

    /// The adjacency relation. All pairs are disconnected until
    /// [`calculate_adjacency`](Self::calculate_adjacency) runs.
    pub fn adjacency(&self) -> &AdjacencyMatrix {
        &self.adjacency
    }

    /// Consume the builder.
    pub fn into_parts(self) -> (SimplicialComplex, AdjacencyMatrix) {
        (self.complex, self.adjacency)
    }

    fn compute_neighborhoods(&mut self) {
        self.neighborhoods = self
            .by_cell
            .keys()
            .filter_map(|&id| {
                let cell = self.lattice.cell(id)?;
                Some((id, self.lattice.neighborhood(cell, self.extension)))
            })
            .collect();
    }

    /// Ids of every vertex in `cluster`, ascending.
    fn candidates(&self, cluster: &SpatialCluster) -> Vec<PointId> {
        let mut ids: Vec<PointId> = cluster
            .cells()
            .iter()
            .filter_map(|c| self.by_cell.get(c))
            .flatten()
            .copied()
            .collect();
        ids.sort_unstable();
        ids
    }

    fn vertex(&self, id: PointId) -> Option<&Point> {
        self.complex.vertex(id)
    }

    /// Reset and recompute the adjacency relation.
    ///
    /// Each cell compares its vertices with the later-id vertices of its
    /// neighborhood, in parallel. The collected pairs are written back
    /// on the calling thread.
    pub fn calculate_adjacency(&mut self) -> &AdjacencyMatrix {
        self.adjacency.reset();

        let tasks: Vec<(&[PointId], &SpatialCluster)> = self
            .by_cell
            .iter()
            .filter_map(|(cell, ids)| Some((ids.as_slice(), self.neighborhoods.get(cell)?)))
            .collect();

        let this = &*self;
        let pairs = this.pool.run(tasks, |(own, cluster)| {
            let candidates = this.candidates(cluster);
            let mut found = Vec::new();
            for &x in own {
                let Some(px) = this.vertex(x) else { continue };
                let start = candidates.partition_point(|&c| c <= x);
                for &y in &candidates[start..] {
                    let Some(py) = this.vertex(y) else { continue };
                    if this.metric.distance(px.absolute(), py.absolute()) < this.delta {
                        found.push((x, y));
                    }
                }
            }
            found
        });

        for (x, y) in pairs.into_iter().flatten() {
            self.adjacency.connect(x, y);
        }
        self.adjacency_ready = true;

        info!(
            vertices = self.adjacency.len(),
            edges = self.adjacency.count(),
            delta = self.delta,
            extension = self.extension,
            "adjacency computed"
        );
        &self.adjacency
    }

    /// Enumerate simplices up to `max_dimension`.
    ///
    /// `None` means no limit beyond `vertex_count - 1`. Previously
    /// generated simplices of dimension `>= 1` are discarded first, and
    /// adjacency is computed if it never was. Enumeration also stops as
    /// soon as dimension `k - 1` holds fewer than `k + 1` simplices.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` for a negative `max_dimension`.
    pub fn generate(
        &mut self,
        max_dimension: Option<i32>,
    ) -> Result<&SimplicialComplex, ComplexError> {
        let limit = match max_dimension {
            Some(d) if d < 0 => {
                return Err(ComplexError::InvalidConfiguration {
                    reason: format!("maximum dimension must be >= 0, got {d}"),
                });
            }
            Some(d) => d as usize,
            None => self.complex.vertex_count() - 1,
        };

        if !self.adjacency_ready {
            self.calculate_adjacency();
        }
        self.complex.truncate(1);

        let ids = AtomicU64::new(self.complex.vertex_count() as u64);
        if limit >= 1 {
            let edges = self.edges(&ids);
            info!(dimension = 1, simplices = edges.len(), "simplices generated");
            self.complex.insert(1, edges);
        }

        let mut k = 2;
        while k <= limit {
            let supply = self.complex.simplices(k - 1).len();
            if supply < k + 1 {
                debug!(
                    dimension = k,
                    supply, "too few lower simplices, enumeration finished"
                );
                break;
            }
            let simplices = self.extend(k, &ids);
            info!(dimension = k, simplices = simplices.len(), "simplices generated");
            self.complex.insert(k, simplices);
            k += 1;
        }
        if k > limit {
            debug!(limit, "maximum dimension reached");
        }

        Ok(&self.complex)
    }

    /// Consume the builder, keeping only the complex.
    pub fn into_complex(self) -> SimplicialComplex {
        self.complex
    }

    fn edges(&self, ids: &AtomicU64) -> Vec<Simplex> {
        let tasks: Vec<(&[PointId], &SpatialCluster)> = self
            .by_cell
            .iter()
            .filter_map(|(cell, own)| Some((own.as_slice(), self.neighborhoods.get(cell)?)))
            .collect();

        let found = self.pool.run(tasks, |(own, cluster)| {
            let candidates = self.candidates(cluster);
            let mut out = Vec::new();
            for &x in own {
                let Some(px) = self.vertex(x) else { continue };
                let start = candidates.partition_point(|&c| c <= x);
                for &y in &candidates[start..] {
                    if !self.adjacency.get(x, y) {
                        continue;
                    }
                    let Some(py) = self.vertex(y) else { continue };
                    let id = SimplexId(ids.fetch_add(1, Ordering::Relaxed));
                    out.push(Simplex::edge(id, px, py));
                }
            }
            out
        });
        found.into_iter().flatten().collect()
    }

    fn extend(&self, k: usize, ids: &AtomicU64) -> Vec<Simplex> {
        let lower = self.complex.simplices(k - 1);
        let tasks: Vec<(&[PointId], &SpatialCluster)> = self
            .by_cell
            .iter()
            .filter_map(|(cell, own)| Some((own.as_slice(), self.neighborhoods.get(cell)?)))
            .collect();

        let found = self.pool.run(tasks, |(own, cluster)| {
            let faces: Vec<&Simplex> = lower.iter().filter(|s| s.contained_in(cluster)).collect();
            let mut out = Vec::new();
            for &p in own {
                let Some(point) = self.vertex(p) else { continue };
                for face in &faces {
                    if p < face.lowest_vertex() && self.adjacency.all(p, face.vertices()) {
                        let id = SimplexId(ids.fetch_add(1, Ordering::Relaxed));
                        out.push(face.extend(id, point));
                    }
                }
            }
            out
        });
        found.into_iter().flatten().collect()
    }
}

/// `ceil(delta)` as a cell radius, saturating for huge or infinite
/// thresholds.
fn default_extension(delta: f64) -> u32 {
    let r = delta.ceil();
    if r >= u32::MAX as f64 {
        u32::MAX
    } else {
        r as u32
    }
}

impl fmt::Debug for RipsComplexBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RipsComplexBuilder")
            .field("delta", &self.delta)
            .field("extension", &self.extension)
            .field("vertices", &self.complex.vertex_count())
            .field("cells", &self.by_cell.len())
            .field("pool", &self.pool)
            .finish_non_exhaustive()
    }
}
