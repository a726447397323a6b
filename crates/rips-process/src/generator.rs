//! Parallel per-cell point generation.
//!
//! Generation runs in two phases. The sequential phase walks the cells in
//! canonical order, seeds each cell's ChaCha8 stream, draws its point
//! count and reserves a contiguous id range. The parallel phase hands one
//! task per cell to the [`WorkerPool`]; each task samples positions,
//! builds its points and runs the filter into cell-local buffers. After
//! every worker has joined, the buffers are merged in cell order.

use crate::assign::Assigner;
use crate::distribution::{CountDistribution, PositionDistribution};
use crate::error::ProcessError;
use crate::filter::{AcceptAll, PointFilter};
use indexmap::IndexMap;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rips_core::{CellId, PointId, WorkerPool};
use rips_lattice::{Cell, LatticeError, LatticeIndex, Point};
use std::sync::Arc;
use tracing::{debug, info, trace};

/// Samples a point cloud over every cell of a lattice.
///
/// Constructed with [`PointGenerator::new`] or [`PointGenerator::simple`]
/// and tuned with the chained setters.
///
/// ```
/// use rips_lattice::LatticeIndex;
/// use rips_process::PointGenerator;
///
/// let lattice = LatticeIndex::build(vec![0..3, 0..3]).unwrap();
/// let result = PointGenerator::simple(&lattice, 2.0)
///     .unwrap()
///     .seed(42)
///     .generate()
///     .unwrap();
/// assert_eq!(result.all().len(), result.accepted().len());
/// assert!(result.rejected().is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct PointGenerator<'a> {
    lattice: &'a LatticeIndex,
    counts: Assigner<CountDistribution>,
    positions: Assigner<PositionDistribution>,
    filters: Assigner<Arc<dyn PointFilter>>,
    seed: u64,
    pool: WorkerPool,
}

impl<'a> PointGenerator<'a> {
    /// A generator with uniform positions and an accept-all filter.
    /// Seed defaults to 0 and the pool to the available parallelism.
    pub fn new(lattice: &'a LatticeIndex, counts: Assigner<CountDistribution>) -> Self {
        Self {
            lattice,
            counts,
            positions: Assigner::constant(PositionDistribution::Uniform),
            filters: Assigner::constant(Arc::new(AcceptAll) as Arc<dyn PointFilter>),
            seed: 0,
            pool: WorkerPool::auto(),
        }
    }

    /// Poisson counts with the same `intensity` in every cell, uniform
    /// positions, no filtering.
    pub fn simple(lattice: &'a LatticeIndex, intensity: f64) -> Result<Self, ProcessError> {
        let counts = CountDistribution::poisson(intensity)?;
        Ok(Self::new(lattice, Assigner::constant(counts)))
    }

    /// Set the position distribution assignment.
    pub fn positions(mut self, positions: Assigner<PositionDistribution>) -> Self {
        self.positions = positions;
        self
    }

    /// Set the filter assignment.
    pub fn filters(mut self, filters: Assigner<Arc<dyn PointFilter>>) -> Self {
        self.filters = filters;
        self
    }

    /// Use the same filter for every cell.
    pub fn filter<F: PointFilter + 'static>(self, filter: F) -> Self {
        self.filters(Assigner::constant(Arc::new(filter) as Arc<dyn PointFilter>))
    }

    /// Set the run seed (default: 0).
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the worker pool.
    pub fn pool(mut self, pool: WorkerPool) -> Self {
        self.pool = pool;
        self
    }

    /// The lattice points are generated on.
    pub fn lattice(&self) -> &'a LatticeIndex {
        self.lattice
    }

    /// Sample every cell and merge the results.
    ///
    /// # Errors
    ///
    /// Returns `Err(ProcessError::TooManyPoints)` if the total count
    /// does not fit the `u32` id space.
    pub fn generate(&self) -> Result<GenerationResult, ProcessError> {
        let mut tasks = Vec::with_capacity(self.lattice.cell_count());
        let mut next_id: u64 = 0;

        for cell in self.lattice.cells() {
            let mut rng = cell_rng(self.seed, cell.id());
            let count = self.counts.assign(cell).sample(&mut rng);
            let first_id = next_id;
            next_id = first_id
                .checked_add(count as u64)
                .filter(|&n| n <= u64::from(u32::MAX))
                .ok_or(ProcessError::TooManyPoints {
                    requested: first_id.saturating_add(count as u64),
                })?;

            debug!(
                cell = %cell.id(),
                base = ?cell.base().as_slice(),
                count,
                first_id,
                "cell sampling scheduled"
            );
            tasks.push(CellTask {
                cell,
                first_id: first_id as u32,
                count,
                rng,
                position: self.positions.assign(cell),
                filter: self.filters.assign(cell),
            });
        }

        let samples = self.pool.run(tasks, CellTask::run);

        let mut result = GenerationResult::default();
        for sample in samples {
            let sample = sample?;
            result.cells.push(sample.summary);
            for (point, accepted) in sample.points {
                if accepted {
                    result.accepted.insert(point.id(), point.clone());
                } else {
                    result.rejected.insert(point.id(), point.clone());
                }
                result.all.insert(point.id(), point);
            }
        }

        info!(
            all = result.all.len(),
            accepted = result.accepted.len(),
            rejected = result.rejected.len(),
            "point generation completed"
        );
        Ok(result)
    }
}

/// The stream for `cell` under `seed`: one ChaCha8 stream per cell.
fn cell_rng(seed: u64, cell: CellId) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(u64::from(cell.0));
    rng
}

/// Work unit for one cell.
struct CellTask<'a> {
    cell: &'a Cell,
    first_id: u32,
    count: usize,
    rng: ChaCha8Rng,
    position: PositionDistribution,
    filter: Arc<dyn PointFilter>,
}

/// Output of one cell: points in id order with their filter verdicts.
struct CellSample {
    summary: CellSummary,
    points: Vec<(Point, bool)>,
}

impl CellTask<'_> {
    fn run(mut self) -> Result<CellSample, LatticeError> {
        let dim = self.cell.dimension();
        let mut points = Vec::with_capacity(self.count);
        for offset in 0..self.count {
            let uniform = self.position.sample(&mut self.rng, dim);
            let point = Point::new(PointId(self.first_id + offset as u32), uniform, self.cell)?;
            trace!(point = %point.id(), absolute = ?point.absolute(), "point sampled");
            points.push(point);
        }

        let points: Vec<(Point, bool)> = points
            .into_iter()
            .map(|p| {
                let accepted = self.filter.evaluate(&p);
                (p, accepted)
            })
            .collect();
        let accepted = points.iter().filter(|(_, a)| *a).count();

        debug!(
            cell = %self.cell.id(),
            accepted,
            rejected = points.len() - accepted,
            "cell sampling completed"
        );
        Ok(CellSample {
            summary: CellSummary {
                cell: self.cell.id(),
                first_id: PointId(self.first_id),
                count: self.count,
                accepted,
            },
            points,
        })
    }
}

/// Per-cell bookkeeping of a generation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellSummary {
    /// The sampled cell.
    pub cell: CellId,
    /// Id of the cell's first point (meaningless when `count == 0`).
    pub first_id: PointId,
    /// Number of points drawn.
    pub count: usize,
    /// Number of those accepted by the filter.
    pub accepted: usize,
}

/// The merged output of [`PointGenerator::generate`].
///
/// All maps are ordered by point id. `accepted` and `rejected` partition
/// `all`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GenerationResult {
    all: IndexMap<PointId, Point>,
    accepted: IndexMap<PointId, Point>,
    rejected: IndexMap<PointId, Point>,
    cells: Vec<CellSummary>,
}

impl GenerationResult {
    /// Every sampled point.
    pub fn all(&self) -> &IndexMap<PointId, Point> {
        &self.all
    }

    /// Points the filter accepted.
    pub fn accepted(&self) -> &IndexMap<PointId, Point> {
        &self.accepted
    }

    /// Points the filter rejected.
    pub fn rejected(&self) -> &IndexMap<PointId, Point> {
        &self.rejected
    }

    /// Per-cell summaries in canonical cell order.
    pub fn cells(&self) -> &[CellSummary] {
        &self.cells
    }

    /// The accepted points as a vertex list, in id order.
    pub fn accepted_points(&self) -> Vec<Point> {
        self.accepted.values().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{FnFilter, RejectAll};

    fn lattice() -> LatticeIndex {
        LatticeIndex::build(vec![0..4, -2..2]).unwrap()
    }

    #[test]
    fn fixed_counts_fill_every_cell() {
        let lattice = lattice();
        let result = PointGenerator::new(&lattice, Assigner::constant(CountDistribution::fixed(3)))
            .generate()
            .unwrap();
        assert_eq!(result.all().len(), 48);
        assert_eq!(result.cells().len(), 16);
        assert!(result.cells().iter().all(|s| s.count == 3 && s.accepted == 3));
    }

    #[test]
    fn oversized_cell_count_is_too_many_points() {
        let lattice = LatticeIndex::build(vec![0..2]).unwrap();
        let counts = Assigner::per_cell(|cell: &Cell| {
            if cell.base()[0] == 0 {
                CountDistribution::fixed(5)
            } else {
                CountDistribution::fixed(usize::MAX)
            }
        });
        let err = PointGenerator::new(&lattice, counts).generate().unwrap_err();
        assert_eq!(
            err,
            ProcessError::TooManyPoints {
                requested: 5u64.saturating_add(usize::MAX as u64)
            }
        );
    }

    #[test]
    fn ids_are_sequential_in_cell_order() {
        let lattice = lattice();
        let result = PointGenerator::simple(&lattice, 3.0)
            .unwrap()
            .seed(9)
            .pool(WorkerPool::new(4))
            .generate()
            .unwrap();

        let ids: Vec<u32> = result.all().keys().map(|id| id.0).collect();
        let expected: Vec<u32> = (0..ids.len() as u32).collect();
        assert_eq!(ids, expected);

        let mut last_cell = None;
        for point in result.all().values() {
            assert!(last_cell <= Some(point.cell()), "ids must follow cell order");
            last_cell = Some(point.cell());
            let cell = lattice.cell(point.cell()).unwrap();
            assert!(cell.contains(point.absolute()));
            assert_eq!(lattice.cell_at(point.absolute()), Some(cell));
        }
    }

    #[test]
    fn reject_all_moves_everything_to_rejected() {
        let lattice = lattice();
        let result = PointGenerator::new(&lattice, Assigner::constant(CountDistribution::fixed(2)))
            .filter(RejectAll)
            .generate()
            .unwrap();
        assert!(result.accepted().is_empty());
        assert_eq!(result.rejected().len(), 32);
        assert!(result.accepted_points().is_empty());
    }

    #[test]
    fn accepted_and_rejected_partition_all() {
        let lattice = lattice();
        let result = PointGenerator::simple(&lattice, 5.0)
            .unwrap()
            .seed(77)
            .filter(FnFilter(|p: &Point| p.absolute()[0] < 2.0))
            .generate()
            .unwrap();
        assert_eq!(
            result.accepted().len() + result.rejected().len(),
            result.all().len()
        );
        assert!(result.accepted().values().all(|p| p.absolute()[0] < 2.0));
        assert!(result.rejected().values().all(|p| p.absolute()[0] >= 2.0));
        assert!(result
            .accepted()
            .keys()
            .all(|id| !result.rejected().contains_key(id)));
    }

    #[test]
    fn per_cell_counts() {
        let lattice = lattice();
        let counts = Assigner::per_cell(|cell: &Cell| {
            CountDistribution::fixed(if cell.base().as_slice() == [0, 0] { 5 } else { 0 })
        });
        let result = PointGenerator::new(&lattice, counts).generate().unwrap();
        assert_eq!(result.all().len(), 5);
        let owner = lattice.cell_by_base(&[0, 0]).unwrap().id();
        assert!(result.all().values().all(|p| p.cell() == owner));
    }

    #[test]
    fn worker_count_does_not_change_output() {
        let lattice = lattice();
        let run = |workers| {
            PointGenerator::simple(&lattice, 4.0)
                .unwrap()
                .seed(2024)
                .pool(WorkerPool::new(workers))
                .generate()
                .unwrap()
        };
        assert_eq!(run(1), run(8));
    }

    #[test]
    fn different_seeds_differ() {
        let lattice = lattice();
        let run = |seed| {
            PointGenerator::simple(&lattice, 4.0)
                .unwrap()
                .seed(seed)
                .generate()
                .unwrap()
        };
        assert_ne!(run(1), run(2));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn every_point_lies_in_its_cell(seed in any::<u64>(), shape in 0.3f64..4.0) {
                let lattice = LatticeIndex::build(vec![-1..2, 0..2]).unwrap();
                let positions = PositionDistribution::beta(shape, shape).unwrap();
                let result = PointGenerator::simple(&lattice, 2.0)
                    .unwrap()
                    .positions(Assigner::constant(positions))
                    .seed(seed)
                    .pool(WorkerPool::new(3))
                    .generate()
                    .unwrap();
                let total: usize = result.cells().iter().map(|s| s.count).sum();
                prop_assert_eq!(total, result.all().len());
                for point in result.all().values() {
                    let cell = lattice.cell(point.cell()).unwrap();
                    prop_assert!(cell.contains(point.absolute()));
                }
            }
        }
    }
}
