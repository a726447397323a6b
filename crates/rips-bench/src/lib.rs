//! Benchmark profiles for the rips crates.
//!
//! - [`reference_lattice`]: 20x20 box (400 cells)
//! - [`stress_lattice`]: 60x60 box (3600 cells)
//! - [`sample_points`]: seeded Poisson cloud on a lattice

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rips_core::WorkerPool;
use rips_lattice::{LatticeIndex, Point};
use rips_process::{PointGenerator, ProcessError};

/// The 20x20 reference box.
pub fn reference_lattice() -> LatticeIndex {
    square(20)
}

/// The 60x60 stress box.
pub fn stress_lattice() -> LatticeIndex {
    square(60)
}

fn square(side: i32) -> LatticeIndex {
    match LatticeIndex::build(vec![0..side, 0..side]) {
        Ok(lattice) => lattice,
        Err(e) => panic!("benchmark box {side}x{side}: {e}"),
    }
}

/// Accepted points of a Poisson cloud with `intensity` points per cell.
pub fn sample_points(
    lattice: &LatticeIndex,
    intensity: f64,
    seed: u64,
    pool: WorkerPool,
) -> Result<Vec<Point>, ProcessError> {
    let result = PointGenerator::simple(lattice, intensity)?
        .seed(seed)
        .pool(pool)
        .generate()?;
    Ok(result.accepted_points())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_have_expected_size() {
        assert_eq!(reference_lattice().cell_count(), 400);
        assert_eq!(stress_lattice().cell_count(), 3600);
    }

    #[test]
    fn sampling_is_seeded() {
        let lattice = reference_lattice();
        let a = sample_points(&lattice, 2.0, 1, WorkerPool::new(2)).unwrap();
        let b = sample_points(&lattice, 2.0, 1, WorkerPool::serial()).unwrap();
        assert_eq!(a, b);
    }
}
