//! Reusable point-set scenarios.
//!
//! - The seven-point scenario: seven points on the box `[1,7) x [1,7)`.
//!   With the squared Euclidean metric and `delta = 5.76` its complex
//!   has f-vector `{0: 7, 1: 12, 2: 6, 3: 1}`; with `delta = 100` it is
//!   the full 6-simplex.
//! - The grid scenario: nine points at `(-0.5 | 0 | 0.5)^2` on the box
//!   `[-1,1) x [-1,1)`, used for connectivity tests.

use rips_core::PointId;
use rips_lattice::{LatticeIndex, Point};

/// Coordinates of the seven-point scenario, by point id.
pub const SEVEN_POINTS: [[f64; 2]; 7] = [
    [3.0, 3.0],
    [2.0, 5.0],
    [4.0, 5.0],
    [6.0, 2.0],
    [4.0, 2.0],
    [5.2, 2.8],
    [5.5, 3.5],
];

/// Coordinates of the 3x3 grid, by point id (row-major, `y` slowest).
pub const GRID_POINTS: [[f64; 2]; 9] = [
    [-0.5, -0.5],
    [0.0, -0.5],
    [0.5, -0.5],
    [-0.5, 0.0],
    [0.0, 0.0],
    [0.5, 0.0],
    [-0.5, 0.5],
    [0.0, 0.5],
    [0.5, 0.5],
];

/// Place points at `coords` with ids `0..n` on `lattice`.
///
/// Panics if a coordinate lies outside the lattice's box.
pub fn points_at(lattice: &LatticeIndex, coords: &[[f64; 2]]) -> Vec<Point> {
    coords
        .iter()
        .enumerate()
        .map(|(i, at)| {
            Point::locate(PointId(i as u32), at, lattice)
                .unwrap_or_else(|e| panic!("fixture point {i} at {at:?}: {e}"))
        })
        .collect()
}

/// The box `[1,7) x [1,7)`.
pub fn seven_point_lattice() -> LatticeIndex {
    LatticeIndex::build(vec![1..7, 1..7]).expect("valid fixture box")
}

/// The seven scenario points on `lattice`.
pub fn seven_points(lattice: &LatticeIndex) -> Vec<Point> {
    points_at(lattice, &SEVEN_POINTS)
}

/// The box `[-1,1) x [-1,1)`.
pub fn grid_lattice() -> LatticeIndex {
    LatticeIndex::build(vec![-1..1, -1..1]).expect("valid fixture box")
}

/// The nine grid points on `lattice`.
pub fn grid_points(lattice: &LatticeIndex) -> Vec<Point> {
    points_at(lattice, &GRID_POINTS)
}

/// Every pair `(x, y)` with `x < y < n`.
pub fn complete_edges(n: u32) -> Vec<(PointId, PointId)> {
    (0..n)
        .flat_map(|x| (x + 1..n).map(move |y| (PointId(x), PointId(y))))
        .collect()
}

/// `n` choose `k`.
pub fn binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_place_every_point() {
        let lattice = seven_point_lattice();
        assert_eq!(seven_points(&lattice).len(), 7);
        let grid = grid_lattice();
        let pts = grid_points(&grid);
        assert_eq!(pts.len(), 9);
        assert_eq!(pts[8].absolute(), &[0.5, 0.5]);
    }

    #[test]
    fn binomials() {
        assert_eq!(binomial(7, 0), 1);
        assert_eq!(binomial(7, 3), 35);
        assert_eq!(binomial(7, 7), 1);
        assert_eq!(binomial(3, 5), 0);
        assert_eq!(complete_edges(7).len() as u64, binomial(7, 2));
    }
}
