//! Distance functions used to decide adjacency.
//!
//! A [`Metric`] measures the distance between two absolute positions of
//! equal length. Three metrics ship with the crate:
//!
//! - [`Euclidean`]: square root of the summed squared differences
//! - [`SquaredEuclidean`]: the same sum without the square root
//! - [`Uniform`]: the largest absolute coordinate difference (Chebyshev)
//!
//! Any `Fn(&[f64], &[f64]) -> f64` can be used through [`MetricFn`].

use std::fmt;
use std::sync::Arc;

/// A distance function on absolute positions.
///
/// Implementations must be symmetric and non-negative. The spatial
/// pruning in the complex builder additionally assumes that two points
/// whose coordinates differ by at least `r >= 1` along some axis are at
/// least `r` apart, which holds for all metrics in this module.
pub trait Metric: Send + Sync {
    /// Distance from `x` to `y`. Both slices have the same length.
    fn distance(&self, x: &[f64], y: &[f64]) -> f64;

    /// Distance from `p` to the origin.
    fn length(&self, p: &[f64]) -> f64 {
        let origin = vec![0.0; p.len()];
        self.distance(p, &origin)
    }
}

impl<M: Metric + ?Sized> Metric for Arc<M> {
    fn distance(&self, x: &[f64], y: &[f64]) -> f64 {
        (**self).distance(x, y)
    }

    fn length(&self, p: &[f64]) -> f64 {
        (**self).length(p)
    }
}

/// The Euclidean metric.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Euclidean;

impl Metric for Euclidean {
    fn distance(&self, x: &[f64], y: &[f64]) -> f64 {
        SquaredEuclidean.distance(x, y).sqrt()
    }

    fn length(&self, p: &[f64]) -> f64 {
        p.iter().map(|v| v * v).sum::<f64>().sqrt()
    }
}

/// Squared Euclidean distance. Avoids the square root, so thresholds
/// must be given squared as well (`delta = 2.4^2 = 5.76`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SquaredEuclidean;

impl Metric for SquaredEuclidean {
    fn distance(&self, x: &[f64], y: &[f64]) -> f64 {
        x.iter()
            .zip(y)
            .map(|(a, b)| {
                let d = a - b;
                d * d
            })
            .sum()
    }

    fn length(&self, p: &[f64]) -> f64 {
        p.iter().map(|v| v * v).sum()
    }
}

/// The uniform (maximum, Chebyshev) metric.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Uniform;

impl Metric for Uniform {
    fn distance(&self, x: &[f64], y: &[f64]) -> f64 {
        x.iter()
            .zip(y)
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }

    fn length(&self, p: &[f64]) -> f64 {
        p.iter().map(|v| v.abs()).fold(0.0, f64::max)
    }
}

/// Adapter turning a closure into a [`Metric`].
///
/// ```
/// use rips_core::{Metric, MetricFn};
///
/// let taxicab = MetricFn(|x: &[f64], y: &[f64]| {
///     x.iter().zip(y).map(|(a, b)| (a - b).abs()).sum::<f64>()
/// });
/// assert_eq!(taxicab.distance(&[0.0, 0.0], &[1.0, 2.0]), 3.0);
/// ```
#[derive(Clone, Copy)]
pub struct MetricFn<F>(pub F);

impl<F> Metric for MetricFn<F>
where
    F: Fn(&[f64], &[f64]) -> f64 + Send + Sync,
{
    fn distance(&self, x: &[f64], y: &[f64]) -> f64 {
        (self.0)(x, y)
    }
}

impl<F> fmt::Debug for MetricFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MetricFn(..)")
    }
}
