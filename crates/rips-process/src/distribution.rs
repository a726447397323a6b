//! Count and position distributions for per-cell sampling.
//!
//! Both distributions are validated at construction and sample from a
//! caller-supplied [`ChaCha8Rng`], so the generator controls seeding.

use crate::error::ProcessError;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Beta, Distribution, Poisson};
use rips_core::Position;

/// Largest `f64` strictly below 1.
const BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

/// Distribution of the number of points in a cell.
#[derive(Clone, Debug)]
pub enum CountDistribution {
    /// Poisson-distributed count with the given mean.
    Poisson {
        /// Mean number of points per cell.
        intensity: f64,
        /// The validated sampler.
        sampler: Poisson<f64>,
    },
    /// Always the same count.
    Fixed(usize),
}

impl CountDistribution {
    /// Poisson counts with mean `intensity`.
    ///
    /// An intensity of exactly zero yields `Fixed(0)`. Negative, NaN or
    /// infinite intensities are rejected.
    pub fn poisson(intensity: f64) -> Result<Self, ProcessError> {
        if intensity == 0.0 {
            return Ok(Self::Fixed(0));
        }
        if !intensity.is_finite() || intensity < 0.0 {
            return Err(ProcessError::InvalidDistribution {
                reason: format!("intensity must be finite and >= 0, got {intensity}"),
            });
        }
        let sampler = Poisson::new(intensity).map_err(|e| ProcessError::InvalidDistribution {
            reason: format!("poisson({intensity}): {e}"),
        })?;
        Ok(Self::Poisson { intensity, sampler })
    }

    /// Exactly `n` points per cell.
    pub fn fixed(n: usize) -> Self {
        Self::Fixed(n)
    }

    /// Expected number of points per cell.
    pub fn mean(&self) -> f64 {
        match self {
            Self::Poisson { intensity, .. } => *intensity,
            Self::Fixed(n) => *n as f64,
        }
    }

    /// Draw a count.
    pub fn sample(&self, rng: &mut ChaCha8Rng) -> usize {
        match self {
            Self::Poisson { sampler, .. } => sampler.sample(rng) as usize,
            Self::Fixed(n) => *n,
        }
    }
}

/// Distribution of a point's cell-relative coordinates.
///
/// Every coordinate is drawn independently and lies in `[0, 1)`, so a
/// sampled point always falls inside its cell.
#[derive(Clone, Debug, Default)]
pub enum PositionDistribution {
    /// Uniform on `[0, 1)` per coordinate.
    #[default]
    Uniform,
    /// Beta(`alpha`, `beta`) per coordinate; concentrates points toward
    /// the cell center (`alpha = beta > 1`) or its faces (`< 1`).
    Beta {
        /// First shape parameter.
        alpha: f64,
        /// Second shape parameter.
        beta: f64,
        /// The validated sampler.
        sampler: Beta<f64>,
    },
}

impl PositionDistribution {
    /// Uniform coordinates.
    pub fn uniform() -> Self {
        Self::Uniform
    }

    /// Beta-distributed coordinates. Both shape parameters must be
    /// finite and positive.
    pub fn beta(alpha: f64, beta: f64) -> Result<Self, ProcessError> {
        let sampler = Beta::new(alpha, beta).map_err(|e| ProcessError::InvalidDistribution {
            reason: format!("beta({alpha}, {beta}): {e}"),
        })?;
        Ok(Self::Beta {
            alpha,
            beta,
            sampler,
        })
    }

    /// Draw `dimension` independent coordinates in `[0, 1)`.
    pub fn sample(&self, rng: &mut ChaCha8Rng, dimension: usize) -> Position {
        (0..dimension)
            .map(|_| match self {
                Self::Uniform => rng.random::<f64>(),
                Self::Beta { sampler, .. } => sampler.sample(rng).min(BELOW_ONE),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn poisson_rejects_bad_intensity() {
        assert!(CountDistribution::poisson(-1.0).is_err());
        assert!(CountDistribution::poisson(f64::NAN).is_err());
        assert!(CountDistribution::poisson(f64::INFINITY).is_err());
    }

    #[test]
    fn zero_intensity_is_empty() {
        let d = CountDistribution::poisson(0.0).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(d.sample(&mut rng), 0);
        assert_eq!(d.mean(), 0.0);
    }

    #[test]
    fn poisson_mean_is_close() {
        let d = CountDistribution::poisson(4.0).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let n = 20_000;
        let total: usize = (0..n).map(|_| d.sample(&mut rng)).sum();
        let mean = total as f64 / n as f64;
        assert!((mean - 4.0).abs() < 0.1, "sample mean {mean} far from 4");
    }

    #[test]
    fn positions_stay_in_unit_cube() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for dist in [
            PositionDistribution::uniform(),
            PositionDistribution::beta(0.2, 0.2).unwrap(),
            PositionDistribution::beta(5.0, 5.0).unwrap(),
        ] {
            for _ in 0..1_000 {
                let p = dist.sample(&mut rng, 3);
                assert_eq!(p.len(), 3);
                assert!(p.iter().all(|&x| (0.0..1.0).contains(&x)), "{p:?}");
            }
        }
    }

    #[test]
    fn beta_rejects_bad_shape() {
        assert!(PositionDistribution::beta(0.0, 1.0).is_err());
        assert!(PositionDistribution::beta(1.0, -2.0).is_err());
    }
}
