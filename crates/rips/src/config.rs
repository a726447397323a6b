//! Run configuration and its validation.
//!
//! [`RipsConfig`] collects every parameter of a [`Pipeline`](crate::Pipeline)
//! run. [`validate()`](RipsConfig::validate) rejects malformed values
//! before any work starts.

use std::error::Error;
use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use rips_core::{Euclidean, Metric, WorkerPool};
use rips_process::{AcceptAll, PointFilter, PositionDistribution};

/// Parameters of a full lattice-to-components run.
#[derive(Clone)]
pub struct RipsConfig {
    /// Half-open integer interval per axis of the box. Default: `[0,4) x [0,4)`.
    pub ranges: Vec<Range<i32>>,
    /// Mean number of points per cell (Poisson). Default: 2.
    pub intensity: f64,
    /// Distribution of cell-relative coordinates. Default: uniform.
    pub position: PositionDistribution,
    /// Acceptance filter. Default: accept all.
    pub filter: Arc<dyn PointFilter>,
    /// Distance function. Default: Euclidean.
    pub metric: Arc<dyn Metric>,
    /// Adjacency threshold; points closer than this are connected. Default: 1.
    pub delta: f64,
    /// Highest simplex dimension to enumerate. `None` = no limit.
    pub max_dimension: Option<i32>,
    /// Neighborhood radius in cells. `None` = `ceil(delta)`.
    pub cluster_extension: Option<u32>,
    /// Seed for the point process. Default: 0.
    pub seed: u64,
    /// Worker threads. `None` = available parallelism.
    pub workers: Option<usize>,
}

impl Default for RipsConfig {
    fn default() -> Self {
        Self {
            ranges: vec![0..4, 0..4],
            intensity: 2.0,
            position: PositionDistribution::Uniform,
            filter: Arc::new(AcceptAll),
            metric: Arc::new(Euclidean),
            delta: 1.0,
            max_dimension: None,
            cluster_extension: None,
            seed: 0,
            workers: None,
        }
    }
}

impl RipsConfig {
    /// Check every parameter.
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ranges.is_empty() {
            return Err(ConfigError::NoAxes);
        }
        for (axis, r) in self.ranges.iter().enumerate() {
            if r.end <= r.start {
                return Err(ConfigError::EmptyRange {
                    axis,
                    lo: r.start,
                    hi: r.end,
                });
            }
        }
        if !self.intensity.is_finite() || self.intensity < 0.0 {
            return Err(ConfigError::InvalidIntensity {
                value: self.intensity,
            });
        }
        if self.delta.is_nan() || self.delta < 0.0 {
            return Err(ConfigError::InvalidDelta { value: self.delta });
        }
        if let Some(d) = self.max_dimension {
            if d < 0 {
                return Err(ConfigError::NegativeMaxDimension { value: d });
            }
        }
        Ok(())
    }

    /// The worker pool described by `workers`.
    pub fn pool(&self) -> WorkerPool {
        WorkerPool::from_option(self.workers)
    }
}

impl fmt::Debug for RipsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RipsConfig")
            .field("ranges", &self.ranges)
            .field("intensity", &self.intensity)
            .field("position", &self.position)
            .field("filter", &self.filter)
            .field("delta", &self.delta)
            .field("max_dimension", &self.max_dimension)
            .field("cluster_extension", &self.cluster_extension)
            .field("seed", &self.seed)
            .field("workers", &self.workers)
            .finish_non_exhaustive()
    }
}

/// Errors detected during [`RipsConfig::validate()`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// No axis ranges given.
    NoAxes,
    /// An axis range is empty.
    EmptyRange {
        /// Axis index.
        axis: usize,
        /// Inclusive lower bound.
        lo: i32,
        /// Exclusive upper bound.
        hi: i32,
    },
    /// Intensity is negative, NaN or infinite.
    InvalidIntensity {
        /// The invalid value.
        value: f64,
    },
    /// Delta is negative or NaN.
    InvalidDelta {
        /// The invalid value.
        value: f64,
    },
    /// Maximum dimension is negative.
    NegativeMaxDimension {
        /// The invalid value.
        value: i32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAxes => write!(f, "at least one axis range is required"),
            Self::EmptyRange { axis, lo, hi } => {
                write!(f, "range [{lo}, {hi}) on axis {axis} is empty")
            }
            Self::InvalidIntensity { value } => {
                write!(f, "intensity must be finite and >= 0, got {value}")
            }
            Self::InvalidDelta { value } => write!(f, "delta must be >= 0, got {value}"),
            Self::NegativeMaxDimension { value } => {
                write!(f, "max_dimension must be >= 0, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}
