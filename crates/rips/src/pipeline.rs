//! One-call runs: lattice, point process, complex, components.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use rips_complex::{
    AdjacencyMatrix, ComplexError, ConnectivityAnalyzer, GraphComponent, RipsComplexBuilder,
    SimplicialComplex,
};
use rips_lattice::{LatticeError, LatticeIndex};
use rips_process::{Assigner, GenerationResult, PointGenerator, ProcessError};
use tracing::info;

use crate::config::{ConfigError, RipsConfig};

/// Everything a run produces.
#[derive(Clone, Debug)]
pub struct RipsOutput {
    /// The lattice over the configured box.
    pub lattice: LatticeIndex,
    /// All, accepted and rejected points.
    pub generation: GenerationResult,
    /// The complex on the accepted points.
    pub complex: SimplicialComplex,
    /// Adjacency of the accepted points.
    pub adjacency: AdjacencyMatrix,
    /// Connected components of the adjacency graph.
    pub components: Vec<GraphComponent>,
}

/// Runs the whole construction from a [`RipsConfig`].
///
/// ```
/// use rips::{Pipeline, RipsConfig};
///
/// let config = RipsConfig { seed: 7, max_dimension: Some(2), ..Default::default() };
/// let output = Pipeline::run(&config).unwrap();
/// let vertices = output.complex.vertex_count();
/// assert_eq!(vertices, output.generation.accepted().len());
/// let covered: usize = output.components.iter().map(|c| c.len()).sum();
/// assert_eq!(covered, vertices);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Pipeline;

impl Pipeline {
    /// Validate `config`, then build the lattice, sample the points,
    /// enumerate the complex on the accepted points and split it into
    /// connected components.
    ///
    /// # Errors
    ///
    /// Configuration errors are reported before any work. A run whose
    /// filter rejects every point fails with
    /// `ComplexError::EmptyVertexSet`.
    pub fn run(config: &RipsConfig) -> Result<RipsOutput, PipelineError> {
        config.validate()?;
        let pool = config.pool();
        let lattice = LatticeIndex::build(config.ranges.clone())?;
        info!(
            dimension = lattice.dimension(),
            cells = lattice.cell_count(),
            workers = pool.workers(),
            "pipeline started"
        );

        let generation = PointGenerator::simple(&lattice, config.intensity)?
            .positions(Assigner::constant(config.position.clone()))
            .filters(Assigner::constant(Arc::clone(&config.filter)))
            .seed(config.seed)
            .pool(pool)
            .generate()?;

        let mut builder = RipsComplexBuilder::new(
            &lattice,
            generation.accepted_points(),
            Arc::clone(&config.metric),
            config.delta,
        )?
        .pool(pool);
        if let Some(extension) = config.cluster_extension {
            builder = builder.cluster_extension(extension);
        }
        builder.generate(config.max_dimension)?;
        let (complex, adjacency) = builder.into_parts();

        let mut analyzer =
            ConnectivityAnalyzer::new(complex.vertices().keys().copied(), &adjacency);
        let components = analyzer.calculate_connected_components().to_vec();

        info!(
            vertices = complex.vertex_count(),
            simplices = complex.len(),
            max_dimension = complex.max_dimension(),
            components = components.len(),
            "pipeline finished"
        );
        Ok(RipsOutput {
            lattice,
            generation,
            complex,
            adjacency,
            components,
        })
    }
}

/// Errors from [`Pipeline::run`].
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineError {
    /// The configuration is invalid.
    Config(ConfigError),
    /// The lattice could not be built.
    Lattice(LatticeError),
    /// Point generation failed.
    Process(ProcessError),
    /// Complex construction failed.
    Complex(ComplexError),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Lattice(e) => write!(f, "lattice: {e}"),
            Self::Process(e) => write!(f, "process: {e}"),
            Self::Complex(e) => write!(f, "complex: {e}"),
        }
    }
}

impl Error for PipelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Lattice(e) => Some(e),
            Self::Process(e) => Some(e),
            Self::Complex(e) => Some(e),
        }
    }
}

impl From<ConfigError> for PipelineError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<LatticeError> for PipelineError {
    fn from(e: LatticeError) -> Self {
        Self::Lattice(e)
    }
}

impl From<ProcessError> for PipelineError {
    fn from(e: ProcessError) -> Self {
        Self::Process(e)
    }
}

impl From<ComplexError> for PipelineError {
    fn from(e: ComplexError) -> Self {
        Self::Complex(e)
    }
}
