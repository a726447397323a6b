use std::collections::BTreeSet;
use std::sync::Arc;

use rips::complex::ComplexError;
use rips::prelude::*;
use rips::{ConfigError, PipelineError};

fn identifiers(complex: &SimplicialComplex) -> BTreeSet<String> {
    complex.iter().map(Simplex::identifier).collect()
}

#[test]
fn default_run_covers_every_vertex_once() {
    let output = Pipeline::run(&RipsConfig::default()).unwrap();
    assert_eq!(output.lattice.cell_count(), 16);
    assert_eq!(
        output.complex.vertex_count(),
        output.generation.accepted().len()
    );

    let mut seen = BTreeSet::new();
    for component in &output.components {
        for &v in component.vertices() {
            assert!(seen.insert(v), "vertex {v} in two components");
        }
    }
    assert_eq!(seen.len(), output.complex.vertex_count());
    assert_eq!(output.adjacency.count(), output.complex.simplices(1).len());
}

#[test]
fn same_seed_same_output() {
    let config = RipsConfig {
        seed: 314,
        intensity: 3.0,
        delta: 0.7,
        workers: Some(4),
        ..Default::default()
    };
    let a = Pipeline::run(&config).unwrap();
    let b = Pipeline::run(&RipsConfig {
        workers: Some(1),
        ..config.clone()
    })
    .unwrap();
    assert_eq!(a.generation, b.generation);
    assert_eq!(a.complex.f_vector(), b.complex.f_vector());
    assert_eq!(identifiers(&a.complex), identifiers(&b.complex));
    assert_eq!(a.adjacency, b.adjacency);
    assert_eq!(a.components, b.components);
}

#[test]
fn filter_restricts_vertices() {
    let region = BoundingBox::new([0.0, 0.0][..].into(), [2.0, 4.0][..].into()).unwrap();
    let config = RipsConfig {
        seed: 5,
        filter: Arc::new(RegionFilter::new(region.clone())),
        ..Default::default()
    };
    let output = Pipeline::run(&config).unwrap();
    assert!(output
        .complex
        .vertices()
        .values()
        .all(|p| region.contains(p.absolute())));
    assert_eq!(
        output.generation.accepted().len() + output.generation.rejected().len(),
        output.generation.all().len()
    );
}

#[test]
fn dimension_limit_is_honoured() {
    let config = RipsConfig {
        delta: 2.0,
        intensity: 3.0,
        max_dimension: Some(1),
        ..Default::default()
    };
    let output = Pipeline::run(&config).unwrap();
    assert!(output.complex.max_dimension() <= 1);
}

#[test]
fn invalid_config_fails_before_work() {
    let config = RipsConfig {
        max_dimension: Some(-1),
        ..Default::default()
    };
    assert_eq!(
        Pipeline::run(&config).unwrap_err(),
        PipelineError::Config(ConfigError::NegativeMaxDimension { value: -1 })
    );
}

#[test]
fn rejecting_everything_leaves_no_vertices() {
    let config = RipsConfig {
        filter: Arc::new(RejectAll),
        ..Default::default()
    };
    assert_eq!(
        Pipeline::run(&config).unwrap_err(),
        PipelineError::Complex(ComplexError::EmptyVertexSet)
    );
}

#[test]
fn squared_metric_with_extension() {
    let config = RipsConfig {
        metric: Arc::new(SquaredEuclidean),
        delta: 0.49,
        cluster_extension: Some(1),
        seed: 8,
        ..Default::default()
    };
    let squared = Pipeline::run(&config).unwrap();
    let plain = Pipeline::run(&RipsConfig {
        metric: Arc::new(Euclidean),
        delta: 0.7,
        cluster_extension: None,
        ..config
    })
    .unwrap();
    assert_eq!(squared.adjacency.count(), plain.adjacency.count());
    assert_eq!(squared.components.len(), plain.components.len());
}
