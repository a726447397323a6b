use rips_complex::{AdjacencyMatrix, ConnectivityAnalyzer, RipsComplexBuilder};
use rips_core::{ComponentId, Euclidean, PointId};
use rips_test_utils::{complete_edges, grid_lattice, grid_points};

fn grid_adjacency(edges: &[(u32, u32)]) -> AdjacencyMatrix {
    let mut adj = AdjacencyMatrix::new((0..9).map(PointId));
    for &(x, y) in edges {
        adj.connect(PointId(x), PointId(y));
    }
    adj
}

fn component_count(adj: &AdjacencyMatrix) -> usize {
    let mut analyzer = ConnectivityAnalyzer::new((0..9).map(PointId), adj);
    analyzer.calculate_connected_components().len()
}

#[test]
fn no_edges_gives_singletons() {
    assert_eq!(component_count(&grid_adjacency(&[])), 9);
}

#[test]
fn one_edge_merges_two_vertices() {
    assert_eq!(component_count(&grid_adjacency(&[(0, 1)])), 8);
}

#[test]
fn two_chains_give_two_components() {
    let adj = grid_adjacency(&[(0, 2), (2, 8), (8, 4), (4, 6), (1, 3), (3, 7), (7, 5)]);
    let mut analyzer = ConnectivityAnalyzer::new((0..9).map(PointId), &adj);
    analyzer.calculate_connected_components();
    assert_eq!(analyzer.sizes(), vec![5, 4]);
    for even in [0, 2, 4, 6, 8] {
        assert_eq!(analyzer.component_of(PointId(even)), Some(ComponentId(0)));
    }
    for odd in [1, 3, 5, 7] {
        assert_eq!(analyzer.component_of(PointId(odd)), Some(ComponentId(1)));
    }
}

#[test]
fn complete_graph_is_one_component() {
    let mut adj = AdjacencyMatrix::new((0..9).map(PointId));
    for (x, y) in complete_edges(9) {
        adj.connect(x, y);
    }
    assert_eq!(component_count(&adj), 1);
}

#[test]
fn components_of_a_generated_complex() {
    let lattice = grid_lattice();
    let points = grid_points(&lattice);

    // Grid spacing is 0.5 and the threshold is strict.
    let counts: Vec<usize> = [0.5, 0.6, 1.5]
        .into_iter()
        .map(|delta| {
            let mut builder =
                RipsComplexBuilder::new(&lattice, points.clone(), Euclidean, delta).unwrap();
            let adjacency = builder.calculate_adjacency().clone();
            let mut analyzer =
                ConnectivityAnalyzer::new(builder.complex().vertices().keys().copied(), &adjacency);
            analyzer.calculate_connected_components().len()
        })
        .collect();
    assert_eq!(counts, vec![9, 1, 1]);
}
