//! Connected components of the adjacency graph.

use crate::adjacency::AdjacencyMatrix;
use indexmap::{IndexMap, IndexSet};
use rips_core::{ComponentId, PointId};
use std::collections::VecDeque;
use tracing::debug;

/// One connected component: its id and its vertices in discovery order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphComponent {
    id: ComponentId,
    vertices: Vec<PointId>,
}

impl GraphComponent {
    /// Component id; ids count up from 0 in root-discovery order.
    pub fn id(&self) -> ComponentId {
        self.id
    }

    /// Member vertices, root first.
    pub fn vertices(&self) -> &[PointId] {
        &self.vertices
    }

    /// Number of member vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always `false` for a computed component.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Whether `id` is a member.
    pub fn contains(&self, id: PointId) -> bool {
        self.vertices.contains(&id)
    }
}

/// Partitions a vertex list into connected components.
///
/// Only the listed vertices take part: connections to ids outside the
/// list are ignored.
///
/// ```
/// use rips_complex::{AdjacencyMatrix, ConnectivityAnalyzer};
/// use rips_core::PointId;
///
/// let ids: Vec<PointId> = (0..4).map(PointId).collect();
/// let mut adj = AdjacencyMatrix::new(ids.clone());
/// adj.connect(PointId(0), PointId(2));
///
/// let mut analyzer = ConnectivityAnalyzer::new(ids, &adj);
/// assert_eq!(analyzer.calculate_connected_components().len(), 3);
/// assert_eq!(analyzer.component_of(PointId(2)), analyzer.component_of(PointId(0)));
/// ```
#[derive(Clone, Debug)]
pub struct ConnectivityAnalyzer<'a> {
    vertices: IndexSet<PointId>,
    adjacency: &'a AdjacencyMatrix,
    components: Vec<GraphComponent>,
    membership: IndexMap<PointId, ComponentId>,
}

impl<'a> ConnectivityAnalyzer<'a> {
    /// An analyzer over `vertices` using `adjacency`. Duplicate ids are
    /// ignored; the first occurrence fixes the order.
    pub fn new<I>(vertices: I, adjacency: &'a AdjacencyMatrix) -> Self
    where
        I: IntoIterator<Item = PointId>,
    {
        Self {
            vertices: vertices.into_iter().collect(),
            adjacency,
            components: Vec::new(),
            membership: IndexMap::new(),
        }
    }

    /// Compute the components, replacing any earlier result.
    ///
    /// Roots are taken in vertex order; each component is grown by
    /// draining a frontier queue of newly reached vertices. An empty
    /// vertex list yields no components.
    pub fn calculate_connected_components(&mut self) -> &[GraphComponent] {
        self.components.clear();
        self.membership.clear();

        for &root in &self.vertices {
            if self.membership.contains_key(&root) {
                continue;
            }
            let id = ComponentId(self.components.len() as u32);
            self.membership.insert(root, id);
            let mut frontier = VecDeque::from([root]);
            let mut members = Vec::new();

            while let Some(v) = frontier.pop_front() {
                members.push(v);
                for next in self.adjacency.connections(v) {
                    if self.vertices.contains(&next) && !self.membership.contains_key(&next) {
                        self.membership.insert(next, id);
                        frontier.push_back(next);
                    }
                }
            }

            debug!(component = %id, size = members.len(), "component collected");
            self.components.push(GraphComponent {
                id,
                vertices: members,
            });
        }
        &self.components
    }

    /// The components of the last computation.
    pub fn components(&self) -> &[GraphComponent] {
        &self.components
    }

    /// The component holding `id`, if computed and `id` is a vertex.
    pub fn component_of(&self, id: PointId) -> Option<ComponentId> {
        self.membership.get(&id).copied()
    }

    /// Component sizes, by component id.
    pub fn sizes(&self) -> Vec<usize> {
        self.components.iter().map(GraphComponent::len).collect()
    }
}
