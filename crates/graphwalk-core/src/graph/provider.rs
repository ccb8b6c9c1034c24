use std::fmt::Debug;
use std::hash::Hash;

use crate::error::Result;

/// An edge as seen by the traversal engines: an ordered pair of endpoints.
pub trait GraphEdge {
    type Vertex;

    fn source(&self) -> &Self::Vertex;
    fn target(&self) -> &Self::Vertex;
}

/// Trait for providing read-only graph structure to the algorithms
///
/// Algorithms borrow the provider for the duration of a run and never
/// mutate it. Implementations that layer filtering over another graph
/// must keep these contracts, including reporting unknown vertices.
pub trait GraphProvider {
    type Vertex: Clone + Eq + Hash + Debug;
    type Edge: GraphEdge<Vertex = Self::Vertex> + Clone + Debug;

    /// All vertices, in an order that stays stable for the length of a run.
    fn vertices(&self) -> Vec<Self::Vertex>;

    /// Every edge touching `vertex`.
    ///
    /// Fails with [`GraphError::UnknownVertex`](crate::error::GraphError::UnknownVertex)
    /// when the vertex is not part of the graph.
    fn adjacent_edges(&self, vertex: &Self::Vertex) -> Result<Vec<Self::Edge>>;

    fn contains_vertex(&self, vertex: &Self::Vertex) -> bool;

    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }
}

/// The endpoint of `edge` that is not `vertex`.
///
/// Adjacency lookups on undirected graphs may hand back the queried vertex
/// as either endpoint; a self loop resolves to `vertex` itself.
pub fn opposite<'e, E>(edge: &'e E, vertex: &E::Vertex) -> &'e E::Vertex
where
    E: GraphEdge,
    E::Vertex: PartialEq,
{
    if edge.source() == vertex {
        edge.target()
    } else {
        edge.source()
    }
}
