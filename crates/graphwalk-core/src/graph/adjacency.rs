//! Minimal in-memory adjacency graph
//!
//! Insertion-ordered, append-only storage used by the CLI and tests. It is
//! not a general storage layer: there is no removal and no vertex or edge
//! factory.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use super::provider::{GraphEdge, GraphProvider};
use crate::error::Result;

/// A plain `(source, target)` edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<V> {
    pub source: V,
    pub target: V,
}

impl<V> Edge<V> {
    pub fn new(source: V, target: V) -> Self {
        Self { source, target }
    }
}

impl<V> GraphEdge for Edge<V> {
    type Vertex = V;

    fn source(&self) -> &V {
        &self.source
    }

    fn target(&self) -> &V {
        &self.target
    }
}

/// Adjacency-list graph, directed or undirected.
///
/// For a directed graph `adjacent_edges` returns out-edges; for an
/// undirected graph it returns every incident edge, stored once and
/// reported from both endpoints.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<V> {
    directed: bool,
    order: Vec<V>,
    adjacency: HashMap<V, Vec<usize>>,
    edges: Vec<Edge<V>>,
}

impl<V> AdjacencyGraph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    pub fn directed() -> Self {
        Self::new(true)
    }

    pub fn undirected() -> Self {
        Self::new(false)
    }

    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            order: Vec::new(),
            adjacency: HashMap::new(),
            edges: Vec::new(),
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Add a vertex. Returns `false` if it was already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.order.push(vertex.clone());
        self.adjacency.insert(vertex, Vec::new());
        true
    }

    /// Add an edge, inserting missing endpoints in source-then-target order.
    pub fn add_edge(&mut self, source: V, target: V) -> Edge<V> {
        self.add_vertex(source.clone());
        self.add_vertex(target.clone());

        let index = self.edges.len();
        let edge = Edge::new(source.clone(), target.clone());
        self.edges.push(edge.clone());

        self.adjacency.entry(source.clone()).or_default().push(index);
        if !self.directed && source != target {
            self.adjacency.entry(target).or_default().push(index);
        }
        edge
    }

    pub fn edges(&self) -> &[Edge<V>] {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl<V> GraphProvider for AdjacencyGraph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    type Vertex = V;
    type Edge = Edge<V>;

    fn vertices(&self) -> Vec<V> {
        self.order.clone()
    }

    fn adjacent_edges(&self, vertex: &V) -> Result<Vec<Edge<V>>> {
        let Some(indices) = self.adjacency.get(vertex) else {
            crate::bail_unknown_vertex!(vertex);
        };
        Ok(indices.iter().map(|&i| self.edges[i].clone()).collect())
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    fn vertex_count(&self) -> usize {
        self.order.len()
    }
}
