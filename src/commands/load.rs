//! Graph and configuration loading for the CLI
//!
//! A graph file is a JSON document:
//! ```json
//! {
//!   "directed": true,
//!   "vertices": ["A", "B"],
//!   "edges": [{"source": "A", "target": "B", "weight": 2.5}],
//!   "heuristic": {"A": 1.0}
//! }
//! ```
//! Every field is optional. Vertices named only by edges are added in
//! source-then-target order; a missing weight is 1 and a missing estimate 0.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use graphwalk_core::config::SearchConfig;
use graphwalk_core::error::{GraphError, Result};
use graphwalk_core::graph::{AdjacencyGraph, Edge, GraphProvider};

const DEFAULT_WEIGHT: f64 = 1.0;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphDocument {
    #[serde(default)]
    pub directed: Option<bool>,
    #[serde(default)]
    pub vertices: Vec<String>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
    #[serde(default)]
    pub heuristic: HashMap<String, f64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EdgeRecord {
    pub source: String,
    pub target: String,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    DEFAULT_WEIGHT
}

/// A loaded graph with its edge weights and heuristic estimates.
#[derive(Debug)]
pub struct WeightedGraph {
    pub graph: AdjacencyGraph<String>,
    weights: HashMap<Edge<String>, f64>,
    heuristic: HashMap<String, f64>,
}

impl WeightedGraph {
    pub fn weight(&self, edge: &Edge<String>) -> f64 {
        self.weights.get(edge).copied().unwrap_or(DEFAULT_WEIGHT)
    }

    pub fn estimate(&self, vertex: &String) -> f64 {
        self.heuristic.get(vertex).copied().unwrap_or(0.0)
    }
}

/// Load the configuration named by `--config`, or the defaults.
pub fn load_config(path: Option<&Path>) -> Result<SearchConfig> {
    match path {
        Some(path) => {
            let config = SearchConfig::load(path)?;
            tracing::debug!(path = %path.display(), "loaded config");
            Ok(config)
        }
        None => Ok(SearchConfig::default()),
    }
}

/// Read a graph file. `default_directed` applies when the file does not say.
pub fn load_graph(path: &Path, default_directed: bool) -> Result<WeightedGraph> {
    let content = fs::read_to_string(path)?;
    let document: GraphDocument = serde_json::from_str(&content)?;
    build_graph(document, default_directed)
}

pub fn build_graph(document: GraphDocument, default_directed: bool) -> Result<WeightedGraph> {
    let directed = document.directed.unwrap_or(default_directed);
    let mut graph = AdjacencyGraph::new(directed);

    for vertex in document.vertices {
        if !graph.add_vertex(vertex.clone()) {
            return Err(GraphError::invalid_graph(format!(
                "duplicate vertex '{}'",
                vertex
            )));
        }
    }

    let mut weights = HashMap::new();
    for record in document.edges {
        if !record.weight.is_finite() {
            return Err(GraphError::invalid_graph(format!(
                "weight of edge '{}' -> '{}' is not a finite number",
                record.source, record.target
            )));
        }

        let key = Edge::new(record.source.clone(), record.target.clone());
        let reversed = Edge::new(record.target.clone(), record.source.clone());
        if weights.contains_key(&key) || (!directed && weights.contains_key(&reversed)) {
            return Err(GraphError::invalid_graph(format!(
                "duplicate edge '{}' -> '{}'",
                record.source, record.target
            )));
        }

        let edge = graph.add_edge(record.source, record.target);
        weights.insert(edge, record.weight);
    }

    for (vertex, estimate) in &document.heuristic {
        if !graph.contains_vertex(vertex) {
            return Err(GraphError::invalid_graph(format!(
                "heuristic names unknown vertex '{}'",
                vertex
            )));
        }
        if !estimate.is_finite() {
            return Err(GraphError::invalid_graph(format!(
                "heuristic for '{}' is not a finite number",
                vertex
            )));
        }
    }

    tracing::debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        directed,
        "graph loaded"
    );

    Ok(WeightedGraph {
        graph,
        weights,
        heuristic: document.heuristic,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn parse(json: &str) -> GraphDocument {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_build_graph_defaults() {
        let loaded = build_graph(
            parse(r#"{"vertices": ["Z"], "edges": [{"source": "A", "target": "B"}]}"#),
            true,
        )
        .unwrap();

        assert!(loaded.graph.is_directed());
        assert_eq!(loaded.graph.vertices(), vec!["Z", "A", "B"]);
        let edge = Edge::new("A".to_string(), "B".to_string());
        assert_eq!(loaded.weight(&edge), 1.0);
        assert_eq!(loaded.estimate(&"A".to_string()), 0.0);
    }

    #[test]
    fn test_document_overrides_directed_default() {
        let loaded = build_graph(parse(r#"{"directed": false}"#), true).unwrap();
        assert!(!loaded.graph.is_directed());
    }

    #[test]
    fn test_duplicate_edge_rejected() {
        let json = r#"{"edges": [
            {"source": "A", "target": "B", "weight": 1},
            {"source": "A", "target": "B", "weight": 2}
        ]}"#;
        let err = build_graph(parse(json), true).unwrap_err();
        assert!(matches!(err, GraphError::InvalidGraph { .. }));
    }

    #[test]
    fn test_reversed_edge_is_duplicate_when_undirected() {
        let json = r#"{"directed": false, "edges": [
            {"source": "A", "target": "B"},
            {"source": "B", "target": "A"}
        ]}"#;
        assert!(build_graph(parse(json), true).is_err());

        let directed = json.replace(r#""directed": false"#, r#""directed": true"#);
        assert!(build_graph(parse(&directed), true).is_ok());
    }

    #[test]
    fn test_duplicate_vertex_rejected() {
        let err = build_graph(parse(r#"{"vertices": ["A", "A"]}"#), true).unwrap_err();
        assert!(err.to_string().contains("duplicate vertex"));
    }

    #[test]
    fn test_heuristic_for_unknown_vertex_rejected() {
        let json = r#"{"vertices": ["A"], "heuristic": {"B": 1.0}}"#;
        let err = build_graph(parse(json), true).unwrap_err();
        assert!(matches!(err, GraphError::InvalidGraph { .. }));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = serde_json::from_str::<GraphDocument>(r#"{"nodes": []}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_graph_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graph.json");
        fs::write(
            &path,
            r#"{"edges": [{"source": "A", "target": "B", "weight": 2.5}], "heuristic": {"B": 0.5}}"#,
        )
        .unwrap();

        let loaded = load_graph(&path, true).unwrap();
        let edge = Edge::new("A".to_string(), "B".to_string());
        assert_eq!(loaded.weight(&edge), 2.5);
        assert_eq!(loaded.estimate(&"B".to_string()), 0.5);
    }

    #[test]
    fn test_missing_graph_file() {
        let dir = tempdir().unwrap();
        let err = load_graph(&dir.path().join("missing.json"), true).unwrap_err();
        assert!(matches!(err, GraphError::Io(_)));
    }

    #[test]
    fn test_load_config_defaults_without_path() {
        let config = load_config(None).unwrap();
        assert_eq!(config, SearchConfig::default());
    }
}
