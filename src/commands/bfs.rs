//! `graphwalk bfs` command - breadth-first traversal
//!
//! Reports start vertices, discovery order and the tree edges of the
//! traversal forest.

use std::collections::HashMap;
use std::path::Path;
use std::time::Instant;

use serde::Serialize;

use graphwalk_core::config::SearchConfig;
use graphwalk_core::error::Result;
use graphwalk_core::graph::observers::EventLog;
use graphwalk_core::graph::{AbortSignal, BreadthFirstSearch, EventKind, Observable, Outcome};
use graphwalk_core::trace_time;

use super::load::load_graph;
use super::report_aborted;
use crate::cli::{Cli, OutputFormat};

#[derive(Debug, Serialize)]
pub struct TreeEdgeRecord {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Serialize)]
pub struct BfsReport {
    pub outcome: Outcome,
    pub roots: Vec<String>,
    pub order: Vec<String>,
    pub tree_edges: Vec<TreeEdgeRecord>,
}

/// Execute the bfs command
pub fn execute(
    cli: &Cli,
    config: &SearchConfig,
    graph_path: &Path,
    root: Option<&str>,
    abort: AbortSignal,
) -> Result<()> {
    let start = Instant::now();
    let loaded = load_graph(graph_path, config.directed)?;
    trace_time!(start, "load_graph");

    let root = root.map(str::to_string);
    let mut log = EventLog::new();
    let outcome = {
        let mut bfs = BreadthFirstSearch::new(&loaded.graph);
        bfs.set_abort_signal(abort);
        bfs.with_observer(log.recorder(), |bfs| bfs.compute(root.as_ref()))?
    };
    trace_time!(start, "bfs");

    let report = BfsReport {
        outcome,
        roots: log.vertices(EventKind::StartVertex),
        order: log.vertices(EventKind::DiscoverVertex),
        tree_edges: log
            .edges(EventKind::TreeEdge)
            .into_iter()
            .map(|(from, to)| TreeEdgeRecord { from, to })
            .collect(),
    };

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            print_human(&report);
            if outcome.is_aborted() && !cli.quiet {
                report_aborted();
            }
        }
    }

    Ok(())
}

/// One line per discovered vertex: roots bare, others with their parent.
fn print_human(report: &BfsReport) {
    let parents: HashMap<&str, &str> = report
        .tree_edges
        .iter()
        .map(|e| (e.to.as_str(), e.from.as_str()))
        .collect();

    for vertex in &report.order {
        match parents.get(vertex.as_str()) {
            Some(parent) => println!("{} <- {}", vertex, parent),
            None => println!("{}", vertex),
        }
    }
}
