//! `graphwalk astar` command - A* shortest-path search
//!
//! Reports the distance of every vertex from the source and, with `--to`,
//! the recovered path to the target.

use std::path::Path;
use std::time::Instant;

use serde::Serialize;

use graphwalk_core::config::{RelaxerKind, SearchConfig};
use graphwalk_core::error::{GraphError, Result};
use graphwalk_core::graph::observers::PredecessorMap;
use graphwalk_core::graph::{
    AStarSearch, AbortSignal, DistanceRelaxer, Edge, GraphProvider, LongestDistanceRelaxer,
    Observable, Outcome, ShortestDistanceRelaxer,
};
use graphwalk_core::trace_time;

use super::load::{load_graph, WeightedGraph};
use super::report_aborted;
use crate::cli::{Cli, OutputFormat};

/// Options of one `astar` invocation after config overrides are applied.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub source: String,
    pub target: Option<String>,
    pub relaxer: RelaxerKind,
    pub max_reopens: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct DistanceRecord {
    pub vertex: String,
    /// `None` when the vertex was not reached
    pub distance: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct TargetReport {
    pub vertex: String,
    pub distance: Option<f64>,
    pub path: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct AStarReport {
    pub outcome: Outcome,
    pub source: String,
    pub relaxer: RelaxerKind,
    pub distances: Vec<DistanceRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<TargetReport>,
}

/// Execute the astar command
pub fn execute(
    cli: &Cli,
    config: &SearchConfig,
    graph_path: &Path,
    options: SearchOptions,
    abort: AbortSignal,
) -> Result<()> {
    let start = Instant::now();
    let loaded = load_graph(graph_path, config.directed)?;
    trace_time!(start, "load_graph");

    if let Some(target) = &options.target {
        if !loaded.graph.contains_vertex(target) {
            return Err(GraphError::unknown_vertex(target));
        }
    }

    let (outcome, report) = match options.relaxer {
        RelaxerKind::Shortest => search(&loaded, ShortestDistanceRelaxer, &options, abort)?,
        RelaxerKind::Longest => search(&loaded, LongestDistanceRelaxer, &options, abort)?,
    };
    trace_time!(start, "astar");

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

fn search<R>(
    loaded: &WeightedGraph,
    relaxer: R,
    options: &SearchOptions,
    abort: AbortSignal,
) -> Result<(Outcome, AStarReport)>
where
    R: DistanceRelaxer<Distance = f64>,
{
    // A positive cycle never stops improving under the longest relaxer.
    let max_reopens = match (options.relaxer, options.max_reopens) {
        (RelaxerKind::Longest, None) => {
            let bound = u32::try_from(loaded.graph.vertex_count()).unwrap_or(u32::MAX);
            tracing::debug!(bound, "bounding reopens for longest-path search");
            Some(bound)
        }
        (_, bound) => bound,
    };

    let mut preds = PredecessorMap::new();
    let (outcome, distances) = {
        let mut astar = AStarSearch::with_relaxer(
            &loaded.graph,
            |edge: &Edge<String>| loaded.weight(edge),
            |vertex: &String| loaded.estimate(vertex),
            relaxer,
        )
        .with_max_reopens(max_reopens);
        astar.set_abort_signal(abort);

        let outcome = astar.with_observer(preds.recorder(), |astar| {
            astar.compute_from_root(&options.source)
        })?;

        let distances: Vec<DistanceRecord> = loaded
            .graph
            .vertices()
            .into_iter()
            .map(|vertex| {
                let distance = astar.distance(&vertex).filter(|d| d.is_finite());
                DistanceRecord { vertex, distance }
            })
            .collect();
        (outcome, distances)
    };

    let target = options.target.as_ref().map(|target| {
        let distance = distances
            .iter()
            .find(|record| &record.vertex == target)
            .and_then(|record| record.distance);
        let path = distance.and_then(|_| preds.path_to(target));
        TargetReport {
            vertex: target.clone(),
            distance,
            path,
        }
    });

    let report = AStarReport {
        outcome,
        source: options.source.clone(),
        relaxer: options.relaxer,
        distances,
        target,
    };
    Ok((outcome, report))
}

fn print_human(report: &AStarReport) {
    match &report.target {
        Some(target) => match (&target.path, target.distance) {
            (Some(path), Some(distance)) => {
                println!("{}", path.join(" -> "));
                println!("distance: {}", distance);
            }
            _ => println!("{} is unreachable from {}", target.vertex, report.source),
        },
        None => {
            for record in &report.distances {
                match record.distance {
                    Some(distance) => println!("{} {}", record.vertex, distance),
                    None => println!("{} unreachable", record.vertex),
                }
            }
        }
    }
}
