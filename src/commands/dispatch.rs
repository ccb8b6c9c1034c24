//! Command dispatch logic for graphwalk
use std::time::Instant;

use graphwalk_core::config::{RelaxerKind, SearchConfig};
use graphwalk_core::error::Result;
use graphwalk_core::graph::AbortSignal;

use crate::cli::{Cli, Commands};
use crate::commands;
use crate::commands::astar::SearchOptions;

pub fn run(cli: &Cli, config: &SearchConfig, start: Instant) -> Result<()> {
    let abort = install_interrupt_handler();

    tracing::debug!(elapsed = ?start.elapsed(), "dispatch");

    match &cli.command {
        Commands::Bfs { graph, root } => {
            commands::bfs::execute(cli, config, graph, root.as_deref(), abort)
        }

        Commands::Astar {
            graph,
            from,
            to,
            longest,
            max_reopens,
        } => {
            let options = SearchOptions {
                source: from.clone(),
                target: to.clone(),
                relaxer: if *longest {
                    RelaxerKind::Longest
                } else {
                    config.relaxer
                },
                max_reopens: max_reopens.or(config.max_reopens),
            };
            commands::astar::execute(cli, config, graph, options, abort)
        }
    }
}

/// Route Ctrl-C to the traversal's abort flag instead of killing the process.
fn install_interrupt_handler() -> AbortSignal {
    let signal = AbortSignal::new();
    let handler_signal = signal.clone();

    if let Err(e) = ctrlc::set_handler(move || handler_signal.request()) {
        tracing::debug!(error = %e, "interrupt handler not installed");
    }
    signal
}
