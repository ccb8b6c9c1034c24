//! CLI argument parsing for graphwalk
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use output::OutputFormat;

/// Graphwalk - observable breadth-first and A* traversal over JSON graphs
#[derive(Parser, Debug)]
#[command(name = "graphwalk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter, either a level (`debug`) or a full directive list
    #[arg(long, global = true, env = "GRAPHWALK_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Search configuration file (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Breadth-first traversal
    Bfs {
        /// Graph description (JSON)
        graph: PathBuf,

        /// Start vertex; without it every component is traversed
        #[arg(long)]
        root: Option<String>,
    },

    /// A* shortest-path search
    Astar {
        /// Graph description (JSON)
        graph: PathBuf,

        /// Source vertex
        #[arg(long)]
        from: String,

        /// Report the path to this vertex
        #[arg(long)]
        to: Option<String>,

        /// Maximise accumulated weight instead of minimising it
        #[arg(long)]
        longest: bool,

        /// Maximum number of times a finished vertex may be reopened
        #[arg(long)]
        max_reopens: Option<u32>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cli_help() {
        let result = Cli::try_parse_from(["graphwalk", "--help"]);
        assert!(result.is_err()); // --help exits
    }

    #[test]
    fn test_parse_bfs() {
        let cli = Cli::try_parse_from(["graphwalk", "bfs", "graph.json", "--root", "A"]).unwrap();
        if let Commands::Bfs { graph, root } = cli.command {
            assert_eq!(graph, PathBuf::from("graph.json"));
            assert_eq!(root.as_deref(), Some("A"));
        } else {
            panic!("Expected Bfs command");
        }
    }

    #[test]
    fn test_parse_astar_with_options() {
        let cli = Cli::try_parse_from([
            "graphwalk",
            "astar",
            "graph.json",
            "--from",
            "A",
            "--to",
            "D",
            "--longest",
            "--max-reopens",
            "3",
        ])
        .unwrap();
        if let Commands::Astar {
            from,
            to,
            longest,
            max_reopens,
            ..
        } = cli.command
        {
            assert_eq!(from, "A");
            assert_eq!(to.as_deref(), Some("D"));
            assert!(longest);
            assert_eq!(max_reopens, Some(3));
        } else {
            panic!("Expected Astar command");
        }
    }

    #[test]
    fn test_astar_requires_source() {
        let result = Cli::try_parse_from(["graphwalk", "astar", "graph.json"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_format() {
        let cli = Cli::try_parse_from(["graphwalk", "--format", "json", "bfs", "g.json"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
    }
}
