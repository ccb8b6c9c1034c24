//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Current configuration format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Search configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Configuration format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Treat graphs as directed when the graph file does not say
    #[serde(default = "default_directed")]
    pub directed: bool,

    /// Distance semantics used by the shortest-path engine
    #[serde(default)]
    pub relaxer: RelaxerKind,

    /// Maximum number of times A* may reopen a finished vertex (unbounded if absent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_reopens: Option<u32>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Which distance relaxer the shortest-path engine uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelaxerKind {
    /// Minimise accumulated weight
    #[default]
    Shortest,
    /// Maximise accumulated weight
    Longest,
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level when neither --log-level nor --verbose is given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}

fn default_directed() -> bool {
    true
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_FORMAT_VERSION,
            directed: default_directed(),
            relaxer: RelaxerKind::default(),
            max_reopens: None,
            logging: LoggingConfig::default(),
        }
    }
}
