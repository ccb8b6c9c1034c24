//! Error types and exit codes for graphwalk
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown vertex, invalid graph, negative weight)

mod macros;

use thiserror::Error;

/// Exit codes for the graphwalk CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown vertex, invalid graph (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graph traversal
#[derive(Error, Debug)]
pub enum GraphError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("vertex not in graph: {vertex}")]
    UnknownVertex { vertex: String },

    #[error("negative weight {weight} on edge {edge}")]
    NegativeWeight { edge: String, weight: String },

    #[error("invalid graph: {reason}")]
    InvalidGraph { reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for a vertex the graph does not contain
    pub fn unknown_vertex(vertex: &impl std::fmt::Debug) -> Self {
        GraphError::UnknownVertex {
            vertex: format!("{:?}", vertex),
        }
    }

    /// Create an error for an edge whose weight is negative (or NaN)
    pub fn negative_weight(edge: &impl std::fmt::Debug, weight: &impl std::fmt::Debug) -> Self {
        GraphError::NegativeWeight {
            edge: format!("{:?}", edge),
            weight: format!("{:?}", weight),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a malformed graph description
    pub fn invalid_graph(reason: impl Into<String>) -> Self {
        GraphError::InvalidGraph {
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UsageError(_)
            | GraphError::InvalidValue { .. } => ExitCode::Usage,

            GraphError::UnknownVertex { .. }
            | GraphError::NegativeWeight { .. }
            | GraphError::InvalidGraph { .. } => ExitCode::Data,

            GraphError::Io(_) | GraphError::Json(_) | GraphError::Toml(_) | GraphError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::UsageError(_) => "usage_error",
            GraphError::InvalidValue { .. } => "invalid_value",
            GraphError::UnknownVertex { .. } => "unknown_vertex",
            GraphError::NegativeWeight { .. } => "negative_weight",
            GraphError::InvalidGraph { .. } => "invalid_graph",
            GraphError::Io(_) => "io_error",
            GraphError::Json(_) => "json_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for graphwalk operations
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            GraphError::UsageError("bad".into()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(GraphError::unknown_vertex(&"Z").exit_code(), ExitCode::Data);
        assert_eq!(
            GraphError::negative_weight(&("A", "B"), &-1.0).exit_code(),
            ExitCode::Data
        );
        assert_eq!(GraphError::Other("x".into()).exit_code(), ExitCode::Failure);
        assert_eq!(i32::from(ExitCode::Data), 3);
    }

    #[test]
    fn test_unknown_vertex_message_uses_debug_form() {
        let err = GraphError::unknown_vertex(&"Z");
        assert_eq!(err.to_string(), "vertex not in graph: \"Z\"");
    }

    #[test]
    fn test_to_json_envelope() {
        let err = GraphError::negative_weight(&("A", "B"), &-1.0);
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "negative_weight");
        assert!(json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("negative weight -1.0"));
    }
}
