//! Error macros for graphwalk

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::GraphError::invalid_value($context, $value))
    };
}

/// Macro for rejecting a vertex the graph does not contain
#[macro_export]
macro_rules! bail_unknown_vertex {
    ($vertex:expr) => {
        return Err($crate::error::GraphError::unknown_vertex($vertex))
    };
}
