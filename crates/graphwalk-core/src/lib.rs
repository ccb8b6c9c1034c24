//! Graphwalk Core Library
//!
//! Storage-independent graph traversal engines: breadth-first search and
//! A* shortest-path search, instrumented through a traversal event protocol
//! so that higher-level algorithms can be composed on top of a traversal
//! instead of re-implementing its loop.

pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
