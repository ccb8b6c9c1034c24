//! Graph algorithm implementations
//!
//! Contains the traversal engines:
//! - `bfs`: breadth-first traversal emitting the full event protocol
//! - `astar`: A* shortest path, driven through the breadth-first loop

pub mod astar;
pub mod bfs;

pub use astar::AStarSearch;
pub use bfs::BreadthFirstSearch;
