//! Graph traversal and path-finding operations
//!
//! Provides storage-independent graph algorithms:
//! - `provider`: the read-only graph contract every algorithm depends on
//! - `events`: the traversal hook protocol and subscriber registry
//! - `algos`: breadth-first search and A* built on top of it
//! - `observers`: predecessor and event-trace recorders

pub mod abort;
pub mod adjacency;
pub mod algos;
pub mod events;
pub mod maps;
pub mod observers;
pub mod provider;
pub mod queue;
pub mod relaxer;
pub mod traversal;
pub mod types;

pub use abort::AbortSignal;
pub use adjacency::{AdjacencyGraph, Edge};
pub use algos::{AStarSearch, BreadthFirstSearch};
pub use events::{Event, EventHooks, EventKind, HookContext, Observable, Payload, SubscriptionId};
pub use maps::{ColorMap, DistanceMap};
pub use observers::{EventLog, LoggedEvent, PredecessorMap};
pub use provider::{opposite, GraphEdge, GraphProvider};
pub use queue::{CostQueue, FifoQueue, VertexQueue};
pub use relaxer::{DistanceRelaxer, LongestDistanceRelaxer, ShortestDistanceRelaxer};
pub use traversal::{NoExtension, SearchState, TraversalExtension};
pub use types::{Color, Outcome};
