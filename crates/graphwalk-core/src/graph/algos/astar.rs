//! A* shortest-path search
//!
//! The search does not own a traversal loop. It attaches a relaxation
//! extension to a [`BreadthFirstSearch`] whose frontier is a [`CostQueue`],
//! and turns the breadth-first edge classification into relaxations:
//! - tree edge (target unvisited): relax, then the target is queued
//! - gray target (target queued): relax and re-sift the target
//! - black target (target finished): relax and reopen the target

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::error::{GraphError, Result};
use crate::graph::abort::AbortSignal;
use crate::graph::events::{Event, EventHooks, EventKind, HookContext, Observable};
use crate::graph::maps::{ColorMap, DistanceMap};
use crate::graph::provider::GraphProvider;
use crate::graph::queue::{CostQueue, VertexQueue};
use crate::graph::relaxer::{DistanceRelaxer, ShortestDistanceRelaxer};
use crate::graph::traversal::{SearchState, TraversalExtension};
use crate::graph::types::{Color, Outcome};

use super::bfs::BreadthFirstSearch;

/// A* search with pluggable edge weights, heuristic and relaxer.
///
/// `weight` must return non-negative values; a negative (or NaN) weight
/// fails the whole computation with [`GraphError::NegativeWeight`].
/// The heuristic is not checked for admissibility.
pub struct AStarSearch<'g, 'h, G, W, H, R = ShortestDistanceRelaxer>
where
    G: GraphProvider,
    R: DistanceRelaxer,
{
    bfs: BreadthFirstSearch<'g, 'h, G, CostQueue<G::Vertex, R>>,
    relaxation: Relaxation<'h, G, W, H, R>,
}

impl<'g, G, W, H> AStarSearch<'g, '_, G, W, H>
where
    G: GraphProvider,
    W: Fn(&G::Edge) -> f64,
    H: Fn(&G::Vertex) -> f64,
{
    /// Shortest-path search over `f64` weights.
    pub fn new(graph: &'g G, weight: W, heuristic: H) -> Self {
        Self::with_relaxer(graph, weight, heuristic, ShortestDistanceRelaxer)
    }
}

impl<'g, 'h, G, W, H, R> AStarSearch<'g, 'h, G, W, H, R>
where
    G: GraphProvider,
    W: Fn(&G::Edge) -> R::Distance,
    H: Fn(&G::Vertex) -> R::Distance,
    R: DistanceRelaxer,
{
    pub fn with_relaxer(graph: &'g G, weight: W, heuristic: H, relaxer: R) -> Self {
        Self {
            bfs: BreadthFirstSearch::with_queue(graph, CostQueue::new(relaxer.clone())),
            relaxation: Relaxation {
                hooks: EventHooks::new(),
                distances: DistanceMap::new(),
                reopens: HashMap::new(),
                weight,
                heuristic,
                relaxer,
                max_reopens: None,
            },
        }
    }

    /// Bound how often a finished vertex may be reopened.
    ///
    /// Unbounded by default. With an inconsistent heuristic a vertex can be
    /// reopened many times; once the bound is reached, further improvements
    /// through finished targets are reported as `EdgeNotRelaxed`.
    pub fn with_max_reopens(mut self, max_reopens: Option<u32>) -> Self {
        self.relaxation.max_reopens = max_reopens;
        self
    }

    pub fn graph(&self) -> &'g G {
        self.bfs.graph()
    }

    pub fn relaxer(&self) -> &R {
        &self.relaxation.relaxer
    }

    pub fn colors(&self) -> &ColorMap<G::Vertex> {
        self.bfs.colors()
    }

    /// Best known distance from the source for every initialized vertex.
    pub fn distances(&self) -> &DistanceMap<G::Vertex, R::Distance> {
        &self.relaxation.distances
    }

    pub fn distance(&self, vertex: &G::Vertex) -> Option<R::Distance> {
        self.relaxation.distances.get(vertex)
    }

    /// Priority keys: distance combined with the heuristic estimate.
    pub fn costs(&self) -> &DistanceMap<G::Vertex, R::Distance> {
        self.bfs.state().queue().costs()
    }

    /// Number of times `vertex` was reopened in the last run.
    pub fn reopen_count(&self, vertex: &G::Vertex) -> u32 {
        self.relaxation.reopens.get(vertex).copied().unwrap_or(0)
    }

    pub fn abort_signal(&self) -> &AbortSignal {
        self.bfs.abort_signal()
    }

    pub fn set_abort_signal(&mut self, signal: AbortSignal) {
        self.bfs.set_abort_signal(signal);
    }

    /// Reset colors, distances and costs for every vertex.
    pub fn initialize(&mut self) -> Result<Outcome> {
        self.reset();
        self.bfs.initialize_with(&mut self.relaxation)
    }

    /// Run from `root`, or from every unvisited vertex in enumeration order,
    /// producing a forest of shortest-path trees.
    #[tracing::instrument(skip_all, fields(root = ?root))]
    pub fn compute(&mut self, root: Option<&G::Vertex>) -> Result<Outcome> {
        // Results of the previous run survive a rejected root.
        if let Some(root) = root {
            if !self.bfs.graph().contains_vertex(root) {
                crate::bail_unknown_vertex!(root);
            }
        }
        self.reset();
        let outcome = self.bfs.compute_with(root, &mut self.relaxation)?;

        let relaxer = &self.relaxation.relaxer;
        let unreached = relaxer.initial_distance();
        tracing::debug!(
            outcome = ?outcome,
            reached = self
                .relaxation
                .distances
                .iter()
                .filter(|(_, d)| relaxer.compare(*d, unreached) == Ordering::Less)
                .count(),
            reopened = self.relaxation.reopens.values().sum::<u32>(),
            "shortest-path search complete"
        );
        Ok(outcome)
    }

    pub fn compute_from_root(&mut self, root: &G::Vertex) -> Result<Outcome> {
        self.compute(Some(root))
    }

    /// Expand from `source` without re-initializing, seeding it at distance zero.
    pub fn visit(&mut self, source: &G::Vertex) -> Result<Outcome> {
        if !self.bfs.graph().contains_vertex(source) {
            crate::bail_unknown_vertex!(source);
        }
        self.relaxation.seed_source(source, self.bfs.state_mut());
        self.bfs.visit_with(source, &mut self.relaxation)
    }

    fn reset(&mut self) {
        self.relaxation.distances.clear();
        self.relaxation.reopens.clear();
        self.bfs.state_mut().queue_mut().reset_costs();
    }
}

impl<'h, G, W, H, R> Observable<'h> for AStarSearch<'_, 'h, G, W, H, R>
where
    G: GraphProvider,
    R: DistanceRelaxer,
{
    type Vertex = G::Vertex;
    type Edge = G::Edge;
    type Distance = R::Distance;

    fn hooks(&self) -> &EventHooks<'h, G::Vertex, G::Edge, R::Distance> {
        &self.relaxation.hooks
    }

    fn hooks_mut(&mut self) -> &mut EventHooks<'h, G::Vertex, G::Edge, R::Distance> {
        &mut self.relaxation.hooks
    }
}

/// Relaxation layer attached to the breadth-first loop on every call.
///
/// Owns everything the A*-level subscribers observe: their registry, the
/// distance map and the reopen counters.
struct Relaxation<'h, G, W, H, R>
where
    G: GraphProvider,
    R: DistanceRelaxer,
{
    hooks: EventHooks<'h, G::Vertex, G::Edge, R::Distance>,
    distances: DistanceMap<G::Vertex, R::Distance>,
    reopens: HashMap<G::Vertex, u32>,
    weight: W,
    heuristic: H,
    relaxer: R,
    max_reopens: Option<u32>,
}

type AStarState<G, R> =
    SearchState<<G as GraphProvider>::Vertex, CostQueue<<G as GraphProvider>::Vertex, R>>;

impl<G, W, H, R> Relaxation<'_, G, W, H, R>
where
    G: GraphProvider,
    W: Fn(&G::Edge) -> R::Distance,
    H: Fn(&G::Vertex) -> R::Distance,
    R: DistanceRelaxer,
{
    fn fire(
        &mut self,
        event: &Event<'_, G::Vertex, G::Edge>,
        state: &AStarState<G, R>,
    ) -> Result<()> {
        self.hooks
            .fire(event, &HookContext::with_distances(state.colors(), &self.distances))
    }

    fn seed_source(&mut self, source: &G::Vertex, state: &mut AStarState<G, R>) {
        let zero = self.relaxer.zero();
        self.distances.set(source.clone(), zero);
        let cost = self.relaxer.combine(zero, (self.heuristic)(source));
        state.queue_mut().set_cost(source.clone(), cost);
    }

    fn check_weight(&self, edge: &G::Edge) -> Result<()> {
        let weight = (self.weight)(edge);
        match weight.partial_cmp(&self.relaxer.zero()) {
            Some(Ordering::Less) | None => Err(GraphError::negative_weight(edge, &weight)),
            _ => Ok(()),
        }
    }

    /// Distance `to` would get through `from`, if it beats the current one.
    fn improvement(
        &self,
        edge: &G::Edge,
        from: &G::Vertex,
        to: &G::Vertex,
    ) -> Option<R::Distance> {
        let initial = self.relaxer.initial_distance();
        let from_distance = self.distances.get(from).unwrap_or(initial);
        let to_distance = self.distances.get(to).unwrap_or(initial);
        let candidate = self.relaxer.combine(from_distance, (self.weight)(edge));
        (self.relaxer.compare(candidate, to_distance) == Ordering::Less).then_some(candidate)
    }

    fn apply(&mut self, from: &G::Vertex, to: &G::Vertex, distance: R::Distance) {
        tracing::trace!(from = ?from, to = ?to, distance = ?distance, "relaxed");
        self.distances.set(to.clone(), distance);
    }

    /// Try to improve `to` through `from`. Returns whether it improved.
    fn relax(&mut self, edge: &G::Edge, from: &G::Vertex, to: &G::Vertex) -> bool {
        match self.improvement(edge, from, to) {
            Some(distance) => {
                self.apply(from, to, distance);
                true
            }
            None => false,
        }
    }

    fn estimate(&self, vertex: &G::Vertex) -> R::Distance {
        let distance = self
            .distances
            .get(vertex)
            .unwrap_or_else(|| self.relaxer.initial_distance());
        self.relaxer.combine(distance, (self.heuristic)(vertex))
    }

    fn may_reopen(&self, vertex: &G::Vertex) -> bool {
        let Some(limit) = self.max_reopens else {
            return true;
        };
        let reopened = self.reopens.get(vertex).copied().unwrap_or(0);
        if reopened >= limit {
            tracing::warn!(vertex = ?vertex, limit, "reopen limit reached");
            return false;
        }
        true
    }

    fn on_tree_edge(
        &mut self,
        event: &Event<'_, G::Vertex, G::Edge>,
        state: &mut AStarState<G, R>,
    ) -> Result<()> {
        let (Some(edge), Some((from, to))) = (event.as_edge(), event.endpoints()) else {
            return Ok(());
        };
        if self.relax(edge, from, to) {
            let cost = self.estimate(to);
            state.queue_mut().set_cost(to.clone(), cost);
            assert_heap(state);
            self.fire(event, state)
        } else {
            self.fire(&event.with_kind(EventKind::EdgeNotRelaxed), state)
        }
    }

    fn on_gray_target(
        &mut self,
        event: &Event<'_, G::Vertex, G::Edge>,
        state: &mut AStarState<G, R>,
    ) -> Result<()> {
        self.fire(event, state)?;
        let (Some(edge), Some((from, to))) = (event.as_edge(), event.endpoints()) else {
            return Ok(());
        };
        if self.relax(edge, from, to) {
            let cost = self.estimate(to);
            state.queue_mut().set_cost(to.clone(), cost);
            state.queue_mut().update(to);
            assert_heap(state);
            self.fire(&event.with_kind(EventKind::TreeEdge), state)
        } else {
            self.fire(&event.with_kind(EventKind::EdgeNotRelaxed), state)
        }
    }

    fn on_black_target(
        &mut self,
        event: &Event<'_, G::Vertex, G::Edge>,
        state: &mut AStarState<G, R>,
    ) -> Result<()> {
        self.fire(event, state)?;
        let (Some(edge), Some((from, to))) = (event.as_edge(), event.endpoints()) else {
            return Ok(());
        };
        // The reopen bound only matters for an edge that would improve `to`.
        let reopen = self.improvement(edge, from, to).filter(|_| self.may_reopen(to));
        if let Some(distance) = reopen {
            self.apply(from, to, distance);
            let cost = self.estimate(to);
            state.queue_mut().set_cost(to.clone(), cost);
            state.queue_mut().push(to.clone());
            state.colors_mut().set(to.clone(), Color::Frontier);
            *self.reopens.entry(to.clone()).or_insert(0) += 1;
            assert_heap(state);
            tracing::trace!(vertex = ?to, "reopened");
            self.fire(&event.with_kind(EventKind::TreeEdge), state)
        } else {
            self.fire(&event.with_kind(EventKind::EdgeNotRelaxed), state)
        }
    }
}

impl<G, W, H, R> TraversalExtension<G::Vertex, G::Edge, CostQueue<G::Vertex, R>>
    for Relaxation<'_, G, W, H, R>
where
    G: GraphProvider,
    W: Fn(&G::Edge) -> R::Distance,
    H: Fn(&G::Vertex) -> R::Distance,
    R: DistanceRelaxer,
{
    fn on_event(
        &mut self,
        event: &Event<'_, G::Vertex, G::Edge>,
        state: &mut AStarState<G, R>,
    ) -> Result<()> {
        match event.kind {
            EventKind::InitializeVertex => {
                if let Some(vertex) = event.as_vertex() {
                    let initial = self.relaxer.initial_distance();
                    self.distances.set(vertex.clone(), initial);
                    state.queue_mut().set_cost(vertex.clone(), initial);
                }
                self.fire(event, state)
            }
            EventKind::StartVertex => {
                if let Some(vertex) = event.as_vertex() {
                    self.seed_source(vertex, state);
                }
                self.fire(event, state)
            }
            EventKind::ExamineEdge => {
                if let Some(edge) = event.as_edge() {
                    self.check_weight(edge)?;
                }
                self.fire(event, state)
            }
            EventKind::TreeEdge => self.on_tree_edge(event, state),
            EventKind::GrayTarget => self.on_gray_target(event, state),
            EventKind::BlackTarget => self.on_black_target(event, state),
            // Superseded by the relaxation outcome.
            EventKind::NonTreeEdge => Ok(()),
            EventKind::DiscoverVertex
            | EventKind::ExamineVertex
            | EventKind::FinishVertex
            | EventKind::EdgeNotRelaxed => self.fire(event, state),
        }
    }
}

/// Debug-only check that the queue head carries the best priority key.
fn assert_heap<V, R>(state: &SearchState<V, CostQueue<V, R>>)
where
    V: Clone + Eq + std::hash::Hash,
    R: DistanceRelaxer,
{
    debug_assert!(
        state.queue().is_heap_ordered(),
        "priority queue head is not the best-cost vertex"
    );
}
