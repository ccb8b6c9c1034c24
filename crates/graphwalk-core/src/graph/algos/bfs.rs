use crate::error::Result;
use crate::graph::abort::AbortSignal;
use crate::graph::events::{Event, EventHooks, EventKind, HookContext, Observable};
use crate::graph::maps::ColorMap;
use crate::graph::provider::{opposite, GraphProvider};
use crate::graph::queue::{FifoQueue, VertexQueue};
use crate::graph::traversal::{NoExtension, SearchState, TraversalExtension};
use crate::graph::types::{Color, Outcome};

/// Breadth-first traversal over any [`GraphProvider`].
///
/// The frontier queue is a type parameter: FIFO by default, which yields
/// breadth-first order. A* reuses this loop with a cost-ordered queue.
pub struct BreadthFirstSearch<'g, 'h, G, Q = FifoQueue<<G as GraphProvider>::Vertex>>
where
    G: GraphProvider,
{
    graph: &'g G,
    state: SearchState<G::Vertex, Q>,
    hooks: EventHooks<'h, G::Vertex, G::Edge>,
    abort: AbortSignal,
}

impl<'g, G: GraphProvider> BreadthFirstSearch<'g, '_, G> {
    pub fn new(graph: &'g G) -> Self {
        Self::with_queue(graph, FifoQueue::new())
    }
}

impl<'g, 'h, G, Q> BreadthFirstSearch<'g, 'h, G, Q>
where
    G: GraphProvider,
    Q: VertexQueue<G::Vertex>,
{
    pub fn with_queue(graph: &'g G, queue: Q) -> Self {
        Self {
            graph,
            state: SearchState::new(ColorMap::new(), queue),
            hooks: EventHooks::new(),
            abort: AbortSignal::new(),
        }
    }

    pub fn graph(&self) -> &'g G {
        self.graph
    }

    pub fn colors(&self) -> &ColorMap<G::Vertex> {
        &self.state.colors
    }

    pub fn state(&self) -> &SearchState<G::Vertex, Q> {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SearchState<G::Vertex, Q> {
        &mut self.state
    }

    pub fn abort_signal(&self) -> &AbortSignal {
        &self.abort
    }

    /// Share a cancellation flag with the hosting context.
    pub fn set_abort_signal(&mut self, signal: AbortSignal) {
        self.abort = signal;
    }

    /// Reset every vertex to `Unvisited`, firing `InitializeVertex` for each.
    pub fn initialize(&mut self) -> Result<Outcome> {
        self.initialize_with(&mut NoExtension)
    }

    /// Initialize, then visit `root` or, without a root, every component.
    pub fn compute(&mut self, root: Option<&G::Vertex>) -> Result<Outcome> {
        self.compute_with(root, &mut NoExtension)
    }

    /// Expand from `source` using the current colors, without initializing.
    pub fn visit(&mut self, source: &G::Vertex) -> Result<Outcome> {
        self.visit_with(source, &mut NoExtension)
    }

    pub fn initialize_with<X>(&mut self, ext: &mut X) -> Result<Outcome>
    where
        X: TraversalExtension<G::Vertex, G::Edge, Q>,
    {
        self.state.queue.clear();
        for vertex in self.graph.vertices() {
            if self.abort.is_requested() {
                tracing::debug!("initialize aborted");
                return Ok(Outcome::Aborted);
            }
            self.state.colors.set(vertex.clone(), Color::Unvisited);
            self.emit(Event::vertex(EventKind::InitializeVertex, &vertex), ext)?;
        }
        Ok(Outcome::Completed)
    }

    #[tracing::instrument(skip_all, fields(root = ?root))]
    pub fn compute_with<X>(&mut self, root: Option<&G::Vertex>, ext: &mut X) -> Result<Outcome>
    where
        X: TraversalExtension<G::Vertex, G::Edge, Q>,
    {
        if let Some(root) = root {
            if !self.graph.contains_vertex(root) {
                crate::bail_unknown_vertex!(root);
            }
        }

        if self.initialize_with(ext)?.is_aborted() {
            return Ok(Outcome::Aborted);
        }

        let outcome = match root {
            Some(root) => {
                self.emit(Event::vertex(EventKind::StartVertex, root), ext)?;
                self.visit_with(root, ext)?
            }
            None => self.visit_forest(ext)?,
        };

        tracing::debug!(
            outcome = ?outcome,
            finished = self.state.colors.count(Color::Finished),
            "traversal complete"
        );
        Ok(outcome)
    }

    /// Start a visit from every vertex still unvisited, in enumeration order.
    fn visit_forest<X>(&mut self, ext: &mut X) -> Result<Outcome>
    where
        X: TraversalExtension<G::Vertex, G::Edge, Q>,
    {
        for vertex in self.graph.vertices() {
            if self.abort.is_requested() {
                return Ok(Outcome::Aborted);
            }
            if self.state.colors.get(&vertex) != Color::Unvisited {
                continue;
            }
            self.emit(Event::vertex(EventKind::StartVertex, &vertex), ext)?;
            if self.visit_with(&vertex, ext)?.is_aborted() {
                return Ok(Outcome::Aborted);
            }
        }
        Ok(Outcome::Completed)
    }

    pub fn visit_with<X>(&mut self, source: &G::Vertex, ext: &mut X) -> Result<Outcome>
    where
        X: TraversalExtension<G::Vertex, G::Edge, Q>,
    {
        if !self.graph.contains_vertex(source) {
            crate::bail_unknown_vertex!(source);
        }

        self.state.colors.set(source.clone(), Color::Frontier);
        self.emit(Event::vertex(EventKind::DiscoverVertex, source), ext)?;
        self.state.queue.push(source.clone());

        while !self.state.queue.is_empty() {
            if self.abort.is_requested() {
                tracing::debug!(queued = self.state.queue.len(), "visit aborted");
                return Ok(Outcome::Aborted);
            }
            let Some(u) = self.state.queue.pop() else {
                break;
            };
            if self.abort.is_requested() {
                tracing::debug!(queued = self.state.queue.len(), "visit aborted");
                return Ok(Outcome::Aborted);
            }

            self.emit(Event::vertex(EventKind::ExamineVertex, &u), ext)?;

            for edge in self.graph.adjacent_edges(&u)? {
                let v = opposite(&edge, &u).clone();
                self.emit(Event::edge(EventKind::ExamineEdge, &edge, &u, &v), ext)?;

                match self.state.colors.get(&v) {
                    Color::Unvisited => {
                        self.emit(Event::edge(EventKind::TreeEdge, &edge, &u, &v), ext)?;
                        self.state.colors.set(v.clone(), Color::Frontier);
                        self.emit(Event::vertex(EventKind::DiscoverVertex, &v), ext)?;
                        self.state.queue.push(v);
                    }
                    Color::Frontier => {
                        self.emit(Event::edge(EventKind::NonTreeEdge, &edge, &u, &v), ext)?;
                        self.emit(Event::edge(EventKind::GrayTarget, &edge, &u, &v), ext)?;
                    }
                    Color::Finished => {
                        self.emit(Event::edge(EventKind::NonTreeEdge, &edge, &u, &v), ext)?;
                        self.emit(Event::edge(EventKind::BlackTarget, &edge, &u, &v), ext)?;
                    }
                }
            }

            self.state.colors.set(u.clone(), Color::Finished);
            self.emit(Event::vertex(EventKind::FinishVertex, &u), ext)?;
        }

        Ok(Outcome::Completed)
    }

    /// Deliver to subscribers first, then to the attached extension.
    fn emit<X>(&mut self, event: Event<'_, G::Vertex, G::Edge>, ext: &mut X) -> Result<()>
    where
        X: TraversalExtension<G::Vertex, G::Edge, Q>,
    {
        self.hooks
            .fire(&event, &HookContext::new(&self.state.colors))?;
        ext.on_event(&event, &mut self.state)
    }
}

impl<'h, G, Q> Observable<'h> for BreadthFirstSearch<'_, 'h, G, Q>
where
    G: GraphProvider,
{
    type Vertex = G::Vertex;
    type Edge = G::Edge;
    type Distance = ();

    fn hooks(&self) -> &EventHooks<'h, G::Vertex, G::Edge> {
        &self.hooks
    }

    fn hooks_mut(&mut self) -> &mut EventHooks<'h, G::Vertex, G::Edge> {
        &mut self.hooks
    }
}
