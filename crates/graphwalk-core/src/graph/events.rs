//! Traversal event protocol
//!
//! A fixed set of hooks fired synchronously at well-defined points of a
//! traversal. Subscribers are called in registration order and observe the
//! engine state exactly as of the firing point, through a read-only
//! [`HookContext`].

use std::cell::Cell;
use std::fmt;
use std::hash::Hash;

use serde::Serialize;

use super::maps::{ColorMap, DistanceMap};
use super::types::Color;
use crate::error::Result;

/// Named traversal hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    InitializeVertex,
    StartVertex,
    DiscoverVertex,
    ExamineVertex,
    ExamineEdge,
    TreeEdge,
    NonTreeEdge,
    /// Target re-discovered while still on the frontier
    GrayTarget,
    /// Target re-discovered after it was finished
    BlackTarget,
    FinishVertex,
    EdgeNotRelaxed,
}

impl EventKind {
    pub const ALL: [EventKind; 11] = [
        EventKind::InitializeVertex,
        EventKind::StartVertex,
        EventKind::DiscoverVertex,
        EventKind::ExamineVertex,
        EventKind::ExamineEdge,
        EventKind::TreeEdge,
        EventKind::NonTreeEdge,
        EventKind::GrayTarget,
        EventKind::BlackTarget,
        EventKind::FinishVertex,
        EventKind::EdgeNotRelaxed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::InitializeVertex => "initialize_vertex",
            EventKind::StartVertex => "start_vertex",
            EventKind::DiscoverVertex => "discover_vertex",
            EventKind::ExamineVertex => "examine_vertex",
            EventKind::ExamineEdge => "examine_edge",
            EventKind::TreeEdge => "tree_edge",
            EventKind::NonTreeEdge => "non_tree_edge",
            EventKind::GrayTarget => "gray_target",
            EventKind::BlackTarget => "black_target",
            EventKind::FinishVertex => "finish_vertex",
            EventKind::EdgeNotRelaxed => "edge_not_relaxed",
        }
    }

    /// Whether the hook carries an edge payload (otherwise a vertex).
    pub fn carries_edge(self) -> bool {
        matches!(
            self,
            EventKind::ExamineEdge
                | EventKind::TreeEdge
                | EventKind::NonTreeEdge
                | EventKind::GrayTarget
                | EventKind::BlackTarget
                | EventKind::EdgeNotRelaxed
        )
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event payload.
///
/// Edge payloads carry the vertex being expanded (`from`) and the resolved
/// opposite endpoint (`to`), which for undirected graphs may differ from the
/// edge's own source and target.
#[derive(Debug)]
pub enum Payload<'a, V, E> {
    Vertex(&'a V),
    Edge { edge: &'a E, from: &'a V, to: &'a V },
}

impl<V, E> Clone for Payload<'_, V, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V, E> Copy for Payload<'_, V, E> {}

/// A single hook firing.
#[derive(Debug)]
pub struct Event<'a, V, E> {
    pub kind: EventKind,
    pub payload: Payload<'a, V, E>,
}

impl<V, E> Clone for Event<'_, V, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V, E> Copy for Event<'_, V, E> {}

impl<'a, V, E> Event<'a, V, E> {
    pub fn vertex(kind: EventKind, vertex: &'a V) -> Self {
        debug_assert!(!kind.carries_edge(), "{kind} carries an edge payload");
        Self {
            kind,
            payload: Payload::Vertex(vertex),
        }
    }

    pub fn edge(kind: EventKind, edge: &'a E, from: &'a V, to: &'a V) -> Self {
        debug_assert!(kind.carries_edge(), "{kind} carries a vertex payload");
        Self {
            kind,
            payload: Payload::Edge { edge, from, to },
        }
    }

    /// Re-label the event, keeping its payload.
    pub fn with_kind(self, kind: EventKind) -> Self {
        Self { kind, ..self }
    }

    pub fn as_vertex(&self) -> Option<&'a V> {
        match self.payload {
            Payload::Vertex(v) => Some(v),
            Payload::Edge { .. } => None,
        }
    }

    pub fn as_edge(&self) -> Option<&'a E> {
        match self.payload {
            Payload::Edge { edge, .. } => Some(edge),
            Payload::Vertex(_) => None,
        }
    }

    /// Resolved `(from, to)` endpoints of an edge event.
    pub fn endpoints(&self) -> Option<(&'a V, &'a V)> {
        match self.payload {
            Payload::Edge { from, to, .. } => Some((from, to)),
            Payload::Vertex(_) => None,
        }
    }
}

/// Read-only view of the engine state handed to every subscriber.
pub struct HookContext<'a, V, D = ()> {
    colors: &'a ColorMap<V>,
    distances: Option<&'a DistanceMap<V, D>>,
    detach: Cell<bool>,
}

impl<'a, V, D> HookContext<'a, V, D> {
    pub fn new(colors: &'a ColorMap<V>) -> Self {
        Self {
            colors,
            distances: None,
            detach: Cell::new(false),
        }
    }

    pub fn with_distances(colors: &'a ColorMap<V>, distances: &'a DistanceMap<V, D>) -> Self {
        Self {
            colors,
            distances: Some(distances),
            detach: Cell::new(false),
        }
    }

    pub fn colors(&self) -> &'a ColorMap<V> {
        self.colors
    }

    /// Distances, when the firing engine tracks them.
    pub fn distances(&self) -> Option<&'a DistanceMap<V, D>> {
        self.distances
    }

    /// Detach the handler currently running once this dispatch finishes.
    pub fn detach(&self) {
        self.detach.set(true);
    }
}

impl<V: Eq + Hash, D: Copy> HookContext<'_, V, D> {
    pub fn color(&self, vertex: &V) -> Color {
        self.colors.get(vertex)
    }

    pub fn distance(&self, vertex: &V) -> Option<D> {
        self.distances.and_then(|d| d.get(vertex))
    }
}

/// Handle returned by a subscription, used to detach it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Handler<'h, V, E, D> =
    Box<dyn FnMut(&Event<'_, V, E>, &HookContext<'_, V, D>) -> Result<()> + 'h>;

struct Slot<'h, V, E, D> {
    id: SubscriptionId,
    /// `None` receives every hook.
    kind: Option<EventKind>,
    handler: Handler<'h, V, E, D>,
}

/// Registry of hook subscribers for one engine instance.
pub struct EventHooks<'h, V, E, D = ()> {
    next_id: u64,
    slots: Vec<Slot<'h, V, E, D>>,
}

impl<'h, V, E, D> EventHooks<'h, V, E, D> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            slots: Vec::new(),
        }
    }

    /// Subscribe to a single hook.
    pub fn subscribe<F>(&mut self, kind: EventKind, handler: F) -> SubscriptionId
    where
        F: FnMut(&Event<'_, V, E>, &HookContext<'_, V, D>) -> Result<()> + 'h,
    {
        self.insert(Some(kind), Box::new(handler))
    }

    /// Subscribe to every hook.
    pub fn subscribe_all<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&Event<'_, V, E>, &HookContext<'_, V, D>) -> Result<()> + 'h,
    {
        self.insert(None, Box::new(handler))
    }

    fn insert(&mut self, kind: Option<EventKind>, handler: Handler<'h, V, E, D>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.slots.push(Slot { id, kind, handler });
        id
    }

    /// Detach a subscription. Returns `false` if it was not attached.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.slots.len();
        self.slots.retain(|slot| slot.id != id);
        self.slots.len() != before
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Whether anyone listens to `kind`.
    pub fn has_subscribers(&self, kind: EventKind) -> bool {
        self.slots
            .iter()
            .any(|slot| slot.kind.is_none_or(|k| k == kind))
    }

    /// Deliver `event` to its subscribers in registration order.
    ///
    /// The first handler error stops delivery and is returned. Handlers that
    /// called [`HookContext::detach`] are removed after the loop, so the
    /// remaining handlers of this dispatch still run.
    pub fn fire(&mut self, event: &Event<'_, V, E>, ctx: &HookContext<'_, V, D>) -> Result<()> {
        let mut detached = Vec::new();
        let mut result = Ok(());

        for slot in &mut self.slots {
            if slot.kind.is_some_and(|k| k != event.kind) {
                continue;
            }
            ctx.detach.set(false);
            let outcome = (slot.handler)(event, ctx);
            if ctx.detach.get() {
                detached.push(slot.id);
            }
            if let Err(e) = outcome {
                result = Err(e);
                break;
            }
        }
        ctx.detach.set(false);

        if !detached.is_empty() {
            self.slots.retain(|slot| !detached.contains(&slot.id));
        }
        result
    }
}

impl<V, E, D> Default for EventHooks<'_, V, E, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E, D> fmt::Debug for EventHooks<'_, V, E, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHooks")
            .field("subscribers", &self.slots.len())
            .finish()
    }
}

/// An engine that exposes its hook registry.
pub trait Observable<'h> {
    type Vertex;
    type Edge;
    type Distance;

    fn hooks(&self) -> &EventHooks<'h, Self::Vertex, Self::Edge, Self::Distance>;

    fn hooks_mut(&mut self) -> &mut EventHooks<'h, Self::Vertex, Self::Edge, Self::Distance>;

    /// Attach `handler` to every hook for the duration of `run`.
    ///
    /// The handler is detached whether `run` succeeds or fails.
    fn with_observer<F, T>(&mut self, handler: F, run: impl FnOnce(&mut Self) -> Result<T>) -> Result<T>
    where
        Self: Sized,
        F: FnMut(
                &Event<'_, Self::Vertex, Self::Edge>,
                &HookContext<'_, Self::Vertex, Self::Distance>,
            ) -> Result<()>
            + 'h,
    {
        let id = self.hooks_mut().subscribe_all(handler);
        let result = run(self);
        self.hooks_mut().unsubscribe(id);
        result
    }
}

#[cfg(test)]
mod tests;
