//! Ready-made subscribers
//!
//! Recording predecessors or an event trace is not part of the engines;
//! these observers listen to the hooks like any other caller would.

use std::collections::HashMap;
use std::hash::Hash;

use super::events::{Event, EventKind, HookContext, Payload};
use crate::error::Result;

/// Predecessor tree recovered from `TreeEdge` events.
///
/// A later tree edge into the same vertex replaces the earlier parent, which
/// is what a shortest-path relaxation means.
#[derive(Debug, Clone, Default)]
pub struct PredecessorMap<V> {
    parents: HashMap<V, V>,
}

impl<V> PredecessorMap<V>
where
    V: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            parents: HashMap::new(),
        }
    }

    pub fn record<E>(&mut self, event: &Event<'_, V, E>) {
        if event.kind != EventKind::TreeEdge {
            return;
        }
        if let Some((from, to)) = event.endpoints() {
            self.parents.insert(to.clone(), from.clone());
        }
    }

    /// Handler suitable for `subscribe`, `subscribe_all` or `with_observer`.
    pub fn recorder<'a, E, D>(
        &'a mut self,
    ) -> impl FnMut(&Event<'_, V, E>, &HookContext<'_, V, D>) -> Result<()> + 'a {
        move |event, _| {
            self.record(event);
            Ok(())
        }
    }

    pub fn parent(&self, vertex: &V) -> Option<&V> {
        self.parents.get(vertex)
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Path from the tree root down to `target`, both inclusive.
    ///
    /// A vertex with no recorded parent is its own root, so a root yields a
    /// one-element path. Returns `None` if the parent chain loops.
    pub fn path_to(&self, target: &V) -> Option<Vec<V>> {
        let mut path = vec![target.clone()];
        let mut current = target;
        while let Some(parent) = self.parents.get(current) {
            if path.len() > self.parents.len() {
                return None;
            }
            path.push(parent.clone());
            current = parent;
        }
        path.reverse();
        Some(path)
    }
}

/// One recorded hook firing. Edge events record their resolved endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggedEvent<V> {
    pub kind: EventKind,
    pub vertex: V,
    pub from: Option<V>,
}

/// Ordered trace of every event seen.
#[derive(Debug, Clone, Default)]
pub struct EventLog<V> {
    events: Vec<LoggedEvent<V>>,
}

impl<V: Clone + PartialEq> EventLog<V> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn record<E>(&mut self, event: &Event<'_, V, E>) {
        let logged = match event.payload {
            Payload::Vertex(v) => LoggedEvent {
                kind: event.kind,
                vertex: v.clone(),
                from: None,
            },
            Payload::Edge { from, to, .. } => LoggedEvent {
                kind: event.kind,
                vertex: to.clone(),
                from: Some(from.clone()),
            },
        };
        self.events.push(logged);
    }

    pub fn recorder<'a, E, D>(
        &'a mut self,
    ) -> impl FnMut(&Event<'_, V, E>, &HookContext<'_, V, D>) -> Result<()> + 'a {
        move |event, _| {
            self.record(event);
            Ok(())
        }
    }

    pub fn events(&self) -> &[LoggedEvent<V>] {
        &self.events
    }

    pub fn kinds(&self) -> Vec<EventKind> {
        self.events.iter().map(|e| e.kind).collect()
    }

    /// Vertices (edge targets for edge hooks) of every `kind` event, in order.
    pub fn vertices(&self, kind: EventKind) -> Vec<V> {
        self.events
            .iter()
            .filter(|e| e.kind == kind)
            .map(|e| e.vertex.clone())
            .collect()
    }

    /// `(from, to)` pairs of every `kind` edge event, in order.
    pub fn edges(&self, kind: EventKind) -> Vec<(V, V)> {
        self.events
            .iter()
            .filter(|e| e.kind == kind)
            .filter_map(|e| e.from.clone().map(|from| (from, e.vertex.clone())))
            .collect()
    }

    pub fn count(&self, kind: EventKind) -> usize {
        self.events.iter().filter(|e| e.kind == kind).count()
    }

    /// Whether `vertex` was seen by a `kind` event.
    pub fn contains(&self, kind: EventKind, vertex: &V) -> bool {
        self.events
            .iter()
            .any(|e| e.kind == kind && e.vertex == *vertex)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::adjacency::Edge;

    #[test]
    fn test_path_to_follows_latest_parent() {
        let ab = Edge::new("A", "B");
        let ac = Edge::new("A", "C");
        let bc = Edge::new("B", "C");

        let mut preds = PredecessorMap::new();
        preds.record(&Event::edge(EventKind::TreeEdge, &ab, &"A", &"B"));
        preds.record(&Event::edge(EventKind::TreeEdge, &ac, &"A", &"C"));
        preds.record(&Event::edge(EventKind::TreeEdge, &bc, &"B", &"C"));

        assert_eq!(preds.parent(&"C"), Some(&"B"));
        assert_eq!(preds.path_to(&"C"), Some(vec!["A", "B", "C"]));
        assert_eq!(preds.path_to(&"A"), Some(vec!["A"]));
    }

    #[test]
    fn test_non_tree_events_are_ignored() {
        let ab = Edge::new("A", "B");
        let mut preds = PredecessorMap::new();
        preds.record(&Event::edge(EventKind::EdgeNotRelaxed, &ab, &"A", &"B"));
        preds.record::<Edge<&str>>(&Event::vertex(EventKind::DiscoverVertex, &"A"));
        assert!(preds.is_empty());
    }

    #[test]
    fn test_path_to_detects_cycle() {
        let ab = Edge::new("A", "B");
        let ba = Edge::new("B", "A");
        let mut preds = PredecessorMap::new();
        preds.record(&Event::edge(EventKind::TreeEdge, &ab, &"A", &"B"));
        preds.record(&Event::edge(EventKind::TreeEdge, &ba, &"B", &"A"));
        assert_eq!(preds.path_to(&"A"), None);
    }

    #[test]
    fn test_event_log_queries() {
        let ab = Edge::new("A", "B");
        let mut log = EventLog::new();
        log.record::<Edge<&str>>(&Event::vertex(EventKind::DiscoverVertex, &"A"));
        log.record(&Event::edge(EventKind::TreeEdge, &ab, &"A", &"B"));
        log.record::<Edge<&str>>(&Event::vertex(EventKind::DiscoverVertex, &"B"));

        assert_eq!(log.vertices(EventKind::DiscoverVertex), vec!["A", "B"]);
        assert_eq!(log.edges(EventKind::TreeEdge), vec![("A", "B")]);
        assert_eq!(log.count(EventKind::TreeEdge), 1);
        assert!(log.contains(EventKind::TreeEdge, &"B"));
        assert_eq!(
            log.kinds(),
            vec![
                EventKind::DiscoverVertex,
                EventKind::TreeEdge,
                EventKind::DiscoverVertex
            ]
        );
    }
}
