use super::*;
use crate::error::GraphError;
use crate::graph::adjacency::Edge;

type Hooks<'h> = EventHooks<'h, &'static str, Edge<&'static str>>;

#[test]
fn test_event_kind_payload_split() {
    let edge_kinds = EventKind::ALL
        .iter()
        .filter(|k| k.carries_edge())
        .count();
    assert_eq!(EventKind::ALL.len(), 11);
    assert_eq!(edge_kinds, 6);
    assert_eq!(EventKind::GrayTarget.to_string(), "gray_target");
}

#[test]
fn test_handlers_run_in_registration_order() {
    let colors = ColorMap::new();
    let mut order = Vec::new();
    {
        let order = std::cell::RefCell::new(&mut order);
        let mut hooks: Hooks<'_> = EventHooks::new();
        hooks.subscribe(EventKind::DiscoverVertex, |_, _| {
            order.borrow_mut().push("first");
            Ok(())
        });
        hooks.subscribe_all(|_, _| {
            order.borrow_mut().push("second");
            Ok(())
        });
        hooks.subscribe(EventKind::DiscoverVertex, |_, _| {
            order.borrow_mut().push("third");
            Ok(())
        });

        let ctx = HookContext::new(&colors);
        hooks
            .fire(&Event::vertex(EventKind::DiscoverVertex, &"A"), &ctx)
            .unwrap();
        hooks
            .fire(&Event::vertex(EventKind::FinishVertex, &"A"), &ctx)
            .unwrap();
    }
    assert_eq!(order, vec!["first", "second", "third", "second"]);
}

#[test]
fn test_detach_during_own_invocation() {
    let colors = ColorMap::new();
    let mut calls = 0;
    let mut later = 0;
    {
        let mut hooks: Hooks<'_> = EventHooks::new();
        hooks.subscribe_all(|_, ctx| {
            calls += 1;
            ctx.detach();
            Ok(())
        });
        hooks.subscribe_all(|_, _| {
            later += 1;
            Ok(())
        });

        let ctx = HookContext::new(&colors);
        let event = Event::vertex(EventKind::StartVertex, &"A");
        hooks.fire(&event, &ctx).unwrap();
        assert_eq!(hooks.len(), 1);
        hooks.fire(&event, &ctx).unwrap();
    }
    assert_eq!(calls, 1);
    assert_eq!(later, 2);
}

#[test]
fn test_handler_error_stops_delivery() {
    let colors = ColorMap::new();
    let mut reached = false;
    {
        let mut hooks: Hooks<'_> = EventHooks::new();
        hooks.subscribe_all(|_, _| Err(GraphError::Other("stop".into())));
        hooks.subscribe_all(|_, _| {
            reached = true;
            Ok(())
        });

        let ctx = HookContext::new(&colors);
        let err = hooks
            .fire(&Event::vertex(EventKind::StartVertex, &"A"), &ctx)
            .unwrap_err();
        assert_eq!(err.to_string(), "stop");
    }
    assert!(!reached);
}

#[test]
fn test_unsubscribe() {
    let mut hooks: Hooks<'_> = EventHooks::new();
    let id = hooks.subscribe(EventKind::TreeEdge, |_, _| Ok(()));
    assert!(hooks.has_subscribers(EventKind::TreeEdge));
    assert!(!hooks.has_subscribers(EventKind::GrayTarget));

    assert!(hooks.unsubscribe(id));
    assert!(!hooks.unsubscribe(id));
    assert!(hooks.is_empty());
}

#[test]
fn test_context_reads_state_at_firing_point() {
    let mut colors = ColorMap::new();
    colors.set("A", Color::Frontier);
    let mut distances = DistanceMap::new();
    distances.set("A", 3.5);

    let mut seen = None;
    {
        let mut hooks: EventHooks<'_, &str, Edge<&str>, f64> = EventHooks::new();
        hooks.subscribe(EventKind::ExamineVertex, |event, ctx| {
            let v = event.as_vertex().unwrap();
            seen = Some((ctx.color(v), ctx.distance(v)));
            Ok(())
        });
        let ctx = HookContext::with_distances(&colors, &distances);
        hooks
            .fire(&Event::vertex(EventKind::ExamineVertex, &"A"), &ctx)
            .unwrap();
    }
    assert_eq!(seen, Some((Color::Frontier, Some(3.5))));
}

#[test]
fn test_edge_event_accessors() {
    let edge = Edge::new("A", "B");
    let event: Event<'_, &str, Edge<&str>> = Event::edge(EventKind::TreeEdge, &edge, &"B", &"A");
    assert_eq!(event.as_edge(), Some(&edge));
    assert_eq!(event.endpoints(), Some((&"B", &"A")));
    assert!(event.as_vertex().is_none());

    let relabeled = event.with_kind(EventKind::EdgeNotRelaxed);
    assert_eq!(relabeled.kind, EventKind::EdgeNotRelaxed);
    assert_eq!(relabeled.as_edge(), Some(&edge));
}
