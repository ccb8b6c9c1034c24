use super::events::Event;
use super::maps::ColorMap;
use crate::error::Result;

/// Engine-owned traversal state: the color map plus the frontier queue.
#[derive(Debug, Clone)]
pub struct SearchState<V, Q> {
    pub(crate) colors: ColorMap<V>,
    pub(crate) queue: Q,
}

impl<V, Q> SearchState<V, Q> {
    pub fn new(colors: ColorMap<V>, queue: Q) -> Self {
        Self { colors, queue }
    }

    pub fn colors(&self) -> &ColorMap<V> {
        &self.colors
    }

    pub fn colors_mut(&mut self) -> &mut ColorMap<V> {
        &mut self.colors
    }

    pub fn queue(&self) -> &Q {
        &self.queue
    }

    pub fn queue_mut(&mut self) -> &mut Q {
        &mut self.queue
    }
}

/// Behaviour attached to a traversal for exactly one call.
///
/// Plain subscribers only read engine state. An extension receives every
/// event after them together with mutable access to the colors and queue;
/// this is how A* drives relaxation through the breadth-first loop. The
/// extension is borrowed by the call, so it is detached when the call
/// returns on any path.
pub trait TraversalExtension<V, E, Q> {
    fn on_event(&mut self, event: &Event<'_, V, E>, state: &mut SearchState<V, Q>) -> Result<()>;
}

/// Extension that does nothing; used by the plain traversal entry points.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoExtension;

impl<V, E, Q> TraversalExtension<V, E, Q> for NoExtension {
    fn on_event(&mut self, _event: &Event<'_, V, E>, _state: &mut SearchState<V, Q>) -> Result<()> {
        Ok(())
    }
}
