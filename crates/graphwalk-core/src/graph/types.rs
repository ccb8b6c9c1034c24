use serde::Serialize;

/// Visitation state of a vertex during a traversal.
///
/// Within one component visit a vertex moves `Unvisited -> Frontier ->
/// Finished`; only A* may move a finished vertex back to `Frontier`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// Not yet discovered (white)
    #[default]
    Unvisited,
    /// Discovered and queued (gray)
    Frontier,
    /// Fully expanded (black)
    Finished,
}

/// How a traversal call ended.
///
/// Cancellation is not an error: an aborted run leaves colors and
/// distances in a consistent but partial state that callers may still read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Completed,
    Aborted,
}

impl Outcome {
    pub fn is_completed(self) -> bool {
        self == Outcome::Completed
    }

    pub fn is_aborted(self) -> bool {
        self == Outcome::Aborted
    }
}
