//! Distance relaxer policies
//!
//! A relaxer decides what "better" means for the shortest-path engine:
//! the no-path sentinel, the source distance, the improvement order and how
//! a prefix distance is extended by an edge weight or heuristic estimate.

use std::cmp::Ordering;
use std::fmt::Debug;

pub trait DistanceRelaxer: Clone {
    type Distance: Copy + PartialOrd + Debug;

    /// Distance of a vertex no path has reached yet.
    fn initial_distance(&self) -> Self::Distance;

    /// Distance of a search source.
    fn zero(&self) -> Self::Distance;

    /// `Less` when `a` is a strict improvement over `b`.
    fn compare(&self, a: Self::Distance, b: Self::Distance) -> Ordering;

    fn combine(&self, a: Self::Distance, b: Self::Distance) -> Self::Distance;
}

/// Minimise the sum of weights: `(min, +)` with `+inf` as "no path".
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestDistanceRelaxer;

impl DistanceRelaxer for ShortestDistanceRelaxer {
    type Distance = f64;

    fn initial_distance(&self) -> f64 {
        f64::INFINITY
    }

    fn zero(&self) -> f64 {
        0.0
    }

    fn compare(&self, a: f64, b: f64) -> Ordering {
        a.total_cmp(&b)
    }

    fn combine(&self, a: f64, b: f64) -> f64 {
        a + b
    }
}

/// Maximise the sum of weights: `(max, +)` with `-inf` as "no path".
#[derive(Debug, Clone, Copy, Default)]
pub struct LongestDistanceRelaxer;

impl DistanceRelaxer for LongestDistanceRelaxer {
    type Distance = f64;

    fn initial_distance(&self) -> f64 {
        f64::NEG_INFINITY
    }

    fn zero(&self) -> f64 {
        0.0
    }

    fn compare(&self, a: f64, b: f64) -> Ordering {
        b.total_cmp(&a)
    }

    fn combine(&self, a: f64, b: f64) -> f64 {
        a + b
    }
}
