//! Frontier queues
//!
//! BFS expands its frontier first-in first-out; A* swaps in [`CostQueue`],
//! an indexed binary heap ordered by a relaxer over per-vertex costs.

use std::cmp::Ordering;
use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

use super::maps::DistanceMap;
use super::relaxer::DistanceRelaxer;

/// Queue of frontier vertices driving a traversal.
pub trait VertexQueue<V> {
    fn push(&mut self, vertex: V);
    fn pop(&mut self) -> Option<V>;
    fn len(&self) -> usize;
    fn clear(&mut self);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// FIFO frontier for breadth-first order.
#[derive(Debug, Clone)]
pub struct FifoQueue<V> {
    items: VecDeque<V>,
}

impl<V> FifoQueue<V> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }
}

impl<V> Default for FifoQueue<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> VertexQueue<V> for FifoQueue<V> {
    fn push(&mut self, vertex: V) {
        self.items.push_back(vertex);
    }

    fn pop(&mut self) -> Option<V> {
        self.items.pop_front()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}

/// Min-queue keyed by per-vertex cost, best cost per the relaxer first.
///
/// The queue owns the cost map. A vertex's cost must be set before it is
/// pushed; lowering the cost of a queued vertex requires [`CostQueue::update`].
#[derive(Debug, Clone)]
pub struct CostQueue<V, R: DistanceRelaxer> {
    relaxer: R,
    costs: DistanceMap<V, R::Distance>,
    heap: Vec<V>,
    positions: HashMap<V, usize>,
}

impl<V, R> CostQueue<V, R>
where
    V: Clone + Eq + Hash,
    R: DistanceRelaxer,
{
    pub fn new(relaxer: R) -> Self {
        Self {
            relaxer,
            costs: DistanceMap::new(),
            heap: Vec::new(),
            positions: HashMap::new(),
        }
    }

    pub fn costs(&self) -> &DistanceMap<V, R::Distance> {
        &self.costs
    }

    /// Cost of `vertex`, or the relaxer's no-path value when unset.
    pub fn cost(&self, vertex: &V) -> R::Distance {
        self.costs
            .get(vertex)
            .unwrap_or_else(|| self.relaxer.initial_distance())
    }

    pub fn set_cost(&mut self, vertex: V, cost: R::Distance) {
        self.costs.set(vertex, cost);
    }

    pub fn reset_costs(&mut self) {
        self.costs.clear();
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.positions.contains_key(vertex)
    }

    pub fn peek(&self) -> Option<&V> {
        self.heap.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &V> {
        self.heap.iter()
    }

    /// Restore heap order after the cost of a queued vertex changed.
    ///
    /// Returns `false` if the vertex is not queued.
    pub fn update(&mut self, vertex: &V) -> bool {
        let Some(&index) = self.positions.get(vertex) else {
            return false;
        };
        let index = self.sift_up(index);
        self.sift_down(index);
        true
    }

    /// Whether the head holds a cost at least as good as every queued vertex.
    pub fn is_heap_ordered(&self) -> bool {
        let Some(top) = self.heap.first() else {
            return true;
        };
        let top_cost = self.cost(top);
        self.heap
            .iter()
            .all(|v| self.relaxer.compare(top_cost, self.cost(v)) != Ordering::Greater)
    }

    fn better(&self, a: usize, b: usize) -> bool {
        self.relaxer
            .compare(self.cost(&self.heap[a]), self.cost(&self.heap[b]))
            == Ordering::Less
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions.insert(self.heap[a].clone(), a);
        self.positions.insert(self.heap[b].clone(), b);
    }

    fn sift_up(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.better(index, parent) {
                break;
            }
            self.swap(index, parent);
            index = parent;
        }
        index
    }

    fn sift_down(&mut self, mut index: usize) {
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut best = index;
            if left < self.heap.len() && self.better(left, best) {
                best = left;
            }
            if right < self.heap.len() && self.better(right, best) {
                best = right;
            }
            if best == index {
                break;
            }
            self.swap(index, best);
            index = best;
        }
    }
}

impl<V, R> VertexQueue<V> for CostQueue<V, R>
where
    V: Clone + Eq + Hash,
    R: DistanceRelaxer,
{
    /// Queue `vertex`; a vertex already queued is re-sifted instead.
    fn push(&mut self, vertex: V) {
        if self.update(&vertex) {
            return;
        }
        let index = self.heap.len();
        self.positions.insert(vertex.clone(), index);
        self.heap.push(vertex);
        self.sift_up(index);
    }

    fn pop(&mut self) -> Option<V> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let top = self.heap.pop()?;
        self.positions.remove(&top);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(top)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn clear(&mut self) {
        self.heap.clear();
        self.positions.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::relaxer::{LongestDistanceRelaxer, ShortestDistanceRelaxer};

    fn drain<R: DistanceRelaxer>(queue: &mut CostQueue<&'static str, R>) -> Vec<&'static str> {
        std::iter::from_fn(|| queue.pop()).collect()
    }

    #[test]
    fn test_fifo_order() {
        let mut queue = FifoQueue::new();
        queue.push(1);
        queue.push(2);
        queue.push(3);
        assert_eq!(queue.pop(), Some(1));
        assert_eq!(queue.len(), 2);
        queue.clear();
        assert!(queue.is_empty());
    }

    #[test]
    fn test_cost_queue_pops_cheapest_first() {
        let mut queue = CostQueue::new(ShortestDistanceRelaxer);
        for (v, c) in [("A", 4.0), ("B", 1.0), ("C", 3.0), ("D", 2.0)] {
            queue.set_cost(v, c);
            queue.push(v);
        }
        assert_eq!(queue.peek(), Some(&"B"));
        assert_eq!(drain(&mut queue), vec!["B", "D", "C", "A"]);
    }

    #[test]
    fn test_cost_queue_update_after_decrease() {
        let mut queue = CostQueue::new(ShortestDistanceRelaxer);
        for (v, c) in [("A", 1.0), ("B", 5.0), ("C", 6.0)] {
            queue.set_cost(v, c);
            queue.push(v);
        }
        queue.set_cost("C", 0.5);
        assert!(!queue.is_heap_ordered());
        assert!(queue.update(&"C"));
        assert!(queue.is_heap_ordered());
        assert_eq!(drain(&mut queue), vec!["C", "A", "B"]);
        assert!(!queue.update(&"C"));
    }

    #[test]
    fn test_cost_queue_push_twice_keeps_one_entry() {
        let mut queue = CostQueue::new(ShortestDistanceRelaxer);
        queue.set_cost("A", 2.0);
        queue.push("A");
        queue.push("A");
        assert_eq!(queue.len(), 1);
        assert!(queue.contains(&"A"));
    }

    #[test]
    fn test_cost_queue_longest_relaxer_pops_largest() {
        let mut queue = CostQueue::new(LongestDistanceRelaxer);
        for (v, c) in [("A", 1.0), ("B", 3.0), ("C", 2.0)] {
            queue.set_cost(v, c);
            queue.push(v);
        }
        assert_eq!(drain(&mut queue), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_unset_cost_sorts_last() {
        let mut queue = CostQueue::new(ShortestDistanceRelaxer);
        queue.push("X");
        queue.set_cost("A", 10.0);
        queue.push("A");
        assert_eq!(queue.cost(&"X"), f64::INFINITY);
        assert_eq!(drain(&mut queue), vec!["A", "X"]);
    }
}
