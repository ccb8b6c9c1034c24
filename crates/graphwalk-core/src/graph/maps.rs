use std::collections::HashMap;
use std::hash::Hash;

use super::types::Color;

/// Per-vertex visitation colors.
///
/// Pure storage: the engines enforce the color state machine. A vertex
/// that was never written reads as [`Color::Unvisited`].
#[derive(Debug, Clone)]
pub struct ColorMap<V> {
    colors: HashMap<V, Color>,
}

impl<V: Eq + Hash> ColorMap<V> {
    pub fn new() -> Self {
        Self {
            colors: HashMap::new(),
        }
    }

    pub fn get(&self, vertex: &V) -> Color {
        self.colors.get(vertex).copied().unwrap_or_default()
    }

    pub fn set(&mut self, vertex: V, color: Color) {
        self.colors.insert(vertex, color);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&V, Color)> {
        self.colors.iter().map(|(v, c)| (v, *c))
    }

    /// Number of vertices currently holding the given color.
    pub fn count(&self, color: Color) -> usize {
        self.colors.values().filter(|c| **c == color).count()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn clear(&mut self) {
        self.colors.clear();
    }
}

impl<V: Eq + Hash> Default for ColorMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Best-known distance per vertex, owned by the shortest-path engine.
#[derive(Debug, Clone)]
pub struct DistanceMap<V, D> {
    distances: HashMap<V, D>,
}

impl<V: Eq + Hash, D: Copy> DistanceMap<V, D> {
    pub fn new() -> Self {
        Self {
            distances: HashMap::new(),
        }
    }

    pub fn get(&self, vertex: &V) -> Option<D> {
        self.distances.get(vertex).copied()
    }

    pub fn set(&mut self, vertex: V, distance: D) {
        self.distances.insert(vertex, distance);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&V, D)> {
        self.distances.iter().map(|(v, d)| (v, *d))
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn clear(&mut self) {
        self.distances.clear();
    }
}

impl<V: Eq + Hash, D: Copy> Default for DistanceMap<V, D> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwritten_vertex_is_unvisited() {
        let colors: ColorMap<&str> = ColorMap::new();
        assert_eq!(colors.get(&"A"), Color::Unvisited);
        assert!(colors.is_empty());
    }

    #[test]
    fn test_color_count() {
        let mut colors = ColorMap::new();
        colors.set("A", Color::Finished);
        colors.set("B", Color::Frontier);
        colors.set("C", Color::Finished);
        assert_eq!(colors.count(Color::Finished), 2);
        assert_eq!(colors.count(Color::Unvisited), 0);

        colors.clear();
        assert_eq!(colors.get(&"A"), Color::Unvisited);
    }

    #[test]
    fn test_distance_overwrite() {
        let mut distances = DistanceMap::new();
        assert_eq!(distances.get(&"A"), None);
        distances.set("A", 4.0);
        distances.set("A", 2.0);
        assert_eq!(distances.get(&"A"), Some(2.0));
        assert_eq!(distances.len(), 1);
    }
}
