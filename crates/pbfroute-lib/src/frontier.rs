//! Min-priority frontier for Dijkstra-style searches.
//!
//! The frontier is a binary heap keyed on tentative distance. It tolerates
//! several entries for the same node: callers push a fresh entry whenever a
//! shorter distance is found and discard stale entries when they are popped
//! ("lazy decrease-key"). The frontier has no notion of settled nodes.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::graph::NodeId;

/// Entry popped from a [`Frontier`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FrontierEntry {
    pub node: NodeId,
    pub distance: f64,
}

/// Growable min-heap of `(node, distance)` entries.
#[derive(Debug, Default, Clone)]
pub struct Frontier {
    heap: BinaryHeap<QueueEntry>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry in O(log n). Duplicate nodes are allowed.
    pub fn push(&mut self, node: NodeId, distance: f64) {
        self.heap.push(QueueEntry::new(node, distance));
    }

    /// Remove and return the entry with the smallest distance.
    ///
    /// Entries with equal distance pop in ascending node order.
    pub fn pop_min(&mut self) -> Option<FrontierEntry> {
        self.heap.pop().map(|entry| FrontierEntry {
            node: entry.node,
            distance: entry.cost.0,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of queued entries, stale ones included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: NodeId,
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(node: NodeId, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(frontier: &mut Frontier) -> Vec<(NodeId, f64)> {
        std::iter::from_fn(|| frontier.pop_min())
            .map(|entry| (entry.node, entry.distance))
            .collect()
    }

    #[test]
    fn pops_in_ascending_distance_order() {
        let mut frontier = Frontier::new();
        frontier.push(3, 7.5);
        frontier.push(1, 0.5);
        frontier.push(2, 3.0);

        assert_eq!(drain(&mut frontier), vec![(1, 0.5), (2, 3.0), (3, 7.5)]);
        assert!(frontier.is_empty());
    }

    #[test]
    fn keeps_duplicate_entries_for_the_same_node() {
        let mut frontier = Frontier::new();
        frontier.push(4, 10.0);
        frontier.push(4, 2.0);

        assert_eq!(frontier.len(), 2);
        assert_eq!(drain(&mut frontier), vec![(4, 2.0), (4, 10.0)]);
    }

    #[test]
    fn equal_distances_pop_smaller_node_first() {
        let mut frontier = Frontier::new();
        frontier.push(9, 1.0);
        frontier.push(2, 1.0);
        frontier.push(5, 1.0);

        assert_eq!(drain(&mut frontier), vec![(2, 1.0), (5, 1.0), (9, 1.0)]);
    }

    #[test]
    fn many_entries_pop_in_distance_order() {
        let mut frontier = Frontier::new();
        for node in 0..100 {
            frontier.push(node, (100 - node) as f64);
        }

        assert_eq!(frontier.len(), 100);
        assert_eq!(frontier.pop_min().map(|entry| entry.node), Some(99));
    }

    #[test]
    fn empty_frontier_pops_nothing() {
        let mut frontier = Frontier::new();
        assert!(frontier.pop_min().is_none());
    }
}
