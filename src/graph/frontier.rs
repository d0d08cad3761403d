//! Frontier containers.
//!
//! One container per ordering discipline: FIFO queue (BFS), LIFO stack
//! (DFS) and a min-priority queue (UCS, Greedy, A*). The priority queue is
//! stable: among equal keys, items pop in insertion order.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use super::config::Strategy;

/// Discovered-but-not-yet-expanded items, ordered by strategy.
#[derive(Debug)]
pub enum Frontier<T> {
    /// First in, first out.
    Fifo(VecDeque<T>),
    /// Last in, first out.
    Lifo(Vec<T>),
    /// Lowest key first; ties in insertion order.
    Priority {
        heap: BinaryHeap<Entry<T>>,
        next_seq: u64,
    },
}

impl<T> Frontier<T> {
    pub fn fifo() -> Self {
        Frontier::Fifo(VecDeque::new())
    }

    pub fn lifo() -> Self {
        Frontier::Lifo(Vec::new())
    }

    pub fn priority() -> Self {
        Frontier::Priority {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// The container matching `strategy`'s ordering discipline.
    pub fn for_strategy(strategy: Strategy) -> Self {
        match strategy {
            Strategy::BreadthFirst => Self::fifo(),
            Strategy::DepthFirst => Self::lifo(),
            Strategy::UniformCost | Strategy::Greedy | Strategy::AStar => Self::priority(),
        }
    }

    /// Adds an item. `key` is ignored by the FIFO and LIFO containers.
    pub fn push(&mut self, item: T, key: f64) {
        match self {
            Frontier::Fifo(queue) => queue.push_back(item),
            Frontier::Lifo(stack) => stack.push(item),
            Frontier::Priority { heap, next_seq } => {
                heap.push(Entry {
                    key,
                    seq: *next_seq,
                    item,
                });
                *next_seq += 1;
            }
        }
    }

    /// Removes the next item to expand.
    pub fn pop(&mut self) -> Option<T> {
        match self {
            Frontier::Fifo(queue) => queue.pop_front(),
            Frontier::Lifo(stack) => stack.pop(),
            Frontier::Priority { heap, .. } => heap.pop().map(|e| e.item),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Frontier::Fifo(queue) => queue.len(),
            Frontier::Lifo(stack) => stack.len(),
            Frontier::Priority { heap, .. } => heap.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A keyed priority-queue entry.
///
/// Ordered so that `BinaryHeap` (a max-heap) yields the lowest key first,
/// and the earliest insertion among equal keys.
#[derive(Debug)]
pub struct Entry<T> {
    key: f64,
    seq: u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .key
            .total_cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
