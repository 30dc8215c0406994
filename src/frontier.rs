//! Open-set implementations shared by the search drivers.
//!
//! A* and Dijkstra use a priority queue keyed by `f = g + h`, tie-broken by insertion order.
//! BFS uses a FIFO queue, DFS uses a LIFO stack. All three record vertices rather than whole
//! states: the concrete state always lives in the [`crate::state_table::StateTable`].

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use crate::state_table::VertexId;

/// Priority frontier keyed by `(estimated_cost, insertion_sequence)`, used by A* (with a real
/// heuristic) and Dijkstra (heuristic pinned to zero by the caller).
///
/// Mirrors the `SmallestCostHolder`/`SmallestHolder` comparator idiom: `BinaryHeap` is a
/// max-heap, so the `Ord` impl on the held entries is inverted to make the smallest estimated
/// cost (and, on ties, the earliest insertion) compare as the greatest.
pub struct PriorityFrontier {
    heap: BinaryHeap<Entry>,
    next_sequence: u64,
}

struct Entry {
    estimated_cost: u64,
    sequence: u64,
    vertex: VertexId,
    g_snapshot: u64,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost == other.estimated_cost && self.sequence == other.sequence
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .estimated_cost
            .cmp(&self.estimated_cost)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// A vertex popped from a [`PriorityFrontier`], carrying the `g` value it was pushed with so
/// the caller can detect and skip stale entries.
pub struct PoppedEntry {
    pub vertex: VertexId,
    pub g_snapshot: u64,
}

impl PriorityFrontier {
    /// Creates an empty frontier.
    #[must_use]
    pub fn new() -> Self {
        PriorityFrontier {
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }

    /// Pushes `vertex` with cost-from-start `g` and heuristic `h`; `g` is kept alongside the key
    /// so a later pop can detect whether this entry is still the current best known path to
    /// `vertex`.
    pub fn push(&mut self, vertex: VertexId, g: u64, h: u64) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(Entry {
            estimated_cost: g + h,
            sequence,
            vertex,
            g_snapshot: g,
        });
    }

    /// Pops the vertex with the smallest `f = g + h`, breaking ties by insertion order.
    pub fn pop(&mut self) -> Option<PoppedEntry> {
        self.heap.pop().map(|entry| PoppedEntry {
            vertex: entry.vertex,
            g_snapshot: entry.g_snapshot,
        })
    }
}

impl Default for PriorityFrontier {
    fn default() -> Self {
        Self::new()
    }
}

/// FIFO frontier used by breadth-first search.
pub struct FifoFrontier {
    queue: VecDeque<VertexId>,
}

impl FifoFrontier {
    /// Creates an empty frontier.
    #[must_use]
    pub fn new() -> Self {
        FifoFrontier {
            queue: VecDeque::new(),
        }
    }

    /// Enqueues `vertex`.
    pub fn push(&mut self, vertex: VertexId) {
        self.queue.push_back(vertex);
    }

    /// Dequeues the oldest pushed vertex.
    pub fn pop(&mut self) -> Option<VertexId> {
        self.queue.pop_front()
    }
}

impl Default for FifoFrontier {
    fn default() -> Self {
        Self::new()
    }
}

/// LIFO frontier used by depth-first search.
pub struct LifoFrontier {
    stack: Vec<VertexId>,
}

impl LifoFrontier {
    /// Creates an empty frontier.
    #[must_use]
    pub fn new() -> Self {
        LifoFrontier { stack: Vec::new() }
    }

    /// Pushes `vertex` on top of the stack.
    pub fn push(&mut self, vertex: VertexId) {
        self.stack.push(vertex);
    }

    /// Pops the most recently pushed vertex.
    pub fn pop(&mut self) -> Option<VertexId> {
        self.stack.pop()
    }
}

impl Default for LifoFrontier {
    fn default() -> Self {
        Self::new()
    }
}
