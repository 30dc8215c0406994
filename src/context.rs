//! The per-invocation bundle of state table, predecessor graph and goal bookkeeping.

use crate::predecessor::PredecessorGraph;
use crate::state_table::{StateTable, VertexId};

/// Everything a single `find_solution`-style call accumulates: the state table, the
/// predecessor graph, and which vertices (if any) turned out to be goals. Lives for exactly one
/// search; nothing here is global or reused across calls.
pub struct SearchContext<S> {
    pub(crate) table: StateTable<S>,
    pub(crate) graph: PredecessorGraph,
    pub(crate) goal_vertices: Vec<VertexId>,
    pub(crate) goal_distance: Option<u64>,
}

impl<S: crate::state::State> SearchContext<S> {
    pub(crate) fn new(seed: S, track_all_optimal: bool) -> (Self, VertexId) {
        let mut table = StateTable::new();
        let (start, _) = table.intern(seed);
        let graph = PredecessorGraph::new(track_all_optimal);
        (
            SearchContext {
                table,
                graph,
                goal_vertices: Vec::new(),
                goal_distance: None,
            },
            start,
        )
    }

    /// Records `v` as a goal vertex reached at cost `g[v]`, updating `goal_distance`.
    pub(crate) fn record_goal(&mut self, v: VertexId) {
        self.goal_vertices.push(v);
        let g = self.graph.g(v);
        self.goal_distance = Some(self.goal_distance.map_or(g, |best| best.min(g)));
    }
}

/// The result of one search invocation: whether a goal was reached, and how many vertices were
/// popped off the frontier (or, for the iterative-deepening drivers, visited during recursion).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Whether at least one goal state was reached.
    pub found: bool,
    /// The number of vertices examined while searching. Used as a performance metric only;
    /// never asserted on by the library itself.
    pub examined: usize,
}
