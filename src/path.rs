//! Path extraction: walking the predecessor DAG from goal(s) back to the start.

use crate::context::SearchContext;
use crate::state::State;
use crate::state_table::VertexId;

/// A caller-owned container a search engine appends reconstructed paths to. Its concrete type
/// distinguishes first-solution mode (`Vec<S>`, holding a single path) from multi-path modes
/// (`Vec<Vec<S>>`).
pub trait PathSink<S> {
    /// Records one reconstructed path, in start-to-goal order.
    fn record(&mut self, path: Vec<S>);

    /// Whether this sink can hold more than one path. The all-optimal engines
    /// (`astar_full`, `dijkstra_full`, `bfs_complete`) check this before searching at all, since
    /// a sink that can only hold one path would silently keep only the last path `record` was
    /// called with.
    fn supports_multiple(&self) -> bool {
        false
    }
}

impl<S> PathSink<S> for Vec<S> {
    fn record(&mut self, path: Vec<S>) {
        *self = path;
    }
}

impl<S> PathSink<S> for Vec<Vec<S>> {
    fn record(&mut self, path: Vec<S>) {
        self.push(path);
    }

    fn supports_multiple(&self) -> bool {
        true
    }
}

/// Follows `primary_parent` from `goal` back to the start, then reverses the result so it
/// reads start-to-goal.
pub(crate) fn reconstruct_primary<S: State>(context: &SearchContext<S>, goal: VertexId) -> Vec<S> {
    let mut vertices = vec![goal];
    let mut current = goal;
    while let Some(parent) = context.graph.primary_parent(current) {
        vertices.push(parent);
        current = parent;
    }
    vertices.reverse();
    vertices
        .into_iter()
        .map(|v| context.table.lookup(v).clone())
        .collect()
}

/// Reconstructs the primary-parent path for every recorded goal vertex, in the order the goals
/// were found.
pub(crate) fn reconstruct_all_primary<S: State>(context: &SearchContext<S>) -> Vec<Vec<S>> {
    context
        .goal_vertices
        .iter()
        .map(|&goal| reconstruct_primary(context, goal))
        .collect()
}

/// A lazy iterator over every start-to-goal path whose cost equals the search's recorded
/// `goal_distance`, branching at every vertex with more than one recorded parent.
///
/// Structurally the same backtracking-stack iterator as this crate's ancestor `AstarSolution`:
/// `current` holds, at each depth, the still-unexplored candidate vertices for that depth; a
/// depth is exhausted (and popped) once its only remaining candidate has been consumed.
pub struct AllOptimalPaths<'a, S> {
    context: &'a SearchContext<S>,
    current: Vec<Vec<VertexId>>,
    terminated: bool,
}

impl<'a, S: State> AllOptimalPaths<'a, S> {
    pub(crate) fn new(context: &'a SearchContext<S>) -> Self {
        AllOptimalPaths {
            context,
            current: Vec::new(),
            terminated: context.goal_vertices.is_empty(),
        }
    }

    fn parents_of(&self, v: VertexId) -> Vec<VertexId> {
        self.context.graph.extra_parents(v).to_vec()
    }

    fn complete(&mut self) {
        loop {
            let candidates = match self.current.last() {
                None => self.context.goal_vertices.clone(),
                Some(last) => {
                    let &top = last.last().expect("frame is never left empty");
                    self.parents_of(top)
                }
            };
            if candidates.is_empty() {
                break;
            }
            self.current.push(candidates);
        }
    }

    fn advance(&mut self) {
        while self.current.last().map(Vec::len) == Some(1) {
            self.current.pop();
        }
        if let Some(last) = self.current.last_mut() {
            last.pop();
        }
    }
}

impl<S: State> Iterator for AllOptimalPaths<'_, S> {
    type Item = Vec<S>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.terminated {
            return None;
        }
        self.complete();
        let path: Vec<S> = self
            .current
            .iter()
            .rev()
            .map(|frame| *frame.last().expect("frame is never left empty"))
            .map(|v| self.context.table.lookup(v).clone())
            .collect();
        self.advance();
        self.terminated = self.current.is_empty();
        Some(path)
    }
}

/// Collects every path from an [`AllOptimalPaths`] iterator into a vector. Most callers should
/// prefer iterating lazily; this is a convenience for small state graphs.
pub(crate) fn collect_all_optimal<S: State>(context: &SearchContext<S>) -> Vec<Vec<S>> {
    AllOptimalPaths::new(context).collect()
}
