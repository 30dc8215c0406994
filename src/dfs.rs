//! Depth-first search: a LIFO driver that records each vertex's parent only on first discovery
//! and never revisits or relaxes it, unlike the A*/Dijkstra/BFS drivers in [`crate::search`].

use crate::context::{SearchContext, SearchOutcome};
use crate::frontier::LifoFrontier;
use crate::path::{self, PathSink};
use crate::state::State;

/// Searches from `seed` depth-first, stopping at the first goal state discovered and recording
/// its path into `out`. Unlike the other engines, a path found by DFS is not guaranteed to be
/// shortest.
pub fn dfs<S: State>(seed: S, out: &mut impl PathSink<S>) -> SearchOutcome {
    let (mut context, start) = SearchContext::new(seed, false);
    let mut frontier = LifoFrontier::new();
    frontier.push(start);
    let mut examined = 0;
    let mut children = Vec::new();

    while let Some(v) = frontier.pop() {
        examined += 1;
        let state = context.table.lookup(v).clone();
        if state.is_goal_state() {
            context.record_goal(v);
            break;
        }

        children.clear();
        state.gen_children(&mut children);
        for child in children.drain(..) {
            let edge_cost = state.get_distance(&child);
            let (cv, inserted) = context.table.intern(child);
            if inserted {
                context.graph.push_unvisited();
                context.graph.record_first_discovery(v, cv, edge_cost);
                frontier.push(cv);
            }
        }
    }

    let found = !context.goal_vertices.is_empty();
    if let Some(&goal) = context.goal_vertices.first() {
        out.record(path::reconstruct_primary(&context, goal));
    }
    tracing::debug!(found, examined, "dfs finished");
    SearchOutcome { found, examined }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, PartialOrd, Ord)]
    struct Chain(i32);

    impl State for Chain {
        fn is_goal_state(&self) -> bool {
            self.0 == 3
        }
        fn gen_children(&self, out: &mut Vec<Self>) {
            if self.0 < 5 {
                out.push(Chain(self.0 + 1));
            }
        }
        fn get_distance(&self, _child: &Self) -> u32 {
            1
        }
    }

    #[test]
    fn finds_a_path_to_a_reachable_goal() {
        let mut out: Vec<Chain> = Vec::new();
        let outcome = dfs(Chain(0), &mut out);
        assert!(outcome.found);
        assert_eq!(out.first().unwrap().0, 0);
        assert_eq!(out.last().unwrap().0, 3);
    }

    #[test]
    fn reports_not_found_when_goal_is_unreachable() {
        #[derive(Clone, PartialEq, Eq, PartialOrd, Ord)]
        struct NeverGoal(i32);
        impl State for NeverGoal {
            fn is_goal_state(&self) -> bool {
                false
            }
            fn gen_children(&self, out: &mut Vec<Self>) {
                if self.0 < 2 {
                    out.push(NeverGoal(self.0 + 1));
                }
            }
            fn get_distance(&self, _child: &Self) -> u32 {
                1
            }
        }
        let mut out: Vec<NeverGoal> = Vec::new();
        assert!(!dfs(NeverGoal(0), &mut out).found);
    }
}
