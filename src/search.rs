//! The shared C5 driver skeleton used by A*, Dijkstra and BFS.
//!
//! Each pops a vertex from its frontier, skips it if stale, performs the goal test, and expands
//! children through the same relax-then-push sequence; what differs between the three is only
//! the frontier type and whether a real heuristic is consulted.

use crate::context::SearchContext;
use crate::frontier::{FifoFrontier, PriorityFrontier};
use crate::options::SearchOptions;
use crate::state::State;
use crate::state_table::VertexId;

/// Drives a priority-queue search (A* when `use_heuristic` is `true`, Dijkstra when `false`)
/// to completion, returning the fully populated context and the number of vertices examined.
pub(crate) fn drive_priority<S: State>(
    seed: S,
    use_heuristic: bool,
    options: SearchOptions,
    track_all_optimal: bool,
) -> (SearchContext<S>, usize) {
    let (mut context, start) = SearchContext::new(seed, track_all_optimal);
    let mut frontier = PriorityFrontier::new();
    let h0 = heuristic_of(&context, start, use_heuristic);
    frontier.push(start, 0, h0);
    let mut examined = 0;
    let mut children = Vec::new();

    while let Some(popped) = frontier.pop() {
        let v = popped.vertex;
        if popped.g_snapshot != context.graph.g(v) {
            continue; // stale: a cheaper path to `v` was found after this entry was pushed
        }
        examined += 1;

        let state = context.table.lookup(v).clone();
        if state.is_goal_state() {
            let worse_than_known_optimal = options.shortest_paths_only
                && context.goal_distance.is_some_and(|best| context.graph.g(v) > best);
            if !worse_than_known_optimal {
                context.record_goal(v);
                if options.is_first_solution_only() {
                    break;
                }
            }
            continue;
        }

        children.clear();
        state.gen_children(&mut children);
        for child in children.drain(..) {
            let edge_cost = state.get_distance(&child);
            let aux = child.clone();
            let (cv, inserted) = context.table.intern(child);
            if inserted {
                context.graph.push_unvisited();
            }
            let tentative_g = context.graph.g(v) + u64::from(edge_cost);
            if options.shortest_paths_only
                && context
                    .goal_distance
                    .is_some_and(|best| tentative_g > best)
            {
                continue;
            }
            let relaxed = context.graph.relax(v, cv, edge_cost);
            // A tie does not change g(child), so its frontier entry would be indistinguishable
            // from one already pushed for it: re-pushing would re-examine and re-expand the same
            // vertex, duplicating its extra_parents entries and any goal it leads to.
            if matches!(relaxed, crate::predecessor::Relaxation::Improved) {
                context.table.replace(cv, aux);
                let h = heuristic_of(&context, cv, use_heuristic);
                frontier.push(cv, context.graph.g(cv), h);
            }
        }
    }

    (context, examined)
}

/// Drives a FIFO (breadth-first) search to completion. When `complete` is `true`, search
/// continues past the first goal found in order to enumerate every equally-shortest path.
pub(crate) fn drive_fifo<S: State>(
    seed: S,
    complete: bool,
    track_all_optimal: bool,
) -> (SearchContext<S>, usize) {
    let (mut context, start) = SearchContext::new(seed, track_all_optimal);
    let mut frontier = FifoFrontier::new();
    frontier.push(start);
    let mut examined = 0;
    let mut children = Vec::new();

    while let Some(v) = frontier.pop() {
        examined += 1;
        let state = context.table.lookup(v).clone();
        if state.is_goal_state() {
            let worse_than_known_optimal = complete
                && context.goal_distance.is_some_and(|best| context.graph.g(v) > best);
            if !worse_than_known_optimal {
                context.record_goal(v);
                if !complete {
                    break;
                }
            }
            continue;
        }

        children.clear();
        state.gen_children(&mut children);
        for child in children.drain(..) {
            let edge_cost = state.get_distance(&child);
            let (cv, inserted) = context.table.intern(child);
            if inserted {
                context.graph.push_unvisited();
            }
            let tentative_g = context.graph.g(v) + u64::from(edge_cost);
            if complete
                && context
                    .goal_distance
                    .is_some_and(|best| tentative_g > best)
            {
                continue;
            }
            let relaxed = context.graph.relax(v, cv, edge_cost);
            if matches!(relaxed, crate::predecessor::Relaxation::Improved) {
                frontier.push(cv);
            }
        }
    }

    (context, examined)
}

fn heuristic_of<S: State>(context: &SearchContext<S>, v: VertexId, use_heuristic: bool) -> u64 {
    if use_heuristic {
        u64::from(context.table.lookup(v).get_heuristic())
    } else {
        0
    }
}
