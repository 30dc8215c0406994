//! Iterative-deepening A*: repeatedly depth-first searches a shrinking cost corridor, raising
//! the bound to the cheapest rejected `f = g + h` seen in the previous pass.
//!
//! Unlike [`crate::astar`], [`crate::dijkstra`], [`crate::bfs`] and [`crate::dfs`], IDA* never
//! builds a [`crate::state_table::StateTable`] or [`crate::predecessor::PredecessorGraph`]: the
//! whole point of the algorithm is to trade that memory for recomputation, so the path under
//! exploration is tracked directly as a stack of states, and cycle avoidance is membership in
//! that stack rather than a global visited set.

use std::ops::ControlFlow;

use indexmap::IndexSet;

use crate::state::State;

/// Searches from `seed` using recursive iterative-deepening A*, returning the first goal path
/// found and the number of states examined across every deepening pass.
///
/// `State::get_heuristic` must never overestimate the true remaining cost, or the returned path
/// may not be shortest.
pub fn idastar<S: State>(seed: S) -> (Option<Vec<S>>, usize) {
    let mut path = IndexSet::from([seed.clone()]);
    let mut examined = 0;
    let bound = u64::from(seed.get_heuristic());

    let result = std::iter::repeat(())
        .try_fold(bound, |bound, ()| {
            match search(&mut path, 0, bound, &mut examined) {
                ControlFlow::Break(found) => ControlFlow::Break(Some(found)),
                ControlFlow::Continue(None) => ControlFlow::Break(None),
                ControlFlow::Continue(Some(next_bound)) => ControlFlow::Continue(next_bound),
            }
        })
        .break_value()
        .flatten();

    tracing::debug!(found = result.is_some(), examined, "idastar finished");
    (result, examined)
}

/// Depth-first-searches below `bound`, returning `Break` with the completed path once a goal is
/// found, and otherwise `Continue` with the smallest `f` value seen that exceeded `bound` (the
/// next pass's corridor), or `None` if every branch was exhausted with nothing rejected.
fn search<S: State>(
    path: &mut IndexSet<S>,
    cost: u64,
    bound: u64,
    examined: &mut usize,
) -> ControlFlow<Vec<S>, Option<u64>> {
    *examined += 1;
    let current = path[path.len() - 1].clone();
    let f = cost + u64::from(current.get_heuristic());
    if f > bound {
        return ControlFlow::Continue(Some(f));
    }
    if current.is_goal_state() {
        return ControlFlow::Break(path.iter().cloned().collect());
    }

    let mut gen = Vec::new();
    current.gen_children(&mut gen);
    let mut ranked: Vec<(S, u32, u64)> = gen
        .into_iter()
        .filter(|child| !path.contains(child))
        .map(|child| {
            let edge_cost = current.get_distance(&child);
            let h = u64::from(child.get_heuristic());
            let rank = cost + u64::from(edge_cost) + h;
            (child, edge_cost, rank)
        })
        .collect();
    ranked.sort_unstable_by_key(|(_, _, rank)| *rank);

    let mut min = None;
    for (child, edge_cost, _) in ranked {
        let (idx, _) = path.insert_full(child);
        match search(path, cost + u64::from(edge_cost), bound, examined)? {
            Some(m) if min.is_none_or(|n| n >= m) => min = Some(m),
            _ => {}
        }
        path.swap_remove_index(idx);
    }
    ControlFlow::Continue(min)
}

/// An explicit-stack transcription of [`idastar`]'s own recursive semantics: each stack frame
/// holds the cost-so-far at that depth, the ranked children still to be tried, and which child
/// is next. Produces identical paths and identical `examined` counts to the recursive version;
/// it exists for callers on platforms where recursion depth is a concern.
pub fn idastar_iterative<S: State>(seed: S) -> (Option<Vec<S>>, usize) {
    let mut examined = 0;
    let mut bound = u64::from(seed.get_heuristic());

    loop {
        let mut path = IndexSet::from([seed.clone()]);
        let mut stack: Vec<Frame<S>> = vec![Frame {
            cost: 0,
            children: Vec::new(),
            next: 0,
            expanded: false,
        }];
        let mut next_bound = None;
        let mut found = None;

        while let Some(frame) = stack.last_mut() {
            if !frame.expanded {
                frame.expanded = true;
                examined += 1;
                let current = path[path.len() - 1].clone();
                let f = frame.cost + u64::from(current.get_heuristic());
                if f > bound {
                    next_bound = Some(next_bound.map_or(f, |n: u64| n.min(f)));
                    stack.pop();
                    path.pop();
                    continue;
                }
                if current.is_goal_state() {
                    found = Some(path.iter().cloned().collect());
                    break;
                }
                let mut gen = Vec::new();
                current.gen_children(&mut gen);
                let cost = frame.cost;
                let mut ranked: Vec<(S, u32, u64)> = gen
                    .into_iter()
                    .filter(|child| !path.contains(child))
                    .map(|child| {
                        let edge_cost = current.get_distance(&child);
                        let h = u64::from(child.get_heuristic());
                        (child, edge_cost, cost + u64::from(edge_cost) + h)
                    })
                    .collect();
                ranked.sort_unstable_by_key(|(_, _, rank)| *rank);
                frame.children = ranked;
                continue;
            }

            if frame.next >= frame.children.len() {
                stack.pop();
                path.pop();
                continue;
            }

            let (child, edge_cost, _) = frame.children[frame.next].clone();
            frame.next += 1;
            let child_cost = frame.cost + u64::from(edge_cost);
            path.insert(child.clone());
            stack.push(Frame {
                cost: child_cost,
                children: Vec::new(),
                next: 0,
                expanded: false,
            });
        }

        if let Some(path) = found {
            tracing::debug!(found = true, examined, "idastar_iterative finished");
            return (Some(path), examined);
        }
        match next_bound {
            Some(b) => bound = b,
            None => {
                tracing::debug!(found = false, examined, "idastar_iterative finished");
                return (None, examined);
            }
        }
    }
}

struct Frame<S> {
    cost: u64,
    children: Vec<(S, u32, u64)>,
    next: usize,
    expanded: bool,
}
