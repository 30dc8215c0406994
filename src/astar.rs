//! A* search: a priority-queue driver guided by [`State::get_heuristic`].

use crate::context::SearchOutcome;
use crate::error::SearchError;
use crate::options::SearchOptions;
use crate::path::{self, PathSink};
use crate::search::drive_priority;
use crate::state::State;

/// Searches from `seed` using A*, recording the first goal state's shortest path (ties broken
/// arbitrarily) into `out`.
///
/// The search is admissible as long as [`State::get_heuristic`] never overestimates the true
/// remaining cost; this crate does not enforce that, matching the original solver's contract.
pub fn astar<S: State>(seed: S, options: SearchOptions, out: &mut impl PathSink<S>) -> SearchOutcome {
    let (context, examined) = drive_priority(seed, true, options, false);
    let found = !context.goal_vertices.is_empty();
    if let Some(&goal) = context.goal_vertices.first() {
        out.record(path::reconstruct_primary(&context, goal));
    }
    tracing::debug!(found, examined, "astar finished");
    SearchOutcome { found, examined }
}

/// Searches from `seed` using A*, recording every path tied at the optimal cost into `out`.
///
/// # Errors
///
/// Returns [`SearchError::SinkCannotHoldMultiplePaths`] without searching if `out` cannot hold
/// more than one path (see [`PathSink::supports_multiple`]).
pub fn astar_full<S: State>(
    seed: S,
    options: SearchOptions,
    out: &mut impl PathSink<S>,
) -> Result<SearchOutcome, SearchError> {
    if !out.supports_multiple() {
        return Err(SearchError::SinkCannotHoldMultiplePaths);
    }
    let (context, examined) = drive_priority(seed, true, options, true);
    let found = !context.goal_vertices.is_empty();
    for p in path::collect_all_optimal(&context) {
        out.record(p);
    }
    tracing::debug!(found, examined, "astar_full finished");
    Ok(SearchOutcome { found, examined })
}
