//! Dijkstra's algorithm: A* with the heuristic pinned to zero.

use crate::context::SearchOutcome;
use crate::error::SearchError;
use crate::options::SearchOptions;
use crate::path::{self, PathSink};
use crate::search::drive_priority;
use crate::state::State;

/// Searches from `seed` using Dijkstra's algorithm, ignoring [`State::get_heuristic`] entirely.
/// Always finds a shortest path whenever one exists; only ever slower than [`crate::astar::astar`],
/// never wrong, which is why it is worth keeping alongside it.
pub fn dijkstra<S: State>(
    seed: S,
    options: SearchOptions,
    out: &mut impl PathSink<S>,
) -> SearchOutcome {
    let (context, examined) = drive_priority(seed, false, options, false);
    let found = !context.goal_vertices.is_empty();
    if let Some(&goal) = context.goal_vertices.first() {
        out.record(path::reconstruct_primary(&context, goal));
    }
    tracing::debug!(found, examined, "dijkstra finished");
    SearchOutcome { found, examined }
}

/// Searches from `seed` using Dijkstra's algorithm, recording every path tied at the optimal
/// cost into `out`.
///
/// # Errors
///
/// Returns [`SearchError::SinkCannotHoldMultiplePaths`] without searching if `out` cannot hold
/// more than one path (see [`PathSink::supports_multiple`]).
pub fn dijkstra_full<S: State>(
    seed: S,
    options: SearchOptions,
    out: &mut impl PathSink<S>,
) -> Result<SearchOutcome, SearchError> {
    if !out.supports_multiple() {
        return Err(SearchError::SinkCannotHoldMultiplePaths);
    }
    let (context, examined) = drive_priority(seed, false, options, true);
    let found = !context.goal_vertices.is_empty();
    for p in path::collect_all_optimal(&context) {
        out.record(p);
    }
    tracing::debug!(found, examined, "dijkstra_full finished");
    Ok(SearchOutcome { found, examined })
}
