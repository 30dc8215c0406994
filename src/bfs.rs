//! Breadth-first search: a FIFO driver that ignores edge cost entirely (every edge is treated
//! as unit cost when ranking goals against each other).

use crate::context::SearchOutcome;
use crate::error::SearchError;
use crate::path::{self, PathSink};
use crate::search::drive_fifo;
use crate::state::State;

/// Searches from `seed` breadth-first, stopping at the first goal state discovered and
/// recording its path into `out`.
pub fn bfs<S: State>(seed: S, out: &mut impl PathSink<S>) -> SearchOutcome {
    let (context, examined) = drive_fifo(seed, false, false);
    let found = !context.goal_vertices.is_empty();
    if let Some(&goal) = context.goal_vertices.first() {
        out.record(path::reconstruct_primary(&context, goal));
    }
    tracing::debug!(found, examined, "bfs finished");
    SearchOutcome { found, examined }
}

/// Searches from `seed` breadth-first without stopping at the first goal, recording the path to
/// every goal state reached at the shallowest depth into `out`.
///
/// # Errors
///
/// Returns [`SearchError::SinkCannotHoldMultiplePaths`] without searching if `out` cannot hold
/// more than one path (see [`PathSink::supports_multiple`]).
pub fn bfs_complete<S: State>(
    seed: S,
    out: &mut impl PathSink<S>,
) -> Result<SearchOutcome, SearchError> {
    if !out.supports_multiple() {
        return Err(SearchError::SinkCannotHoldMultiplePaths);
    }
    let (context, examined) = drive_fifo(seed, true, true);
    let found = !context.goal_vertices.is_empty();
    for p in path::reconstruct_all_primary(&context) {
        out.record(p);
    }
    tracing::debug!(found, examined, "bfs_complete finished");
    Ok(SearchOutcome { found, examined })
}
