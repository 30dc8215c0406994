//! Errors surfaced by this crate.
//!
//! "No path found" is not an error: every engine signals it through
//! [`SearchOutcome::found`](crate::SearchOutcome::found) being `false`. The only thing this
//! module models is a misuse of the external interface that the type system can catch without
//! runtime cost.

/// A misuse of this crate's API detected before a search even starts.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// An all-optimal engine (`astar_full`, `dijkstra_full`, `bfs_complete`) was asked to
    /// enumerate paths, but the caller's [`PathSink`](crate::path::PathSink) reports (via
    /// [`PathSink::supports_multiple`](crate::path::PathSink::supports_multiple)) that it can
    /// only ever hold one path — a plain `Vec<S>`, which `record` would silently overwrite on
    /// every goal instead of accumulating. Returned before the search runs.
    #[error("this engine may report more than one path; the chosen sink can only hold one")]
    SinkCannotHoldMultiplePaths,
}
