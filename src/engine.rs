//! Selecting a search driver by name rather than by calling its free function directly.

use crate::astar::{astar, astar_full};
use crate::bfs::{bfs, bfs_complete};
use crate::context::SearchOutcome;
use crate::dfs::dfs;
use crate::dijkstra::{dijkstra, dijkstra_full};
use crate::error::SearchError;
use crate::idastar::{idastar, idastar_iterative};
use crate::options::SearchOptions;
use crate::path::PathSink;
use crate::state::State;

/// Names one of the nine path-producing search drivers this crate exposes.
///
/// [`crate::reachability::reachability`] is a tenth engine but is not a member of this enum: it
/// returns a set of states rather than a path, so it does not fit [`Engine::dispatch`]'s shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Engine {
    /// [`crate::astar::astar`]
    Astar,
    /// [`crate::astar::astar_full`]
    AstarFull,
    /// [`crate::dijkstra::dijkstra`]
    Dijkstra,
    /// [`crate::dijkstra::dijkstra_full`]
    DijkstraFull,
    /// [`crate::bfs::bfs`]
    Bfs,
    /// [`crate::bfs::bfs_complete`]
    BfsComplete,
    /// [`crate::dfs::dfs`]
    Dfs,
    /// [`crate::idastar::idastar`]
    Idastar,
    /// [`crate::idastar::idastar_iterative`]
    IdastarIterative,
}

impl Engine {
    /// Runs the named engine from `seed`, honoring `options` where the engine consults it (BFS,
    /// DFS and the IDA* variants ignore it entirely), and recording the resulting path(s) into
    /// `out`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::SinkCannotHoldMultiplePaths`] if `self` is one of the all-optimal
    /// variants (`AstarFull`, `DijkstraFull`, `BfsComplete`) and `out` cannot hold more than one
    /// path.
    pub fn dispatch<S: State>(
        self,
        seed: S,
        options: SearchOptions,
        out: &mut impl PathSink<S>,
    ) -> Result<SearchOutcome, SearchError> {
        match self {
            Engine::Astar => Ok(astar(seed, options, out)),
            Engine::AstarFull => astar_full(seed, options, out),
            Engine::Dijkstra => Ok(dijkstra(seed, options, out)),
            Engine::DijkstraFull => dijkstra_full(seed, options, out),
            Engine::Bfs => Ok(bfs(seed, out)),
            Engine::BfsComplete => bfs_complete(seed, out),
            Engine::Dfs => Ok(dfs(seed, out)),
            Engine::Idastar => Ok(dispatch_idastar(idastar(seed), out)),
            Engine::IdastarIterative => Ok(dispatch_idastar(idastar_iterative(seed), out)),
        }
    }
}

fn dispatch_idastar<S>(
    (path, examined): (Option<Vec<S>>, usize),
    out: &mut impl PathSink<S>,
) -> SearchOutcome {
    let found = path.is_some();
    if let Some(path) = path {
        out.record(path);
    }
    SearchOutcome { found, examined }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, PartialOrd, Ord)]
    struct Line(i32);

    impl State for Line {
        fn is_goal_state(&self) -> bool {
            self.0 == 3
        }
        fn gen_children(&self, out: &mut Vec<Self>) {
            out.push(Line(self.0 + 1));
        }
        fn get_distance(&self, _child: &Self) -> u32 {
            1
        }
        fn get_heuristic(&self) -> u32 {
            (3 - self.0).unsigned_abs()
        }
    }

    #[test]
    fn every_engine_finds_the_same_goal() {
        for engine in [
            Engine::Astar,
            Engine::Dijkstra,
            Engine::Bfs,
            Engine::Dfs,
            Engine::Idastar,
            Engine::IdastarIterative,
        ] {
            let mut out: Vec<Line> = Vec::new();
            let outcome = engine
                .dispatch(Line(0), SearchOptions::first_solution(), &mut out)
                .unwrap();
            assert!(outcome.found, "{engine:?} should find the goal");
            assert_eq!(out.last().unwrap().0, 3, "{engine:?}");
        }
    }

    #[test]
    fn full_variants_reject_a_single_path_sink() {
        for engine in [Engine::AstarFull, Engine::DijkstraFull, Engine::BfsComplete] {
            let mut out: Vec<Line> = Vec::new();
            let err = engine
                .dispatch(Line(0), SearchOptions::all_optimal(), &mut out)
                .unwrap_err();
            assert_eq!(err, SearchError::SinkCannotHoldMultiplePaths, "{engine:?}");
        }
    }
}
