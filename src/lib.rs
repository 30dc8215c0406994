#![deny(missing_docs)]

//! Generic state-space search engines driven by a caller-defined [`State`] contract.
//!
//! A caller describes a problem once — its goal test, its successor function, its edge costs
//! and, optionally, a heuristic — and picks whichever engine fits the shape of the problem:
//! [`astar`] and [`dijkstra`] for shortest paths over weighted state graphs, [`bfs`] for
//! unweighted shortest paths, [`dfs`] for any path at all, [`idastar`]/[`idastar_iterative`] for
//! shortest paths over state graphs too large to keep in memory, and [`reachability`] for plain
//! connectivity queries.
//!
//! Every path-producing engine shares the same shape:
//! `fn(seed: S, options: SearchOptions, out: &mut impl PathSink<S>) -> SearchOutcome`, except
//! the all-optimal variants (`astar_full`, `dijkstra_full`, `bfs_complete`), which return
//! `Result<SearchOutcome, SearchError>` since they reject a sink that cannot hold more than one
//! path. A caller picking an engine by name can go through [`Engine::dispatch`] instead, which
//! surfaces the same `Result`.

mod astar;
mod bfs;
mod context;
mod dfs;
mod dijkstra;
mod engine;
mod error;
mod frontier;
mod idastar;
mod options;
mod path;
mod predecessor;
mod reachability;
mod search;
mod state;
mod state_table;

pub use astar::{astar, astar_full};
pub use bfs::{bfs, bfs_complete};
pub use context::SearchOutcome;
pub use dfs::dfs;
pub use dijkstra::{dijkstra, dijkstra_full};
pub use engine::Engine;
pub use error::SearchError;
pub use idastar::{idastar, idastar_iterative};
pub use options::SearchOptions;
pub use path::{AllOptimalPaths, PathSink};
pub use predecessor::Relaxation;
pub use reachability::reachability;
pub use state::State;
pub use state_table::VertexId;
