//! The state contract every search engine in this crate is driven by.

/// A single snapshot of a caller's problem, searched over by the engines in
/// this crate.
///
/// Implementers must be deterministic: given the same `&self`, [`gen_children`](State::gen_children)
/// and [`get_heuristic`](State::get_heuristic) must always produce the same result. The engines
/// never verify this; violating it is a contract violation in the sense of the crate-level
/// error handling notes and leads to unspecified (but not unsafe) results.
///
/// `Ord` is used to canonicalize states inside the state table (two states that compare equal
/// are the same vertex); it does not need to have any problem-domain meaning beyond that.
pub trait State: Clone + Eq + Ord {
    /// Returns `true` iff this state satisfies the problem being solved.
    fn is_goal_state(&self) -> bool;

    /// Appends every successor of this state to `out`. The sequence must be finite; its order
    /// is irrelevant for correctness but should be stable, since it determines tie-breaking and
    /// reproducibility of `examined` counts.
    fn gen_children(&self, out: &mut Vec<Self>);

    /// The cost of the edge from `self` to `child`. Must be strictly positive. Breadth-first
    /// search requires this to be constant (typically `1`) across the whole state graph.
    fn get_distance(&self, child: &Self) -> u32;

    /// An estimate of the remaining cost from this state to the nearest goal. Must not
    /// overestimate the true remaining cost for A*/IDA* to guarantee optimality.
    ///
    /// The default implementation returns `0`, which is what Dijkstra, BFS and DFS use: a
    /// heuristic that can never overestimate but also never helps guide the search.
    fn get_heuristic(&self) -> u32 {
        0
    }
}
