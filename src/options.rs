//! Runtime configuration shared by the C5 search drivers.

/// Configuration flags shared by the A*, Dijkstra, BFS and DFS drivers.
///
/// `shortest_paths_only` and `goal_states_only` are orthogonal: first-solution-only search is
/// exactly `shortest_paths_only && goal_states_only`, matching the original solvers' naming.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    /// Whether the predecessor graph built during the search should be treated as directed.
    /// This only affects how a caller reasons about the reconstructed edges; it has no bearing
    /// on which paths are found, since `gen_children` already defines the only edges the search
    /// ever sees.
    pub directed: bool,
    /// When `true`, expansions whose tentative cost exceeds the best known goal cost are
    /// pruned, and the search can be stopped as soon as no better goal can be found.
    pub shortest_paths_only: bool,
    /// When `true`, path extraction only follows each goal vertex's primary parent chain.
    /// When `false`, extraction enumerates every path tied at the optimal cost.
    pub goal_states_only: bool,
}

impl SearchOptions {
    /// First-solution-only search: stop at the first goal found and reconstruct only its
    /// primary-parent chain.
    #[must_use]
    pub const fn first_solution() -> Self {
        SearchOptions {
            directed: true,
            shortest_paths_only: true,
            goal_states_only: true,
        }
    }

    /// All-optimal search: keep searching until no better goal can be found, and enumerate
    /// every path tied at the optimal cost.
    #[must_use]
    pub const fn all_optimal() -> Self {
        SearchOptions {
            directed: true,
            shortest_paths_only: true,
            goal_states_only: false,
        }
    }

    /// Whether this configuration is equivalent to "stop at the first solution found".
    #[must_use]
    pub const fn is_first_solution_only(self) -> bool {
        self.shortest_paths_only && self.goal_states_only
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self::first_solution()
    }
}
