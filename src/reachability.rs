//! Flood-fill reachability: every state reachable from a seed, with no goal test and no cost
//! bookkeeping at all.

use std::collections::BTreeSet;

use crate::frontier::FifoFrontier;
use crate::state::State;
use crate::state_table::StateTable;

/// Returns every state reachable from `seed` by repeated [`State::gen_children`] expansion,
/// including `seed` itself. Ignores [`State::is_goal_state`] entirely: this is a pure
/// connectivity query, not a search for anything in particular.
#[must_use]
pub fn reachability<S: State>(seed: S) -> BTreeSet<S> {
    let mut table = StateTable::new();
    let (start, _) = table.intern(seed);
    let mut frontier = FifoFrontier::new();
    frontier.push(start);
    let mut children = Vec::new();

    while let Some(v) = frontier.pop() {
        let state = table.lookup(v).clone();
        children.clear();
        state.gen_children(&mut children);
        for child in children.drain(..) {
            let (cv, inserted) = table.intern(child);
            if inserted {
                frontier.push(cv);
            }
        }
    }

    tracing::debug!(reached = table.len(), "reachability finished");
    (0..table.len())
        .map(crate::state_table::VertexId::index)
        .map(|i| table.lookup(crate::state_table::VertexId(i)).clone())
        .collect()
}
