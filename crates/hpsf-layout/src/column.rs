//! Longest-path layering.

use crate::graph::{Graph, NodeId};
use crate::placement::Placement;
use rustc_hash::{FxHashMap, FxHashSet};

/// Assigns `column(n) = 1 + max(column(p))` over the predecessors of `n` inside `order`, or 0 for
/// nodes without one. `order` must be topological.
pub fn assign_columns(g: &Graph, order: &[NodeId], placement: &mut Placement) {
    let members: FxHashSet<NodeId> = order.iter().copied().collect();
    let mut successors: FxHashMap<NodeId, Vec<NodeId>> = FxHashMap::default();
    for e in g.edges() {
        let Some((v, w)) = g.resolve(e) else {
            continue;
        };
        if v == w || !members.contains(&v) || !members.contains(&w) {
            continue;
        }
        successors.entry(v).or_default().push(w);
    }

    let mut column: FxHashMap<NodeId, usize> = FxHashMap::default();
    for &v in order {
        let c = *column.entry(v).or_insert(0);
        placement.set_column(v, c);
        for &w in successors.get(&v).into_iter().flatten() {
            let entry = column.entry(w).or_insert(0);
            *entry = (*entry).max(c + 1);
        }
    }
}
