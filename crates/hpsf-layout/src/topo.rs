//! Kahn's algorithm over a node subset.

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};
use rustc_hash::{FxHashMap, FxHashSet};

/// Topologically orders `subset`, considering only edges with both endpoints inside it.
///
/// Ready nodes are taken from a stack, so ties are not resolved in any particular order; the row
/// orderer breaks them deterministically later. Fails with [`Error::CycleDetected`] on a self-loop
/// or when some nodes are never released.
pub fn topological_sort(g: &Graph, subset: &[NodeId]) -> Result<Vec<NodeId>> {
    let mut members: FxHashSet<NodeId> = FxHashSet::default();
    let nodes: Vec<NodeId> = subset
        .iter()
        .copied()
        .filter(|&n| members.insert(n))
        .collect();

    let mut indegree: FxHashMap<NodeId, usize> = nodes.iter().map(|&n| (n, 0)).collect();
    let mut successors: FxHashMap<NodeId, Vec<NodeId>> = FxHashMap::default();

    for e in g.edges() {
        let Some((v, w)) = g.resolve(e) else {
            continue;
        };
        if !members.contains(&v) || !members.contains(&w) {
            continue;
        }
        if v == w {
            return Err(Error::CycleDetected);
        }
        successors.entry(v).or_default().push(w);
        *indegree.entry(w).or_default() += 1;
    }

    let mut ready: Vec<NodeId> = nodes
        .iter()
        .copied()
        .filter(|n| indegree.get(n).copied().unwrap_or(0) == 0)
        .collect();

    let mut order: Vec<NodeId> = Vec::with_capacity(nodes.len());
    while let Some(v) = ready.pop() {
        order.push(v);
        let Some(ws) = successors.get(&v) else {
            continue;
        };
        for w in ws {
            let Some(d) = indegree.get_mut(w) else {
                continue;
            };
            *d -= 1;
            if *d == 0 {
                ready.push(*w);
            }
        }
    }

    if order.len() < nodes.len() {
        return Err(Error::CycleDetected);
    }
    Ok(order)
}
