//! Initial vertical order within each column.

use crate::graph::{Edge, Graph, NodeId};
use crate::placement::Placement;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;

#[derive(Debug, Clone)]
struct RowKey<'a> {
    node: NodeId,
    barycenter: Option<f64>,
    port: Option<usize>,
    id: &'a str,
}

fn compare_keys(a: &RowKey<'_>, b: &RowKey<'_>) -> Ordering {
    let bary = match (a.barycenter, b.barycenter) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    bary.then(a.port.cmp(&b.port))
        .then_with(|| a.id.cmp(b.id))
        .then(a.node.cmp(&b.node))
}

/// Incoming edges per target node, skipping edges with a missing endpoint.
pub(crate) fn in_edges(g: &Graph) -> FxHashMap<NodeId, Vec<Edge>> {
    let mut out: FxHashMap<NodeId, Vec<Edge>> = FxHashMap::default();
    for e in g.edges() {
        if let Some((_, w)) = g.resolve(e) {
            out.entry(w).or_default().push(*e);
        }
    }
    out
}

/// Assigns column-local rows, walking columns left to right so predecessor rows are final.
///
/// Connected nodes are ordered by the mean row of their predecessors in earlier columns, then by
/// the lowest source port index among those edges, then by id. Unconnected nodes follow, by id.
pub fn initial_order(g: &Graph, placement: &mut Placement) {
    let incoming = in_edges(g);

    for c in 0..placement.column_count() {
        let members = placement.column_nodes(c);

        let mut keys: Vec<RowKey<'_>> = Vec::new();
        let mut loose: Vec<(NodeId, &str)> = Vec::new();
        for n in members {
            let Some(node) = g.node(n) else {
                continue;
            };
            if !placement.is_connected(n) {
                loose.push((n, node.id.as_str()));
                continue;
            }

            let mut sum = 0.0;
            let mut count = 0usize;
            let mut port: Option<usize> = None;
            for e in incoming.get(&n).into_iter().flatten() {
                let u = e.from.node;
                let in_range = placement.column(u).is_some_and(|uc| uc < c);
                let Some(u_row) = placement.row(u).filter(|_| in_range) else {
                    continue;
                };
                sum += u_row as f64;
                count += 1;
                port = Some(port.map_or(e.from.index, |p| p.min(e.from.index)));
            }

            keys.push(RowKey {
                node: n,
                barycenter: (count > 0).then(|| sum / count as f64),
                port,
                id: node.id.as_str(),
            });
        }

        keys.sort_by(compare_keys);
        loose.sort_by(|a, b| a.1.cmp(b.1).then(a.0.cmp(&b.0)));

        let ordered = keys.iter().map(|k| k.node).chain(loose.iter().map(|(n, _)| *n));
        for (row, n) in ordered.enumerate() {
            placement.set_row(n, row);
        }
    }
}
