//! Column placement for nodes without incident edges.
//!
//! Disconnected nodes take part in neither layering nor crossing reduction. They are grouped with
//! nodes of the same style so that a half-built pipeline still reads left to right: receivers
//! first, exporters last, everything else in between.

use crate::graph::{Graph, Node, NodeId};
use crate::placement::Placement;

pub const RECEIVER_STYLE: &str = "receiver";
pub const EXPORTER_STYLE: &str = "exporter";

/// Assigns a column to each node in `unconnected`, given the columns already in `placement`.
///
/// Nodes are handled by id within three groups (receivers, other styles, exporters), and each
/// placement is visible to the nodes that follow it.
pub fn place_unconnected(g: &Graph, unconnected: &[NodeId], placement: &mut Placement) {
    let mut nodes: Vec<(NodeId, &Node)> = unconnected
        .iter()
        .filter_map(|&n| g.node(n).map(|node| (n, node)))
        .collect();
    nodes.sort_by(|a, b| a.1.id.cmp(&b.1.id).then(a.0.cmp(&b.0)));

    for &(n, _) in nodes.iter().filter(|(_, node)| node.has_style(RECEIVER_STYLE)) {
        placement.set_connected(n, false);
        placement.set_column(n, 0);
    }

    for &(n, node) in nodes
        .iter()
        .filter(|(_, node)| !node.has_style(RECEIVER_STYLE) && !node.has_style(EXPORTER_STYLE))
    {
        let column = first_column_with_style(g, placement, node.style()).unwrap_or_else(|| {
            rightmost_non_exporter_column(g, placement).map_or(0, |c| c + 1)
        });
        placement.set_connected(n, false);
        placement.set_column(n, column);
    }

    for &(n, _) in nodes.iter().filter(|(_, node)| node.has_style(EXPORTER_STYLE)) {
        let column = first_column_with_style(g, placement, EXPORTER_STYLE)
            .unwrap_or_else(|| placement.column_count());
        placement.set_connected(n, false);
        placement.set_column(n, column);
    }
}

fn first_column_with_style(g: &Graph, placement: &Placement, style: &str) -> Option<usize> {
    placement
        .placed()
        .filter(|&n| g.node(n).is_some_and(|node| node.style() == style))
        .filter_map(|n| placement.column(n))
        .min()
}

fn rightmost_non_exporter_column(g: &Graph, placement: &Placement) -> Option<usize> {
    placement
        .placed()
        .filter(|&n| g.node(n).is_some_and(|node| !node.has_style(EXPORTER_STYLE)))
        .filter_map(|n| placement.column(n))
        .max()
}
