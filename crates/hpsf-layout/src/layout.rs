//! The layout pipeline.
//!
//! This module sequences the phases and keeps `lib.rs` focused on crate-level exports.

use crate::column::assign_columns;
use crate::crossing::{count_crossings, reduce_crossings};
use crate::error::Result;
use crate::geometry::Rect;
use crate::graph::{Graph, NodeId};
use crate::options::LayoutOptions;
use crate::placement::Placement;
use crate::position::assign_positions;
use crate::row::initial_order;
use crate::shift::optimize_column_shifts;
use crate::topo::topological_sort;
use crate::unconnected::place_unconnected;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutResult {
    /// Column and row of every node.
    pub placement: Placement,
    /// Crossings between forward edges at the final positions.
    pub crossings: usize,
    /// Bounding box of all nodes, `None` for an empty graph.
    pub bounds: Option<Rect>,
}

impl Graph {
    /// Lays out the graph in place. See [`layout`].
    pub fn auto_layout(&mut self, opts: &LayoutOptions) -> Result<LayoutResult> {
        layout(self, opts)
    }
}

/// Assigns a grid-snapped position to every node of `g`.
///
/// Runs from scratch on each call: nothing but `Rect::position` is written, and the result only
/// depends on the graph's topology, node sizes, styles, ids, and `opts`. Fails with
/// [`crate::Error::CycleDetected`] if the connected part of the graph has a cycle; node positions
/// are unspecified in that case.
pub fn layout(g: &mut Graph, opts: &LayoutOptions) -> Result<LayoutResult> {
    if g.is_empty() {
        return Ok(LayoutResult::default());
    }

    let (connected, unconnected) = split_connected(g);
    debug!(
        nodes = g.node_count(),
        edges = g.edge_count(),
        connected = connected.len(),
        unconnected = unconnected.len(),
        "auto layout"
    );

    let order = topological_sort(g, &connected)?;
    Ok(layout_from_order(g, &order, &unconnected, opts))
}

/// Splits nodes into those with at least one resolvable incident edge and the rest.
pub(crate) fn split_connected(g: &Graph) -> (Vec<NodeId>, Vec<NodeId>) {
    let mut incident = vec![false; g.node_count()];
    for e in g.edges() {
        if let Some((v, w)) = g.resolve(e) {
            incident[v.index()] = true;
            incident[w.index()] = true;
        }
    }
    g.node_ids().partition(|n| incident[n.index()])
}

/// Everything after the topological sort. Any valid topological `order` yields the same result.
pub(crate) fn layout_from_order(
    g: &mut Graph,
    order: &[NodeId],
    unconnected: &[NodeId],
    opts: &LayoutOptions,
) -> LayoutResult {
    let mut placement = Placement::new(g.node_count());
    for &n in order {
        placement.set_connected(n, true);
    }

    assign_columns(g, order, &mut placement);
    place_unconnected(g, unconnected, &mut placement);
    debug!(columns = placement.column_count(), "columns assigned");

    initial_order(g, &mut placement);

    if opts.optimize_crossings {
        let remaining = reduce_crossings(g, &mut placement, opts);
        debug!(crossings = remaining, "crossings reduced");
    }

    assign_positions(g, &placement, opts);

    if opts.optimize_length {
        let shifts = optimize_column_shifts(g, &placement, opts);
        debug!(?shifts, "columns shifted");
    }

    LayoutResult {
        crossings: count_crossings(g, &placement),
        bounds: g.bounds(),
        placement,
    }
}
