//! Edge crossing counting and bounded crossing reduction.
//!
//! Every trial follows the same shape: mutate rows, reassign positions, recount, keep the change
//! only if the count strictly drops. The count is a full O(E^2) geometric test.

use crate::graph::{Edge, Graph, NodeId};
use crate::options::LayoutOptions;
use crate::placement::Placement;
use crate::position::assign_positions;
use crate::row::in_edges;
use crate::shift::optimize_column_shifts;
use tracing::{debug, trace};

/// Outer passes of the reducer.
pub const MAX_PASSES: usize = 5;
/// Barycentric sweeps per pass.
pub const MAX_SWEEPS: usize = 4;

/// Edges whose source column is strictly left of the target column.
pub fn forward_edges(g: &Graph, placement: &Placement) -> Vec<Edge> {
    g.edges()
        .iter()
        .filter(|e| {
            let Some((v, w)) = g.resolve(e) else {
                return false;
            };
            match (placement.column(v), placement.column(w)) {
                (Some(cv), Some(cw)) => cv < cw,
                _ => false,
            }
        })
        .copied()
        .collect()
}

/// Number of unordered pairs of forward edges whose segments properly intersect, using the node
/// positions currently stored in `g`.
pub fn count_crossings(g: &Graph, placement: &Placement) -> usize {
    let edges = forward_edges(g, placement);
    let mut count = 0;
    for (i, a) in edges.iter().enumerate() {
        for b in &edges[i + 1..] {
            if a.intersects(b, g) {
                count += 1;
            }
        }
    }
    count
}

/// Reorders connected nodes within their columns to reduce crossings. Never increases the count.
///
/// Unconnected nodes keep their rows at the bottom of their column. Returns the crossing count of
/// the final row assignment, whose positions are left written into `g`.
pub fn reduce_crossings(g: &mut Graph, placement: &mut Placement, opts: &LayoutOptions) -> usize {
    assign_positions(g, placement, opts);
    let mut best = count_crossings(g, placement);
    debug!(crossings = best, "crossing reduction start");
    if best == 0 {
        return 0;
    }

    for pass in 0..MAX_PASSES {
        let start = best;

        best = barycentric_sweep(g, placement, opts, best);
        if best > 0 {
            best = pairwise_swaps(g, placement, opts, best);
        }
        if best > 0 {
            best = two_column_swaps(g, placement, opts, best);
        }
        if best == 0 {
            debug!(pass, "crossings eliminated");
            return 0;
        }

        // Realigning columns can separate edges that only touch on the raw grid.
        optimize_column_shifts(g, placement, opts);
        if count_crossings(g, placement) == 0 {
            debug!(pass, "crossings eliminated by column shift");
            return 0;
        }
        assign_positions(g, placement, opts);

        debug!(pass, crossings = best, "crossing reduction pass");
        if best >= start {
            break;
        }
    }

    best
}

fn barycentric_sweep(
    g: &mut Graph,
    placement: &mut Placement,
    opts: &LayoutOptions,
    best: usize,
) -> usize {
    let snapshot = placement.clone();
    let incoming = in_edges(g);

    for _ in 0..MAX_SWEEPS {
        let mut changed = false;
        for c in 1..placement.column_count() {
            let nodes = placement.connected_column_nodes(c);
            if nodes.len() < 2 {
                continue;
            }

            let mut keyed: Vec<(f64, usize, NodeId)> = nodes
                .iter()
                .enumerate()
                .map(|(current, &n)| {
                    let rows: Vec<usize> = incoming
                        .get(&n)
                        .into_iter()
                        .flatten()
                        .filter(|e| placement.column(e.from.node) == Some(c - 1))
                        .filter_map(|e| placement.row(e.from.node))
                        .collect();
                    let barycenter = if rows.is_empty() {
                        current as f64
                    } else {
                        rows.iter().sum::<usize>() as f64 / rows.len() as f64
                    };
                    (barycenter, current, n)
                })
                .collect();
            keyed.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

            for (row, &(_, _, n)) in keyed.iter().enumerate() {
                if placement.row(n) != Some(row) {
                    placement.set_row(n, row);
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }

    assign_positions(g, placement, opts);
    let count = count_crossings(g, placement);
    if count > best {
        *placement = snapshot;
        assign_positions(g, placement, opts);
        return best;
    }
    if count < best {
        trace!(from = best, to = count, "barycentric sweep");
    }
    count
}

fn pairwise_swaps(
    g: &mut Graph,
    placement: &mut Placement,
    opts: &LayoutOptions,
    mut best: usize,
) -> usize {
    for c in 0..placement.column_count() {
        let nodes = placement.connected_column_nodes(c);
        if nodes.len() < 2 {
            continue;
        }

        for _ in 0..opts.max_swap_iterations {
            let mut improved = false;
            for (a, b) in pairs(&nodes) {
                placement.swap_rows(a, b);
                assign_positions(g, placement, opts);
                let count = count_crossings(g, placement);
                if count < best {
                    trace!(column = c, from = best, to = count, "pairwise swap");
                    best = count;
                    improved = true;
                    if best == 0 {
                        return 0;
                    }
                } else {
                    placement.swap_rows(a, b);
                }
            }
            if !improved {
                break;
            }
        }
    }

    assign_positions(g, placement, opts);
    best
}

fn two_column_swaps(
    g: &mut Graph,
    placement: &mut Placement,
    opts: &LayoutOptions,
    mut best: usize,
) -> usize {
    for c in 0..placement.column_count().saturating_sub(1) {
        let left = pairs(&placement.connected_column_nodes(c));
        let right = pairs(&placement.connected_column_nodes(c + 1));
        if left.is_empty() || right.is_empty() {
            continue;
        }

        for &(a, b) in &left {
            for &(x, y) in &right {
                placement.swap_rows(a, b);
                placement.swap_rows(x, y);
                assign_positions(g, placement, opts);
                let count = count_crossings(g, placement);
                if count < best {
                    trace!(column = c, from = best, to = count, "two-column swap");
                    best = count;
                    if best == 0 {
                        return 0;
                    }
                } else {
                    placement.swap_rows(x, y);
                    placement.swap_rows(a, b);
                }
            }
        }
    }

    assign_positions(g, placement, opts);
    best
}

fn pairs(nodes: &[NodeId]) -> Vec<(NodeId, NodeId)> {
    let mut out = Vec::new();
    for (i, &a) in nodes.iter().enumerate() {
        for &b in &nodes[i + 1..] {
            out.push((a, b));
        }
    }
    out
}
