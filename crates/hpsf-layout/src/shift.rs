//! Rigid vertical column shifts that shorten edges.

use crate::crossing::forward_edges;
use crate::geometry::{Position, round_to_grid};
use crate::graph::{Graph, PortType};
use crate::options::LayoutOptions;
use crate::placement::Placement;

/// Shifts each column (from column 1 rightwards) by the grid-rounded median of
/// `source_port_y - target_port_y` over the forward edges entering it, then moves the whole graph
/// down if anything ended up above y = 0.
///
/// Returns the shift applied to each column.
pub fn optimize_column_shifts(
    g: &mut Graph,
    placement: &Placement,
    opts: &LayoutOptions,
) -> Vec<i32> {
    let columns = placement.columns();
    let mut shifts = vec![0; columns.len()];

    for (c, members) in columns.iter().enumerate().skip(1) {
        let mut deltas: Vec<i32> = forward_edges(g, placement)
            .into_iter()
            .filter(|e| placement.column(e.to.node) == Some(c))
            .map(|e| {
                let source = g.port_position(e.from, PortType::Output);
                let target = g.port_position(e.to, PortType::Input);
                source.y - target.y
            })
            .collect();
        let Some(median) = median(&mut deltas) else {
            continue;
        };

        let shift = round_to_grid(median, opts.snap_grid_size);
        if shift == 0 {
            continue;
        }
        for &n in members {
            if let Some(p) = g.position(n) {
                g.set_position(n, Position::new(p.x, p.y + shift));
            }
        }
        shifts[c] = shift;
    }

    let min_y = placement
        .placed()
        .filter_map(|n| g.position(n))
        .map(|p| p.y)
        .min()
        .unwrap_or(0);
    if min_y < 0 {
        let placed: Vec<_> = placement.placed().collect();
        for n in placed {
            if let Some(p) = g.position(n) {
                g.set_position(n, Position::new(p.x, p.y - min_y));
            }
        }
    }

    shifts
}

/// Median of `values`; the mean of the middle pair for even lengths.
pub(crate) fn median(values: &mut [i32]) -> Option<i32> {
    if values.is_empty() {
        return None;
    }
    values.sort_unstable();
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        Some(values[mid])
    } else {
        Some((values[mid - 1] + values[mid]) / 2)
    }
}
