//! Grid-snapped pixel coordinates from (column, row).

use crate::geometry::{Position, snap};
use crate::graph::Graph;
use crate::options::LayoutOptions;
use crate::placement::Placement;

/// Spacing derived from node sizes: one horizontal pitch for the whole graph, one vertical pitch
/// per column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spacing {
    pub h_space: i32,
    pub column_v_space: Vec<i32>,
}

impl Spacing {
    pub fn compute(g: &Graph, placement: &Placement, opts: &LayoutOptions) -> Self {
        let grid = opts.snap_grid_size;
        let mut max_width = 0;
        let mut max_height = vec![0; placement.column_count()];
        for n in placement.placed() {
            let (Some(node), Some(c)) = (g.node(n), placement.column(n)) else {
                continue;
            };
            max_width = max_width.max(node.rect.size.width);
            max_height[c] = max_height[c].max(node.rect.size.height);
        }

        Self {
            h_space: snap(max_width + opts.h_separation, grid),
            column_v_space: max_height
                .into_iter()
                .map(|h| snap(h + opts.v_separation, grid))
                .collect(),
        }
    }
}

/// Writes `x = column * h_space`, `y = row * v_space[column]` into every placed node.
///
/// Only `Rect::position` is touched, so this can run after every trial swap.
pub fn assign_positions(g: &mut Graph, placement: &Placement, opts: &LayoutOptions) {
    let spacing = Spacing::compute(g, placement, opts);
    let grid = opts.snap_grid_size;
    for n in placement.placed() {
        let Some(c) = placement.column(n) else {
            continue;
        };
        let row = placement.row(n).unwrap_or(0);
        let v_space = spacing.column_v_space.get(c).copied().unwrap_or(0);
        let x = snap(c as i32 * spacing.h_space, grid);
        let y = snap(row as i32 * v_space, grid);
        g.set_position(n, Position::new(x, y));
    }
}
