use serde::{Deserialize, Serialize};

/// Tunables for [`crate::layout`]. Every field has a default, so a config file may set any subset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    /// Coordinates are rounded up to multiples of this many pixels.
    pub snap_grid_size: i32,
    /// Horizontal gap added to the widest node when spacing columns.
    pub h_separation: i32,
    /// Vertical gap added to the tallest node of a column when spacing its rows.
    pub v_separation: i32,
    /// Cap on full pair sweeps per column in the greedy swap pass.
    pub max_swap_iterations: usize,
    pub optimize_crossings: bool,
    pub optimize_length: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            snap_grid_size: 10,
            h_separation: 40,
            v_separation: 30,
            max_swap_iterations: 50,
            optimize_crossings: true,
            optimize_length: true,
        }
    }
}

impl LayoutOptions {
    pub fn with_snap_grid_size(mut self, size: i32) -> Self {
        self.snap_grid_size = size;
        self
    }

    pub fn with_h_separation(mut self, sep: i32) -> Self {
        self.h_separation = sep;
        self
    }

    pub fn with_v_separation(mut self, sep: i32) -> Self {
        self.v_separation = sep;
        self
    }

    pub fn with_max_swap_iterations(mut self, n: usize) -> Self {
        self.max_swap_iterations = n;
        self
    }

    pub fn with_crossing_optimization(mut self, enabled: bool) -> Self {
        self.optimize_crossings = enabled;
        self
    }

    pub fn with_length_optimization(mut self, enabled: bool) -> Self {
        self.optimize_length = enabled;
        self
    }
}
