use crate::graph::NodeId;

/// Column and row of every node, indexed by [`NodeId`].
///
/// Rows are local to their column. Nodes without a column are not laid out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placement {
    columns: Vec<Option<usize>>,
    rows: Vec<Option<usize>>,
    connected: Vec<bool>,
}

impl Placement {
    pub fn new(node_count: usize) -> Self {
        Self {
            columns: vec![None; node_count],
            rows: vec![None; node_count],
            connected: vec![false; node_count],
        }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn column(&self, n: NodeId) -> Option<usize> {
        self.columns.get(n.0).copied().flatten()
    }

    pub fn row(&self, n: NodeId) -> Option<usize> {
        self.rows.get(n.0).copied().flatten()
    }

    pub fn set_column(&mut self, n: NodeId, column: usize) {
        if let Some(slot) = self.columns.get_mut(n.0) {
            *slot = Some(column);
        }
    }

    pub fn set_row(&mut self, n: NodeId, row: usize) {
        if let Some(slot) = self.rows.get_mut(n.0) {
            *slot = Some(row);
        }
    }

    /// Whether `n` has at least one incident edge. Only connected nodes are reordered by the
    /// crossing reducer.
    pub fn is_connected(&self, n: NodeId) -> bool {
        self.connected.get(n.0).copied().unwrap_or(false)
    }

    pub fn set_connected(&mut self, n: NodeId, connected: bool) {
        if let Some(slot) = self.connected.get_mut(n.0) {
            *slot = connected;
        }
    }

    pub fn swap_rows(&mut self, a: NodeId, b: NodeId) {
        if a.0 < self.rows.len() && b.0 < self.rows.len() {
            self.rows.swap(a.0, b.0);
        }
    }

    /// Number of columns, i.e. one past the highest assigned column.
    pub fn column_count(&self) -> usize {
        self.columns.iter().flatten().map(|c| c + 1).max().unwrap_or(0)
    }

    /// Nodes that have a column, in handle order.
    pub fn placed(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.columns
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_some())
            .map(|(ix, _)| NodeId(ix))
    }

    /// Nodes in `column`, ordered by row. Nodes without a row sort last, by handle.
    pub fn column_nodes(&self, column: usize) -> Vec<NodeId> {
        let mut out: Vec<NodeId> = self
            .placed()
            .filter(|&n| self.column(n) == Some(column))
            .collect();
        out.sort_by_key(|&n| (self.row(n).unwrap_or(usize::MAX), n));
        out
    }

    /// Connected nodes in `column`, ordered by row.
    pub fn connected_column_nodes(&self, column: usize) -> Vec<NodeId> {
        self.column_nodes(column)
            .into_iter()
            .filter(|&n| self.is_connected(n))
            .collect()
    }

    /// All columns, each ordered by row.
    pub fn columns(&self) -> Vec<Vec<NodeId>> {
        (0..self.column_count())
            .map(|c| self.column_nodes(c))
            .collect()
    }
}
