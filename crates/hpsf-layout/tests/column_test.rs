use hpsf_layout::column::assign_columns;
use hpsf_layout::topo::topological_sort;
use hpsf_layout::{Graph, NodeId, Placement, Size};

fn columns(g: &Graph, nodes: &[NodeId]) -> Vec<Option<usize>> {
    let order = topological_sort(g, nodes).unwrap();
    let mut placement = Placement::new(g.node_count());
    assign_columns(g, &order, &mut placement);
    nodes.iter().map(|&n| placement.column(n)).collect()
}

fn new_graph(ids: &[&str]) -> (Graph, Vec<NodeId>) {
    let mut g = Graph::new();
    let nodes = ids
        .iter()
        .map(|id| g.add_node(*id, Size::new(100, 60)))
        .collect();
    (g, nodes)
}

#[test]
fn assign_columns_numbers_a_chain_from_zero() {
    let (mut g, n) = new_graph(&["a", "b", "c"]);
    g.link(n[0], n[1]).unwrap();
    g.link(n[1], n[2]).unwrap();
    assert_eq!(columns(&g, &n), vec![Some(0), Some(1), Some(2)]);
}

#[test]
fn assign_columns_puts_diamond_branches_side_by_side() {
    let (mut g, n) = new_graph(&["a", "b", "c", "d"]);
    g.link(n[0], n[1]).unwrap();
    g.link(n[0], n[2]).unwrap();
    g.link(n[1], n[3]).unwrap();
    g.link(n[2], n[3]).unwrap();
    assert_eq!(columns(&g, &n), vec![Some(0), Some(1), Some(1), Some(2)]);
}

#[test]
fn assign_columns_uses_the_longest_path() {
    let (mut g, n) = new_graph(&["a", "b", "c", "d"]);
    g.link(n[0], n[1]).unwrap();
    g.link(n[1], n[2]).unwrap();
    g.link(n[0], n[2]).unwrap();
    g.link(n[3], n[2]).unwrap();
    assert_eq!(columns(&g, &n), vec![Some(0), Some(1), Some(2), Some(0)]);
}

#[test]
fn assign_columns_leaves_nodes_outside_the_order_unplaced() {
    let (mut g, n) = new_graph(&["a", "b", "lonely"]);
    g.link(n[0], n[1]).unwrap();
    assert_eq!(columns(&g, &n[..2]), vec![Some(0), Some(1)]);

    let order = topological_sort(&g, &n[..2]).unwrap();
    let mut placement = Placement::new(g.node_count());
    assign_columns(&g, &order, &mut placement);
    assert_eq!(placement.column(n[2]), None);
    assert_eq!(placement.column_count(), 2);
}
