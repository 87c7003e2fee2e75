use hpsf_layout::graph::PORT_MARGIN;
use hpsf_layout::{Edge, Graph, NodeId, Position, PortRef, PortType, Size};

#[test]
fn add_node_returns_the_existing_handle_for_a_known_id() {
    let mut g = Graph::new();
    let a = g.add_node("a", Size::new(10, 10));
    let again = g.add_styled_node("a", "receiver", Size::new(99, 99));
    assert_eq!(a, again);
    assert_eq!(g.node_count(), 1);
    assert_eq!(g.node(a).unwrap().rect.size, Size::new(10, 10));
    assert_eq!(g.node_by_id("a"), Some(a));
    assert_eq!(g.node_by_id("b"), None);
}

#[test]
fn ports_get_consecutive_one_based_indices_per_direction() {
    let mut g = Graph::new();
    let a = g.add_node("a", Size::new(100, 60));
    assert_eq!(g.add_input(a), Some(PortRef::new(a, 1)));
    assert_eq!(g.add_input(a), Some(PortRef::new(a, 2)));
    assert_eq!(g.add_output(a), Some(PortRef::new(a, 1)));

    let node = g.node(a).unwrap();
    assert_eq!(node.inputs.len(), 2);
    assert_eq!(node.outputs.len(), 1);
    assert!(node.inputs.iter().all(|p| p.node == a && p.port_type == PortType::Input));
    assert_eq!(g.add_input(NodeId(7)), None);
}

#[test]
fn a_single_port_sits_in_the_middle_of_its_side() {
    let mut g = Graph::new();
    let a = g.add_node("a", Size::new(100, 60));
    g.set_position(a, Position::new(40, 20));
    let input = g.add_input(a).unwrap();
    let output = g.add_output(a).unwrap();

    // spacing = (60 - 2 * 10) / 2 = 20
    assert_eq!(g.port_position(input, PortType::Input), Position::new(40, 20 + PORT_MARGIN + 20));
    assert_eq!(g.port_position(output, PortType::Output), Position::new(140, 50));
}

#[test]
fn ports_divide_the_height_evenly_in_index_order() {
    let mut g = Graph::new();
    let a = g.add_node("a", Size::new(100, 100));
    let o1 = g.add_output(a).unwrap();
    let o2 = g.add_output(a).unwrap();
    let o3 = g.add_output(a).unwrap();

    // spacing = (100 - 20) / 4 = 20
    assert_eq!(g.port_position(o1, PortType::Output).y, 30);
    assert_eq!(g.port_position(o2, PortType::Output).y, 50);
    assert_eq!(g.port_position(o3, PortType::Output).y, 70);
}

#[test]
fn port_positions_follow_the_node_rect() {
    let mut g = Graph::new();
    let a = g.add_node("a", Size::new(100, 60));
    let o = g.add_output(a).unwrap();
    let before = g.port_position(o, PortType::Output);
    g.set_position(a, Position::new(200, 300));
    let after = g.port_position(o, PortType::Output);
    assert_eq!(after.x - before.x, 200);
    assert_eq!(after.y - before.y, 300);
}

#[test]
fn missing_ports_and_nodes_resolve_to_the_origin() {
    let mut g = Graph::new();
    let a = g.add_node("a", Size::new(100, 60));
    g.set_position(a, Position::new(50, 50));
    g.add_output(a).unwrap();

    assert_eq!(g.port_position(PortRef::new(a, 9), PortType::Output), Position::default());
    assert_eq!(g.port_position(PortRef::new(a, 1), PortType::Input), Position::default());
    assert_eq!(g.port_position(PortRef::new(NodeId(3), 1), PortType::Output), Position::default());
}

fn two_by_two() -> (Graph, [NodeId; 4]) {
    let mut g = Graph::new();
    let a1 = g.add_node("a1", Size::new(100, 60));
    let a2 = g.add_node("a2", Size::new(100, 60));
    let b1 = g.add_node("b1", Size::new(100, 60));
    let b2 = g.add_node("b2", Size::new(100, 60));
    g.set_position(a2, Position::new(0, 90));
    g.set_position(b1, Position::new(140, 0));
    g.set_position(b2, Position::new(140, 90));
    (g, [a1, a2, b1, b2])
}

#[test]
fn inverted_pairing_edges_intersect() {
    let (mut g, [a1, a2, b1, b2]) = two_by_two();
    let e1 = g.link(a1, b2).unwrap();
    let e2 = g.link(a2, b1).unwrap();
    let (e1, e2) = (*g.edge(e1).unwrap(), *g.edge(e2).unwrap());
    assert!(e1.intersects(&e2, &g));
    assert!(e2.intersects(&e1, &g));
}

#[test]
fn straight_pairing_edges_do_not_intersect() {
    let (mut g, [a1, a2, b1, b2]) = two_by_two();
    let e1 = g.link(a1, b1).unwrap();
    let e2 = g.link(a2, b2).unwrap();
    assert!(!g.edge(e1).unwrap().intersects(g.edge(e2).unwrap(), &g));
}

#[test]
fn edges_sharing_a_port_never_intersect() {
    let mut g = Graph::new();
    let a = g.add_node("a", Size::new(100, 60));
    let b = g.add_node("b", Size::new(100, 60));
    g.set_position(b, Position::new(140, 0));
    let out = g.add_output(a).unwrap();
    let input = g.add_input(b).unwrap();

    // Two geometrically identical edges between the same pair of ports.
    let e1 = Edge::new(out, input);
    let e2 = Edge::new(out, input);
    assert!(!e1.intersects(&e2, &g));
}

#[test]
fn edges_with_missing_nodes_never_intersect() {
    let (mut g, [a1, a2, _, b2]) = two_by_two();
    let e1 = g.link(a1, b2).unwrap();
    let e1 = *g.edge(e1).unwrap();
    let a2_out = g.add_output(a2).unwrap();
    let dangling = Edge::new(a2_out, PortRef::new(NodeId(99), 1));
    assert!(!e1.intersects(&dangling, &g));
}

#[test]
fn bounds_cover_every_node() {
    let (g, _) = two_by_two();
    let bounds = g.bounds().unwrap();
    assert_eq!(bounds.position, Position::new(0, 0));
    assert_eq!(bounds.size, Size::new(240, 150));
    assert_eq!(Graph::new().bounds(), None);
}
