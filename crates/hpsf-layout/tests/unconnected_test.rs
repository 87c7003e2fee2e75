use hpsf_layout::{Graph, LayoutOptions, NodeId, Size, layout};

fn styled(g: &mut Graph, id: &str, style: &str) -> NodeId {
    g.add_styled_node(id, style, Size::new(100, 60))
}

#[test]
fn isolated_receiver_lands_in_column_zero() {
    let mut g = Graph::new();
    let a = g.add_node("a", Size::new(100, 60));
    let b = g.add_node("b", Size::new(100, 60));
    let c = g.add_node("c", Size::new(100, 60));
    g.link(a, b).unwrap();
    g.link(b, c).unwrap();
    let r = styled(&mut g, "zz-receiver", "receiver");

    let result = layout(&mut g, &LayoutOptions::default()).unwrap();
    assert_eq!(result.placement.column(r), Some(0));
    assert_eq!(g.position(r).unwrap().x, 0);
}

#[test]
fn isolated_nodes_join_their_style_peers() {
    let mut g = Graph::new();
    let r = styled(&mut g, "r", "receiver");
    let p = styled(&mut g, "p", "processor");
    let e = styled(&mut g, "e", "exporter");
    g.link(r, p).unwrap();
    g.link(p, e).unwrap();

    let r2 = styled(&mut g, "r2", "receiver");
    let p2 = styled(&mut g, "p2", "processor");
    let e2 = styled(&mut g, "e2", "exporter");
    let s = styled(&mut g, "s", "sampler");

    let result = layout(&mut g, &LayoutOptions::default()).unwrap();
    let col = |n| result.placement.column(n);
    assert_eq!((col(r), col(p), col(e)), (Some(0), Some(1), Some(2)));
    assert_eq!(col(r2), Some(0));
    assert_eq!(col(p2), Some(1));
    assert_eq!(col(e2), col(e));
    // One column past the rightmost non-exporter column.
    assert_eq!(col(s), Some(2));
}

#[test]
fn isolated_exporters_share_a_fresh_trailing_column() {
    let mut g = Graph::new();
    let a = g.add_node("a", Size::new(100, 60));
    let b = g.add_node("b", Size::new(100, 60));
    g.link(a, b).unwrap();
    let x = styled(&mut g, "x", "exporter");
    let y = styled(&mut g, "y", "exporter");

    let result = layout(&mut g, &LayoutOptions::default()).unwrap();
    assert_eq!(result.placement.column(x), Some(2));
    assert_eq!(result.placement.column(y), Some(2));
    assert_eq!(result.placement.row(x), Some(0));
    assert_eq!(result.placement.row(y), Some(1));
}

#[test]
fn new_styles_stay_between_receivers_and_exporters() {
    let mut g = Graph::new();
    let r = styled(&mut g, "r", "receiver");
    let e = styled(&mut g, "e", "exporter");
    let m = styled(&mut g, "m", "mystery");

    let result = layout(&mut g, &LayoutOptions::default()).unwrap();
    assert_eq!(result.placement.column(r), Some(0));
    assert_eq!(result.placement.column(m), Some(1));
    assert_eq!(result.placement.column(e), Some(2));
}

#[test]
fn unconnected_nodes_sit_below_connected_ones_in_id_order() {
    let mut g = Graph::new();
    let r = styled(&mut g, "r", "receiver");
    let p = styled(&mut g, "p", "processor");
    g.link(r, p).unwrap();
    let zed = styled(&mut g, "zed", "receiver");
    let alpha = styled(&mut g, "alpha", "receiver");

    let result = layout(&mut g, &LayoutOptions::default()).unwrap();
    assert_eq!(result.placement.row(r), Some(0));
    assert_eq!(result.placement.row(alpha), Some(1));
    assert_eq!(result.placement.row(zed), Some(2));
    assert!(g.position(alpha).unwrap().y < g.position(zed).unwrap().y);
}
