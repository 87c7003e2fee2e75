//! Arena-backed pipeline graph.
//!
//! Nodes live in a dense `Vec` and are addressed by [`NodeId`]; ports are owned by their node and
//! refer back to it by handle; edges join an output [`PortRef`] to an input [`PortRef`]. The only
//! state the layout engine mutates is each node's [`Rect::position`].

use crate::geometry::{Position, Rect, Size, segments_intersect};
use rustc_hash::FxHashMap;

/// Vertical inset keeping ports away from a node's corners.
pub const PORT_MARGIN: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortType {
    Input,
    Output,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Port {
    /// Owning node. A lookup handle, not ownership.
    pub node: NodeId,
    /// 1-based, unique among ports of the same type on the same node.
    pub index: usize,
    pub port_type: PortType,
}

/// Addresses a port by owning node and index. Which list the index refers to is decided by the
/// side of the edge it sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PortRef {
    pub node: NodeId,
    pub index: usize,
}

impl PortRef {
    pub const fn new(node: NodeId, index: usize) -> Self {
        Self { node, index }
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    pub id: String,
    pub style: Option<String>,
    pub rect: Rect,
    pub inputs: Vec<Port>,
    pub outputs: Vec<Port>,
}

impl Node {
    pub fn new(id: impl Into<String>, size: Size) -> Self {
        Self {
            id: id.into(),
            style: None,
            rect: Rect::new(Position::default(), size),
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn ports(&self, port_type: PortType) -> &[Port] {
        match port_type {
            PortType::Input => &self.inputs,
            PortType::Output => &self.outputs,
        }
    }

    pub fn style(&self) -> &str {
        self.style.as_deref().unwrap_or_default()
    }

    pub fn has_style(&self, style: &str) -> bool {
        self.style.as_deref() == Some(style)
    }

    /// Pixel center of the port with `index` in the `port_type` list, or `None` if the node has no
    /// such port. Inputs sit on the left edge, outputs on the right edge.
    pub fn port_position(&self, port_type: PortType, index: usize) -> Option<Position> {
        let ports = self.ports(port_type);
        let slot = ports.iter().position(|p| p.index == index)? as i32 + 1;
        let count = ports.len() as i32;

        let x = match port_type {
            PortType::Input => self.rect.position.x,
            PortType::Output => self.rect.right(),
        };
        let spacing = (self.rect.size.height - 2 * PORT_MARGIN) / (count + 1);
        let y = self.rect.position.y + PORT_MARGIN + spacing * slot;
        Some(Position::new(x, y))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// An output port.
    pub from: PortRef,
    /// An input port.
    pub to: PortRef,
}

impl Edge {
    pub const fn new(from: PortRef, to: PortRef) -> Self {
        Self { from, to }
    }

    /// Straight segment from the source port center to the target port center.
    pub fn segment(&self, g: &Graph) -> (Position, Position) {
        (
            g.port_position(self.from, PortType::Output),
            g.port_position(self.to, PortType::Input),
        )
    }

    /// Whether the straight segments of `self` and `other` properly cross.
    ///
    /// Edges that leave from, or arrive at, the very same port never cross. Edges with an endpoint
    /// outside the node arena never cross anything.
    pub fn intersects(&self, other: &Edge, g: &Graph) -> bool {
        if g.resolve(self).is_none() || g.resolve(other).is_none() {
            return false;
        }
        if self.from == other.from || self.to == other.to {
            return false;
        }
        let (a, b) = self.segment(g);
        let (c, d) = other.segment(g);
        segments_intersect(a, b, c, d)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    index: FxHashMap<String, NodeId>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Adds a node, or returns the existing handle if `id` is already present.
    pub fn add_node(&mut self, id: impl Into<String>, size: Size) -> NodeId {
        self.insert_node(Node::new(id, size))
    }

    pub fn add_styled_node(
        &mut self,
        id: impl Into<String>,
        style: impl Into<String>,
        size: Size,
    ) -> NodeId {
        self.insert_node(Node::new(id, size).with_style(style))
    }

    pub fn insert_node(&mut self, node: Node) -> NodeId {
        if let Some(&existing) = self.index.get(&node.id) {
            return existing;
        }
        let handle = NodeId(self.nodes.len());
        self.index.insert(node.id.clone(), handle);
        self.nodes.push(node);
        handle
    }

    /// Appends an input port with the next free 1-based index.
    pub fn add_input(&mut self, node: NodeId) -> Option<PortRef> {
        let next = self.nodes.get(node.0)?.inputs.len() + 1;
        self.add_port(node, PortType::Input, next)
    }

    /// Appends an output port with the next free 1-based index.
    pub fn add_output(&mut self, node: NodeId) -> Option<PortRef> {
        let next = self.nodes.get(node.0)?.outputs.len() + 1;
        self.add_port(node, PortType::Output, next)
    }

    /// Appends a port with an explicit index. Uniqueness of `index` is the caller's concern.
    pub fn add_port(&mut self, node: NodeId, port_type: PortType, index: usize) -> Option<PortRef> {
        let n = self.nodes.get_mut(node.0)?;
        let port = Port {
            node,
            index,
            port_type,
        };
        match port_type {
            PortType::Input => n.inputs.push(port),
            PortType::Output => n.outputs.push(port),
        }
        Some(PortRef::new(node, index))
    }

    /// Adds an edge. Endpoints are not validated; edges whose nodes are missing are ignored by
    /// every layout phase.
    pub fn connect(&mut self, from: PortRef, to: PortRef) -> EdgeId {
        let id = EdgeId(self.edges.len());
        self.edges.push(Edge::new(from, to));
        id
    }

    /// Adds a fresh output on `from`, a fresh input on `to`, and an edge between them.
    pub fn link(&mut self, from: NodeId, to: NodeId) -> Option<EdgeId> {
        let out = self.add_output(from)?;
        let input = self.add_input(to)?;
        Some(self.connect(out, input))
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    pub fn node_by_id(&self, id: &str) -> Option<NodeId> {
        self.index.get(id).copied()
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(ix, n)| (NodeId(ix), n))
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.0)
    }

    pub fn position(&self, id: NodeId) -> Option<Position> {
        self.node(id).map(|n| n.rect.position)
    }

    pub fn set_position(&mut self, id: NodeId, position: Position) {
        if let Some(n) = self.nodes.get_mut(id.0) {
            n.rect.position = position;
        }
    }

    /// Source and target node handles of `edge`, if both exist.
    pub fn resolve(&self, edge: &Edge) -> Option<(NodeId, NodeId)> {
        if edge.from.node.0 >= self.nodes.len() || edge.to.node.0 >= self.nodes.len() {
            return None;
        }
        Some((edge.from.node, edge.to.node))
    }

    /// Pixel center of a port. Falls back to the origin when the node or port is missing.
    pub fn port_position(&self, port: PortRef, port_type: PortType) -> Position {
        self.node(port.node)
            .and_then(|n| n.port_position(port_type, port.index))
            .unwrap_or_default()
    }

    /// Bounding box of every node, or `None` for an empty graph.
    pub fn bounds(&self) -> Option<Rect> {
        let mut it = self.nodes.iter().map(|n| n.rect);
        let first = it.next()?;
        Some(it.fold(first, |acc, r| acc.union(&r)))
    }
}
