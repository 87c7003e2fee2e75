//! Conversion of a [`PipelineDocument`] into a layout [`Graph`].

use crate::document::{Component, ConnectionPort, Direction, PipelineDocument};
use crate::error::{Error, Result};
use crate::options::PipelineOptions;
use hpsf_layout::{Graph, Node, NodeId, PortRef};
use rustc_hash::FxHashMap;
use tracing::debug;

/// A layout graph plus the component name of every node.
#[derive(Debug, Clone, Default)]
pub struct PipelineGraph {
    pub graph: Graph,
    nodes: FxHashMap<String, NodeId>,
}

impl PipelineGraph {
    pub fn node(&self, component: &str) -> Option<NodeId> {
        self.nodes.get(component).copied()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Named ports of one component, by direction.
#[derive(Debug, Default)]
struct PortTable {
    /// Whether the component listed its ports. Undeclared names are only accepted otherwise.
    declared: bool,
    ports: FxHashMap<String, (Direction, PortRef)>,
}

impl PortTable {
    fn resolve(
        &mut self,
        g: &mut Graph,
        node: NodeId,
        component: &str,
        port: &str,
        direction: Direction,
    ) -> Result<PortRef> {
        if let Some(&(found, port_ref)) = self.ports.get(port) {
            if found != direction {
                return Err(Error::PortDirection {
                    component: component.to_string(),
                    port: port.to_string(),
                });
            }
            return Ok(port_ref);
        }
        if self.declared {
            return Err(Error::UnknownPort {
                component: component.to_string(),
                port: port.to_string(),
            });
        }

        let port_ref = add_port(g, node, direction).ok_or_else(|| Error::UnknownComponent {
            name: component.to_string(),
        })?;
        self.ports.insert(port.to_string(), (direction, port_ref));
        Ok(port_ref)
    }
}

fn add_port(g: &mut Graph, node: NodeId, direction: Direction) -> Option<PortRef> {
    match direction {
        Direction::Input => g.add_input(node),
        Direction::Output => g.add_output(node),
    }
}

impl PipelineDocument {
    /// Builds the layout graph: one node per component, one port per declared port (1-based per
    /// direction, in declaration order), one edge per connection.
    ///
    /// Components that declare no ports get them from their connections, in first-use order.
    /// Existing `layout` entries supply node sizes and starting positions.
    pub fn to_graph(&self, opts: &PipelineOptions) -> Result<PipelineGraph> {
        let mut pg = PipelineGraph::default();
        let mut tables: Vec<PortTable> = Vec::with_capacity(self.components.len());

        for component in &self.components {
            if pg.nodes.contains_key(&component.name) {
                return Err(Error::DuplicateComponent {
                    name: component.name.clone(),
                });
            }
            let node = self.component_node(component, opts);
            let id = pg.graph.insert_node(node);
            pg.nodes.insert(component.name.clone(), id);
            tables.push(declare_ports(&mut pg.graph, id, component)?);
        }

        for connection in &self.connections {
            let from = pg.port(&mut tables, &connection.source, Direction::Output)?;
            let to = pg.port(&mut tables, &connection.destination, Direction::Input)?;
            pg.graph.connect(from, to);
        }

        debug!(
            nodes = pg.graph.node_count(),
            edges = pg.graph.edge_count(),
            "pipeline graph built"
        );
        Ok(pg)
    }

    fn component_node(&self, component: &Component, opts: &PipelineOptions) -> Node {
        let saved = self
            .layout
            .as_ref()
            .and_then(|l| l.component(&component.name));
        let size = saved
            .and_then(|l| l.size)
            .unwrap_or(opts.default_node_size);

        let mut node = Node::new(component.name.clone(), size);
        if let Some(style) = &component.style {
            node = node.with_style(style.clone());
        }
        if let Some(saved) = saved {
            node.rect.position = saved.position;
        }
        node
    }
}

impl PipelineGraph {
    fn port(
        &mut self,
        tables: &mut [PortTable],
        endpoint: &ConnectionPort,
        direction: Direction,
    ) -> Result<PortRef> {
        let node = self
            .node(&endpoint.component)
            .ok_or_else(|| Error::UnknownComponent {
                name: endpoint.component.clone(),
            })?;
        let table = tables
            .get_mut(node.index())
            .ok_or_else(|| Error::UnknownComponent {
                name: endpoint.component.clone(),
            })?;
        table.resolve(
            &mut self.graph,
            node,
            &endpoint.component,
            &endpoint.port,
            direction,
        )
    }
}

fn declare_ports(g: &mut Graph, node: NodeId, component: &Component) -> Result<PortTable> {
    let mut table = PortTable {
        declared: !component.ports.is_empty(),
        ports: FxHashMap::default(),
    };
    for spec in &component.ports {
        if table.ports.contains_key(&spec.name) {
            continue;
        }
        let port_ref = add_port(g, node, spec.direction).ok_or_else(|| Error::UnknownComponent {
            name: component.name.clone(),
        })?;
        table.ports.insert(spec.name.clone(), (spec.direction, port_ref));
    }
    Ok(table)
}
