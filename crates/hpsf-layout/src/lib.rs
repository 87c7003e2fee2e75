#![forbid(unsafe_code)]

//! Layered left-to-right layout for HPSF pipeline diagrams.
//!
//! The engine takes a [`Graph`] of sized nodes with ordered input/output ports and directed
//! port-to-port edges, and writes a grid-snapped position into every node's [`Rect`]. The phases
//! follow the classic Sugiyama shape: topological sort (cycles are an error), longest-path column
//! assignment, placement of disconnected nodes, initial row ordering, bounded crossing reduction,
//! pixel positioning, and a final column shift that shortens edges.

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod column;
pub mod crossing;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod layout;
pub mod options;
pub mod position;
pub mod row;
pub mod shift;
pub mod topo;
pub mod unconnected;

mod placement;

pub use error::{Error, Result};
pub use geometry::{Position, Rect, Size};
pub use graph::{Edge, EdgeId, Graph, Node, NodeId, Port, PortRef, PortType};
pub use layout::{LayoutResult, layout};
pub use options::LayoutOptions;
pub use placement::Placement;
