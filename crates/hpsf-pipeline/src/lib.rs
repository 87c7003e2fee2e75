#![forbid(unsafe_code)]

//! HPSF pipeline documents on top of `hpsf-layout`.
//!
//! A [`PipelineDocument`] is the serde model of a pipeline file: components with named, directed
//! ports, connections between those ports, and an optional `layout` block holding per-component
//! positions and sizes. [`PipelineDocument::to_graph`] builds the layout engine's [`Graph`], and
//! [`PipelineDocument::auto_layout`] runs the engine and writes the result back into `layout`.
//!
//! [`Graph`]: hpsf_layout::Graph

pub mod document;
pub mod error;
pub mod graph;
pub mod options;

pub use document::{
    Component, ComponentLayout, Connection, ConnectionPort, Direction, Layout, PipelineDocument,
    PortSpec,
};
pub use error::{Error, Result};
pub use graph::PipelineGraph;
pub use options::PipelineOptions;

/// Lays out a YAML pipeline document and returns it re-serialized with a fresh `layout` block.
pub fn layout_yaml(input: &str, opts: &PipelineOptions) -> Result<String> {
    let mut doc = PipelineDocument::from_yaml_str(input)?;
    doc.auto_layout(opts)?;
    doc.to_yaml_string()
}
