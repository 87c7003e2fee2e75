use hpsf_layout::{LayoutOptions, Size};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineOptions {
    /// Size of components the document has no layout entry for.
    pub default_node_size: Size,
    pub layout: LayoutOptions,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            default_node_size: Size::new(200, 80),
            layout: LayoutOptions::default(),
        }
    }
}

impl PipelineOptions {
    pub fn with_default_node_size(mut self, size: Size) -> Self {
        self.default_node_size = size;
        self
    }

    pub fn with_layout(mut self, layout: LayoutOptions) -> Self {
        self.layout = layout;
        self
    }
}
