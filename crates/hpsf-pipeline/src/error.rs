pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("duplicate component: {name}")]
    DuplicateComponent { name: String },

    #[error("connection references unknown component: {name}")]
    UnknownComponent { name: String },

    #[error("component {component} has no port named {port}")]
    UnknownPort { component: String, port: String },

    /// A connection leaves from an input port or arrives at an output port.
    #[error("port {port} of component {component} is used against its direction")]
    PortDirection { component: String, port: String },

    #[error(transparent)]
    Layout(#[from] hpsf_layout::Error),
}
