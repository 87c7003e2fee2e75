#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The connected subgraph is not a DAG. Self-loops count as one-node cycles.
    #[error("cycle detected in pipeline graph")]
    CycleDetected,
}

pub type Result<T> = std::result::Result<T, Error>;
