use thiserror::Error;

use super::NodeId;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for graph construction and lookup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Error when a node is added to a graph that is already full.
    #[error("Cannot add node '{name}': graph capacity of {capacity} nodes reached")]
    CapacityExceeded { capacity: usize, name: String },

    /// Error when a node name is added twice.
    #[error("Node '{0}' already exists in the graph")]
    DuplicateNode(String),

    /// Error when a name does not belong to any node in the graph.
    #[error("Unknown node '{0}'")]
    UnknownNode(String),

    /// Error when a handle is out of range.
    #[error("Node handle {0} is out of range")]
    InvalidHandle(NodeId),
}
