use crate::graph::GraphError;
use thiserror::Error;

// Error type for path enumeration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Error when the start or end name is not a node of the graph.
    #[error("Unknown node '{0}', cannot search for paths.")]
    UnknownNode(String),

    /// Error when the search finds more paths than allowed.
    #[error("More than {limit} paths found, search aborted.")]
    TooManyPaths { limit: usize },

    /// Error raised by the underlying graph during path materialization.
    #[error(transparent)]
    Graph(#[from] GraphError),
}
