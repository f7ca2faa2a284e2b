use thiserror::Error;

use crate::graph::GraphError;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for graph loading operations.
/// Covers reading the description file, parsing its tokens, and
/// building the graph from them.
#[derive(Error, Debug)]
pub enum LoaderError {
    /// Error when reading a file.
    #[error("Failed to read file '{0}': {1}")]
    ReadFile(String, std::io::Error),

    /// Error when the header (`<count> <start> <end>`) is incomplete.
    #[error("Graph description is missing the {0}")]
    MissingHeader(&'static str),

    /// Error when the declared node count is not a number.
    #[error("Invalid node count '{0}', expected a non-negative integer")]
    InvalidNodeCount(String),

    /// Error when the edge list ends with half a pair.
    #[error("Edge list ends with unpaired name '{0}'")]
    DanglingToken(String),

    /// Error when the parsed description cannot be turned into a graph.
    #[error("Failed to build graph: {0}")]
    Graph(#[from] GraphError),
}
