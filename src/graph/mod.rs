// error module
mod error;
// graph module
#[allow(clippy::module_inception)]
mod graph;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports.
//─────────────────────────────────────────────────────────────────────────────
pub use error::GraphError;
pub use graph::{Graph, NodeId};
