//! route-finder: enumerate every simple route between two cities of a small
//! directed graph.
//!
//! The `graph` and `path` modules hold the engine and have no I/O. The
//! `graph_loader` module reads the text description, and `app` wires both
//! into the command-line tool.

pub mod app;
pub mod graph;
pub mod graph_loader;
pub mod path;

pub use graph::{Graph, GraphError, NodeId};
pub use path::{find_all_paths, Path, PathError, PathFinder, PathSet, TraversalLimits};
