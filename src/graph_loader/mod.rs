// error module
pub mod error;
// loader module
mod loader;

pub use error::LoaderError;
pub use loader::{load_graph_from_file, parse_description, LoadedGraph};
