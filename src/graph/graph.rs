// graph.rs
// ──────────────────────────────────────────────────────────────────────────────
// A small directed graph of named locations. Nodes are appended once and keep
// the handle they were given for the lifetime of the graph; edges are kept as
// per-node lists of neighbor handles in the order they were added.
// ──────────────────────────────────────────────────────────────────────────────
use std::collections::HashMap;
use std::fmt;

use super::error::GraphError;

/// Represents a stable handle for a node in the graph.
pub type NodeId = usize;

/// Directed graph keyed by node name.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    names: Vec<String>,
    index: HashMap<String, NodeId>,
    adjacency: Vec<Vec<NodeId>>,
    node_capacity: Option<usize>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph that refuses to grow beyond `limit` nodes.
    pub fn with_node_capacity(limit: usize) -> Self {
        Self {
            node_capacity: Some(limit),
            ..Self::default()
        }
    }

    /// Appends a node and returns its handle.
    ///
    /// # Errors
    /// `CapacityExceeded` when a node capacity is configured and already
    /// reached, `DuplicateNode` when the name is already present.
    pub fn add_node(&mut self, name: &str) -> Result<NodeId, GraphError> {
        if let Some(capacity) = self.node_capacity {
            if self.names.len() >= capacity {
                return Err(GraphError::CapacityExceeded {
                    capacity,
                    name: name.to_string(),
                });
            }
        }
        if self.index.contains_key(name) {
            return Err(GraphError::DuplicateNode(name.to_string()));
        }

        let id = self.names.len();
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), id);
        self.adjacency.push(Vec::new());
        Ok(id)
    }

    /// Looks a node up by name.
    pub fn resolve(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    /// Same as [`Graph::resolve`], but reports a missing name as an error.
    pub fn try_resolve(&self, name: &str) -> Result<NodeId, GraphError> {
        self.resolve(name)
            .ok_or_else(|| GraphError::UnknownNode(name.to_string()))
    }

    /// Returns the name behind a handle.
    pub fn name_of(&self, id: NodeId) -> Result<&str, GraphError> {
        self.names
            .get(id)
            .map(String::as_str)
            .ok_or(GraphError::InvalidHandle(id))
    }

    /// Adds a directed edge `from -> to`. Both endpoints must already exist.
    pub fn add_edge(&mut self, from: &str, to: &str) -> Result<(), GraphError> {
        let from_id = self.try_resolve(from)?;
        let to_id = self.try_resolve(to)?;
        self.adjacency[from_id].push(to_id);
        Ok(())
    }

    /// Neighbors of `id` in the order their edges were added.
    /// An out-of-range handle has no neighbors.
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn count(&self) -> usize {
        self.names.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Node names in handle order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Renders the adjacency dump: a `Graph:` header, then `name -> n1 n2 ...`
    /// per node in handle order.
    pub fn render_adjacency(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Graph:")?;
        for (name, neighbors) in self.names.iter().zip(&self.adjacency) {
            let joined = neighbors
                .iter()
                .map(|&n| self.names[n].as_str())
                .collect::<Vec<&str>>()
                .join(" ");
            writeln!(f, "{} -> {}", name, joined)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_of(nodes: &[&str], edges: &[(&str, &str)]) -> Graph {
        let mut g = Graph::new();
        for n in nodes {
            g.add_node(n).unwrap();
        }
        for (from, to) in edges {
            g.add_edge(from, to).unwrap();
        }
        g
    }

    #[test]
    fn handles_are_assigned_in_insertion_order() {
        let mut g = Graph::new();
        assert_eq!(g.add_node("Moscow").unwrap(), 0);
        assert_eq!(g.add_node("Tver").unwrap(), 1);
        assert_eq!(g.add_node("Kazan").unwrap(), 2);
        assert_eq!(g.count(), 3);
        assert_eq!(g.resolve("Tver"), Some(1));
        assert_eq!(g.name_of(2).unwrap(), "Kazan");
    }

    #[test]
    fn resolve_missing_name() {
        let g = graph_of(&["A"], &[]);
        assert_eq!(g.resolve("B"), None);
        assert!(matches!(g.try_resolve("B"), Err(GraphError::UnknownNode(n)) if n == "B"));
    }

    #[test]
    fn name_of_out_of_range() {
        let g = graph_of(&["A"], &[]);
        assert!(matches!(g.name_of(1), Err(GraphError::InvalidHandle(1))));
    }

    #[test]
    fn capacity_is_enforced() {
        let mut g = Graph::with_node_capacity(2);
        g.add_node("A").unwrap();
        g.add_node("B").unwrap();
        let err = g.add_node("C").unwrap_err();
        assert!(matches!(err, GraphError::CapacityExceeded { capacity: 2, ref name } if name == "C"));
        assert_eq!(g.count(), 2);
        assert!(!g.contains("C"));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut g = Graph::new();
        g.add_node("A").unwrap();
        assert!(matches!(g.add_node("A"), Err(GraphError::DuplicateNode(_))));
        assert_eq!(g.count(), 1);
    }

    #[test]
    fn neighbors_keep_edge_order() {
        let g = graph_of(&["A", "B", "C", "D"], &[("A", "D"), ("A", "B"), ("A", "C")]);
        assert_eq!(g.neighbors(0), &[3, 1, 2]);
        assert!(g.neighbors(1).is_empty());
        assert!(g.neighbors(42).is_empty());
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn edge_with_unknown_endpoint_is_an_error() {
        let mut g = graph_of(&["A", "B"], &[]);
        assert!(matches!(g.add_edge("A", "Z"), Err(GraphError::UnknownNode(n)) if n == "Z"));
        assert!(matches!(g.add_edge("Y", "B"), Err(GraphError::UnknownNode(n)) if n == "Y"));
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn self_loop_is_stored() {
        let g = graph_of(&["A"], &[("A", "A")]);
        assert_eq!(g.neighbors(0), &[0]);
    }

    #[test]
    fn adjacency_dump() {
        let g = graph_of(&["A", "B", "C"], &[("A", "B"), ("A", "C"), ("B", "C")]);
        assert_eq!(g.render_adjacency(), "Graph:\nA -> B C\nB -> C\nC -> \n");
        assert_eq!(g.names().collect::<Vec<_>>(), vec!["A", "B", "C"]);
    }
}
