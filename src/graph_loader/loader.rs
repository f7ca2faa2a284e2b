use std::collections::BTreeSet;
use std::fs;

use super::error::LoaderError;
use crate::graph::Graph;

//─────────────────────────────────────────────────────────────────────────────

/// A graph read from a description, together with the endpoints it names.
#[derive(Debug, Clone)]
pub struct LoadedGraph {
    pub graph: Graph,
    pub start: String,
    pub end: String,
    /// Node count written in the header. Advisory only.
    pub declared_count: usize,
}

impl LoadedGraph {
    /// Whether the header count agrees with the nodes actually found.
    pub fn count_matches(&self) -> bool {
        self.declared_count == self.graph.count()
    }
}

/// Loads a graph description from a file.
pub fn load_graph_from_file(
    file_path: &str,
    node_capacity: Option<usize>,
) -> Result<LoadedGraph, LoaderError> {
    let file_content =
        fs::read_to_string(file_path).map_err(|e| LoaderError::ReadFile(file_path.into(), e))?;

    parse_description(&file_content, node_capacity)
}

/// Parses `<count> <start> <end>` followed by `<from> <to>` pairs, all
/// whitespace separated.
///
/// Nodes are the endpoints plus every name used by an edge, added in
/// sorted order. Edges are added in the order they appear.
pub fn parse_description(
    text: &str,
    node_capacity: Option<usize>,
) -> Result<LoadedGraph, LoaderError> {
    let mut tokens = text.split_whitespace();

    let count_token = tokens.next().ok_or(LoaderError::MissingHeader("node count"))?;
    let declared_count = count_token
        .parse::<usize>()
        .map_err(|_| LoaderError::InvalidNodeCount(count_token.to_string()))?;
    let start = tokens.next().ok_or(LoaderError::MissingHeader("start node"))?;
    let end = tokens.next().ok_or(LoaderError::MissingHeader("end node"))?;

    let edges = pair_up(tokens)?;

    let mut names: BTreeSet<&str> = BTreeSet::new();
    names.insert(start);
    names.insert(end);
    for &(from, to) in &edges {
        names.insert(from);
        names.insert(to);
    }

    let mut graph = match node_capacity {
        Some(limit) => Graph::with_node_capacity(limit),
        None => Graph::new(),
    };
    for name in names {
        graph.add_node(name)?;
    }
    for (from, to) in edges {
        graph.add_edge(from, to)?;
    }

    Ok(LoadedGraph {
        graph,
        start: start.to_string(),
        end: end.to_string(),
        declared_count,
    })
}

fn pair_up<'a, I>(mut tokens: I) -> Result<Vec<(&'a str, &'a str)>, LoaderError>
where
    I: Iterator<Item = &'a str>,
{
    let mut edges = Vec::new();
    while let Some(from) = tokens.next() {
        let to = tokens
            .next()
            .ok_or_else(|| LoaderError::DanglingToken(from.to_string()))?;
        edges.push((from, to));
    }
    Ok(edges)
}
