use std::collections::HashSet;
use std::fmt;

use super::error::PathError;
use crate::graph::{Graph, NodeId};

/// A simple path: node names from start to end inclusive, none repeated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path(Vec<String>);

impl Path {
    pub fn nodes(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" -> "))
    }
}

/// Every path found for one `(start, end)` query, in traversal order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathSet {
    pub paths: Vec<Path>,
}

impl PathSet {
    pub fn count(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Numbered listing (`1. A -> B`), a blank line, then the total.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (i, path) in self.paths.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, path));
        }
        out.push_str(&format!("\nTotal routes: {}", self.count()));
        out
    }
}

/// Caps on traversal cost. `None` means unbounded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TraversalLimits {
    /// Longest path, in edges, that will be explored. Deeper branches are pruned.
    pub max_depth: Option<usize>,
    /// Most paths that may be reported before the search fails.
    pub max_paths: Option<usize>,
}

/// `PathFinder` enumerates every simple path between two fixed nodes of a graph.
pub struct PathFinder<'g> {
    graph: &'g Graph,
    start: NodeId,
    end: NodeId,
    limits: TraversalLimits,
}

/// Mutable bookkeeping shared down one search. Membership in `visited`
/// always mirrors the contents of `prefix`.
struct SearchState {
    visited: HashSet<NodeId>,
    prefix: Vec<NodeId>,
    found: Vec<Vec<NodeId>>,
}

impl<'g> PathFinder<'g> {
    /// Resolves the endpoints once.
    ///
    /// # Errors
    /// `PathError::UnknownNode` if either name is not in the graph.
    pub fn new(graph: &'g Graph, start: &str, end: &str) -> Result<Self, PathError> {
        let start_id = graph
            .resolve(start)
            .ok_or_else(|| PathError::UnknownNode(start.to_string()))?;
        let end_id = graph
            .resolve(end)
            .ok_or_else(|| PathError::UnknownNode(end.to_string()))?;
        Ok(Self {
            graph,
            start: start_id,
            end: end_id,
            limits: TraversalLimits::default(),
        })
    }

    pub fn with_limits(mut self, limits: TraversalLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Runs the search. Each call starts from fresh state, so repeated calls
    /// return identical results.
    pub fn find_all(&self) -> Result<PathSet, PathError> {
        let mut state = SearchState {
            visited: HashSet::new(),
            prefix: Vec::new(),
            found: Vec::new(),
        };
        self.explore(&mut state)?;

        let paths = state
            .found
            .into_iter()
            .map(|ids| self.to_path(&ids))
            .collect::<Result<Vec<Path>, PathError>>()?;
        Ok(PathSet { paths })
    }

    /// Depth-first walk over an explicit stack of `(node, next neighbor index)`
    /// frames, one per expandable node on the current prefix. Neighbors are
    /// tried in adjacency order, giving a pre-order of the search tree.
    fn explore(&self, state: &mut SearchState) -> Result<(), PathError> {
        let mut frames: Vec<(NodeId, usize)> = Vec::new();
        self.enter(self.start, state, &mut frames)?;

        while let Some(&(node, cursor)) = frames.last() {
            match self.graph.neighbors(node).get(cursor).copied() {
                Some(next) => {
                    let top = frames.len() - 1;
                    frames[top].1 += 1;
                    if !state.visited.contains(&next) {
                        self.enter(next, state, &mut frames)?;
                    }
                }
                None => {
                    frames.pop();
                    Self::leave(node, state);
                }
            }
        }
        Ok(())
    }

    /// Pushes `node` onto the prefix. The end node is recorded and left at
    /// once, even if it has outgoing edges; so is a node at the depth cap.
    /// Any other node gets a frame and is left when that frame is popped.
    fn enter(
        &self,
        node: NodeId,
        state: &mut SearchState,
        frames: &mut Vec<(NodeId, usize)>,
    ) -> Result<(), PathError> {
        state.prefix.push(node);
        state.visited.insert(node);

        if node == self.end {
            let outcome = self.record(state);
            Self::leave(node, state);
            return outcome;
        }

        // prefix holds nodes, the path so far has one fewer edge.
        let depth = state.prefix.len() - 1;
        if self.limits.max_depth.is_some_and(|max| depth >= max) {
            Self::leave(node, state);
            return Ok(());
        }

        frames.push((node, 0));
        Ok(())
    }

    fn leave(node: NodeId, state: &mut SearchState) {
        state.visited.remove(&node);
        state.prefix.pop();
    }

    fn record(&self, state: &mut SearchState) -> Result<(), PathError> {
        if let Some(limit) = self.limits.max_paths {
            if state.found.len() >= limit {
                return Err(PathError::TooManyPaths { limit });
            }
        }
        state.found.push(state.prefix.clone());
        Ok(())
    }

    fn to_path(&self, ids: &[NodeId]) -> Result<Path, PathError> {
        ids.iter()
            .map(|&id| self.graph.name_of(id).map(str::to_string))
            .collect::<Result<Vec<String>, _>>()
            .map(Path)
            .map_err(PathError::from)
    }
}

/// Enumerates all simple paths from `start` to `end` with no limits.
pub fn find_all_paths(graph: &Graph, start: &str, end: &str) -> Result<PathSet, PathError> {
    PathFinder::new(graph, start, end)?.find_all()
}
