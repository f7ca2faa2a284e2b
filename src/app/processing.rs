//! The two stages of a run: loading the graph description and searching it
//! for routes. Both log their progress through the verbose macros.

use super::error::AppError;
use super::{verbose_eprintln, verbose_println};
use crate::graph_loader::{self, LoadedGraph};
use crate::path::{PathFinder, PathSet, TraversalLimits};

/// Loads the graph from `input_path` and applies endpoint overrides.
pub fn load_graph(
    input_path: &str,
    node_capacity: Option<usize>,
    start_override: Option<&str>,
    end_override: Option<&str>,
    quiet_mode: bool,
) -> Result<LoadedGraph, AppError> {
    verbose_println!(quiet_mode, "\n[STEP 1] Loading graph from {}...", input_path);
    let mut loaded = graph_loader::load_graph_from_file(input_path, node_capacity)?;

    verbose_println!(
        quiet_mode,
        "   => {} cities, {} roads.",
        loaded.graph.count(),
        loaded.graph.edge_count()
    );
    if !loaded.count_matches() {
        verbose_eprintln!(
            quiet_mode,
            "   [WARNING] Header declares {} cities but {} were found.",
            loaded.declared_count,
            loaded.graph.count()
        );
    }

    if let Some(start) = start_override {
        verbose_println!(quiet_mode, "   => Start overridden: {} -> {}", loaded.start, start);
        loaded.start = start.to_string();
    }
    if let Some(end) = end_override {
        verbose_println!(quiet_mode, "   => End overridden: {} -> {}", loaded.end, end);
        loaded.end = end.to_string();
    }

    Ok(loaded)
}

/// Enumerates every route between the loaded endpoints.
pub fn find_routes(
    loaded: &LoadedGraph,
    limits: TraversalLimits,
    quiet_mode: bool,
) -> Result<PathSet, AppError> {
    verbose_println!(
        quiet_mode,
        "\n[STEP 2] Searching routes {} -> {}...",
        loaded.start,
        loaded.end
    );
    if let Some(depth) = limits.max_depth {
        verbose_println!(quiet_mode, "   => Routes longer than {} roads are skipped.", depth);
    }

    let finder = PathFinder::new(&loaded.graph, &loaded.start, &loaded.end)
        .map_err(|e| {
            verbose_eprintln!(quiet_mode, "   [ERROR] {}", e);
            e
        })?
        .with_limits(limits);
    let routes = finder.find_all()?;

    if routes.is_empty() {
        verbose_println!(quiet_mode, "   => {} is unreachable from {}.", loaded.end, loaded.start);
    } else {
        verbose_println!(quiet_mode, "   => Found {} routes.", routes.count());
    }
    Ok(routes)
}

/// Builds the text printed to the user: the adjacency dump (unless quiet),
/// a blank line, then the numbered route listing.
pub fn render_report(loaded: &LoadedGraph, routes: &PathSet, quiet_mode: bool) -> String {
    let mut report = String::new();
    if !quiet_mode {
        report.push_str(&loaded.graph.render_adjacency());
        report.push('\n');
    }
    report.push_str(&routes.render());
    report.push('\n');
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_loader::parse_description;

    #[test]
    fn report_with_graph_dump() {
        let loaded = parse_description("4 A D A B A C B D C D", None).unwrap();
        let routes = find_routes(&loaded, TraversalLimits::default(), true).unwrap();
        assert_eq!(
            render_report(&loaded, &routes, false),
            "Graph:\nA -> B C\nB -> D\nC -> D\nD -> \n\n\
             1. A -> B -> D\n2. A -> C -> D\n\nTotal routes: 2\n"
        );
    }

    #[test]
    fn quiet_report_has_routes_only() {
        let loaded = parse_description("2 B A A B", None).unwrap();
        let routes = find_routes(&loaded, TraversalLimits::default(), true).unwrap();
        assert_eq!(render_report(&loaded, &routes, true), "\nTotal routes: 0\n");
    }

    #[test]
    fn unknown_endpoint_surfaces_as_path_error() {
        let mut loaded = parse_description("2 A B A B", None).unwrap();
        loaded.end = "Q".to_string();
        let err = find_routes(&loaded, TraversalLimits::default(), true).unwrap_err();
        assert!(matches!(err, AppError::Path(crate::path::PathError::UnknownNode(n)) if n == "Q"));
    }
}
