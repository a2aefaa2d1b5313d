//! Pruning elements whose names Mermaid cannot accept.

use log::trace;

use flowscribe_core::{Flowchart, FlowchartParts, Link, name::is_valid_name};

use crate::flatten::flatten_subgraphs;

/// Returns a copy of `chart` keeping only elements with legal names.
///
/// Kept are nodes whose name matches the identifier grammar, subgraphs whose
/// title is present and legal (sanitized recursively), and links whose origin
/// and target names are both legal. An empty subgraph with a legal title is
/// kept. The root title is left as is.
pub fn sanitize(chart: &Flowchart) -> Flowchart {
    let nodes = chart
        .nodes()
        .iter()
        .filter(|node| is_valid_name(node.name()))
        .cloned()
        .collect();

    let subgraphs = chart
        .subgraphs()
        .iter()
        .filter(|subgraph| subgraph.title().is_some_and(is_valid_name))
        .map(sanitize)
        .collect();

    let links = chart
        .links()
        .iter()
        .filter(|link| has_legal_endpoints(link))
        .cloned()
        .collect();

    Flowchart::from_parts(FlowchartParts {
        title: chart.title().map(str::to_string),
        direction: chart.direction(),
        nodes,
        subgraphs,
        links,
    })
}

fn has_legal_endpoints(link: &Link) -> bool {
    let legal = |name: Option<&str>| name.is_some_and(is_valid_name);
    legal(link.origin().name()) && legal(link.target().name())
}

/// Prepares an arbitrary tree for rendering: flattens every top-level subgraph,
/// then sanitizes the result.
///
/// # Examples
///
/// ```
/// use flowscribe_core::{Flowchart, FlowchartParts, Node};
/// use flowscribe_mermaid::{mermaid_friendly, validate};
///
/// let chart = Flowchart::from_parts(FlowchartParts {
///     nodes: vec![Node::process("Good", None), Node::process("Bad@", None)],
///     ..FlowchartParts::default()
/// });
/// assert!(validate(&chart).is_err());
///
/// let friendly = mermaid_friendly(&chart);
/// assert!(validate(&friendly).is_ok());
/// assert_eq!(friendly.nodes().len(), 1);
/// ```
pub fn mermaid_friendly(root: &Flowchart) -> Flowchart {
    let friendly = sanitize(&flatten_subgraphs(root));
    trace!(friendly:?; "Mermaid friendly flowchart");
    friendly
}
