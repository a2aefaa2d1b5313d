//! Collapsing nested subgraphs into the single level Mermaid supports.
//!
//! Both transforms return new trees and leave their input untouched.

use log::trace;

use flowscribe_core::{Flowchart, FlowchartParts, Link, Node};

/// Returns a copy of `chart` with every descendant subgraph dissolved into it.
///
/// The copy holds the chart's own nodes followed by the nodes of each
/// descendant (depth-first, in declaration order), and likewise for links. It
/// has no subgraphs. Title and direction are kept.
///
/// # Examples
///
/// ```
/// use flowscribe_core::{Flowchart, Node};
/// use flowscribe_mermaid::flatten;
///
/// let mut inner = Flowchart::vertical(Some("Inner"));
/// inner.add_node(Node::process("B", None)).unwrap();
///
/// let mut outer = Flowchart::vertical(Some("Outer"));
/// outer.add_node(Node::process("A", None)).unwrap();
/// outer.add_subgraph(inner).unwrap();
///
/// let flat = flatten(&outer);
/// assert!(flat.subgraphs().is_empty());
/// assert_eq!(flat.all_names(), vec!["Outer", "A", "B"]);
/// ```
pub fn flatten(chart: &Flowchart) -> Flowchart {
    let mut nodes = Vec::new();
    let mut links = Vec::new();
    gather(chart, &mut nodes, &mut links);

    Flowchart::from_parts(FlowchartParts {
        title: chart.title().map(str::to_string),
        direction: chart.direction(),
        nodes,
        subgraphs: Vec::new(),
        links,
    })
}

fn gather(chart: &Flowchart, nodes: &mut Vec<Node>, links: &mut Vec<Link>) {
    nodes.extend_from_slice(chart.nodes());
    links.extend_from_slice(chart.links());
    for subgraph in chart.subgraphs() {
        gather(subgraph, nodes, links);
    }
}

/// Returns a copy of `root` in which each top-level subgraph is flattened.
///
/// The root keeps its own nodes and links; only the grouping below the first
/// level disappears.
pub fn flatten_subgraphs(root: &Flowchart) -> Flowchart {
    let flattened = Flowchart::from_parts(FlowchartParts {
        title: root.title().map(str::to_string),
        direction: root.direction(),
        nodes: root.nodes().to_vec(),
        subgraphs: root.subgraphs().iter().map(flatten).collect(),
        links: root.links().to_vec(),
    });
    trace!(flattened:?; "Flattened subgraphs");
    flattened
}
