//! Gathering every link in a tree into one deterministic list.
//!
//! Mermaid link statements are written once, after all nodes and subgraphs,
//! regardless of where in the tree a link was declared. Sorting them makes
//! the output independent of insertion order.

use std::cmp::Ordering;

use flowscribe_core::{Flowchart, Link};

/// Returns all links declared in `chart` and its descendants, sorted.
///
/// Links are ordered by origin renderable name, then target renderable name.
/// The remaining link fields break ties, so the order is total.
///
/// # Examples
///
/// ```
/// use flowscribe_core::{Flowchart, Link, Node};
/// use flowscribe_mermaid::collect_links;
///
/// let (a, b, c) = (
///     Node::process("A", None),
///     Node::process("B", None),
///     Node::process("C", None),
/// );
/// let mut chart = Flowchart::vertical(None);
/// chart.add_link(Link::solid(&b, &c, None)).unwrap();
/// chart.add_link(Link::solid(&a, &c, None)).unwrap();
///
/// let origins: Vec<_> = collect_links(&chart)
///     .iter()
///     .filter_map(|link| link.origin().name())
///     .collect();
/// assert_eq!(origins, vec!["A", "B"]);
/// ```
pub fn collect_links(chart: &Flowchart) -> Vec<&Link> {
    let mut links = Vec::new();
    gather(chart, &mut links);
    links.sort_by(|a, b| compare_links(a, b));
    links
}

fn gather<'a>(chart: &'a Flowchart, links: &mut Vec<&'a Link>) {
    links.extend(chart.links());
    for subgraph in chart.subgraphs() {
        gather(subgraph, links);
    }
}

fn compare_links(a: &Link, b: &Link) -> Ordering {
    let key = |link: &Link| {
        (
            link.origin().renderable_name().unwrap_or_default(),
            link.target().renderable_name().unwrap_or_default(),
        )
    };

    key(a)
        .cmp(&key(b))
        .then_with(|| a.line_type().cmp(&b.line_type()))
        .then_with(|| a.arrow_type().cmp(&b.arrow_type()))
        .then_with(|| a.origin_arrow().cmp(&b.origin_arrow()))
        .then_with(|| a.target_arrow().cmp(&b.target_arrow()))
        .then_with(|| a.label().cmp(&b.label()))
        .then_with(|| a.origin().cmp(b.origin()))
        .then_with(|| a.target().cmp(b.target()))
}
