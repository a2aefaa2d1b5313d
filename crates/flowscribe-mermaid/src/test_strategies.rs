//! Proptest strategies for arbitrary flowchart trees.
//!
//! Trees are assembled without the guarded `add_*` operations, so they may
//! contain illegal names, untitled subgraphs, duplicates and deep nesting.

use proptest::prelude::*;

use flowscribe_core::{Endpoint, Flowchart, FlowchartParts, LineType, Link, Node};

pub(crate) fn name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[A-Za-z][A-Za-z0-9 _-]{0,6}",
        1 => "[A-Za-z@!()#.]{1,4}",
    ]
}

fn node_strategy() -> impl Strategy<Value = Node> {
    name_strategy().prop_map(|name| Node::process(name, None))
}

fn link_strategy() -> impl Strategy<Value = Link> {
    (name_strategy(), name_strategy(), any::<bool>()).prop_map(|(origin, target, to_group)| {
        let target = if to_group {
            Endpoint::Group(Some(target))
        } else {
            Endpoint::Node(target)
        };
        Link::new(Endpoint::Node(origin), target, LineType::Solid, None)
    })
}

fn title_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        4 => name_strategy().prop_map(Some),
        1 => Just(None),
    ]
}

/// Arbitrary trees up to four levels deep.
pub(crate) fn flowchart_strategy() -> impl Strategy<Value = Flowchart> {
    let leaf = (
        title_strategy(),
        prop::collection::vec(node_strategy(), 0..4),
        prop::collection::vec(link_strategy(), 0..3),
    )
        .prop_map(|(title, nodes, links)| {
            Flowchart::from_parts(FlowchartParts {
                title,
                nodes,
                links,
                ..FlowchartParts::default()
            })
        });

    leaf.prop_recursive(3, 24, 3, |inner| {
        (
            title_strategy(),
            prop::collection::vec(node_strategy(), 0..4),
            prop::collection::vec(inner, 0..3),
            prop::collection::vec(link_strategy(), 0..3),
        )
            .prop_map(|(title, nodes, subgraphs, links)| {
                Flowchart::from_parts(FlowchartParts {
                    title,
                    nodes,
                    subgraphs,
                    links,
                    ..FlowchartParts::default()
                })
            })
    })
}

/// Counts the links declared anywhere in `chart`.
pub(crate) fn total_links(chart: &Flowchart) -> usize {
    chart.links().len() + chart.subgraphs().iter().map(total_links).sum::<usize>()
}
