use log::debug;
use serde::{Deserialize, Serialize};

use crate::{Direction, Link, LinkEnd, ModelError, Node};

/// A flowchart: the root of a diagram, or a nested subgraph of one.
///
/// A subgraph's title doubles as its unique name, so every flowchart added
/// through [`Flowchart::add_subgraph`] must carry a non-empty title. The root
/// has no such requirement.
///
/// All node names and subgraph titles are unique across the whole tree.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flowchart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,

    #[serde(default)]
    direction: Direction,

    #[serde(default, rename = "node")]
    nodes: Vec<Node>,

    #[serde(default, rename = "subgraph")]
    subgraphs: Vec<Flowchart>,

    #[serde(default, rename = "link")]
    links: Vec<Link>,
}

/// The owned pieces of a [`Flowchart`], used by tree transforms that rebuild
/// charts without going through the guarded `add_*` operations.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FlowchartParts {
    pub title: Option<String>,
    pub direction: Direction,
    pub nodes: Vec<Node>,
    pub subgraphs: Vec<Flowchart>,
    pub links: Vec<Link>,
}

impl Flowchart {
    /// Creates an empty flowchart.
    pub fn new(direction: Direction, title: Option<&str>) -> Self {
        Self {
            title: title.map(str::to_string),
            direction,
            ..Self::default()
        }
    }

    /// Creates an empty top-to-bottom flowchart.
    pub fn vertical(title: Option<&str>) -> Self {
        Self::new(Direction::Vertical, title)
    }

    /// Creates an empty left-to-right flowchart.
    pub fn left_to_right(title: Option<&str>) -> Self {
        Self::new(Direction::HorizontalRight, title)
    }

    /// Creates an empty right-to-left flowchart.
    pub fn right_to_left(title: Option<&str>) -> Self {
        Self::new(Direction::HorizontalLeft, title)
    }

    /// Assembles a flowchart from its parts without checking any invariant.
    ///
    /// Callers are expected to pass the result through validation before
    /// rendering it.
    pub fn from_parts(parts: FlowchartParts) -> Self {
        let FlowchartParts {
            title,
            direction,
            nodes,
            subgraphs,
            links,
        } = parts;
        Self {
            title,
            direction,
            nodes,
            subgraphs,
            links,
        }
    }

    pub fn into_parts(self) -> FlowchartParts {
        FlowchartParts {
            title: self.title,
            direction: self.direction,
            nodes: self.nodes,
            subgraphs: self.subgraphs,
            links: self.links,
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn subgraphs(&self) -> &[Flowchart] {
        &self.subgraphs
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Returns every name in the tree: this chart's title, its node names, and
    /// recursively the names inside each subgraph, in declaration order.
    ///
    /// Missing and empty titles are skipped. Duplicates are kept.
    pub fn all_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_names(&mut names);
        names
    }

    fn collect_names<'a>(&'a self, names: &mut Vec<&'a str>) {
        if let Some(title) = self.title().filter(|title| !title.is_empty()) {
            names.push(title);
        }
        names.extend(self.nodes.iter().map(Node::name));
        for subgraph in &self.subgraphs {
            subgraph.collect_names(names);
        }
    }

    /// Returns `true` if `name` is used anywhere in the tree.
    pub fn contains_name(&self, name: &str) -> bool {
        self.title() == Some(name)
            || self.nodes.iter().any(|node| node.name() == name)
            || self.subgraphs.iter().any(|sub| sub.contains_name(name))
    }

    /// Appends a node to this chart.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicateName`] if the node's name already exists
    /// anywhere in the tree. The chart is left unchanged.
    pub fn add_node(&mut self, node: Node) -> Result<(), ModelError> {
        if self.contains_name(node.name()) {
            return Err(ModelError::DuplicateName {
                name: node.name().to_string(),
            });
        }

        debug!(name = node.name(); "Adding node");
        self.nodes.push(node);
        Ok(())
    }

    /// Appends a nested subgraph to this chart.
    ///
    /// Every name the subgraph brings along (its title and everything inside
    /// it) is checked against the tree.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::MissingTitle`] if the subgraph has no title or an
    /// empty one, and [`ModelError::DuplicateName`] on the first colliding
    /// name. The chart is left unchanged.
    pub fn add_subgraph(&mut self, subgraph: Flowchart) -> Result<(), ModelError> {
        let Some(title) = subgraph.title().filter(|title| !title.is_empty()) else {
            return Err(ModelError::MissingTitle);
        };

        if let Some(name) = subgraph
            .all_names()
            .into_iter()
            .find(|name| self.contains_name(name))
        {
            return Err(ModelError::DuplicateName {
                name: name.to_string(),
            });
        }

        debug!(title; "Adding subgraph");
        self.subgraphs.push(subgraph);
        Ok(())
    }

    /// Appends a link to this chart. Links carry no uniqueness constraint.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::MissingEndpoint`] if the target or the origin has
    /// no name, checking the target first. The chart is left unchanged.
    pub fn add_link(&mut self, link: Link) -> Result<(), ModelError> {
        if link.target().name().is_none() {
            return Err(ModelError::MissingEndpoint {
                end: LinkEnd::Target,
            });
        }
        if link.origin().name().is_none() {
            return Err(ModelError::MissingEndpoint {
                end: LinkEnd::Origin,
            });
        }

        debug!(origin:? = link.origin(), target:? = link.target(); "Adding link");
        self.links.push(link);
        Ok(())
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn name_strategy() -> impl Strategy<Value = String> {
        "[A-E]{1,2}"
    }

    /// Builds a tree from generated names, skipping names the guards reject.
    fn build_tree(root_nodes: &[String], sub_nodes: &[String]) -> Flowchart {
        let mut chart = Flowchart::vertical(None);
        for name in root_nodes {
            let _ = chart.add_node(Node::process(name.as_str(), None));
        }
        let mut sub = Flowchart::vertical(Some("Sub"));
        for name in sub_nodes {
            let _ = sub.add_node(Node::process(name.as_str(), None));
        }
        let _ = chart.add_subgraph(sub);
        chart
    }

    /// Adding an existing name fails and leaves the tree unchanged.
    fn check_duplicate_add_is_rejected(
        chart: &Flowchart,
        pick: usize,
    ) -> Result<(), TestCaseError> {
        let names = chart.all_names();
        let name = names[pick % names.len()].to_string();

        let mut node_target = chart.clone();
        let result = node_target.add_node(Node::process(name.as_str(), None));
        prop_assert_eq!(
            result,
            Err(ModelError::DuplicateName { name: name.clone() })
        );
        prop_assert_eq!(&node_target, chart);

        let mut sub_target = chart.clone();
        let result = sub_target.add_subgraph(Flowchart::vertical(Some(name.as_str())));
        prop_assert_eq!(result, Err(ModelError::DuplicateName { name }));
        prop_assert_eq!(&sub_target, chart);
        Ok(())
    }

    /// Names produced by guarded construction are unique.
    fn check_names_stay_unique(chart: &Flowchart) -> Result<(), TestCaseError> {
        let names = chart.all_names();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), names.len());
        Ok(())
    }

    proptest! {
        #[test]
        fn duplicate_add_is_rejected(
            root_nodes in prop::collection::vec(name_strategy(), 0..6),
            sub_nodes in prop::collection::vec(name_strategy(), 0..6),
            pick in any::<usize>(),
        ) {
            let chart = build_tree(&root_nodes, &sub_nodes);
            check_duplicate_add_is_rejected(&chart, pick)?;
        }

        #[test]
        fn names_stay_unique(
            root_nodes in prop::collection::vec(name_strategy(), 0..8),
            sub_nodes in prop::collection::vec(name_strategy(), 0..8),
        ) {
            let chart = build_tree(&root_nodes, &sub_nodes);
            check_names_stay_unique(&chart)?;
        }
    }
}
