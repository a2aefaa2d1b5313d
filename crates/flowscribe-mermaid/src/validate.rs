//! Structural validation of a flowchart against Mermaid's limitations.
//!
//! Validation walks the whole tree and reports every violated category at
//! once. Three categories are checked:
//!
//! - node names and subgraph titles outside the identifier grammar
//! - subgraphs that contain subgraphs of their own
//! - names repeated anywhere in the tree
//!
//! The root title only ends up in front matter, so it is exempt from the
//! grammar check.

use indexmap::IndexMap;
use log::debug;

use flowscribe_core::{Flowchart, name::is_valid_name};

use crate::{
    RenderOptions,
    error::{UNTITLED_SUBGRAPH, ValidationError, ViolationCollector, ViolationKind},
};

/// Validates `chart` with the default rendering options.
///
/// # Errors
///
/// Returns a [`ValidationError`] listing every violated category.
///
/// # Examples
///
/// ```
/// use flowscribe_core::{Flowchart, Node};
/// use flowscribe_mermaid::validate;
///
/// let mut chart = Flowchart::vertical(Some("Root"));
/// chart.add_node(Node::process("Valid Node", None)).unwrap();
/// assert!(validate(&chart).is_ok());
/// ```
pub fn validate(chart: &Flowchart) -> Result<(), ValidationError> {
    Validator::default().validate(chart)
}

/// Checks flowcharts against the constraints of the Mermaid flowchart syntax.
#[derive(Debug, Default, Clone, Copy)]
pub struct Validator {
    anonymous_groups: bool,
}

impl Validator {
    /// Creates a validator matching the given rendering options.
    ///
    /// When anonymous groups are enabled, untitled subgraphs are accepted: the
    /// renderer will name them itself.
    pub fn new(options: &RenderOptions) -> Self {
        Self {
            anonymous_groups: options.anonymous_groups,
        }
    }

    /// Validates `chart` and its whole subtree.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] listing every violated category in the
    /// order invalid names, nested subgraphs, repeated names.
    pub fn validate(&self, chart: &Flowchart) -> Result<(), ValidationError> {
        let mut collector = ViolationCollector::new();

        self.check_grammar(chart, &mut collector);
        check_nesting(chart, &mut collector);
        check_repeated_names(chart, &mut collector);

        let result = collector.finish();
        match &result {
            Ok(()) => debug!("Flowchart passed validation"),
            Err(err) => debug!(violations = err.violations().len(); "Flowchart failed validation"),
        }
        result
    }

    fn check_grammar(&self, chart: &Flowchart, collector: &mut ViolationCollector) {
        for node in chart.nodes() {
            if !is_valid_name(node.name()) {
                collector.emit(ViolationKind::InvalidNames, node.name());
            }
        }

        for subgraph in chart.subgraphs() {
            match subgraph.title().filter(|title| !title.is_empty()) {
                Some(title) if !is_valid_name(title) => {
                    collector.emit(ViolationKind::InvalidNames, title);
                }
                Some(_) => {}
                None if !self.anonymous_groups => {
                    collector.emit(ViolationKind::InvalidNames, UNTITLED_SUBGRAPH);
                }
                None => {}
            }
            self.check_grammar(subgraph, collector);
        }
    }
}

/// Flags every top-level subgraph that has subgraphs of its own.
fn check_nesting(chart: &Flowchart, collector: &mut ViolationCollector) {
    for subgraph in chart.subgraphs() {
        if !subgraph.subgraphs().is_empty() {
            let title = subgraph
                .title()
                .filter(|title| !title.is_empty())
                .unwrap_or(UNTITLED_SUBGRAPH);
            collector.emit(ViolationKind::NestedSubgraphs, title);
        }
    }
}

fn check_repeated_names(chart: &Flowchart, collector: &mut ViolationCollector) {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for name in chart.all_names() {
        *counts.entry(name).or_default() += 1;
    }

    for (name, count) in counts {
        if count > 1 {
            collector.emit(ViolationKind::RepeatedNames, name);
        }
    }
}
