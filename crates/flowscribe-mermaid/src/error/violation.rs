//! Violation categories reported by validation.

use std::fmt;

/// Name used in help text for a subgraph without a title.
pub(crate) const UNTITLED_SUBGRAPH: &str = "<untitled subgraph>";

/// A category of structural problem that prevents a flowchart from rendering.
///
/// The declaration order is the order categories appear in aggregated
/// messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ViolationKind {
    /// A node name or subgraph title is outside the identifier grammar, or a
    /// subgraph has no title at all.
    InvalidNames,

    /// A subgraph contains subgraphs of its own.
    ///
    /// Mermaid supports a single level of grouping below the root.
    NestedSubgraphs,

    /// A node name or subgraph title appears more than once in the tree.
    RepeatedNames,
}

impl ViolationKind {
    /// Returns the stable code for this category (e.g., "V001").
    pub fn code(&self) -> &'static str {
        match self {
            ViolationKind::InvalidNames => "V001",
            ViolationKind::NestedSubgraphs => "V002",
            ViolationKind::RepeatedNames => "V003",
        }
    }

    /// Returns the message fragment used in aggregated error messages.
    pub fn description(&self) -> &'static str {
        match self {
            ViolationKind::InvalidNames => "contains invalid mermaid names",
            ViolationKind::NestedSubgraphs => "contains nested subgraphs",
            ViolationKind::RepeatedNames => "contains repeated node and/or subgraph names",
        }
    }

    fn advice(&self) -> &'static str {
        match self {
            ViolationKind::InvalidNames => {
                "names may only use letters, digits, `_`, `-` and spaces, and every subgraph needs a title"
            }
            ViolationKind::NestedSubgraphs => {
                "flatten nested subgraphs into their top-level parent before rendering"
            }
            ViolationKind::RepeatedNames => {
                "node names and subgraph titles must be unique across the whole flowchart"
            }
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// One violated category together with the names that triggered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    kind: ViolationKind,
    names: Vec<String>,
}

impl Violation {
    pub(crate) fn new(kind: ViolationKind, names: Vec<String>) -> Self {
        Self { kind, names }
    }

    pub fn kind(&self) -> ViolationKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn description(&self) -> &'static str {
        self.kind.description()
    }

    /// Offending names, in the order they were first found.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns help text suggesting a fix and listing the offending names.
    pub fn help(&self) -> String {
        if self.names.is_empty() {
            return self.kind.advice().to_string();
        }

        let names = self
            .names
            .iter()
            .map(|name| format!("`{name}`"))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}; found: {names}", self.kind.advice())
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code(), self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_order_matches_message_order() {
        let mut kinds = vec![
            ViolationKind::RepeatedNames,
            ViolationKind::InvalidNames,
            ViolationKind::NestedSubgraphs,
        ];
        kinds.sort();
        assert_eq!(
            kinds,
            vec![
                ViolationKind::InvalidNames,
                ViolationKind::NestedSubgraphs,
                ViolationKind::RepeatedNames,
            ]
        );
    }

    #[test]
    fn test_codes() {
        assert_eq!(ViolationKind::InvalidNames.code(), "V001");
        assert_eq!(ViolationKind::NestedSubgraphs.code(), "V002");
        assert_eq!(ViolationKind::RepeatedNames.code(), "V003");
    }

    #[test]
    fn test_violation_display_and_help() {
        let violation = Violation::new(
            ViolationKind::RepeatedNames,
            vec!["A".to_string(), "Sub".to_string()],
        );

        assert_eq!(
            violation.to_string(),
            "[V003] contains repeated node and/or subgraph names"
        );
        assert!(violation.help().ends_with("found: `A`, `Sub`"));
    }

    #[test]
    fn test_help_without_names() {
        let violation = Violation::new(ViolationKind::NestedSubgraphs, Vec::new());
        assert!(!violation.help().contains("found"));
    }
}
