use serde::{Deserialize, Serialize};

use crate::name;

/// Shape classification of a flowchart node.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    /// Start/end node.
    Terminator,
    /// Standard process step.
    #[default]
    Process,
    AlternateProcess,
    Subprocess,
    Decision,
    InputOutput,
    Connector,
    Database,
}

/// A node in a flowchart.
///
/// The `name` is the node's identity: it is unique across the whole tree the
/// node lives in and cannot change after construction. The optional `label` is
/// the text displayed inside the node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Node {
    name: String,

    #[serde(default)]
    shape: Shape,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
}

impl Node {
    /// Creates a node with the given name, shape and optional display label.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowscribe_core::{Node, Shape};
    ///
    /// let node = Node::new("Store", Shape::Database, Some("Orders DB"));
    /// assert_eq!(node.name(), "Store");
    /// assert_eq!(node.label(), Some("Orders DB"));
    /// ```
    pub fn new(name: impl Into<String>, shape: Shape, label: Option<&str>) -> Self {
        Self {
            name: name.into(),
            shape,
            label: label.map(str::to_string),
        }
    }

    /// Creates a terminator (start/end) node.
    pub fn terminator(name: impl Into<String>, label: Option<&str>) -> Self {
        Self::new(name, Shape::Terminator, label)
    }

    /// Creates a process node.
    pub fn process(name: impl Into<String>, label: Option<&str>) -> Self {
        Self::new(name, Shape::Process, label)
    }

    /// Creates an alternate process node.
    pub fn alternate_process(name: impl Into<String>, label: Option<&str>) -> Self {
        Self::new(name, Shape::AlternateProcess, label)
    }

    /// Creates a subprocess node.
    pub fn subprocess(name: impl Into<String>, label: Option<&str>) -> Self {
        Self::new(name, Shape::Subprocess, label)
    }

    /// Creates a decision node.
    pub fn decision(name: impl Into<String>, label: Option<&str>) -> Self {
        Self::new(name, Shape::Decision, label)
    }

    /// Creates an input/output node.
    pub fn input_output(name: impl Into<String>, label: Option<&str>) -> Self {
        Self::new(name, Shape::InputOutput, label)
    }

    /// Creates a connector node.
    pub fn connector(name: impl Into<String>, label: Option<&str>) -> Self {
        Self::new(name, Shape::Connector, label)
    }

    /// Creates a database node.
    pub fn database(name: impl Into<String>, label: Option<&str>) -> Self {
        Self::new(name, Shape::Database, label)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the name as it appears in rendered output (spaces removed).
    pub fn renderable_name(&self) -> String {
        name::renderable_name(&self.name)
    }
}
