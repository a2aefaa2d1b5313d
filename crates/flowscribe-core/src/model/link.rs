use serde::{Deserialize, Serialize};

use crate::{Flowchart, Node, name};

/// Line style of a link.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum LineType {
    /// Invisible link, only influences layout.
    None,
    #[default]
    Solid,
    Dotted,
    Thick,
}

/// Arrow head drawn at the ends of a link.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ArrowType {
    None,
    #[default]
    Normal,
    Circle,
    Cross,
}

/// One end of a [`Link`].
///
/// A link may point at a node or at a whole subgraph. Either way the endpoint
/// is referred to by name only; the link never owns what it points at.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    Node(String),
    Group(Option<String>),
}

impl Endpoint {
    /// Returns the endpoint's name, or `None` if it has none to refer to.
    ///
    /// An untitled group and an empty node name both count as missing.
    pub fn name(&self) -> Option<&str> {
        let name = match self {
            Endpoint::Node(name) => Some(name.as_str()),
            Endpoint::Group(title) => title.as_deref(),
        };
        name.filter(|name| !name.is_empty())
    }

    /// Returns the endpoint's identifier as written to a diagram.
    pub fn renderable_name(&self) -> Option<String> {
        self.name().map(name::renderable_name)
    }
}

impl From<&Node> for Endpoint {
    fn from(node: &Node) -> Self {
        Endpoint::Node(node.name().to_string())
    }
}

impl From<&Flowchart> for Endpoint {
    fn from(chart: &Flowchart) -> Self {
        Endpoint::Group(chart.title().map(str::to_string))
    }
}

fn default_target_arrow() -> bool {
    true
}

/// A connection between two endpoints.
///
/// Created through the line-style factories, which default to a normal arrow
/// head drawn at the target end only.
///
/// # Examples
///
/// ```
/// use flowscribe_core::{ArrowType, LineType, Link, Node};
///
/// let a = Node::process("A", None);
/// let b = Node::process("B", None);
///
/// let link = Link::dotted(&a, &b, Some("maybe"))
///     .with_arrow_type(ArrowType::Cross)
///     .with_arrows(true, true);
///
/// assert_eq!(link.line_type(), LineType::Dotted);
/// assert!(link.origin_arrow() && link.target_arrow());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    origin: Endpoint,
    target: Endpoint,

    #[serde(default, rename = "line")]
    line_type: LineType,

    #[serde(default, rename = "arrow")]
    arrow_type: ArrowType,

    #[serde(default)]
    origin_arrow: bool,

    #[serde(default = "default_target_arrow")]
    target_arrow: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
}

impl Link {
    /// Creates a link with the given line style and the default arrow setup.
    pub fn new(
        origin: impl Into<Endpoint>,
        target: impl Into<Endpoint>,
        line_type: LineType,
        label: Option<&str>,
    ) -> Self {
        Self {
            origin: origin.into(),
            target: target.into(),
            line_type,
            arrow_type: ArrowType::Normal,
            origin_arrow: false,
            target_arrow: true,
            label: label.map(str::to_string),
        }
    }

    /// Creates an invisible link.
    pub fn blank(
        origin: impl Into<Endpoint>,
        target: impl Into<Endpoint>,
        label: Option<&str>,
    ) -> Self {
        Self::new(origin, target, LineType::None, label)
    }

    /// Creates a solid link.
    pub fn solid(
        origin: impl Into<Endpoint>,
        target: impl Into<Endpoint>,
        label: Option<&str>,
    ) -> Self {
        Self::new(origin, target, LineType::Solid, label)
    }

    /// Creates a dotted link.
    pub fn dotted(
        origin: impl Into<Endpoint>,
        target: impl Into<Endpoint>,
        label: Option<&str>,
    ) -> Self {
        Self::new(origin, target, LineType::Dotted, label)
    }

    /// Creates a thick link.
    pub fn thick(
        origin: impl Into<Endpoint>,
        target: impl Into<Endpoint>,
        label: Option<&str>,
    ) -> Self {
        Self::new(origin, target, LineType::Thick, label)
    }

    pub fn with_arrow_type(mut self, arrow_type: ArrowType) -> Self {
        self.arrow_type = arrow_type;
        self
    }

    /// Sets whether an arrow head is drawn at the origin and at the target end.
    pub fn with_arrows(mut self, origin: bool, target: bool) -> Self {
        self.origin_arrow = origin;
        self.target_arrow = target;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn origin(&self) -> &Endpoint {
        &self.origin
    }

    pub fn target(&self) -> &Endpoint {
        &self.target
    }

    pub fn line_type(&self) -> LineType {
        self.line_type
    }

    pub fn arrow_type(&self) -> ArrowType {
        self.arrow_type
    }

    pub fn origin_arrow(&self) -> bool {
        self.origin_arrow
    }

    pub fn target_arrow(&self) -> bool {
        self.target_arrow
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}
