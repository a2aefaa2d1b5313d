use serde::{Deserialize, Serialize};

/// Flow direction of a flowchart or subgraph.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Left to right.
    #[serde(alias = "lr")]
    HorizontalRight,
    /// Right to left.
    #[serde(alias = "rl")]
    HorizontalLeft,
    /// Top to bottom.
    #[default]
    #[serde(alias = "tb", alias = "td")]
    Vertical,
}
