//! The flowchart graph model.
//!
//! A [`Flowchart`] owns its [`Node`]s, its nested subgraphs (themselves
//! flowcharts) and its [`Link`]s. Links refer to their endpoints by name through
//! an [`Endpoint`], so a link can point at a node or at a whole subgraph.
//!
//! The model is append-only: it is built through the guarded `add_*`
//! operations, which re-check the relevant invariant and leave the chart
//! untouched when it would be violated.
//!
//! # Organization
//!
//! - [`direction`] - Flow [`Direction`] of a chart or subgraph
//! - [`node`] - [`Node`] and its [`Shape`]
//! - [`link`] - [`Link`], [`Endpoint`], [`LineType`] and [`ArrowType`]
//! - [`flowchart`] - [`Flowchart`] and the guarded mutation API

pub mod direction;
pub mod flowchart;
pub mod link;
pub mod node;

pub use direction::Direction;
pub use flowchart::{Flowchart, FlowchartParts};
pub use link::{ArrowType, Endpoint, LineType, Link};
pub use node::{Node, Shape};
