//! Flowscribe Core Types and Definitions
//!
//! This crate provides the in-memory flowchart model that the rest of
//! Flowscribe validates, transforms and renders. It includes:
//!
//! - **Model**: [`Flowchart`], [`Node`] and [`Link`] with guarded `add_*`
//!   operations ([`model`] module)
//! - **Names**: the identifier grammar shared by validation and sanitization
//!   ([`name`] module)
//! - **Errors**: construction-time failures ([`ModelError`])
//!
//! # Example
//!
//! ```
//! use flowscribe_core::{Flowchart, Link, Node};
//!
//! let mut chart = Flowchart::left_to_right(Some("Checkout"));
//! let cart = Node::process("Cart", None);
//! let pay = Node::decision("Pay", Some("Paid?"));
//!
//! let link = Link::solid(&cart, &pay, None);
//! chart.add_node(cart).unwrap();
//! chart.add_node(pay).unwrap();
//! chart.add_link(link).unwrap();
//!
//! assert!(chart.contains_name("Pay"));
//! ```

pub mod model;
pub mod name;

mod error;

pub use error::{LinkEnd, ModelError};
pub use model::{
    ArrowType, Direction, Endpoint, Flowchart, FlowchartParts, LineType, Link, Node, Shape,
};
