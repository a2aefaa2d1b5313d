//! Error types for the Mermaid pipeline.
//!
//! Validation never stops at the first problem it finds. Each problem is
//! recorded as a [`Violation`] of one [`ViolationKind`], and all of them are
//! reported together in a single [`ValidationError`] whose message lists the
//! violated categories in a fixed order.
//!
//! Rendering itself can fail only on trees that skipped validation; those
//! failures are reported through [`RenderError`], the same recoverable channel
//! that carries validation failures.
//!
//! # Example
//!
//! ```
//! use flowscribe_core::{Flowchart, Node};
//! use flowscribe_mermaid::{ViolationKind, validate};
//!
//! let mut chart = Flowchart::vertical(None);
//! chart.add_node(Node::process("Bad@Name", None)).unwrap();
//!
//! let err = validate(&chart).unwrap_err();
//! assert_eq!(err.kinds().collect::<Vec<_>>(), vec![ViolationKind::InvalidNames]);
//! assert_eq!(
//!     err.to_string(),
//!     "flowchart contains violations: contains invalid mermaid names"
//! );
//! ```

mod collector;
mod render_error;
mod validation_error;
mod violation;

pub(crate) use collector::ViolationCollector;
pub(crate) use violation::UNTITLED_SUBGRAPH;

pub use render_error::RenderError;
pub use validation_error::ValidationError;
pub use violation::{Violation, ViolationKind};
