//! Mermaid output for Flowscribe flowcharts.
//!
//! This crate turns a [`Flowchart`] into Mermaid flowchart text. The pipeline
//! runs in one direction:
//!
//! 1. **Validate** ([`validate`]) - reject names Mermaid cannot accept, nested
//!    subgraphs and repeated names, reporting all of them at once
//! 2. **Flatten** ([`flatten`], [`flatten_subgraphs`]) - collapse nesting into
//!    the single level of grouping Mermaid supports
//! 3. **Sanitize** ([`sanitize`]) - prune elements with illegal names
//! 4. **Collect** ([`collect_links`]) - gather every link into one sorted list
//! 5. **Render** ([`Renderer`]) - write the text
//!
//! [`render`] validates the tree as given and renders it. [`render_friendly`]
//! first rewrites the tree with [`mermaid_friendly`] so that most trees can be
//! rendered without errors. No stage mutates its input.
//!
//! # Example
//!
//! ```
//! use flowscribe_core::{Flowchart, Link, Node};
//! use flowscribe_mermaid::{RandomIds, RenderOptions, render};
//!
//! let mut chart = Flowchart::left_to_right(None);
//! let a = Node::process("A", None);
//! let b = Node::process("B", None);
//! chart.add_link(Link::solid(&a, &b, None)).unwrap();
//! chart.add_node(a).unwrap();
//! chart.add_node(b).unwrap();
//!
//! let text = render(&chart, &RenderOptions::default(), RandomIds).unwrap();
//! assert_eq!(text, "flowchart LR;\n    A;\n    B;\n    A --> B;\n");
//! ```

mod collect;
mod flatten;
mod ids;
mod render;
mod sanitize;
mod validate;

#[cfg(test)]
mod test_strategies;

pub mod error;

use log::info;

use flowscribe_core::Flowchart;

pub use collect::collect_links;
pub use error::{RenderError, ValidationError, Violation, ViolationKind};
pub use flatten::{flatten, flatten_subgraphs};
pub use ids::{IdSource, RandomIds, SequentialIds};
pub use render::{RenderOptions, Renderer};
pub use sanitize::{mermaid_friendly, sanitize};
pub use validate::{Validator, validate};

/// Validates `chart` as given and renders it as Mermaid text.
///
/// # Errors
///
/// Returns [`RenderError::Validation`] if the tree fails validation under
/// `options`.
pub fn render(
    chart: &Flowchart,
    options: &RenderOptions,
    ids: impl IdSource,
) -> Result<String, RenderError> {
    info!(anonymous_groups = options.anonymous_groups; "Rendering flowchart");
    Validator::new(options).validate(chart)?;
    Renderer::new(*options, ids).render(chart)
}

/// Rewrites `chart` with [`mermaid_friendly`], then validates and renders the
/// result.
///
/// Illegal names and deep nesting are removed rather than reported; repeated
/// names still fail validation.
///
/// # Errors
///
/// Returns [`RenderError::Validation`] if the rewritten tree still fails
/// validation.
pub fn render_friendly(
    chart: &Flowchart,
    options: &RenderOptions,
    ids: impl IdSource,
) -> Result<String, RenderError> {
    info!("Preparing Mermaid friendly flowchart");
    let friendly = mermaid_friendly(chart);
    render(&friendly, options, ids)
}
