//! Mermaid flowchart text generation.
//!
//! The [`Renderer`] walks a tree that is already known to be renderable and
//! writes Mermaid statements in this order:
//!
//! 1. front matter carrying the root title, when there is one
//! 2. the `flowchart <DIR>;` header
//! 3. node statements, then subgraph blocks, recursively
//! 4. every link in the tree, sorted, once at the outermost scope
//!
//! Rendering does not validate. Use [`render`](crate::render) or
//! [`render_friendly`](crate::render_friendly) to get the validation gate.

mod tokens;

use std::fmt::Write as _;

use log::{debug, trace};

use flowscribe_core::{Flowchart, Link, LinkEnd, Node, name::renderable_name};

use crate::{collect::collect_links, error::RenderError, ids::IdSource};

/// Options controlling the rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Spaces per indentation level.
    pub indent: usize,

    /// Render untitled subgraphs under a generated identifier instead of
    /// rejecting them.
    pub anonymous_groups: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: 4,
            anonymous_groups: false,
        }
    }
}

/// Writes flowcharts as Mermaid text.
#[derive(Debug)]
pub struct Renderer<I> {
    options: RenderOptions,
    ids: I,
}

impl<I: IdSource> Renderer<I> {
    /// Creates a renderer drawing anonymous subgraph identifiers from `ids`.
    pub fn new(options: RenderOptions, ids: I) -> Self {
        Self { options, ids }
    }

    /// Renders `chart` as a complete Mermaid flowchart document.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::UntitledGroup`] for an untitled subgraph when
    /// anonymous groups are disabled, and [`RenderError::MissingEndpoint`] for
    /// a link endpoint without a name.
    pub fn render(&mut self, chart: &Flowchart) -> Result<String, RenderError> {
        let mut out = String::new();

        if let Some(title) = chart.title().filter(|title| !title.is_empty()) {
            let _ = write!(out, "---\ntitle: {title}\n---\n");
        }
        let _ = writeln!(out, "flowchart {};", tokens::direction(chart.direction()));

        self.render_contents(chart, 1, &mut out)?;

        let links = collect_links(chart);
        debug!(links_count = links.len(); "Collected links");
        for link in links {
            self.render_link(link, 1, &mut out)?;
        }

        trace!(rendered = out.as_str(); "Rendered flowchart");
        Ok(out)
    }

    fn pad(&self, level: usize) -> String {
        " ".repeat(self.options.indent * level)
    }

    /// Writes the nodes and then the subgraphs of `chart`.
    fn render_contents(
        &mut self,
        chart: &Flowchart,
        level: usize,
        out: &mut String,
    ) -> Result<(), RenderError> {
        for node in chart.nodes() {
            self.render_node(node, level, out);
        }
        for subgraph in chart.subgraphs() {
            self.render_group(subgraph, level, out)?;
        }
        Ok(())
    }

    fn render_node(&self, node: &Node, level: usize, out: &mut String) {
        let pad = self.pad(level);
        let name = node.renderable_name();

        match node.label().filter(|label| !label.is_empty()) {
            Some(label) => {
                let (left, right) = tokens::shape_delimiters(node.shape());
                let _ = writeln!(out, "{pad}{name}{left}\"{label}\"{right};");
            }
            None => {
                let _ = writeln!(out, "{pad}{name};");
            }
        }
    }

    fn render_group(
        &mut self,
        group: &Flowchart,
        level: usize,
        out: &mut String,
    ) -> Result<(), RenderError> {
        let pad = self.pad(level);

        match group.title().filter(|title| !title.is_empty()) {
            Some(title) => {
                let _ = writeln!(out, "{pad}subgraph {} [{title}];", renderable_name(title));
            }
            None if self.options.anonymous_groups => {
                let id = self.ids.next_id();
                debug!(id = id.as_str(); "Rendering anonymous subgraph");
                let _ = writeln!(out, "{pad}subgraph {id};");
            }
            None => return Err(RenderError::UntitledGroup),
        }

        let _ = writeln!(
            out,
            "{}direction {};",
            self.pad(level + 1),
            tokens::direction(group.direction())
        );
        self.render_contents(group, level + 1, out)?;
        let _ = writeln!(out, "{pad}end;");
        Ok(())
    }

    fn render_link(&self, link: &Link, level: usize, out: &mut String) -> Result<(), RenderError> {
        let origin = link
            .origin()
            .renderable_name()
            .ok_or(RenderError::MissingEndpoint {
                end: LinkEnd::Origin,
            })?;
        let target = link
            .target()
            .renderable_name()
            .ok_or(RenderError::MissingEndpoint {
                end: LinkEnd::Target,
            })?;

        let _ = writeln!(
            out,
            "{}{origin} {} {target};",
            self.pad(level),
            tokens::link(link)
        );
        Ok(())
    }
}
