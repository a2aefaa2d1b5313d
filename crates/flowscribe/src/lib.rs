//! Flowscribe - build flowcharts in Rust and render them as Mermaid diagrams.
//!
//! Flowcharts are built through the guarded model API re-exported from
//! `flowscribe-core`, or loaded from a TOML document, and rendered to Mermaid
//! flowchart text by [`MermaidBuilder`].

pub mod config;

mod error;

pub use flowscribe_core::{
    ArrowType, Direction, Endpoint, Flowchart, LineType, Link, LinkEnd, ModelError, Node, Shape,
    model, name,
};
pub use flowscribe_mermaid::{
    IdSource, RandomIds, RenderError, SequentialIds, ValidationError, Violation, ViolationKind,
};

pub use error::FlowscribeError;

use log::{debug, info, trace};

use config::AppConfig;

/// Builder for loading and rendering flowcharts.
///
/// # Examples
///
/// ```
/// use flowscribe::{Flowchart, Link, MermaidBuilder, Node};
///
/// let mut chart = Flowchart::left_to_right(None);
/// let start = Node::terminator("Start", Some("Begin"));
/// let done = Node::terminator("Done", None);
/// chart.add_link(Link::solid(&start, &done, None)).unwrap();
/// chart.add_node(start).unwrap();
/// chart.add_node(done).unwrap();
///
/// let text = MermaidBuilder::default()
///     .render(&chart)
///     .expect("Failed to render");
///
/// assert!(text.contains("Start(\"Begin\");"));
/// assert!(text.ends_with("Start --> Done;\n"));
/// ```
#[derive(Debug, Default)]
pub struct MermaidBuilder {
    config: AppConfig,
}

impl MermaidBuilder {
    /// Create a new builder with the given configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowscribe::{MermaidBuilder, config::AppConfig};
    ///
    /// let builder = MermaidBuilder::new(AppConfig::default());
    /// assert!(builder.config().render().sanitize());
    /// ```
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Load a flowchart from a TOML document.
    ///
    /// The document describes the root flowchart: an optional `title`, a
    /// `direction`, and arrays of `node`, `subgraph` and `link` tables.
    /// Subgraphs nest the same way. A loaded tree has not been through the
    /// guarded `add_*` operations; rendering validates it.
    ///
    /// # Errors
    ///
    /// Returns [`FlowscribeError::Document`] if the document is not valid TOML
    /// or does not describe a flowchart.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowscribe::MermaidBuilder;
    ///
    /// let source = r#"
    ///     direction = "horizontal_right"
    ///
    ///     [[node]]
    ///     name = "A"
    /// "#;
    ///
    /// let chart = MermaidBuilder::default().load(source).unwrap();
    /// assert_eq!(chart.nodes().len(), 1);
    /// ```
    pub fn load(&self, source: &str) -> Result<Flowchart, FlowscribeError> {
        info!("Loading flowchart document");

        let chart: Flowchart = toml::from_str(source)
            .map_err(|err| FlowscribeError::new_document_error(err, source))?;

        debug!(
            nodes = chart.nodes().len(),
            subgraphs = chart.subgraphs().len(),
            links = chart.links().len();
            "Flowchart document loaded"
        );
        trace!(chart:?; "Loaded flowchart");

        Ok(chart)
    }

    /// Render a flowchart as Mermaid text.
    ///
    /// With `sanitize` enabled in the configuration the tree is made Mermaid
    /// friendly first; otherwise it is validated as given. Anonymous
    /// subgraphs, when enabled, get random identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`FlowscribeError::Render`] if the tree fails validation or
    /// cannot be rendered.
    pub fn render(&self, chart: &Flowchart) -> Result<String, FlowscribeError> {
        self.render_with_ids(chart, RandomIds)
    }

    /// Render a flowchart, drawing anonymous subgraph identifiers from `ids`.
    ///
    /// # Errors
    ///
    /// See [`MermaidBuilder::render`].
    pub fn render_with_ids(
        &self,
        chart: &Flowchart,
        ids: impl IdSource,
    ) -> Result<String, FlowscribeError> {
        let render_config = self.config.render();
        let options = render_config.options();

        let text = if render_config.sanitize() {
            flowscribe_mermaid::render_friendly(chart, &options, ids)?
        } else {
            flowscribe_mermaid::render(chart, &options, ids)?
        };

        info!(bytes = text.len(); "Mermaid text rendered");
        Ok(text)
    }
}
