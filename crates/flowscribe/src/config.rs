//! Configuration types for Flowscribe rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file. Every section and field is optional and falls back to its
//! default.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`RenderConfig`] - Controls how flowcharts are turned into Mermaid text.
//!
//! # Example
//!
//! ```
//! # use flowscribe::config::AppConfig;
//! let config: AppConfig = toml::from_str(
//!     r#"
//!     [render]
//!     indent = 2
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.render().indent(), 2);
//! assert!(config.render().sanitize());
//! ```

use serde::Deserialize;

use flowscribe_mermaid::RenderOptions;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Rendering configuration section.
    #[serde(default)]
    render: RenderConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the given rendering configuration.
    pub fn new(render: RenderConfig) -> Self {
        Self { render }
    }

    /// Returns the rendering configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }
}

/// Rendering configuration.
///
/// By default trees are made Mermaid friendly before rendering, untitled
/// subgraphs are rejected, and each level is indented by four spaces.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Flatten nested subgraphs and prune illegal names instead of failing
    /// validation on them.
    sanitize: bool,

    /// Give untitled subgraphs a generated identifier.
    anonymous_groups: bool,

    /// Spaces per indentation level.
    indent: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            sanitize: true,
            anonymous_groups: false,
            indent: RenderOptions::default().indent,
        }
    }
}

impl RenderConfig {
    /// Creates a new [`RenderConfig`].
    ///
    /// # Arguments
    ///
    /// * `sanitize` - Rewrite trees to be Mermaid friendly before rendering.
    /// * `anonymous_groups` - Accept untitled subgraphs.
    /// * `indent` - Spaces per indentation level.
    pub fn new(sanitize: bool, anonymous_groups: bool, indent: usize) -> Self {
        Self {
            sanitize,
            anonymous_groups,
            indent,
        }
    }

    pub fn sanitize(&self) -> bool {
        self.sanitize
    }

    pub fn anonymous_groups(&self) -> bool {
        self.anonymous_groups
    }

    pub fn indent(&self) -> usize {
        self.indent
    }

    /// Returns the renderer options described by this configuration.
    pub fn options(&self) -> RenderOptions {
        RenderOptions {
            indent: self.indent,
            anonymous_groups: self.anonymous_groups,
        }
    }
}
