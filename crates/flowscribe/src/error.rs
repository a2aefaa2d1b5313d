//! Error types for Flowscribe operations.
//!
//! This module provides the main error type [`FlowscribeError`] which wraps
//! the error conditions of every stage, from reading a flowchart document to
//! rendering it.

use std::io;

use thiserror::Error;

use flowscribe_core::ModelError;
use flowscribe_mermaid::RenderError;

/// The main error type for Flowscribe operations.
///
/// # Diagnostic Variants
///
/// The `Document` variant keeps the source text next to the parse error so
/// that the failing location can be shown. The `Render` variant may carry a
/// validation error listing several violations.
#[derive(Debug, Error)]
pub enum FlowscribeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid flowchart document: {}", .err.message())]
    Document { err: toml::de::Error, src: String },

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("{0}")]
    Render(#[from] RenderError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl FlowscribeError {
    /// Create a new `Document` error with the associated source text.
    pub fn new_document_error(err: toml::de::Error, src: impl Into<String>) -> Self {
        Self::Document {
            err,
            src: src.into(),
        }
    }
}
