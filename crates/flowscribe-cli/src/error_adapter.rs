//! Error adapter for converting FlowscribeError to miette diagnostics.
//!
//! This module bridges the library's error types and miette's diagnostic
//! formatting used in the CLI.
//!
//! # Multi-Error Support
//!
//! A validation failure can carry several violations. Each violation is
//! rendered as its own report, with its code and help text.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use flowscribe::{FlowscribeError, RenderError, Violation};

/// Adapter for a single validation violation.
pub struct ViolationAdapter<'a> {
    violation: &'a Violation,
}

impl<'a> ViolationAdapter<'a> {
    pub fn new(violation: &'a Violation) -> Self {
        Self { violation }
    }
}

impl fmt::Debug for ViolationAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViolationAdapter")
            .field("violation", &self.violation)
            .finish()
    }
}

impl fmt::Display for ViolationAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "flowchart {}", self.violation.description())
    }
}

impl std::error::Error for ViolationAdapter<'_> {}

impl MietteDiagnostic for ViolationAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.violation.code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.violation.help()))
    }
}

/// Adapter for an invalid flowchart document.
///
/// Points at the failing location in the document source when the TOML
/// parser reports one.
pub struct DocumentAdapter<'a> {
    err: &'a toml::de::Error,
    src: &'a str,
}

impl<'a> DocumentAdapter<'a> {
    pub fn new(err: &'a toml::de::Error, src: &'a str) -> Self {
        Self { err, src }
    }
}

impl fmt::Debug for DocumentAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentAdapter")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for DocumentAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid flowchart document: {}", self.err.message())
    }
}

impl std::error::Error for DocumentAdapter<'_> {}

impl MietteDiagnostic for DocumentAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("flowscribe::document"))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.err.span()?;
        let span = SourceSpan::new(span.start.into(), span.len());
        Some(Box::new(std::iter::once(
            LabeledSpan::new_primary_with_span(Some("here".to_string()), span),
        )))
    }
}

/// Adapter for [`FlowscribeError`] variants without richer detail.
pub struct ErrorAdapter<'a>(pub &'a FlowscribeError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            FlowscribeError::Io(_) => "flowscribe::io",
            FlowscribeError::Document { .. } => "flowscribe::document",
            FlowscribeError::Model(_) => "flowscribe::model",
            FlowscribeError::Render(_) => "flowscribe::render",
            FlowscribeError::Config(_) => "flowscribe::config",
        };
        Some(Box::new(code))
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// One violated validation category.
    Violation(ViolationAdapter<'a>),
    /// A document that could not be read as a flowchart.
    Document(DocumentAdapter<'a>),
    /// Any other error.
    Error(ErrorAdapter<'a>),
}

impl Reportable<'_> {
    fn inner(&self) -> &dyn MietteDiagnostic {
        match self {
            Reportable::Violation(v) => v,
            Reportable::Document(d) => d,
            Reportable::Error(e) => e,
        }
    }
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.inner(), f)
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Error(e) => std::error::Error::source(e),
            _ => None,
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.inner().code()
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.inner().help()
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        self.inner().source_code()
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        self.inner().labels()
    }
}

/// Convert a [`FlowscribeError`] into a list of reportable errors.
///
/// A validation failure yields one [`Reportable`] per violation, in
/// reporting order. Every other error yields a single [`Reportable`].
pub fn to_reportables(err: &FlowscribeError) -> Vec<Reportable<'_>> {
    match err {
        FlowscribeError::Render(RenderError::Validation(validation)) => validation
            .violations()
            .iter()
            .map(|v| Reportable::Violation(ViolationAdapter::new(v)))
            .collect(),
        FlowscribeError::Document { err, src } => {
            vec![Reportable::Document(DocumentAdapter::new(err, src))]
        }
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}
