//! Construction-time errors for the flowchart model.
//!
//! These are returned immediately by the guarded `add_*` operations on
//! [`Flowchart`](crate::Flowchart). A failed operation never applies its
//! mutation.

use std::fmt;

use thiserror::Error;

/// Which end of a [`Link`](crate::Link) an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkEnd {
    Origin,
    Target,
}

impl fmt::Display for LinkEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkEnd::Origin => write!(f, "origin"),
            LinkEnd::Target => write!(f, "target"),
        }
    }
}

/// Errors raised while building a flowchart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("name `{name}` already exists in the flowchart")]
    DuplicateName { name: String },

    #[error("cannot add subgraph with no title")]
    MissingTitle,

    #[error("cannot add link with no {end} node")]
    MissingEndpoint { end: LinkEnd },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_error_display() {
        let err = ModelError::DuplicateName {
            name: "Start".to_string(),
        };
        assert_eq!(err.to_string(), "name `Start` already exists in the flowchart");

        assert_eq!(
            ModelError::MissingTitle.to_string(),
            "cannot add subgraph with no title"
        );

        let err = ModelError::MissingEndpoint {
            end: LinkEnd::Target,
        };
        assert_eq!(err.to_string(), "cannot add link with no target node");
    }
}
