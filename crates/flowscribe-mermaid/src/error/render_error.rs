use flowscribe_core::LinkEnd;
use thiserror::Error;

use crate::error::ValidationError;

/// Errors that can occur while rendering a flowchart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A subgraph without a title was reached while anonymous groups are
    /// disabled.
    #[error("cannot render subgraph with no title")]
    UntitledGroup,

    #[error("cannot render link with no {end} name")]
    MissingEndpoint { end: LinkEnd },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_display() {
        assert_eq!(
            RenderError::UntitledGroup.to_string(),
            "cannot render subgraph with no title"
        );
        assert_eq!(
            RenderError::MissingEndpoint {
                end: LinkEnd::Origin
            }
            .to_string(),
            "cannot render link with no origin name"
        );
    }
}
