//! The aggregated validation failure.

use std::fmt;

use crate::error::{Violation, ViolationKind};

/// Error returned when a flowchart fails validation.
///
/// Wraps one violation per violated category, ordered by [`ViolationKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    violations: Vec<Violation>,
}

impl ValidationError {
    pub(crate) fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Returns the violated categories in reporting order.
    pub fn kinds(&self) -> impl Iterator<Item = ViolationKind> + '_ {
        self.violations.iter().map(Violation::kind)
    }

    pub fn contains(&self, kind: ViolationKind) -> bool {
        self.kinds().any(|k| k == kind)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self
            .violations
            .iter()
            .map(Violation::description)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "flowchart contains violations: {summary}")
    }
}

impl std::error::Error for ValidationError {}
