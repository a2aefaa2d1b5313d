//! Collector for accumulating violations during validation.
//!
//! The [`ViolationCollector`] lets the validator record every problem it
//! walks past instead of failing on the first one.

use indexmap::{IndexMap, IndexSet};

use crate::error::{ValidationError, Violation, ViolationKind};

/// Accumulates offending names per [`ViolationKind`].
///
/// Names are deduplicated and kept in first-seen order.
#[derive(Debug, Default)]
pub(crate) struct ViolationCollector {
    found: IndexMap<ViolationKind, IndexSet<String>>,
}

impl ViolationCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `name` triggered a violation of `kind`.
    pub fn emit(&mut self, kind: ViolationKind, name: impl Into<String>) {
        self.found.entry(kind).or_default().insert(name.into());
    }

    /// Finish collection and return a result.
    ///
    /// Violations in the returned error are ordered by kind, independent of
    /// the order they were emitted in.
    pub fn finish(mut self) -> Result<(), ValidationError> {
        if self.found.is_empty() {
            return Ok(());
        }

        self.found.sort_keys();
        let violations = self
            .found
            .into_iter()
            .map(|(kind, names)| Violation::new(kind, names.into_iter().collect()))
            .collect();
        Err(ValidationError::new(violations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collector_new_finish_ok() {
        let collector = ViolationCollector::new();
        assert!(collector.finish().is_ok());
    }

    #[test]
    fn test_collector_orders_kinds() {
        let mut collector = ViolationCollector::new();

        collector.emit(ViolationKind::RepeatedNames, "A");
        collector.emit(ViolationKind::InvalidNames, "B@");

        let err = collector.finish().unwrap_err();
        let kinds: Vec<_> = err.kinds().collect();
        assert_eq!(
            kinds,
            vec![ViolationKind::InvalidNames, ViolationKind::RepeatedNames]
        );
    }

    #[test]
    fn test_collector_deduplicates_names() {
        let mut collector = ViolationCollector::new();

        collector.emit(ViolationKind::RepeatedNames, "B");
        collector.emit(ViolationKind::RepeatedNames, "A");
        collector.emit(ViolationKind::RepeatedNames, "B");

        let err = collector.finish().unwrap_err();
        assert_eq!(err.violations().len(), 1);
        assert_eq!(err.violations()[0].names(), ["B", "A"]);
    }
}
