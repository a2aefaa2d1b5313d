//! Identifier sources for anonymous subgraphs.
//!
//! Mermaid needs an identifier for every subgraph. A subgraph without a title
//! gets one from an [`IdSource`] when anonymous groups are enabled. The source
//! is passed in by the caller, so tests can swap the random default for the
//! deterministic [`SequentialIds`].

use uuid::Uuid;

/// A source of unique identifiers.
pub trait IdSource {
    /// Returns the next identifier. Each call returns a fresh value.
    fn next_id(&mut self) -> String;
}

/// Random identifiers: the first six hex digits of a v4 UUID.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&mut self) -> String {
        let mut hex = Uuid::new_v4().simple().to_string();
        hex.truncate(6);
        hex
    }
}

/// Deterministic identifiers of the form `<prefix><n>`, counting from zero.
///
/// # Examples
///
/// ```
/// use flowscribe_mermaid::{IdSource, SequentialIds};
///
/// let mut ids = SequentialIds::new("group");
/// assert_eq!(ids.next_id(), "group0");
/// assert_eq!(ids.next_id(), "group1");
/// ```
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: usize,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 0,
        }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

impl<T: IdSource + ?Sized> IdSource for &mut T {
    fn next_id(&mut self) -> String {
        (**self).next_id()
    }
}
