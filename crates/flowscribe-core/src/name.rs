//! Identifier grammar for names that end up in rendered diagrams.
//!
//! Node names and subgraph titles double as diagram identifiers. The target
//! syntax only accepts letters, digits, underscores, dashes and spaces; spaces
//! are stripped when the identifier is written out, while the full text is
//! kept as the display label.

use std::sync::OnceLock;

use regex::Regex;

/// Returns `true` if `name` can be used as a diagram identifier.
///
/// # Examples
///
/// ```
/// use flowscribe_core::name::is_valid_name;
///
/// assert!(is_valid_name("Valid test-case_1"));
/// assert!(!is_valid_name("Invalid@Node"));
/// assert!(!is_valid_name(""));
/// ```
pub fn is_valid_name(name: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();

    let re = RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9_\- ]+$").expect("name grammar is a valid regex")
    });
    re.is_match(name)
}

/// Returns the identifier form of `name`: the same text with every space removed.
///
/// # Examples
///
/// ```
/// use flowscribe_core::name::renderable_name;
///
/// assert_eq!(renderable_name("Node One"), "NodeOne");
/// ```
pub fn renderable_name(name: &str) -> String {
    name.replace(' ', "")
}
