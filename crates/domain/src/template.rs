//! Template constructs

use std::collections::BTreeSet;

/// Names referenced or declared by one template, deduplicated and sorted
/// lexicographically. The order governs diagnostic ordering.
pub type ResolvedSet = BTreeSet<String>;

/// A whole-line `{{NAME=expression}}` default declaration.
///
/// A declaration is consumed exactly once: it contributes a value when the
/// name is otherwise unbound, and its line is deleted from the output
/// whether or not the value was used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultDeclaration {
    /// The declared variable name.
    pub name: String,

    /// The raw default expression, up to the closing braces.
    pub expression: String,

    /// Zero-based line index of the declaration within its template.
    pub source_line: usize,
}

impl DefaultDeclaration {
    /// Creates a declaration record.
    #[must_use]
    pub fn new(name: impl Into<String>, expression: impl Into<String>, source_line: usize) -> Self {
        Self {
            name: name.into(),
            expression: expression.into(),
            source_line,
        }
    }
}
