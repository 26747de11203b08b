//! Variable names and bindings

use crate::error::{DomainError, DomainResult};

/// Returns true when `name` is a valid variable name.
///
/// Names are one or more characters from `[A-Za-z0-9_]` and are
/// case-sensitive.
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// A single `NAME=value` pair parsed from a variable-source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// The variable name.
    pub name: String,

    /// The bound value, taken verbatim after the first `=`.
    pub value: String,
}

impl Binding {
    /// Creates a binding from already-validated parts.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Parses one line of a variable-source file.
    ///
    /// Blank lines and lines starting with `#` carry no binding and return
    /// `Ok(None)`. The value is everything after the first `=`, untouched;
    /// no quote stripping happens here.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MalformedBinding`] when the line has no `=`,
    /// and [`DomainError::InvalidVariableName`] when the name part is not
    /// `[A-Za-z0-9_]+`.
    pub fn parse_line(raw: &str, line: usize) -> DomainResult<Option<Self>> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }

        let Some((name, value)) = trimmed.split_once('=') else {
            return Err(DomainError::MalformedBinding {
                line,
                content: raw.to_string(),
            });
        };

        let name = name.trim();
        if !is_valid_name(name) {
            return Err(DomainError::InvalidVariableName(name.to_string()));
        }

        Ok(Some(Self::new(name, value)))
    }
}

/// Escapes `value` for embedding inside a double-quoted serialization.
///
/// Backslashes are escaped before quotes so the escapes themselves are not
/// re-escaped.
#[must_use]
pub fn quote_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
