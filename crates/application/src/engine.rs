//! Substitution engine
//!
//! Rewrites template text: default-declaration lines are deleted, every
//! placeholder occurrence is replaced by its variable's value, unresolved
//! names substitute as the empty string.

use std::collections::BTreeMap;

use regex::Captures;
use stencil_domain::{ResolvedSet, VariableStore};

use crate::scanner::{DECLARATION, REFERENCE};

/// Result of substituting one template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    /// The rewritten text.
    pub output: String,

    /// Names from the resolved set that were unbound or empty, in sorted
    /// order.
    pub missing: Vec<String>,
}

/// Substitutes every placeholder in `text` using the store.
///
/// Declaration lines are removed from the output entirely, including their
/// line terminator, whether or not their value was used. Replacements and
/// deletions happen in one pass over the lines; a deleted line is never a
/// replacement target since declarations use `=` syntax, which the
/// reference pattern does not match.
///
/// Values are spliced in literally, with no replacement-syntax expansion,
/// so backslashes, slashes, spaces and `$` in a value survive
/// byte-for-byte. A placeholder whose name is outside `variables` is left
/// untouched.
#[must_use]
pub fn substitute(text: &str, variables: &ResolvedSet, store: &VariableStore) -> Substitution {
    let mut values: BTreeMap<&str, String> = BTreeMap::new();
    let mut missing = Vec::new();
    for name in variables {
        let value = store.get(name).unwrap_or_default();
        if value.is_empty() {
            missing.push(name.clone());
        }
        values.insert(name.as_str(), value);
    }

    let mut output = String::with_capacity(text.len());
    for line in text.split_inclusive('\n') {
        let body = line.strip_suffix('\n').unwrap_or(line);
        let body = body.strip_suffix('\r').unwrap_or(body);
        if DECLARATION.is_match(body) {
            continue;
        }
        output.push_str(&REFERENCE.replace_all(line, |caps: &Captures<'_>| {
            let name = caps.get(1).map_or("", |m| m.as_str());
            values.get(name).cloned().unwrap_or_else(|| {
                caps.get(0).map_or_else(String::new, |m| m.as_str().to_string())
            })
        }));
    }

    Substitution { output, missing }
}
