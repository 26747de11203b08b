//! Placeholder and declaration scanning
//!
//! Extracts `{{VAR}}` references and whole-line `{{VAR=expression}}`
//! default declarations from template text. Two independent patterns, not
//! a recursive parser: nested braces are not understood and a placeholder
//! spanning multiple lines never matches. That limitation is part of the
//! template contract, not something to fix here.

use std::sync::LazyLock;

use regex::Regex;
use stencil_domain::{DefaultDeclaration, ResolvedSet};

/// Inline `{{ NAME }}` reference, optional horizontal whitespace around the
/// name.
pub(crate) static REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{[ \t]*([A-Za-z0-9_]+)[ \t]*\}\}").expect("valid regex"));

/// Whole-line `{{NAME=expression}}` declaration, matched against one line
/// at a time. The expression is the non-empty remainder up to the closing
/// braces at end of line.
pub(crate) static DECLARATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\{\{([A-Za-z0-9_]+)=(.+)\}\}$").expect("valid regex"));

/// What a scan found in one template.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Distinct names referenced as plain placeholders.
    pub references: ResolvedSet,

    /// Default declarations in file order.
    pub declarations: Vec<DefaultDeclaration>,
}

impl ScanReport {
    /// True when the template contains neither references nor declarations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.references.is_empty() && self.declarations.is_empty()
    }

    /// Sorted, deduplicated union of referenced and declared names.
    #[must_use]
    pub fn resolved_set(&self) -> ResolvedSet {
        let mut set = self.references.clone();
        set.extend(self.declarations.iter().map(|d| d.name.clone()));
        set
    }
}

/// Scans template text for placeholder references and default declarations.
///
/// The two sets are computed independently; a name may appear in both. The
/// reference pattern runs over the whole text, so a placeholder inside a
/// declaration's expression is still collected as a reference.
#[must_use]
pub fn scan(text: &str) -> ScanReport {
    let mut report = ScanReport::default();

    for caps in REFERENCE.captures_iter(text) {
        if let Some(name) = caps.get(1) {
            report.references.insert(name.as_str().to_string());
        }
    }

    for (index, line) in text.lines().enumerate() {
        if let Some(caps) = DECLARATION.captures(line)
            && let (Some(name), Some(expression)) = (caps.get(1), caps.get(2))
        {
            report
                .declarations
                .push(DefaultDeclaration::new(name.as_str(), expression.as_str(), index));
        }
    }

    report
}
