//! Dump resolved variables use case

use std::fmt::Write as _;

use stencil_domain::{ResolvedSet, VariableStore, quote_value};

use crate::ports::DefaultEvaluator;
use crate::resolver::resolve_defaults;
use crate::scanner::scan;

/// Output of a dump pass.
#[derive(Debug, Clone)]
pub struct DumpOutput {
    /// One `NAME="value"` line per resolved variable, sorted by name.
    pub output: String,

    /// All names the template referenced or declared, sorted.
    pub variables: ResolvedSet,

    /// Names that resolved empty, sorted.
    pub missing: Vec<String>,
}

/// Serializes the resolved variables of a template instead of rewriting it.
///
/// Resolution works exactly as for rendering, defaults included; only the
/// output differs. Used for inspection and debugging.
pub struct DumpVariables<E> {
    evaluator: E,
}

impl<E: DefaultEvaluator> DumpVariables<E> {
    /// Creates the use case with its default evaluator.
    pub fn new(evaluator: E) -> Self {
        Self { evaluator }
    }

    /// Scans `text`, resolves its defaults into `store`, and serializes
    /// each resolved name as `NAME="value"`, backslashes and quotes
    /// escaped.
    pub fn execute(&self, text: &str, store: &mut VariableStore) -> DumpOutput {
        let report = scan(text);
        if report.is_empty() {
            tracing::warn!("no variables found in template");
        }

        resolve_defaults(store, &report.declarations, &self.evaluator);
        let variables = report.resolved_set();

        let mut output = String::new();
        let mut missing = Vec::new();
        for name in &variables {
            let value = store.get(name).unwrap_or_default();
            if value.is_empty() {
                missing.push(name.clone());
            }
            let _ = writeln!(output, "{name}=\"{}\"", quote_value(&value));
        }
        for name in &missing {
            tracing::warn!("{name} is not defined and no default is set, replacing by empty");
        }

        DumpOutput {
            output,
            variables,
            missing,
        }
    }
}
