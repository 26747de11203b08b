//! Render template use case

use stencil_domain::{ResolvedSet, VariableStore};

use crate::engine::{self, Substitution};
use crate::ports::DefaultEvaluator;
use crate::resolver::resolve_defaults;
use crate::scanner::scan;

/// Output of rendering one template.
#[derive(Debug, Clone)]
pub struct RenderOutput {
    /// The substituted text, declaration lines removed.
    pub output: String,

    /// All names the template referenced or declared, sorted.
    pub variables: ResolvedSet,

    /// Names that substituted as empty, sorted.
    pub missing: Vec<String>,
}

/// Renders one template against a shared variable store.
pub struct RenderTemplate<E> {
    evaluator: E,
}

impl<E: DefaultEvaluator> RenderTemplate<E> {
    /// Creates the use case with its default evaluator.
    pub fn new(evaluator: E) -> Self {
        Self { evaluator }
    }

    /// Scans `text`, resolves its defaults into `store`, and substitutes.
    ///
    /// The store keeps every binding made here, so a later call on another
    /// template observes defaults resolved by an earlier one. Warnings for
    /// an empty scan and for each missing variable go to the diagnostic
    /// channel; the caller controls whether they are shown.
    pub fn execute(&self, text: &str, store: &mut VariableStore) -> RenderOutput {
        let report = scan(text);
        if report.is_empty() {
            tracing::warn!("no variables found in template");
        }

        resolve_defaults(store, &report.declarations, &self.evaluator);
        let variables = report.resolved_set();

        let Substitution { output, missing } = engine::substitute(text, &variables, store);
        for name in &missing {
            tracing::warn!("{name} is not defined and no default is set, replacing by empty");
        }

        RenderOutput {
            output,
            variables,
            missing,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    use super::*;

    /// Returns the expression verbatim; no host execution in tests.
    struct Verbatim;

    impl DefaultEvaluator for Verbatim {
        fn evaluate(&self, expression: &str, _store: &VariableStore) -> String {
            expression.to_string()
        }
    }

    #[test]
    #[serial]
    fn renders_defaults_and_references() {
        temp_env::with_var_unset("STENCIL_RT_GREETING", || {
            let mut store = VariableStore::new();
            let use_case = RenderTemplate::new(Verbatim);

            let result = use_case.execute(
                "{{STENCIL_RT_GREETING=hello}}\nsay: {{STENCIL_RT_GREETING}}\n",
                &mut store,
            );

            assert_eq!(result.output, "say: hello\n");
            assert!(result.missing.is_empty());
            assert!(result.variables.contains("STENCIL_RT_GREETING"));
        });
    }

    #[test]
    #[serial]
    fn preset_value_wins_over_default() {
        temp_env::with_var("STENCIL_RT_NAME", Some("env-value"), || {
            let mut store = VariableStore::new();
            let use_case = RenderTemplate::new(Verbatim);

            let result = use_case.execute(
                "{{STENCIL_RT_NAME=fallback}}\nv: {{STENCIL_RT_NAME}}\n",
                &mut store,
            );

            assert_eq!(result.output, "v: env-value\n");
        });
    }

    #[test]
    #[serial]
    fn missing_variable_substitutes_empty_and_is_reported() {
        temp_env::with_var_unset("STENCIL_RT_UNSET", || {
            let mut store = VariableStore::new();
            let use_case = RenderTemplate::new(Verbatim);

            let result = use_case.execute("v:{{STENCIL_RT_UNSET}}:\n", &mut store);

            assert_eq!(result.output, "v::\n");
            assert_eq!(result.missing, vec!["STENCIL_RT_UNSET"]);
        });
    }

    #[test]
    fn template_without_variables_passes_through() {
        let mut store = VariableStore::new();
        let use_case = RenderTemplate::new(Verbatim);

        let result = use_case.execute("plain text\n", &mut store);

        assert_eq!(result.output, "plain text\n");
        assert!(result.variables.is_empty());
    }

    #[test]
    #[serial]
    fn defaults_resolved_earlier_are_visible_to_later_templates() {
        temp_env::with_var_unset("STENCIL_RT_SHARED", || {
            let mut store = VariableStore::new();
            let use_case = RenderTemplate::new(Verbatim);

            let first = use_case.execute("{{STENCIL_RT_SHARED=from-first}}\n", &mut store);
            assert_eq!(first.output, "");

            let second = use_case.execute("got: {{STENCIL_RT_SHARED}}\n", &mut store);
            assert_eq!(second.output, "got: from-first\n");
        });
    }
}
