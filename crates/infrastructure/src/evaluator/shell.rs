//! Shell-backed default evaluation

use std::process::Command;

use stencil_application::DefaultEvaluator;
use stencil_domain::VariableStore;

/// Evaluates default expressions through `sh -c`.
///
/// The expression is expanded inside a double-quoted shell word, so `$NAME`
/// interpolation and `$(...)` command substitution both work. Bindings
/// already made in the store are exported to the child, so a default may
/// reference the result of an earlier one. Defaults come from trusted
/// template authors; nothing is sandboxed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellEvaluator;

impl ShellEvaluator {
    /// Creates the evaluator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DefaultEvaluator for ShellEvaluator {
    /// Runs the expression and returns its captured stdout, lossily decoded.
    ///
    /// A failing or unspawnable command is not an error here: whatever
    /// partial output it produced, possibly nothing, becomes the value, and
    /// emptiness is diagnosed downstream as a missing variable.
    fn evaluate(&self, expression: &str, store: &VariableStore) -> String {
        let script = format!("printf '%s' \"{expression}\"");
        match Command::new("sh")
            .arg("-c")
            .arg(script)
            .envs(store.exported_bindings())
            .output()
        {
            Ok(output) => {
                if !output.status.success() {
                    tracing::warn!(
                        %expression,
                        status = %output.status,
                        "default expression failed"
                    );
                }
                String::from_utf8_lossy(&output.stdout).into_owned()
            }
            Err(error) => {
                tracing::warn!(%expression, %error, "could not run default expression");
                String::new()
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn literal_expression_evaluates_to_itself() {
        let store = VariableStore::new();
        assert_eq!(ShellEvaluator::new().evaluate("hello world", &store), "hello world");
    }

    #[test]
    fn command_substitution_is_expanded() {
        let store = VariableStore::new();
        assert_eq!(ShellEvaluator::new().evaluate("$(echo computed)", &store), "computed");
    }

    #[test]
    fn store_bindings_are_visible_to_the_expression() {
        let mut store = VariableStore::new();
        store.set("STENCIL_SH_BASE", "10");
        assert_eq!(
            ShellEvaluator::new().evaluate("${STENCIL_SH_BASE}-suffix", &store),
            "10-suffix"
        );
    }

    #[test]
    fn failing_command_yields_its_partial_output() {
        let store = VariableStore::new();
        let value = ShellEvaluator::new().evaluate("$(echo partial; false)", &store);
        assert_eq!(value, "partial");
    }

    #[test]
    fn command_writing_nothing_yields_empty() {
        let store = VariableStore::new();
        assert_eq!(ShellEvaluator::new().evaluate("$(true)", &store), "");
    }
}
