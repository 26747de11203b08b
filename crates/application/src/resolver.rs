//! Default resolution
//!
//! Applies `{{NAME=expression}}` declarations against the variable store.

use stencil_domain::{DefaultDeclaration, VariableStore};

use crate::ports::DefaultEvaluator;

/// Applies each declaration to the store, in file order.
///
/// A name that already holds a non-empty value keeps it and the
/// declaration's expression is not evaluated. Otherwise the expression is
/// evaluated with the current store visible, so a later default may
/// reference the result of an earlier one, and the result is bound under
/// the declared name. Once a declaration has bound a non-empty value, a
/// later declaration for the same name has no effect.
pub fn resolve_defaults<E: DefaultEvaluator + ?Sized>(
    store: &mut VariableStore,
    declarations: &[DefaultDeclaration],
    evaluator: &E,
) {
    for declaration in declarations {
        if store.bound(&declaration.name) {
            tracing::debug!(name = %declaration.name, "value already bound, default not evaluated");
            continue;
        }

        let value = evaluator.evaluate(&declaration.expression, store);
        tracing::debug!(name = %declaration.name, line = declaration.source_line, "bound default");
        store.set(declaration.name.clone(), value);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;
    use serial_test::serial;

    use super::*;

    /// Records every evaluated expression and returns a fixed value.
    struct Recording {
        calls: RefCell<Vec<String>>,
        value: String,
    }

    impl Recording {
        fn returning(value: &str) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                value: value.to_string(),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    impl DefaultEvaluator for Recording {
        fn evaluate(&self, expression: &str, _store: &VariableStore) -> String {
            self.calls.borrow_mut().push(expression.to_string());
            self.value.clone()
        }
    }

    /// Resolves `@NAME` expressions from the store, everything else verbatim.
    struct ChainAware;

    impl DefaultEvaluator for ChainAware {
        fn evaluate(&self, expression: &str, store: &VariableStore) -> String {
            expression.strip_prefix('@').map_or_else(
                || expression.to_string(),
                |name| store.get(name).unwrap_or_default(),
            )
        }
    }

    fn decl(name: &str, expression: &str, line: usize) -> DefaultDeclaration {
        DefaultDeclaration::new(name, expression, line)
    }

    #[test]
    #[serial]
    fn unbound_name_gets_the_default() {
        temp_env::with_var_unset("STENCIL_RES_A", || {
            let mut store = VariableStore::new();
            let evaluator = Recording::returning("fallback");

            resolve_defaults(&mut store, &[decl("STENCIL_RES_A", "expr", 0)], &evaluator);

            assert_eq!(store.get("STENCIL_RES_A"), Some("fallback".to_string()));
            assert_eq!(evaluator.calls(), vec!["expr"]);
        });
    }

    #[test]
    fn bound_name_keeps_its_value_and_skips_evaluation() {
        let mut store = VariableStore::new();
        store.set("NAME", "existing");
        let evaluator = Recording::returning("fallback");

        resolve_defaults(&mut store, &[decl("NAME", "expr", 0)], &evaluator);

        assert_eq!(store.get("NAME"), Some("existing".to_string()));
        assert_eq!(evaluator.calls(), Vec::<String>::new());
    }

    #[test]
    fn empty_value_counts_as_unbound() {
        let mut store = VariableStore::new();
        store.set("NAME", "");
        let evaluator = Recording::returning("fallback");

        resolve_defaults(&mut store, &[decl("NAME", "expr", 0)], &evaluator);

        assert_eq!(store.get("NAME"), Some("fallback".to_string()));
    }

    #[test]
    #[serial]
    fn later_declaration_for_a_bound_name_has_no_effect() {
        temp_env::with_var_unset("STENCIL_RES_TWICE", || {
            let mut store = VariableStore::new();
            let evaluator = Recording::returning("first");

            resolve_defaults(
                &mut store,
                &[
                    decl("STENCIL_RES_TWICE", "one", 0),
                    decl("STENCIL_RES_TWICE", "two", 5),
                ],
                &evaluator,
            );

            assert_eq!(store.get("STENCIL_RES_TWICE"), Some("first".to_string()));
            assert_eq!(evaluator.calls(), vec!["one"]);
        });
    }

    #[test]
    #[serial]
    fn later_default_sees_earlier_binding() {
        temp_env::with_var_unset("STENCIL_RES_X", || {
            temp_env::with_var_unset("STENCIL_RES_Y", || {
                let mut store = VariableStore::new();

                resolve_defaults(
                    &mut store,
                    &[
                        decl("STENCIL_RES_X", "base", 0),
                        decl("STENCIL_RES_Y", "@STENCIL_RES_X", 1),
                    ],
                    &ChainAware,
                );

                assert_eq!(store.get("STENCIL_RES_Y"), Some("base".to_string()));
            });
        });
    }

    #[test]
    #[serial]
    fn failed_evaluation_binds_the_partial_output() {
        temp_env::with_var_unset("STENCIL_RES_FAIL", || {
            let mut store = VariableStore::new();
            let evaluator = Recording::returning("");

            resolve_defaults(&mut store, &[decl("STENCIL_RES_FAIL", "expr", 0)], &evaluator);

            // Empty output is bound as-is; emptiness is diagnosed later.
            assert_eq!(store.get("STENCIL_RES_FAIL"), Some(String::new()));
        });
    }
}
