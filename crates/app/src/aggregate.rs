//! Multi-file aggregation
//!
//! Enumerates template targets and joins per-file output with a delimiter.

use std::fs;
use std::path::Path;

use anyhow::Context as _;
use stencil_application::{DefaultEvaluator, DumpVariables, RenderTemplate};
use stencil_domain::VariableStore;

/// How each template's text is turned into output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Rewrite the template with placeholders substituted.
    Render,

    /// Emit `NAME="value"` lines for the resolved variables.
    Print,
}

/// Processes a template file or a directory of template files.
///
/// Directory entries are visited in filesystem-listing order, an accepted
/// nondeterminism. Every file is processed independently against the same
/// store, so bindings made while processing one file are visible to the
/// next. Outputs are joined with `delimiter`, strictly between consecutive
/// outputs, never trailing.
///
/// # Errors
///
/// Fails when a single-file target cannot be read or a directory target
/// cannot be listed. In directory mode an unreadable entry is skipped with
/// a warning and processing continues with the remaining files.
pub fn process_path(
    path: &Path,
    mode: Mode,
    delimiter: &str,
    store: &mut VariableStore,
    evaluator: &dyn DefaultEvaluator,
) -> anyhow::Result<String> {
    let metadata = fs::metadata(path)
        .with_context(|| format!("template path {} does not exist", path.display()))?;

    if !metadata.is_dir() {
        let text = fs::read_to_string(path)
            .with_context(|| format!("could not read template {}", path.display()))?;
        return Ok(process_text(&text, mode, store, evaluator));
    }

    let entries = fs::read_dir(path)
        .with_context(|| format!("could not list template directory {}", path.display()))?;

    let mut outputs = Vec::new();
    for entry in entries {
        let entry = entry
            .with_context(|| format!("could not list template directory {}", path.display()))?;
        let entry_path = entry.path();
        if !entry_path.is_file() {
            continue;
        }
        match fs::read_to_string(&entry_path) {
            Ok(text) => outputs.push(process_text(&text, mode, store, evaluator)),
            Err(error) => {
                tracing::warn!(path = %entry_path.display(), %error, "skipping unreadable template");
            }
        }
    }

    Ok(outputs.join(delimiter))
}

fn process_text(
    text: &str,
    mode: Mode,
    store: &mut VariableStore,
    evaluator: &dyn DefaultEvaluator,
) -> String {
    match mode {
        Mode::Render => RenderTemplate::new(evaluator).execute(text, store).output,
        Mode::Print => DumpVariables::new(evaluator).execute(text, store).output,
    }
}
