//! External variable sources
//!
//! Loads explicit `NAME=value` files into the store's file layer and the
//! implicit `.env` into the process environment.

use std::path::{Path, PathBuf};

use stencil_domain::{Binding, DomainError, VariableStore};
use thiserror::Error;

/// Errors raised while loading an explicitly requested variable file.
#[derive(Debug, Error)]
pub enum VariableFileError {
    /// The file could not be read.
    #[error("could not read variable file {path}: {source}")]
    Read {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A line did not parse as `NAME=value`.
    #[error("variable file {path}: {source}")]
    Parse {
        /// Path that was requested.
        path: PathBuf,
        /// The offending line.
        #[source]
        source: DomainError,
    },
}

/// Loads an explicitly requested `NAME=value` file into the store's file
/// layer and returns the number of bindings made.
///
/// Lines starting with `#` and blank lines are skipped; values are taken
/// verbatim after the first `=`, with no quote stripping.
///
/// # Errors
///
/// Fails when the file cannot be read or when any line is malformed. A
/// failed load binds nothing: all lines are parsed before the first
/// binding reaches the store.
pub fn load_variable_file(
    path: &Path,
    store: &mut VariableStore,
) -> Result<usize, VariableFileError> {
    let text = std::fs::read_to_string(path).map_err(|source| VariableFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut bindings = Vec::new();
    for (index, line) in text.lines().enumerate() {
        match Binding::parse_line(line, index + 1) {
            Ok(Some(binding)) => bindings.push(binding),
            Ok(None) => {}
            Err(source) => {
                return Err(VariableFileError::Parse {
                    path: path.to_path_buf(),
                    source,
                });
            }
        }
    }

    let count = bindings.len();
    for binding in bindings {
        store.bind_file(binding.name, binding.value);
    }
    tracing::debug!(path = %path.display(), count, "loaded variable file");
    Ok(count)
}

/// Loads the implicit `.env` file from the current working directory, if
/// present, into the process environment.
///
/// Absence is not an error. A file that fails to load is reported as a
/// warning and otherwise ignored; the implicit source is never fatal.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(error) if error.not_found() => {}
        Err(error) => tracing::warn!(%error, "could not load .env"),
    }
}
