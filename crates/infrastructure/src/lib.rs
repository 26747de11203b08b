//! Stencil Infrastructure - host adapters
//!
//! Concrete evaluators for default expressions and loaders for external
//! variable sources. Everything that touches the shell, the filesystem, or
//! the process environment lives here.

pub mod evaluator;
pub mod var_file;

pub use evaluator::{LiteralEvaluator, ShellEvaluator};
pub use var_file::{VariableFileError, load_dotenv, load_variable_file};
