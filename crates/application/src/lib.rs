//! Stencil Application - template processing engine
//!
//! Scanning, default resolution, and substitution for `{{VAR}}` templates.
//! The engine is pure text-in/text-out; host capabilities (evaluating
//! default expressions) enter through the [`DefaultEvaluator`] port and
//! file I/O stays with the caller.

pub mod engine;
pub mod ports;
pub mod resolver;
pub mod scanner;
pub mod use_cases;

pub use engine::{Substitution, substitute};
pub use ports::DefaultEvaluator;
pub use resolver::resolve_defaults;
pub use scanner::{ScanReport, scan};
pub use use_cases::{DumpOutput, DumpVariables, RenderOutput, RenderTemplate};
