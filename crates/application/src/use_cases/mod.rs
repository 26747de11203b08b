//! Application use cases

mod dump_variables;
mod render_template;

pub use dump_variables::{DumpOutput, DumpVariables};
pub use render_template::{RenderOutput, RenderTemplate};
