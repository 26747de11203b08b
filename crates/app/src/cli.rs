//! CLI argument definitions

use std::path::PathBuf;

use clap::Parser;

/// Default delimiter between outputs in directory mode: a marker line
/// bounded by line breaks.
pub const DEFAULT_DELIMITER: &str = "\n---\n";

/// Substitute `{{VAR}}` placeholders in template files.
///
/// Values come from the process environment, an optional `NAME=value`
/// file, and inline `{{VAR=default}}` declarations inside the templates
/// themselves. An existing value always wins over an inline default.
#[derive(Debug, Parser)]
#[command(name = "stencil", version)]
#[command(about = "Substitute {{VAR}} placeholders in template files", long_about = None)]
pub struct Cli {
    /// Template file, or directory whose files are each rendered
    pub template: PathBuf,

    /// Print resolved variables as NAME="value" lines instead of rendering
    #[arg(short, long)]
    pub print: bool,

    /// Load additional NAME=value bindings from a file before processing
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Suppress warnings about undefined variables and empty templates
    #[arg(short, long)]
    pub silent: bool,

    /// Delimiter inserted between outputs in directory mode
    #[arg(short, long, default_value = DEFAULT_DELIMITER)]
    pub delimiter: String,
}
