//! Stencil - template substitution CLI
//!
//! Thin driver around the rendering engine: parses arguments, loads
//! variable sources, walks the template target, and writes the aggregated
//! output to stdout. Diagnostics go to stderr.

mod aggregate;
mod cli;

use std::io::Write as _;
use std::process::ExitCode;

use clap::Parser as _;
use clap::error::ErrorKind;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use aggregate::{Mode, process_path};
use cli::Cli;
use stencil_domain::VariableStore;
use stencil_infrastructure::{ShellEvaluator, load_dotenv, load_variable_file};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error)
            if matches!(
                error.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            ) =>
        {
            let _ = error.print();
            return ExitCode::SUCCESS;
        }
        Err(error) => {
            // Usage errors exit with 1, not clap's default 2.
            let _ = error.print();
            return ExitCode::FAILURE;
        }
    };

    init_tracing(cli.silent);
    load_dotenv();

    match run(&cli) {
        Ok(output) => {
            let mut stdout = std::io::stdout().lock();
            if stdout.write_all(output.as_bytes()).is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::error!("{error:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    let mut store = VariableStore::new();
    if let Some(path) = &cli.file {
        load_variable_file(path, &mut store)?;
    }

    let mode = if cli.print { Mode::Print } else { Mode::Render };
    process_path(
        &cli.template,
        mode,
        &cli.delimiter,
        &mut store,
        &ShellEvaluator::new(),
    )
}

/// Installs the diagnostic subscriber on stderr.
///
/// `--silent` forces the filter to `error`; otherwise `RUST_LOG` applies,
/// defaulting to `warn` so missing-variable diagnostics are visible.
fn init_tracing(silent: bool) {
    let filter = if silent {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();
}
