//! CLI entry point for the `mwst` spanning-tree tool.
//!
//! Parses command-line arguments with clap, computes the minimum spanning
//! forest of the described graph, renders the selected edges to the output
//! file (or stdout), and maps errors to exit codes. Logging is initialized
//! eagerly so subsequent operations can emit structured diagnostics via
//! `tracing`.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use mwst_cli::{
    cli::{Cli, CliError, render_forest, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

/// Parse CLI arguments, run the pipeline, and render the forest to the
/// requested destination.
fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let summary = run_cli(&cli).context("failed to compute spanning forest")?;

    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create `{}`", path.display()))?;
            let mut writer = BufWriter::new(file);
            render_forest(&summary.forest, &mut writer).context("failed to render result")?;
            writer.flush().context("failed to flush output")?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            render_forest(&summary.forest, &mut writer).context("failed to render result")?;
            writer.flush().context("failed to flush output")?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let code = err
            .downcast_ref::<CliError>()
            .and_then(|cli_error| match cli_error {
                CliError::Core(core) => Some(core.code()),
                _ => None,
            });
        let code_field = code.map(|code| field::display(code.as_str()));

        error!(error = %err, code = code_field, "command execution failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
