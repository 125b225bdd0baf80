//! CLI entry point.
//!
//! Loads `.env`, parses flags, initializes logging, then hands off to the
//! composition root and the report handler.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use watermark_cli::{Cli, CliConfig, CliError, bootstrap, handlers, logging};

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = CliConfig::from_cli(cli);
    let ctx = bootstrap(&config).context("Failed to set up environment probes")?;
    handlers::report::execute(&ctx, &cli.report_options())?;
    Ok(())
}

fn main() -> ExitCode {
    // Load environment variables before parsing so clap's `env` fallbacks see them
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init_tracing(cli.runtime.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
