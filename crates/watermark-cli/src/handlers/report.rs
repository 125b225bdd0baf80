//! Report handler.
//!
//! Builds the report for the parsed options and writes it to stdout.

use watermark_core::{Report, WatermarkOptions, render_text};

use crate::bootstrap::CliContext;
use crate::config::OutputFormat;
use crate::error::CliError;

/// Execute the report command.
pub fn execute(ctx: &CliContext, options: &WatermarkOptions) -> Result<(), CliError> {
    let report = ctx.builder.build(options)?;
    tracing::debug!(sections = report.len(), "Report assembled");
    println!("{}", render(&report, ctx.format)?);
    Ok(())
}

/// Render a report in the requested format.
pub fn render(report: &Report, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}
