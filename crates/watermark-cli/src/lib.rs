#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

//! Command-line adapter for watermark.
//!
//! Parses flags into `WatermarkOptions`, wires the runtime probes into a
//! `ReportBuilder` and prints the rendered report.

// Used by the binary only
use anyhow as _;
use dotenvy as _;

// Used by the binary smoke tests only
#[cfg(test)]
use assert_cmd as _;
#[cfg(test)]
use predicates as _;

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod parser;

// Re-export primary types for convenient access
pub use bootstrap::{CliContext, bootstrap};
pub use config::{CliConfig, OutputFormat};
pub use error::CliError;
pub use parser::Cli;
