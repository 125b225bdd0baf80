//! CLI runtime configuration.
//!
//! Values come from flags, environment variables, or a `.env` file loaded
//! before parsing.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::parser::Cli;

/// How the report is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned `key: value` blocks.
    #[default]
    Text,
    /// A JSON array with one object per section.
    Json,
}

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Interpreter override; discovered on `PATH` when `None`.
    pub python_bin: Option<PathBuf>,
    /// Git executable override; `git` on `PATH` when `None`.
    pub git_bin: Option<PathBuf>,
    /// Directory git queries run in.
    pub repo_dir: Option<PathBuf>,
    pub format: OutputFormat,
}

impl CliConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            python_bin: cli.runtime.python_bin.clone(),
            git_bin: cli.runtime.git_bin.clone(),
            repo_dir: cli.runtime.repo_dir.clone(),
            format: cli.runtime.format,
        }
    }
}
