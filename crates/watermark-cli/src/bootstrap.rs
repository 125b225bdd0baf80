//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where the runtime probes are wired
//! together for the CLI adapter:
//! - Python interpreter (explicit path or discovered on `PATH`)
//! - git executable and working directory
//! - host probe and local clock
//!
//! The report handler receives the fully composed `ReportBuilder`.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, warn};
use watermark_core::{InterpreterPort, ReportBuilder, ReportPorts};
use watermark_runtime::{
    DefaultHostProbe, GitCli, LocalClock, PYTHON_CANDIDATES, PythonInterpreter,
    UnavailableInterpreter, resolve_program,
};

use crate::config::{CliConfig, OutputFormat};
use crate::error::CliError;

/// Fully composed application context for the report command.
pub struct CliContext {
    /// Report builder wired to the runtime probes.
    pub builder: ReportBuilder,
    /// Output format for the rendered report.
    pub format: OutputFormat,
}

/// Wire runtime adapters according to `config`.
///
/// Explicit executable or directory overrides must be usable; a missing
/// interpreter or git on `PATH` is tolerated and shows up in the report.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext, CliError> {
    let interpreter = interpreter_port(config)?;
    let git = git_port(config)?;

    let ports = ReportPorts {
        interpreter,
        host: Arc::new(DefaultHostProbe::new()),
        git: Arc::new(git),
        clock: Arc::new(LocalClock),
    };

    Ok(CliContext {
        builder: ReportBuilder::new(ports, watermark_build_info::REPORT_VERSION),
        format: config.format,
    })
}

fn interpreter_port(config: &CliConfig) -> Result<Arc<dyn InterpreterPort>, CliError> {
    if let Some(requested) = &config.python_bin {
        let path = resolve_program(requested).map_err(|e| CliError::Config(e.to_string()))?;
        debug!(interpreter = %path.display(), "Using configured Python interpreter");
        return Ok(Arc::new(PythonInterpreter::new(path)));
    }

    match PythonInterpreter::discover() {
        Ok(python) => Ok(Arc::new(python)),
        Err(e) => {
            warn!(error = %e, "No Python interpreter found");
            Ok(Arc::new(UnavailableInterpreter::new(
                PYTHON_CANDIDATES.join(", "),
            )))
        }
    }
}

fn git_port(config: &CliConfig) -> Result<GitCli, CliError> {
    let program = match &config.git_bin {
        Some(requested) => {
            resolve_program(requested).map_err(|e| CliError::Config(e.to_string()))?
        }
        None => resolve_program("git").unwrap_or_else(|_| PathBuf::from("git")),
    };

    let git = GitCli::new(program);
    match &config.repo_dir {
        Some(dir) if dir.is_dir() => Ok(git.with_workdir(dir)),
        Some(dir) => Err(CliError::Config(format!(
            "repository directory {} does not exist",
            dir.display()
        ))),
        None => Ok(git),
    }
}
