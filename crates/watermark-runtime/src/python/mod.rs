//! Python interpreter adapter.
//!
//! Runs the interpreter as a subprocess with a small embedded probe script
//! and decodes its JSON output. The script implements the version lookup
//! fallback chain: import the module, then package metadata, then the
//! `__version__`, `version` and `version_info` attributes.

mod wire;

use std::path::{Path, PathBuf};

use tracing::debug;
use watermark_core::{InterpreterError, InterpreterPort, PackageRequest, PythonInfo, VersionLookup};

use crate::commands::{CommandError, resolve_program, run_captured};

const PROBE_SOURCE: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/scripts/probe.py"));

/// Interpreter names tried by [`PythonInterpreter::discover`], in order.
#[cfg(target_os = "windows")]
pub const PYTHON_CANDIDATES: &[&str] = &["python", "py"];

#[cfg(not(target_os = "windows"))]
pub const PYTHON_CANDIDATES: &[&str] = &["python3", "python"];

/// `InterpreterPort` backed by a Python executable.
#[derive(Debug, Clone)]
pub struct PythonInterpreter {
    program: PathBuf,
}

impl PythonInterpreter {
    /// Use the interpreter at `program`.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Find the first of [`PYTHON_CANDIDATES`] on `PATH`.
    pub fn discover() -> Result<Self, InterpreterError> {
        for candidate in PYTHON_CANDIDATES {
            if let Ok(path) = resolve_program(candidate) {
                debug!(interpreter = %path.display(), "Discovered Python interpreter");
                return Ok(Self::new(path));
            }
        }

        Err(InterpreterError::NotFound(PYTHON_CANDIDATES.join(", ")))
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn run_probe(&self, args: &[String]) -> Result<String, InterpreterError> {
        let argv = ["-c", PROBE_SOURCE]
            .into_iter()
            .map(str::to_string)
            .chain(args.iter().cloned());

        run_captured(&self.program, argv, None).map_err(|e| match e {
            CommandError::Spawn { program, source } => InterpreterError::Spawn {
                program,
                reason: source.to_string(),
            },
            CommandError::Failed {
                program,
                status,
                stderr,
            } => InterpreterError::Failed {
                program,
                status: status.to_string(),
                stderr,
            },
        })
    }
}

impl InterpreterPort for PythonInterpreter {
    fn python_info(&self) -> Result<PythonInfo, InterpreterError> {
        let stdout = self.run_probe(&["info".to_string()])?;
        wire::parse_info(&stdout)
    }

    fn package_versions(
        &self,
        packages: &[PackageRequest],
    ) -> Result<Vec<VersionLookup>, InterpreterError> {
        if packages.is_empty() {
            return Ok(Vec::new());
        }

        let args: Vec<String> = std::iter::once("packages".to_string())
            .chain(
                packages
                    .iter()
                    .map(|p| format!("{}={}", p.name, p.import_name)),
            )
            .collect();

        let stdout = self.run_probe(&args)?;
        wire::parse_packages(&stdout, packages.len())
    }
}

/// `InterpreterPort` used when no interpreter could be located.
///
/// Every query fails with [`InterpreterError::NotFound`], which the report
/// builder turns into placeholder values.
#[derive(Debug, Clone)]
pub struct UnavailableInterpreter {
    tried: String,
}

impl UnavailableInterpreter {
    pub fn new(tried: impl Into<String>) -> Self {
        Self {
            tried: tried.into(),
        }
    }
}

impl InterpreterPort for UnavailableInterpreter {
    fn python_info(&self) -> Result<PythonInfo, InterpreterError> {
        Err(InterpreterError::NotFound(self.tried.clone()))
    }

    fn package_versions(
        &self,
        _packages: &[PackageRequest],
    ) -> Result<Vec<VersionLookup>, InterpreterError> {
        Err(InterpreterError::NotFound(self.tried.clone()))
    }
}
