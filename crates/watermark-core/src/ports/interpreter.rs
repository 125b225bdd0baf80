//! Interpreter port for Python version and package metadata queries.
//!
//! The interpreter is an opaque collaborator: implementations decide how to
//! reach it (a subprocess in `watermark-runtime`, a fixture in tests).

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::{PackageRequest, PythonInfo, VersionLookup};

/// Errors that can occur while querying the interpreter.
#[derive(Debug, Error)]
pub enum InterpreterError {
    /// No interpreter could be located.
    #[error("Python interpreter not found (tried: {0})")]
    NotFound(String),

    /// The interpreter could not be started.
    #[error("Failed to run {program}: {reason}")]
    Spawn { program: PathBuf, reason: String },

    /// The interpreter ran but exited unsuccessfully.
    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: PathBuf,
        status: String,
        stderr: String,
    },

    /// The probe output could not be decoded.
    #[error("Malformed probe output: {0}")]
    MalformedOutput(String),
}

/// Port for querying a Python interpreter.
#[cfg_attr(test, mockall::automock)]
pub trait InterpreterPort: Send + Sync {
    /// Implementation, version, compiler and architecture of the interpreter.
    fn python_info(&self) -> Result<PythonInfo, InterpreterError>;

    /// Resolve each request to a version, in request order.
    ///
    /// Individual packages never fail: missing ones come back as
    /// [`VersionLookup::NotInstalled`]. An `Err` means the interpreter itself
    /// was unusable.
    fn package_versions(
        &self,
        packages: &[PackageRequest],
    ) -> Result<Vec<VersionLookup>, InterpreterError>;
}
