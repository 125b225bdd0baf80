//! Subprocess helpers shared by the interpreter and git adapters.
//!
//! Every command is short-lived: it is spawned, its output captured, and it
//! is waited on before returning.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use thiserror::Error;
use tracing::debug;

/// Errors from running a captured command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The program could not be started.
    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The program exited unsuccessfully.
    #[error("{program} exited with {status}")]
    Failed {
        program: PathBuf,
        status: ExitStatus,
        stderr: String,
    },
}

/// A program name or path could not be resolved to an executable.
#[derive(Debug, Error)]
#[error("Cannot resolve executable {name:?}: {reason}")]
pub struct ProgramResolveError {
    pub name: String,
    pub reason: String,
}

/// Resolve a program name (searched on `PATH`) or path to an executable.
pub fn resolve_program(name: impl AsRef<OsStr>) -> Result<PathBuf, ProgramResolveError> {
    let name = name.as_ref();
    which::which(name).map_err(|e| ProgramResolveError {
        name: name.to_string_lossy().into_owned(),
        reason: e.to_string(),
    })
}

/// Run `program` with `args`, returning stdout on success.
///
/// Non-UTF-8 output is decoded lossily.
pub fn run_captured<I, S>(program: &Path, args: I, cwd: Option<&Path>) -> Result<String, CommandError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut command = Command::new(program);
    command.args(args);
    if let Some(dir) = cwd {
        command.current_dir(dir);
    }

    debug!(program = %program.display(), "Running command");
    let output = command.output().map_err(|source| CommandError::Spawn {
        program: program.to_path_buf(),
        source,
    })?;

    if !output.status.success() {
        return Err(CommandError::Failed {
            program: program.to_path_buf(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_spawn_error() {
        let result = run_captured(
            Path::new("/nonexistent/definitely-not-a-binary"),
            ["--version"],
            None,
        );
        assert!(matches!(result, Err(CommandError::Spawn { .. })));
    }

    #[test]
    fn test_resolve_unknown_program() {
        let err = resolve_program("definitely-not-a-binary-7f3a").unwrap_err();
        assert_eq!(err.name, "definitely-not-a-binary-7f3a");
    }

    #[cfg(unix)]
    #[test]
    fn test_captures_stdout_and_failure() {
        let Ok(sh) = resolve_program("sh") else {
            return;
        };

        let out = run_captured(&sh, ["-c", "echo hello"], None).unwrap();
        assert_eq!(out.trim(), "hello");

        let err = run_captured(&sh, ["-c", "echo oops >&2; exit 3"], None).unwrap_err();
        match err {
            CommandError::Failed { stderr, status, .. } => {
                assert_eq!(stderr, "oops");
                assert_eq!(status.code(), Some(3));
            }
            CommandError::Spawn { .. } => panic!("expected Failed"),
        }
    }
}
