//! Git metadata via the `git` executable.

use std::path::{Path, PathBuf};

use tracing::debug;
use watermark_core::{GitError, GitPort, GitQuery};

use crate::commands::{CommandError, run_captured};

/// `GitPort` that shells out to `git` in a working directory.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: PathBuf,
    workdir: Option<PathBuf>,
}

impl GitCli {
    /// Use `program` in the current working directory.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            workdir: None,
        }
    }

    /// Run queries in `dir` instead of the current directory.
    #[must_use]
    pub fn with_workdir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.workdir = Some(dir.into());
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new("git")
    }
}

impl GitPort for GitCli {
    fn query(&self, query: GitQuery) -> Result<String, GitError> {
        let args = query.args();
        let stdout =
            run_captured(&self.program, args, self.workdir.as_deref()).map_err(|e| match e {
                CommandError::Spawn { program, source } => GitError::Spawn {
                    program,
                    reason: source.to_string(),
                },
                CommandError::Failed { status, stderr, .. } => GitError::Failed {
                    args: args.join(" "),
                    status: status.to_string(),
                    stderr,
                },
            })?;

        let value = stdout.trim();
        if value.is_empty() {
            return Err(GitError::EmptyOutput(args.join(" ")));
        }
        debug!(query = ?query, value, "Git query succeeded");
        Ok(value.to_string())
    }
}
