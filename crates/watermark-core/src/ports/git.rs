//! Git port for commit, remote and branch queries.

use std::path::PathBuf;

use thiserror::Error;

/// The git facts a report can include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GitQuery {
    /// Current commit hash (`git rev-parse HEAD`).
    CommitHash,
    /// Remote origin URL (`git config --get remote.origin.url`).
    RemoteOrigin,
    /// Current branch (`git rev-parse --abbrev-ref HEAD`).
    Branch,
}

impl GitQuery {
    /// Arguments passed to the git executable.
    pub const fn args(self) -> &'static [&'static str] {
        match self {
            Self::CommitHash => &["rev-parse", "HEAD"],
            Self::RemoteOrigin => &["config", "--get", "remote.origin.url"],
            Self::Branch => &["rev-parse", "--abbrev-ref", "HEAD"],
        }
    }

    /// Report label for this query.
    pub const fn label(self) -> &'static str {
        match self {
            Self::CommitHash => "Git hash",
            Self::RemoteOrigin => "Git repo",
            Self::Branch => "Git branch",
        }
    }
}

/// Errors that can occur while running git.
#[derive(Debug, Error)]
pub enum GitError {
    /// The git executable could not be started.
    #[error("Failed to run {program}: {reason}")]
    Spawn { program: PathBuf, reason: String },

    /// Git ran but exited unsuccessfully (e.g., not a repository).
    #[error("git {args} exited with {status}: {stderr}")]
    Failed {
        args: String,
        status: String,
        stderr: String,
    },

    /// Git succeeded but printed nothing.
    #[error("git {0} produced no output")]
    EmptyOutput(String),
}

/// Port for querying git metadata of the working directory.
#[cfg_attr(test, mockall::automock)]
pub trait GitPort: Send + Sync {
    /// Run a query and return its trimmed output.
    fn query(&self, query: GitQuery) -> Result<String, GitError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_args() {
        assert_eq!(GitQuery::CommitHash.args(), &["rev-parse", "HEAD"]);
        assert_eq!(
            GitQuery::RemoteOrigin.args(),
            &["config", "--get", "remote.origin.url"]
        );
        assert_eq!(GitQuery::Branch.args(), &["rev-parse", "--abbrev-ref", "HEAD"]);
    }

    #[test]
    fn test_query_labels() {
        assert_eq!(GitQuery::CommitHash.label(), "Git hash");
        assert_eq!(GitQuery::RemoteOrigin.label(), "Git repo");
        assert_eq!(GitQuery::Branch.label(), "Git branch");
    }
}
