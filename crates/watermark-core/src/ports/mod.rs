//! Port definitions (trait abstractions) for external collaborators.
//!
//! Ports define the interfaces that report assembly expects from the
//! environment. They contain no implementation details and use only domain
//! types.
//!
//! # Design Rules
//!
//! - No `std::process` or `sysinfo` types in any signature
//! - Every port is synchronous; implementations block on short subprocesses
//! - Probes that cannot fail return plain values, the rest return typed errors

pub mod clock;
pub mod git;
pub mod host;
pub mod interpreter;

use thiserror::Error;

pub use clock::ClockPort;
pub use git::{GitError, GitPort, GitQuery};
pub use host::HostProbePort;
pub use interpreter::{InterpreterError, InterpreterPort};

#[cfg(test)]
pub use clock::MockClockPort;
#[cfg(test)]
pub use git::MockGitPort;
#[cfg(test)]
pub use host::MockHostProbePort;
#[cfg(test)]
pub use interpreter::MockInterpreterPort;

/// Errors surfaced by report assembly.
///
/// Collaborator failures are absorbed into the report; only invalid input
/// reaches the caller.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Validation error (invalid input).
    #[error("Validation error: {0}")]
    Validation(String),
}
