//! Runtime adapters for watermark.
//!
//! Implements the ports defined in `watermark-core` against the real
//! environment: a Python interpreter subprocess, the host OS via `sysinfo`,
//! the `git` executable and the local clock.

#![deny(unused_crate_dependencies)]

pub mod clock;
pub mod commands;
pub mod git;
pub mod python;
pub mod system;

pub use clock::LocalClock;
pub use commands::{CommandError, ProgramResolveError, resolve_program};
pub use git::GitCli;
pub use python::{PYTHON_CANDIDATES, PythonInterpreter, UnavailableInterpreter};
pub use system::DefaultHostProbe;
