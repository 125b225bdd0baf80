//! Interpreter and host description types.

use super::VersionLookup;

/// Facts reported by the Python interpreter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PythonInfo {
    /// Implementation name (e.g., "CPython", "PyPy").
    pub implementation: String,
    /// Interpreter version (e.g., "3.11.4").
    pub version: String,
    /// Compiler the interpreter was built with (e.g., "GCC 11.4.0").
    pub compiler: String,
    /// Pointer width of the interpreter build (e.g., "64bit").
    pub architecture: String,
    /// IPython version, when IPython is importable.
    pub ipython: VersionLookup,
}

/// Facts about the host operating system and hardware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostInfo {
    /// OS family as reported by the platform (e.g., "Linux", "Darwin").
    pub os: String,
    /// Kernel release.
    pub release: String,
    /// Machine type (e.g., "`x86_64`").
    pub machine: String,
    /// Processor description.
    pub processor: String,
    /// Number of logical CPU cores.
    pub cpu_cores: usize,
    /// Network host name.
    pub hostname: String,
}
