//! Core domain for watermark.
//!
//! Holds the report data model (`Section`, `Report`), the option set that
//! drives report assembly, the report builder, the text formatter and the
//! port traits that the runtime crate implements.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod options;
pub mod ports;
pub mod report;

// Re-export commonly used types for convenience
pub use domain::{HostInfo, PackageRequest, PythonInfo, Report, Section, VersionLookup};
pub use options::WatermarkOptions;
pub use ports::{
    ClockPort, CoreError, GitError, GitPort, GitQuery, HostProbePort, InterpreterError,
    InterpreterPort,
};
pub use report::{GIT_UNAVAILABLE, ReportBuilder, ReportPorts, render_text};
