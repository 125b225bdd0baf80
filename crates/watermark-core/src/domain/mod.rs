//! Domain types for report assembly.
//!
//! These are pure data types with no infrastructure dependencies.

mod section;
mod system;
mod version;

pub use section::{Report, Section};
pub use system::{HostInfo, PythonInfo};
pub use version::{PackageRequest, VersionLookup, imported_top_level};
