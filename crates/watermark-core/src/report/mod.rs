//! Report assembly and rendering.

mod builder;
mod format;
mod timestamp;

pub use builder::{GIT_UNAVAILABLE, ReportBuilder, ReportPorts};
pub use format::render_text;
pub use timestamp::{format_custom, iso_timestamp, last_updated};
