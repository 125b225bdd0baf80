//! Aligned text rendering of a report.

use std::fmt::Write as _;

use crate::domain::{Report, Section};

/// Render a report as aligned `key: value` blocks separated by blank lines.
///
/// Keys in a block are left-justified to the block's longest key. Empty
/// sections produce no lines and no separator.
pub fn render_text(report: &Report) -> String {
    report
        .non_empty()
        .map(render_section)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_section(section: &Section) -> String {
    let width = section.key_width();
    let mut text = String::new();
    for (key, value) in section.iter() {
        let _ = writeln!(text, "{key:<width$}: {value}");
    }
    text
}
