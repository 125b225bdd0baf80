//! Report options.
//!
//! Every field maps to one section (or one part of the timestamp section).
//! An options value with nothing set selects the default report.

use chrono::Utc;

use crate::ports::CoreError;
use crate::report::format_custom;

/// Options that select which report sections to compute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WatermarkOptions {
    /// Author name; surrounding quotes are stripped.
    pub author: Option<String>,
    /// Date as `YYYY-mm-dd`.
    pub current_date: bool,
    /// Date with abbreviated day and month names.
    pub datename: bool,
    /// Time as `HH:MM:SS`.
    pub current_time: bool,
    /// ISO-8601 date-time with UTC offset.
    pub iso8601: bool,
    /// Append the local time zone to the time.
    pub timezone: bool,
    /// Request the "Last updated" line.
    pub updated: bool,
    /// Custom strftime pattern for the timestamp.
    pub custom_time: Option<String>,
    /// Python implementation and version.
    pub python: bool,
    /// Comma-separated package names.
    pub packages: Option<String>,
    /// Host name.
    pub hostname: bool,
    /// System and machine info.
    pub machine: bool,
    /// Current commit hash.
    pub githash: bool,
    /// Remote origin URL.
    pub gitrepo: bool,
    /// Current branch.
    pub gitbranch: bool,
    /// This tool's version.
    pub watermark: bool,
    /// Loaded module identifiers whose versions should be listed.
    pub iversions: Vec<String>,
}

impl WatermarkOptions {
    /// True when no option is set, selecting the default report.
    ///
    /// Empty strings count as unset.
    pub fn is_default(&self) -> bool {
        !(has_text(self.author.as_deref())
            || self.wants_timestamp()
            || self.timezone
            || self.python
            || has_text(self.packages.as_deref())
            || self.hostname
            || self.machine
            || self.githash
            || self.gitrepo
            || self.gitbranch
            || self.watermark
            || !self.iversions.is_empty())
    }

    /// True when any option feeding the "Last updated" line is set.
    pub fn wants_timestamp(&self) -> bool {
        self.updated
            || self.current_date
            || self.datename
            || self.current_time
            || self.iso8601
            || has_text(self.custom_time.as_deref())
    }

    /// Author with surrounding quote characters removed.
    pub fn author_name(&self) -> Option<&str> {
        self.author
            .as_deref()
            .map(|a| a.trim_matches(|c| c == '\'' || c == '"'))
            .filter(|a| !a.is_empty())
    }

    /// Reject options that would fail during rendering.
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(pattern) = self.custom_time.as_deref() {
            // Unknown specifiers and parse-only ones both fail to render
            format_custom(&Utc::now().fixed_offset(), pattern)?;
        }
        Ok(())
    }
}

fn has_text(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}
