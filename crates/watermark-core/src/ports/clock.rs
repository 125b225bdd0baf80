//! Clock port.

use chrono::{DateTime, FixedOffset};

/// Source of the current local date-time, including its UTC offset.
#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}
