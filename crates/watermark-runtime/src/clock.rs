//! Local wall clock.

use chrono::{DateTime, FixedOffset, Local};
use watermark_core::ClockPort;

/// `ClockPort` backed by the system clock in the local time zone.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalClock;

impl ClockPort for LocalClock {
    fn now(&self) -> DateTime<FixedOffset> {
        DateTime::<FixedOffset>::from(Local::now())
    }
}
