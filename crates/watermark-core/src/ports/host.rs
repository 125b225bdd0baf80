//! Host probe port for OS and hardware facts.

use crate::domain::HostInfo;

/// Port for probing the host system.
///
/// Fields that cannot be determined are filled by the implementation with a
/// placeholder, so this probe never fails.
#[cfg_attr(test, mockall::automock)]
pub trait HostProbePort: Send + Sync {
    fn host_info(&self) -> HostInfo;
}
