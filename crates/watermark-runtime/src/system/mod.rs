//! Host probe implementation.
//!
//! This module provides the `DefaultHostProbe` which implements
//! `HostProbePort` from watermark-core using `sysinfo` for kernel, CPU and
//! host name queries.

mod platform;

use sysinfo::System;
use tracing::debug;
use watermark_core::{HostInfo, HostProbePort};

use platform::{machine_name, os_family};

const UNKNOWN: &str = "unknown";

/// Default implementation of `HostProbePort`.
///
/// Every call takes a fresh reading; nothing is cached.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultHostProbe;

impl DefaultHostProbe {
    pub const fn new() -> Self {
        Self
    }
}

impl HostProbePort for DefaultHostProbe {
    fn host_info(&self) -> HostInfo {
        // Only CPU data is needed; `System::new_all()` would also walk every process.
        let mut sys = System::new();
        sys.refresh_cpu_all();

        let processor = sys
            .cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .filter(|brand| !brand.is_empty())
            .unwrap_or_else(|| machine_name().to_string());

        let info = HostInfo {
            os: os_family().to_string(),
            release: System::kernel_version().unwrap_or_else(|| UNKNOWN.to_string()),
            machine: machine_name().to_string(),
            processor,
            cpu_cores: num_cpus::get(),
            hostname: System::host_name().unwrap_or_else(|| UNKNOWN.to_string()),
        };
        debug!(os = %info.os, release = %info.release, cores = info.cpu_cores, "Probed host");
        info
    }
}
