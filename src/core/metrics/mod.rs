//! Host metrics port and its `sysinfo` adapter

mod host_probe;
mod sysinfo_probe;

pub use host_probe::{DiskSample, HostProbe, MemorySample, ProbeError, ProbeResult};
pub use sysinfo_probe::SysinfoProbe;

#[cfg(test)]
pub(crate) use host_probe::stub::StubProbe;
