use std::path::Path;

use thiserror::Error;

/// Errors raised when the host cannot report a metric.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProbeError {
    #[error("memory statistics are unavailable")]
    MemoryUnavailable,

    #[error("CPU information is unavailable")]
    CpuUnavailable,

    #[error("boot time is unavailable")]
    BootTimeUnavailable,

    #[error("no filesystem mounted at {0}")]
    DiskNotFound(String),

    #[error("cannot read filesystem at {path}: {reason}")]
    DiskUnreadable { path: String, reason: String },

    #[error("filesystem at {0} reports zero capacity")]
    EmptyDisk(String),

    #[error("host probe state is poisoned")]
    Poisoned,
}

pub type ProbeResult<T> = Result<T, ProbeError>;

/// Virtual memory totals in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemorySample {
    pub total: u64,
    pub available: u64,
}

/// Filesystem capacity in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiskSample {
    pub total: u64,
    /// Unused space, including blocks reserved for root.
    pub free: u64,
    /// Unused space an unprivileged process may write to.
    pub available: u64,
}

/// Read-only access to host metrics.
///
/// Every call reads the host at call time; implementations do not cache
/// results between calls.
pub trait HostProbe: Send + Sync {
    fn memory(&self) -> ProbeResult<MemorySample>;

    /// Global CPU utilisation since the previous call, in percent.
    fn cpu_usage(&self) -> ProbeResult<f32>;

    /// Number of logical CPUs.
    fn cpu_count(&self) -> ProbeResult<usize>;

    /// Host boot time, seconds since the Unix epoch.
    fn boot_time(&self) -> ProbeResult<u64>;

    /// Usage of the filesystem containing `path`.
    fn disk(&self, path: &Path) -> ProbeResult<DiskSample>;
}

#[cfg(test)]
pub(crate) mod stub {
    use super::*;

    /// Probe returning fixed readings, or failing every call when `fail` is set.
    #[derive(Debug, Clone)]
    pub(crate) struct StubProbe {
        pub memory: MemorySample,
        pub cpu_usage: f32,
        pub cpu_count: usize,
        pub boot_time: u64,
        pub root_disk: DiskSample,
        pub fail: Option<ProbeError>,
    }

    impl Default for StubProbe {
        fn default() -> Self {
            Self {
                memory: MemorySample {
                    total: 8_000,
                    available: 2_000,
                },
                cpu_usage: 12.5,
                cpu_count: 4,
                boot_time: 1_000,
                root_disk: DiskSample {
                    total: 1_000,
                    free: 400,
                    available: 400,
                },
                fail: None,
            }
        }
    }

    impl StubProbe {
        pub(crate) fn failing(err: ProbeError) -> Self {
            Self {
                fail: Some(err),
                ..Self::default()
            }
        }

        fn check(&self) -> ProbeResult<()> {
            match &self.fail {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }
    }

    impl HostProbe for StubProbe {
        fn memory(&self) -> ProbeResult<MemorySample> {
            self.check().map(|_| self.memory)
        }

        fn cpu_usage(&self) -> ProbeResult<f32> {
            self.check().map(|_| self.cpu_usage)
        }

        fn cpu_count(&self) -> ProbeResult<usize> {
            self.check().map(|_| self.cpu_count)
        }

        fn boot_time(&self) -> ProbeResult<u64> {
            self.check().map(|_| self.boot_time)
        }

        fn disk(&self, mount_point: &Path) -> ProbeResult<DiskSample> {
            self.check()?;
            if mount_point == Path::new("/") {
                Ok(self.root_disk)
            } else {
                Err(ProbeError::DiskNotFound(mount_point.display().to_string()))
            }
        }
    }
}
