use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use sysinfo::System;
use tracing::debug;

use super::host_probe::{DiskSample, HostProbe, MemorySample, ProbeError, ProbeResult};

/// [`HostProbe`] backed by `sysinfo`, with filesystem usage read through
/// `statvfs` on Unix.
///
/// CPU usage is a delta between two refreshes, so the `System` handle is kept
/// across calls and primed once at construction.
pub struct SysinfoProbe {
    system: Mutex<System>,
}

impl SysinfoProbe {
    pub fn new() -> Self {
        let mut system = System::new();
        system.refresh_cpu_usage();
        debug!(cpus = system.cpus().len(), "Host probe initialised");
        Self {
            system: Mutex::new(system),
        }
    }

    fn system(&self) -> ProbeResult<MutexGuard<'_, System>> {
        self.system.lock().map_err(|_| ProbeError::Poisoned)
    }
}

impl Default for SysinfoProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl HostProbe for SysinfoProbe {
    fn memory(&self) -> ProbeResult<MemorySample> {
        let mut system = self.system()?;
        system.refresh_memory();

        let total = system.total_memory();
        if total == 0 {
            return Err(ProbeError::MemoryUnavailable);
        }

        Ok(MemorySample {
            total,
            available: system.available_memory(),
        })
    }

    fn cpu_usage(&self) -> ProbeResult<f32> {
        let mut system = self.system()?;
        system.refresh_cpu_usage();

        if system.cpus().is_empty() {
            return Err(ProbeError::CpuUnavailable);
        }
        Ok(system.global_cpu_usage())
    }

    fn cpu_count(&self) -> ProbeResult<usize> {
        let system = self.system()?;
        match system.cpus().len() {
            0 => Err(ProbeError::CpuUnavailable),
            n => Ok(n),
        }
    }

    fn boot_time(&self) -> ProbeResult<u64> {
        match System::boot_time() {
            0 => Err(ProbeError::BootTimeUnavailable),
            secs => Ok(secs),
        }
    }

    #[cfg(unix)]
    fn disk(&self, path: &Path) -> ProbeResult<DiskSample> {
        use nix::errno::Errno;
        use nix::sys::statvfs::statvfs;

        let stat = statvfs(path).map_err(|err| match err {
            Errno::ENOENT => ProbeError::DiskNotFound(path.display().to_string()),
            other => ProbeError::DiskUnreadable {
                path: path.display().to_string(),
                reason: other.desc().to_string(),
            },
        })?;

        // statvfs counts blocks in units of the fragment size
        let fragment = stat.fragment_size() as u64;
        let total = stat.blocks() as u64 * fragment;
        if total == 0 {
            return Err(ProbeError::EmptyDisk(path.display().to_string()));
        }

        Ok(DiskSample {
            total,
            free: stat.blocks_free() as u64 * fragment,
            available: stat.blocks_available() as u64 * fragment,
        })
    }

    /// `sysinfo` does not expose root-reserved space, so `free` equals
    /// `available` here.
    #[cfg(not(unix))]
    fn disk(&self, path: &Path) -> ProbeResult<DiskSample> {
        use sysinfo::Disks;

        let disks = Disks::new_with_refreshed_list();
        let disk = disks
            .list()
            .iter()
            .find(|d| d.mount_point() == path)
            .ok_or_else(|| ProbeError::DiskNotFound(path.display().to_string()))?;

        let total = disk.total_space();
        if total == 0 {
            return Err(ProbeError::EmptyDisk(path.display().to_string()));
        }

        Ok(DiskSample {
            total,
            free: disk.available_space(),
            available: disk.available_space(),
        })
    }
}
