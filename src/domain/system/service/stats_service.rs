use std::path::Path;

use crate::core::metrics::{DiskSample, HostProbe, ProbeResult};
use crate::core::util::metric_util::MetricUtil;
use crate::domain::system::model::StatsSnapshot;

/// Filesystem whose usage is reported.
pub const ROOT_MOUNT: &str = "/";

pub fn stats(probe: &dyn HostProbe) -> ProbeResult<StatsSnapshot> {
    let cpu_count = probe.cpu_count()?;
    let memory = probe.memory()?;
    let disk = probe.disk(Path::new(ROOT_MOUNT))?;

    Ok(StatsSnapshot {
        cpu_count,
        memory_total: memory.total,
        disk_usage: disk_usage_percent(&disk),
    })
}

/// Used share of the space visible to unprivileged users, the figure `df`
/// prints. Root-reserved blocks count neither as used nor as available.
fn disk_usage_percent(disk: &DiskSample) -> f64 {
    let used = disk.total.saturating_sub(disk.free);
    MetricUtil::percent(used, used.saturating_add(disk.available))
}
