use crate::core::metrics::{HostProbe, ProbeResult};
use crate::core::util::metric_util::MetricUtil;
use crate::core::util::time_util::TimeUtil;
use crate::domain::system::model::{HealthSnapshot, MemorySnapshot};

pub fn health(probe: &dyn HostProbe) -> ProbeResult<HealthSnapshot> {
    let memory = probe.memory()?;
    let boot_time = probe.boot_time()?;
    let cpu_usage = probe.cpu_usage()?;

    Ok(HealthSnapshot {
        uptime: TimeUtil::seconds_since(boot_time),
        memory: MemorySnapshot {
            total: memory.total,
            available: memory.available,
            percent: MetricUtil::used_percent(memory.total, memory.available),
        },
        cpu_percent: MetricUtil::clamp_percent(f64::from(cpu_usage)),
    })
}
