use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemorySnapshot {
    pub total: u64,
    pub available: u64,
    pub percent: f64,
}

/// Host state at the time of a health check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthSnapshot {
    /// Seconds since host boot.
    pub uptime: f64,
    pub memory: MemorySnapshot,
    pub cpu_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSnapshot {
    pub cpu_count: usize,
    pub memory_total: u64,
    /// Used space of the root filesystem, percent.
    pub disk_usage: f64,
}
