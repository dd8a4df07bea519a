//! System API DTOs
use serde::Serialize;

use crate::domain::system::model::{HealthSnapshot, StatsSnapshot};

pub const HEALTH_OK: &str = "OK";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    #[serde(flatten)]
    pub snapshot: HealthSnapshot,
    pub timestamp: String,
}

/// Runtime flags of this service.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ServiceFlags {
    pub debug: bool,
    pub testing: bool,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub system: StatsSnapshot,
    #[serde(rename = "flask")]
    pub service: ServiceFlags,
    pub timestamp: String,
}
