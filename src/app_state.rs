use std::sync::Arc;

use serde_json::{Map, Value};

use crate::config::AppConfig;
use crate::core::metrics::{HostProbe, SysinfoProbe};
use crate::domain::data::model::DataItem;
use crate::domain::system::model::{HealthSnapshot, StatsSnapshot};
use crate::errors::{internal_error, AppError};

/// Runs a probe-backed domain function on the blocking pool; `sysinfo`
/// reads procfs/sysfs synchronously.
macro_rules! delegate_probe_service {
    ($(fn $name:ident() -> $ret:ty => $path:path;)+) => {
        $(
            pub async fn $name(&self) -> Result<$ret, AppError> {
                let probe = Arc::clone(&self.probe);
                let result = tokio::task::spawn_blocking(move || $path(probe.as_ref()))
                    .await
                    .map_err(internal_error)?;
                Ok(result?)
            }
        )+
    };
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub system_service: Arc<SystemService>,
    pub data_service: Arc<DataService>,
}

pub fn build_app_state(config: AppConfig) -> AppState {
    build_app_state_with_probe(config, Arc::new(SysinfoProbe::new()))
}

pub fn build_app_state_with_probe(config: AppConfig, probe: Arc<dyn HostProbe>) -> AppState {
    AppState {
        config: Arc::new(config),
        system_service: Arc::new(SystemService::new(probe)),
        data_service: Arc::new(DataService),
    }
}

#[derive(Clone)]
pub struct SystemService {
    probe: Arc<dyn HostProbe>,
}

impl SystemService {
    pub fn new(probe: Arc<dyn HostProbe>) -> Self {
        Self { probe }
    }

    delegate_probe_service! {
        fn health() -> HealthSnapshot => crate::domain::system::service::health_service::health;
        fn stats() -> StatsSnapshot => crate::domain::system::service::stats_service::stats;
    }
}

#[derive(Clone, Default)]
pub struct DataService;

impl DataService {
    pub fn list_items(&self) -> &'static [DataItem] {
        crate::domain::data::service::data_service::list_items()
    }

    pub fn create_item(&self, body: Map<String, Value>) -> Map<String, Value> {
        crate::domain::data::service::data_service::create_item(body)
    }
}
