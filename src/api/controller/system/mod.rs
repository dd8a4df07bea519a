//! System controller: connects routes to host metrics usecases

use axum::extract::State;
use axum::Json;

use crate::api::dto::system_dto::{HealthResponse, ServiceFlags, StatsResponse, HEALTH_OK};
use crate::app_state::AppState;
use crate::core::util::time_util::TimeUtil;
use crate::errors::AppError;

pub struct SystemController;

impl SystemController {
    pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, AppError> {
        let snapshot = state.system_service.health().await?;

        Ok(Json(HealthResponse {
            status: HEALTH_OK,
            snapshot,
            timestamp: TimeUtil::now_iso8601(),
        }))
    }

    pub async fn stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
        let system = state.system_service.stats().await?;

        Ok(Json(StatsResponse {
            system,
            service: ServiceFlags {
                debug: state.config.debug,
                testing: state.config.testing,
            },
            timestamp: TimeUtil::now_iso8601(),
        }))
    }
}
