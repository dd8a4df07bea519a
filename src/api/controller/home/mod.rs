use axum::extract::State;
use axum::Json;

use crate::api::dto::home_dto::{HomeResponse, APP_VERSION, GREETING};
use crate::app_state::AppState;
use crate::core::util::time_util::TimeUtil;

pub struct HomeController;

impl HomeController {
    pub async fn home(State(state): State<AppState>) -> Json<HomeResponse> {
        Json(HomeResponse {
            message: GREETING,
            timestamp: TimeUtil::now_iso8601(),
            environment: state.config.environment.clone(),
            version: APP_VERSION,
        })
    }
}
