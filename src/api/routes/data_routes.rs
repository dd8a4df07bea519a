//! Data routes (e.g., /api/data)

use axum::{routing::get, Router};

use crate::api::controller::data::DataController;
use crate::app_state::AppState;

pub fn data_routes() -> Router<AppState> {
    Router::new().route("/data", get(DataController::list).post(DataController::create))
}
