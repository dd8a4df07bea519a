//! System routes (e.g., /api/stats)

use axum::{routing::get, Router};

use crate::api::controller::system::SystemController;
use crate::app_state::AppState;

pub fn system_routes() -> Router<AppState> {
    Router::new().route("/stats", get(SystemController::stats))
}
