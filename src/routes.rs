use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::controller::home::HomeController;
use crate::api::controller::system::SystemController;
use crate::app_state::AppState;
use crate::errors::AppError;

/// Build the main application router
pub fn app_router() -> Router<AppState> {
    let api = Router::new()
        .merge(crate::api::routes::data_routes::data_routes())
        .merge(crate::api::routes::system_routes::system_routes());

    Router::new()
        .route("/", get(HomeController::home))
        .route("/health", get(SystemController::health))
        .nest("/api", api)
        // Applies to every route registered above, nested ones included
        .method_not_allowed_fallback(handler_405)
        .fallback(handler_404)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
}

/// Router with state attached, ready to serve.
pub fn build_router(state: AppState) -> Router {
    app_router().with_state(state)
}

async fn handler_404() -> AppError {
    AppError::NotFound("The requested resource was not found".to_string())
}

async fn handler_405() -> AppError {
    AppError::MethodNotAllowed
}
