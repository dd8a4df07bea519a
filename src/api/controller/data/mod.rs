use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{Map, Value};
use tracing::debug;

use crate::api::dto::data_dto::{DataCreatedResponse, DataListResponse, CREATED_MESSAGE};
use crate::api::util::json::JsonBody;
use crate::app_state::AppState;
use crate::core::util::time_util::TimeUtil;
use crate::domain::data::service::data_service::ID_FIELD;

pub struct DataController;

impl DataController {
    pub async fn list(State(state): State<AppState>) -> Json<DataListResponse> {
        let items = state.data_service.list_items();

        Json(DataListResponse {
            data: items,
            count: items.len(),
            timestamp: TimeUtil::now_iso8601(),
        })
    }

    pub async fn create(
        State(state): State<AppState>,
        JsonBody(body): JsonBody<Map<String, Value>>,
    ) -> (StatusCode, Json<DataCreatedResponse>) {
        let data = state.data_service.create_item(body);
        debug!(id = ?data.get(ID_FIELD), fields = data.len(), "Created data item");

        (
            StatusCode::CREATED,
            Json(DataCreatedResponse {
                message: CREATED_MESSAGE,
                data,
                timestamp: TimeUtil::now_iso8601(),
            }),
        )
    }
}
