use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::data::model::DataItem;

pub const CREATED_MESSAGE: &str = "Data created successfully";

#[derive(Debug, Serialize)]
pub struct DataListResponse {
    pub data: &'static [DataItem],
    pub count: usize,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct DataCreatedResponse {
    pub message: &'static str,
    pub data: Map<String, Value>,
    pub timestamp: String,
}
