use serde_json::{Map, Value};

use crate::core::util::time_util::TimeUtil;
use crate::domain::data::model::{DataItem, SAMPLE_ITEMS};

pub const ID_FIELD: &str = "id";

pub fn list_items() -> &'static [DataItem] {
    &SAMPLE_ITEMS
}

/// Stamps `body` with an `id` taken from the current Unix time. Nothing is
/// stored; the item only lives in the response.
pub fn create_item(body: Map<String, Value>) -> Map<String, Value> {
    create_item_with_id(body, TimeUtil::unix_seconds())
}

fn create_item_with_id(mut body: Map<String, Value>, id: i64) -> Map<String, Value> {
    body.insert(ID_FIELD.to_string(), Value::from(id));
    body
}
