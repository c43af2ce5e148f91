use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::dto::item::ItemDto;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RequestDto {
    pub id: i64,
    pub description: String,
    pub requestor_id: i64,
    pub created: NaiveDateTime,
    /// Items created in answer to this request.
    pub items: Vec<ItemDto>,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequestDto {
    pub description: String,
}
