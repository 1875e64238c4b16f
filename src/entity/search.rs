use serde::{Deserialize, Serialize};

use super::payload::{nullable, FromPayload};

/// 搜索结果中的一行（Set + 袋子 + 箱子 + 位置的扁平投影）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SetSearchResult {
    #[serde(deserialize_with = "nullable")]
    pub set_id: i64,
    #[serde(deserialize_with = "nullable")]
    pub set_name: String,
    #[serde(deserialize_with = "nullable")]
    pub manufacturer_name: String,
    #[serde(deserialize_with = "nullable")]
    pub box_code: String,
    #[serde(deserialize_with = "nullable")]
    pub box_name: String,
    #[serde(deserialize_with = "nullable")]
    pub bag_serial: String,
    #[serde(deserialize_with = "nullable")]
    pub location_name: String,
    #[serde(deserialize_with = "nullable")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub thumbnail_path: String,
}

impl FromPayload for SetSearchResult {}
