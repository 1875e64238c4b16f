//! Set 聚合：一个收藏 Set 及其产品、标签、照片和存放袋子

use serde::{Deserialize, Serialize};

use super::payload::{nullable, record, records, FromPayload};
use super::storage::BagInfo;

/// Set 中的单个产品（印章、切模等）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Product {
    #[serde(deserialize_with = "nullable")]
    pub id: i64,
    #[serde(deserialize_with = "nullable")]
    pub set_id: i64,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    /// `stempel`、`stanze` 或空字符串
    #[serde(deserialize_with = "nullable")]
    pub kind: String,
}

/// Set 详情
///
/// `manufacturer_id` / `type_id` 为 `None` 表示未设置，序列化为 `null`。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SetDetails {
    #[serde(deserialize_with = "nullable")]
    pub id: i64,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    pub manufacturer_id: Option<i64>,
    #[serde(deserialize_with = "nullable")]
    pub manufacturer_name: String,
    pub type_id: Option<i64>,
    #[serde(deserialize_with = "nullable")]
    pub type_name: String,
    #[serde(deserialize_with = "record")]
    pub bag: BagInfo,
    #[serde(deserialize_with = "nullable")]
    pub photo_path: String,
    #[serde(deserialize_with = "nullable")]
    pub photo_source: String,
    #[serde(deserialize_with = "nullable")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "records")]
    pub products: Vec<Product>,
}

impl FromPayload for Product {}
impl FromPayload for SetDetails {}
