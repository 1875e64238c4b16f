//! 应用环境相关记录

use samla_path::DataLayout;
use serde::{Deserialize, Serialize};

use super::payload::{nullable, FromPayload};

/// 应用目录，提供给前端展示
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppPaths {
    #[serde(deserialize_with = "nullable")]
    pub base_dir: String,
    #[serde(deserialize_with = "nullable")]
    pub data_dir: String,
    #[serde(deserialize_with = "nullable")]
    pub images_dir: String,
    #[serde(deserialize_with = "nullable")]
    pub db_path: String,
}

impl From<&DataLayout> for AppPaths {
    fn from(layout: &DataLayout) -> Self {
        Self {
            base_dir: layout.base_dir.to_string_lossy().to_string(),
            data_dir: layout.data_dir.to_string_lossy().to_string(),
            images_dir: layout.images_dir.to_string_lossy().to_string(),
            db_path: layout.db_path.to_string_lossy().to_string(),
        }
    }
}

/// 扫描/导入图片的结果：用于预览的 data URL 和保存用的相对路径
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScanResult {
    #[serde(deserialize_with = "nullable")]
    pub base64_data: String,
    #[serde(deserialize_with = "nullable")]
    pub rel_path: String,
}

impl FromPayload for AppPaths {}
impl FromPayload for ScanResult {}
