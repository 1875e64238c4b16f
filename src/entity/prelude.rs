//! 预导入模块
//!
//! 提供常用类型的快捷导入。

pub use super::app::{AppPaths, ScanResult};
pub use super::catalog::{Manufacturer, Tag, Type};
pub use super::payload::{convert_values, Converted, FromPayload, Payload};
pub use super::search::SetSearchResult;
pub use super::set::{Product, SetDetails};
pub use super::storage::{Bag, BagInfo, StorageBox, StorageLocation};
