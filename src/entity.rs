//! 数据传输对象模块
//!
//! 前后端之间传递的记录结构。字段名（camelCase）即序列化契约，必须保持不变。

pub mod prelude;

// === 载荷转换 ===
pub mod payload;

// === 记录结构 ===
pub mod app;
pub mod catalog;
pub mod search;
pub mod set;
pub mod storage;
