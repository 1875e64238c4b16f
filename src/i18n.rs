//! 本地化模块
//!
//! 德语/英语界面文案、语言偏好的持久化，以及双语搜索前缀的归一化。

pub mod locale;
pub mod localizer;
pub mod prefixes;
pub mod preference;
pub mod service;
pub mod translations;

pub use locale::Locale;
pub use localizer::Localizer;
// 重新导出 service 中的所有 command 方便注册
pub use service::*;
