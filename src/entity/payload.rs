//! 松散类型载荷到强类型记录的转换
//!
//! 后端返回的数据可能是 JSON 文本、未类型化的键值对象，或者干脆为空。
//! 每个记录类型通过 [`FromPayload`] 从这三种形式构建：
//! - 缺失字段和 `null` 字段取零值，不视为错误
//! - 只有格式错误的 JSON 文本（或类型不匹配的值）会返回解码错误

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// 构建记录时的输入
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Payload {
    /// 未提供输入
    #[default]
    Empty,
    /// JSON 编码的文本
    Json(String),
    /// 未类型化的键值对象
    Map(Map<String, Value>),
}

impl Payload {
    /// 从任意 JSON 值构建载荷，只接受 null、字符串和对象
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        match value {
            Value::Null => Ok(Payload::Empty),
            Value::String(text) => Ok(Payload::Json(text)),
            Value::Object(map) => Ok(Payload::Map(map)),
            other => Err(serde_json::Error::custom(format!(
                "expected a JSON object or JSON text, found {}",
                other
            ))),
        }
    }

    /// 按目标类型解码，空输入得到零值
    pub fn decode<T>(self) -> Result<T, serde_json::Error>
    where
        T: DeserializeOwned + Default,
    {
        match self {
            Payload::Empty => Ok(T::default()),
            Payload::Json(text) if text.trim().is_empty() => Ok(T::default()),
            Payload::Json(text) => match serde_json::from_str::<Value>(&text)? {
                Value::Null => Ok(T::default()),
                Value::Object(map) => serde_json::from_value(Value::Object(map)),
                // 数组会被 serde 按位置填充字段，不接受
                other => Err(serde_json::Error::custom(format!(
                    "expected a JSON object, found {}",
                    other
                ))),
            },
            Payload::Map(map) => serde_json::from_value(Value::Object(map)),
        }
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Payload::Json(text.to_string())
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Payload::Json(text)
    }
}

impl From<Map<String, Value>> for Payload {
    fn from(map: Map<String, Value>) -> Self {
        Payload::Map(map)
    }
}

impl<P: Into<Payload>> From<Option<P>> for Payload {
    fn from(source: Option<P>) -> Self {
        source.map_or(Payload::Empty, Into::into)
    }
}

/// 可以从松散载荷构建的记录
pub trait FromPayload: DeserializeOwned + Default {
    /// 从 JSON 文本、键值对象或空输入构建记录
    fn from_payload(source: impl Into<Payload>) -> Result<Self, serde_json::Error> {
        source.into().decode()
    }

    /// 从嵌套的 JSON 值构建记录（嵌套值本身也可能是 JSON 文本）
    fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        Payload::from_value(value)?.decode()
    }
}

/// 嵌套值的转换结果
#[derive(Debug, Clone, PartialEq)]
pub enum Converted<T> {
    /// 序列：逐个元素转换
    Seq(Vec<T>),
    /// 映射：逐个值转换，保留键
    Map(BTreeMap<String, T>),
    /// 单个对象
    One(T),
}

impl<T> Converted<T> {
    /// 展开为序列，映射按键的顺序取值
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Converted::Seq(items) => items,
            Converted::Map(map) => map.into_values().collect(),
            Converted::One(item) => vec![item],
        }
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

/// 转换嵌套的记录集合
///
/// `as_map` 为真时把对象当作"键 -> 记录"的映射处理，否则当作单个记录。
/// 空值或缺失值得到空集合。字符串按 JSON 文本解析后再转换。
pub fn convert_values<T: FromPayload>(
    value: Value,
    as_map: bool,
) -> Result<Converted<T>, serde_json::Error> {
    if is_blank(&value) {
        return Ok(if as_map {
            Converted::Map(BTreeMap::new())
        } else {
            Converted::Seq(Vec::new())
        });
    }

    match value {
        Value::String(text) => convert_values(serde_json::from_str(&text)?, as_map),
        Value::Array(items) => items
            .into_iter()
            .map(T::from_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Converted::Seq),
        Value::Object(map) if as_map => map
            .into_iter()
            .map(|(key, item)| T::from_value(item).map(|record| (key, record)))
            .collect::<Result<BTreeMap<_, _>, _>>()
            .map(Converted::Map),
        other => T::from_value(other).map(Converted::One),
    }
}

// ==================== serde 辅助函数 ====================

/// 反序列化时把 `null` 视为零值
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// 反序列化嵌套记录序列，元素可以是对象或 JSON 文本
pub(crate) fn records<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromPayload,
{
    let value = Value::deserialize(deserializer)?;
    convert_values(value, false)
        .map(Converted::into_vec)
        .map_err(D::Error::custom)
}

/// 反序列化单个嵌套记录，允许 `null`、空对象或 JSON 文本
pub(crate) fn record<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromPayload,
{
    let value = Value::deserialize(deserializer)?;
    T::from_value(value).map_err(D::Error::custom)
}
