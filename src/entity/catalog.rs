//! 基础数据：制造商、类型、标签

use serde::{Deserialize, Serialize};

use super::payload::{nullable, FromPayload};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manufacturer {
    #[serde(deserialize_with = "nullable")]
    pub id: i64,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
}

/// Set 的类型（例如印章、切模）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Type {
    #[serde(deserialize_with = "nullable")]
    pub id: i64,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    #[serde(deserialize_with = "nullable")]
    pub id: i64,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
}

impl FromPayload for Manufacturer {}
impl FromPayload for Type {}
impl FromPayload for Tag {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::payload::Payload;

    #[test]
    fn empty_payload_gives_zero_record() {
        assert_eq!(
            Manufacturer::from_payload(Payload::Empty).unwrap(),
            Manufacturer::default()
        );
        assert_eq!(Type::from_payload("").unwrap(), Type::default());
        assert_eq!(Tag::from_payload("null").unwrap(), Tag::default());
        assert_eq!(Tag::from_payload(None::<String>).unwrap(), Tag::default());
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        assert!(Manufacturer::from_payload("{not json").is_err());
        assert!(Type::from_payload("{not json").is_err());
        assert!(Tag::from_payload("{not json").is_err());
    }

    #[test]
    fn wrong_value_type_is_a_decode_error() {
        let err = Tag::from_payload(r#"{"id":"seven","name":"rot"}"#).unwrap_err();
        assert!(err.is_data());

        // 顶层必须是对象
        assert!(Tag::from_payload("42").is_err());
    }

    #[test]
    fn type_round_trips() {
        let kind = Type {
            id: 2,
            name: "Stanze".to_string(),
        };
        let text = serde_json::to_string(&kind).unwrap();
        assert_eq!(text, r#"{"id":2,"name":"Stanze"}"#);
        assert_eq!(Type::from_payload(text).unwrap(), kind);
    }
}
