//! 存放位置相关记录：位置、箱子、袋子

use serde::{Deserialize, Serialize};

use super::payload::{nullable, FromPayload};

/// 存放位置（房间 / 柜子 / 格子）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StorageLocation {
    #[serde(deserialize_with = "nullable")]
    pub id: i64,
    #[serde(deserialize_with = "nullable")]
    pub friendly_name: String,
    #[serde(deserialize_with = "nullable")]
    pub room: String,
    #[serde(deserialize_with = "nullable")]
    pub shelf: String,
    #[serde(deserialize_with = "nullable")]
    pub compartment: String,
    #[serde(deserialize_with = "nullable")]
    pub note: String,
}

/// 箱子（前端中的 `Box`）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StorageBox {
    #[serde(deserialize_with = "nullable")]
    pub id: i64,
    #[serde(deserialize_with = "nullable")]
    pub location_id: i64,
    #[serde(deserialize_with = "nullable")]
    pub code: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
}

/// 袋子，放在某个箱子里
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Bag {
    #[serde(deserialize_with = "nullable")]
    pub id: i64,
    #[serde(deserialize_with = "nullable")]
    pub box_id: i64,
    #[serde(deserialize_with = "nullable")]
    pub serial_no: String,
}

/// 袋子 + 箱子 + 位置的联合视图
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BagInfo {
    #[serde(deserialize_with = "nullable")]
    pub id: i64,
    #[serde(deserialize_with = "nullable")]
    pub serial_no: String,
    #[serde(deserialize_with = "nullable")]
    pub box_id: i64,
    #[serde(deserialize_with = "nullable")]
    pub box_code: String,
    #[serde(deserialize_with = "nullable")]
    pub box_name: String,
    #[serde(deserialize_with = "nullable")]
    pub location_id: i64,
    #[serde(deserialize_with = "nullable")]
    pub location_name: String,
    #[serde(deserialize_with = "nullable")]
    pub location_room: String,
    #[serde(deserialize_with = "nullable")]
    pub location_shelf: String,
    #[serde(deserialize_with = "nullable")]
    pub location_compartment: String,
    #[serde(deserialize_with = "nullable")]
    pub location_note: String,
}

impl FromPayload for StorageLocation {}
impl FromPayload for StorageBox {}
impl FromPayload for Bag {}
impl FromPayload for BagInfo {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn location_uses_camel_case_wire_names() {
        let location = StorageLocation {
            id: 3,
            friendly_name: "Keller".to_string(),
            room: "Keller".to_string(),
            shelf: "Regal 2".to_string(),
            compartment: "Fach B".to_string(),
            note: String::new(),
        };

        let value = serde_json::to_value(&location).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 3,
                "friendlyName": "Keller",
                "room": "Keller",
                "shelf": "Regal 2",
                "compartment": "Fach B",
                "note": ""
            })
        );
    }

    #[test]
    fn box_from_map_with_missing_and_null_fields() {
        let map = json!({ "id": 7, "code": "K-07", "name": null })
            .as_object()
            .cloned()
            .unwrap();

        let storage_box = StorageBox::from_payload(map).unwrap();
        assert_eq!(
            storage_box,
            StorageBox {
                id: 7,
                location_id: 0,
                code: "K-07".to_string(),
                name: String::new(),
            }
        );
    }

    #[test]
    fn bag_info_round_trips_through_json_text() {
        let info = BagInfo {
            id: 11,
            serial_no: "0004".to_string(),
            box_id: 2,
            box_code: "K-02".to_string(),
            box_name: "Weihnachten".to_string(),
            location_id: 1,
            location_name: "Arbeitszimmer".to_string(),
            location_room: "Büro".to_string(),
            location_shelf: "Regal 3".to_string(),
            location_compartment: "Fach A".to_string(),
            location_note: "oben links".to_string(),
        };

        let text = serde_json::to_string(&info).unwrap();
        assert_eq!(BagInfo::from_payload(text).unwrap(), info);
    }

    #[test]
    fn bag_ignores_unknown_fields() {
        let bag =
            Bag::from_payload(r#"{"id":1,"boxId":4,"serialNo":"0001","color":"red"}"#).unwrap();
        assert_eq!(bag.box_id, 4);
        assert_eq!(bag.serial_no, "0001");
    }
}
