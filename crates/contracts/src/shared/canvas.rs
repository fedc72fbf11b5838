use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A typed unit of user-authored content placed on an editing canvas.
///
/// Only `element_type` is interpreted outside the canvas editor; the
/// payload shape is owned by the editor tooling and carried verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CanvasElement {
    pub id: Uuid,

    #[serde(rename = "type")]
    pub element_type: String,

    #[serde(default)]
    pub data: serde_json::Value,
}

impl CanvasElement {
    /// New empty element of the given type
    pub fn new(element_type: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            element_type: element_type.to_string(),
            data: serde_json::Value::Null,
        }
    }

    /// New element with a payload
    pub fn with_data(element_type: &str, data: serde_json::Value) -> Self {
        Self {
            id: Uuid::new_v4(),
            element_type: element_type.to_string(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_tag_round_trips_as_type() {
        let el = CanvasElement::new("bmc");
        let json = serde_json::to_value(&el).unwrap();
        assert_eq!(json["type"], "bmc");

        let back: CanvasElement = serde_json::from_value(json).unwrap();
        assert_eq!(back.element_type, "bmc");
    }

    #[test]
    fn missing_data_defaults_to_null() {
        let el: CanvasElement = serde_json::from_str(
            r#"{"id":"6f4a4c2e-94e5-4df6-9c1a-0c8e35b6f001","type":"userStory"}"#,
        )
        .unwrap();
        assert!(el.data.is_null());
    }
}
