//! Lenient field decoders for resume records written by the form layer.
//!
//! A draft resume may hold half-filled sections, numbers where strings are
//! expected, or `null` anywhere. These decoders never fail: a value of the
//! wrong shape decodes as absent.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Strings decode as-is, numbers and booleans as their text, anything else as `None`.
pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// `true` only for a JSON `true`.
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(matches!(value, Value::Bool(true)))
}

/// Decodes `T` when the value has the right shape, otherwise `None`.
pub fn value<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Arrays decode element-wise, dropping elements that do not decode.
/// A non-array value is `None`, which rules treat differently from `Some(vec![])`.
pub fn seq<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        ),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "super::string")]
        text: Option<String>,
        #[serde(default, deserialize_with = "super::flag")]
        on: bool,
        #[serde(default, deserialize_with = "super::seq")]
        items: Option<Vec<Item>>,
    }

    #[derive(Debug, Deserialize)]
    struct Item {
        #[serde(default, deserialize_with = "super::string")]
        name: Option<String>,
    }

    fn probe(value: serde_json::Value) -> Probe {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_number_becomes_text() {
        assert_eq!(probe(json!({"text": 5551234})).text.as_deref(), Some("5551234"));
    }

    #[test]
    fn test_wrong_shapes_become_absent() {
        let p = probe(json!({"text": {"nested": true}, "on": "yes", "items": "none"}));
        assert!(p.text.is_none());
        assert!(!p.on);
        assert!(p.items.is_none());
    }

    #[test]
    fn test_null_and_missing_are_absent() {
        let p = probe(json!({"text": null, "items": null}));
        assert!(p.text.is_none());
        assert!(p.items.is_none());
        assert!(probe(json!({})).items.is_none());
    }

    #[test]
    fn test_seq_drops_non_object_elements() {
        let p = probe(json!({"items": [{"name": "a"}, null, 3, {"name": 7}]}));
        let items = p.items.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].name.as_deref(), Some("7"));
    }

    #[test]
    fn test_empty_array_is_present() {
        assert_eq!(probe(json!({"items": []})).items.map(|v| v.len()), Some(0));
    }
}
