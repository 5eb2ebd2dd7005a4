//! Inventory payload envelopes
//!
//! Backends return either a bare array of records or an object wrapping it.

use serde_json::Value;
use thiserror::Error;

use crate::models::RawInventoryRecord;

/// Keys under which an inventory array may be wrapped, in lookup order
pub const ENVELOPE_KEYS: &[&str] = &["items", "inventory", "data"];

#[derive(Error, Debug)]
pub enum PayloadError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Payload contains no inventory array")]
    MissingItems,
}

/// Parse a response body into raw records
pub fn parse_inventory_payload(body: &str) -> Result<Vec<RawInventoryRecord>, PayloadError> {
    let value: Value = serde_json::from_str(body)?;
    records_from_value(value)
}

/// Extract raw records from an already-parsed payload. Array entries that
/// are not JSON objects are dropped.
pub fn records_from_value(value: Value) -> Result<Vec<RawInventoryRecord>, PayloadError> {
    let entries = unwrap_envelope(value).ok_or(PayloadError::MissingItems)?;
    Ok(entries
        .into_iter()
        .filter(Value::is_object)
        .map(RawInventoryRecord::new)
        .collect())
}

fn unwrap_envelope(value: Value) -> Option<Vec<Value>> {
    match value {
        Value::Array(entries) => Some(entries),
        Value::Object(mut map) => ENVELOPE_KEYS
            .iter()
            .find_map(|key| map.remove(*key))
            .and_then(unwrap_envelope),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_array() {
        let records = parse_inventory_payload(r#"[{"id": 1}, {"id": 2}]"#).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_envelopes() {
        for key in ENVELOPE_KEYS {
            let mut envelope = serde_json::Map::new();
            envelope.insert(key.to_string(), json!([{ "id": 1 }]));
            let records = records_from_value(Value::Object(envelope)).unwrap();
            assert_eq!(records.len(), 1, "{key}");
        }
    }

    #[test]
    fn test_nested_envelope() {
        let records = records_from_value(json!({ "data": { "items": [{ "id": 1 }] } })).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_non_object_entries_dropped() {
        let records = records_from_value(json!([{ "id": 1 }, 5, null, "x"])).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_missing_items() {
        assert!(matches!(
            records_from_value(json!({ "message": "ok" })),
            Err(PayloadError::MissingItems)
        ));
        assert!(matches!(records_from_value(json!(3)), Err(PayloadError::MissingItems)));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            parse_inventory_payload("{not json"),
            Err(PayloadError::InvalidJson(_))
        ));
    }
}
