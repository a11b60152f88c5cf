//! Unwrapping of the CMS response envelope: `{ "data": [ ... ] }` for
//! collections, `{ "data": { ... } }` for single types.
//!
//! Records are decoded one at a time. A record that does not decode (most
//! often one without an `id`) is skipped so the rest of the collection
//! still renders.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// All decodable records. A singleton object counts as a one-record
/// collection; any other `data` shape (missing, null, string, number) is empty.
pub fn records<T: DeserializeOwned>(payload: &Value) -> Vec<T> {
    match payload.get("data") {
        Some(Value::Array(items)) => items.iter().filter_map(decode).collect(),
        Some(record @ Value::Object(_)) => decode(record).into_iter().collect(),
        _ => Vec::new(),
    }
}

/// The first decodable record, whether `data` is a collection or a single type.
pub fn first<T: DeserializeOwned>(payload: &Value) -> Option<T> {
    match payload.get("data") {
        Some(Value::Array(items)) => items.iter().find_map(decode),
        Some(record @ Value::Object(_)) => decode(record),
        _ => None,
    }
}

fn decode<T: DeserializeOwned>(record: &Value) -> Option<T> {
    match T::deserialize(record) {
        Ok(value) => Some(value),
        Err(err) => {
            debug!(error = %err, "skipping undecodable CMS record");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: u64,
    }

    #[test]
    fn collection_skips_records_without_id() {
        let payload = json!({ "data": [{ "id": 1 }, { "title": "orphan" }, { "id": 3 }] });
        let rows: Vec<Row> = records(&payload);
        assert_eq!(rows, vec![Row { id: 1 }, Row { id: 3 }]);
    }

    #[test]
    fn scalar_or_missing_data_is_empty() {
        for payload in [
            json!({ "data": "oops" }),
            json!({ "data": 42 }),
            json!({ "data": null }),
            json!({ "error": { "status": 404 } }),
            json!([]),
        ] {
            assert!(records::<Row>(&payload).is_empty(), "{payload}");
            assert_eq!(first::<Row>(&payload), None, "{payload}");
        }
    }

    #[test]
    fn first_accepts_single_type_objects() {
        let payload = json!({ "data": { "id": 7 } });
        assert_eq!(first::<Row>(&payload), Some(Row { id: 7 }));
        assert_eq!(records::<Row>(&payload), vec![Row { id: 7 }]);
    }

    #[test]
    fn first_of_empty_collection_is_none() {
        assert_eq!(first::<Row>(&json!({ "data": [] })), None);
    }
}
