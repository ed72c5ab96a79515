//! Rendering of stored documents for HTTP responses.
//!
//! Relaxed extended JSON would render ids as `{"$oid": "..."}` and dates as
//! `{"$date": ...}`. API clients expect plain strings for both, the way an
//! ODM serialises documents, so those two types are flattened here and every
//! other value falls back to relaxed extended JSON.

use mongodb::bson::{Bson, Document};
use serde_json::{Map, Value};

/// Convert a single BSON value to JSON
pub fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => match dt.try_to_rfc3339_string() {
            Ok(formatted) => Value::String(formatted),
            Err(_) => Value::from(dt.timestamp_millis()),
        },
        Bson::Document(doc) => Value::Object(document_to_json(doc)),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}

/// Convert a document to a JSON object, keeping field order
pub fn document_to_json(doc: Document) -> Map<String, Value> {
    doc.into_iter()
        .map(|(key, value)| (key, bson_to_json(value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{DateTime, doc, oid::ObjectId};
    use serde_json::json;

    #[test]
    fn test_object_id_rendered_as_hex() {
        let oid = ObjectId::parse_str("64a1f0c2e4b0a1b2c3d4e5f6").unwrap();
        assert_eq!(bson_to_json(Bson::ObjectId(oid)), json!("64a1f0c2e4b0a1b2c3d4e5f6"));
    }

    #[test]
    fn test_datetime_rendered_as_rfc3339() {
        let dt = DateTime::from_millis(1_700_000_000_000);
        assert_eq!(
            bson_to_json(Bson::DateTime(dt)),
            json!("2023-11-14T22:13:20Z")
        );
    }

    #[test]
    fn test_nested_documents_and_arrays() {
        let oid = ObjectId::parse_str("64a1f0c2e4b0a1b2c3d4e5f6").unwrap();
        let doc = doc! {
            "title": "Shoes",
            "price": 4999_i64,
            "onSale": true,
            "categories": [oid],
            "media": { "cover": "img.png", "tags": ["a", "b"] },
        };

        let rendered = Value::Object(document_to_json(doc));

        assert_eq!(
            rendered,
            json!({
                "title": "Shoes",
                "price": 4999,
                "onSale": true,
                "categories": ["64a1f0c2e4b0a1b2c3d4e5f6"],
                "media": { "cover": "img.png", "tags": ["a", "b"] },
            })
        );
    }

    #[test]
    fn test_field_order_preserved() {
        let doc = doc! { "z": 1, "a": 2, "m": 3 };
        let keys: Vec<String> = document_to_json(doc).into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }
}
