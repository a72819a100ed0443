//! Case-insensitive JSON decoding.
//!
//! serde matches field names exactly, so bodies are first parsed into a
//! [`Value`], every object key is lowercased, and only then deserialized into
//! the lowercase-named types in [`crate::types`].

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::ApiError;

/// Decodes a raw response body into `T`, ignoring the case of field names.
///
/// # Errors
///
/// Returns [`ApiError::Deserialize`] if the body is not JSON or does not
/// match the shape of `T`.
pub fn decode<T: DeserializeOwned>(body: &str, context: &str) -> Result<T, ApiError> {
    let value: Value = serde_json::from_str(body).map_err(|e| ApiError::Deserialize {
        context: context.to_owned(),
        source: e,
    })?;
    decode_value(value, context)
}

/// Decodes an already-parsed value, ignoring the case of field names.
///
/// # Errors
///
/// Returns [`ApiError::Deserialize`] if `value` does not match the shape of `T`.
pub fn decode_value<T: DeserializeOwned>(value: Value, context: &str) -> Result<T, ApiError> {
    serde_json::from_value(lowercase_keys(value)).map_err(|e| ApiError::Deserialize {
        context: context.to_owned(),
        source: e,
    })
}

/// Recursively lowercases every object key. When two keys collide after
/// lowercasing, the later one wins.
#[must_use]
pub fn lowercase_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k.to_lowercase(), lowercase_keys(v)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(lowercase_keys).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::types::{MapRecord, ShopEntry};

    #[test]
    fn lowercase_keys_walks_nested_objects_and_arrays() {
        let value = json!({
            "Data": { "Entries": [ { "FinalPrice": 800, "Items": [ { "Name": "Crackshot" } ] } ] }
        });
        let lowered = lowercase_keys(value);
        assert_eq!(
            lowered,
            json!({
                "data": { "entries": [ { "finalprice": 800, "items": [ { "name": "Crackshot" } ] } ] }
            })
        );
    }

    #[test]
    fn lowercase_keys_leaves_string_values_alone() {
        let lowered = lowercase_keys(json!({ "Name": "Peely" }));
        assert_eq!(lowered, json!({ "name": "Peely" }));
    }

    #[test]
    fn decode_matches_fields_regardless_of_case() {
        let body = r#"{"STATUS":200,"data":{"Images":{"POIS":"https://example.com/map.png"}}}"#;
        let record: MapRecord = decode(body, "map").unwrap();
        assert_eq!(record.status, Some(200));
        let pois = record.data.and_then(|d| d.images).and_then(|i| i.pois);
        assert_eq!(pois.as_deref(), Some("https://example.com/map.png"));
    }

    #[test]
    fn decode_camel_case_prices() {
        let entry: ShopEntry = decode_value(
            json!({ "regularPrice": 1500, "finalPrice": 1200, "items": null }),
            "entry",
        )
        .unwrap();
        assert_eq!(entry.regular_price, Some(1500));
        assert_eq!(entry.final_price, Some(1200));
        assert!(entry.items.is_none());
    }

    #[test]
    fn decode_rejects_wrong_types() {
        let err = decode::<MapRecord>(r#"{"data":{"images":{"pois":42}}}"#, "map").unwrap_err();
        assert!(matches!(err, ApiError::Deserialize { ref context, .. } if context == "map"));
    }

    #[test]
    fn decode_rejects_invalid_json() {
        let err = decode::<MapRecord>("<html>502 Bad Gateway</html>", "map").unwrap_err();
        assert!(matches!(err, ApiError::Deserialize { .. }));
    }
}
