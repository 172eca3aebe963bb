//! HTTP response types and JSON decoding

use std::fmt;

use serde_json::{Map, Value};

use crate::error::HttpError;

/// HTTP Response type - generic over the body type R and error type E
/// This is the primary return type for all HTTP operations
pub type Response<R, E = HttpError> = Result<R, E>;

/// Generic JSON object: string keys mapped to arbitrary JSON values
pub type JsonObject = Map<String, Value>;

/// Generic JSON array
pub type JsonArray = Vec<Value>;

/// Tag of a decoded JSON value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    /// `{...}`
    Object,
    /// `[...]`
    Array,
    /// `"..."`
    String,
    /// Integer or floating point number
    Number,
    /// `true` / `false`
    Bool,
    /// `null`
    Null,
}

impl JsonKind {
    /// Tag of `value`
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => JsonKind::Object,
            Value::Array(_) => JsonKind::Array,
            Value::String(_) => JsonKind::String,
            Value::Number(_) => JsonKind::Number,
            Value::Bool(_) => JsonKind::Bool,
            Value::Null => JsonKind::Null,
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JsonKind::Object => "object",
            JsonKind::Array => "array",
            JsonKind::String => "string",
            JsonKind::Number => "number",
            JsonKind::Bool => "boolean",
            JsonKind::Null => "null",
        };
        f.write_str(name)
    }
}

/// A JSON shape a response body can be decoded into
pub(crate) trait JsonShape: Sized {
    /// Kind a body must have to decode into `Self`
    const KIND: JsonKind;

    /// Unwrap `value` if it has the right variant, hand it back otherwise
    fn from_value(value: Value) -> Result<Self, Value>;
}

impl JsonShape for JsonObject {
    const KIND: JsonKind = JsonKind::Object;

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Object(map) => Ok(map),
            other => Err(other),
        }
    }
}

impl JsonShape for JsonArray {
    const KIND: JsonKind = JsonKind::Array;

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Array(items) => Ok(items),
            other => Err(other),
        }
    }
}

/// Decode a full response body into the requested shape.
///
/// A body made only of whitespace counts as absent.
pub(crate) fn decode_body<T: JsonShape>(body: &[u8]) -> Response<T> {
    if body.iter().all(u8::is_ascii_whitespace) {
        tracing::warn!("Http Response error: empty body");
        return Err(HttpError::EmptyResponse);
    }

    let value: Value = serde_json::from_slice(body).map_err(|err| {
        tracing::warn!("Http Response error: {}", err);
        HttpError::from(err)
    })?;

    T::from_value(value).map_err(|value| {
        let found = JsonKind::of(&value);
        tracing::warn!(
            "Can't use retrieved {} as {}: {}",
            found,
            T::KIND,
            value
        );
        HttpError::UnexpectedShape {
            expected: T::KIND,
            found,
        }
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_response_type_is_result() {
        let success: Response<i32> = Ok(42);
        assert!(matches!(success, Ok(42)));

        let error: Response<i32> = Err(HttpError::EmptyResponse);
        assert!(matches!(error, Err(HttpError::EmptyResponse)));
    }

    #[test]
    fn test_json_kind_of() {
        assert_eq!(JsonKind::of(&json!({})), JsonKind::Object);
        assert_eq!(JsonKind::of(&json!([])), JsonKind::Array);
        assert_eq!(JsonKind::of(&json!("x")), JsonKind::String);
        assert_eq!(JsonKind::of(&json!(1.5)), JsonKind::Number);
        assert_eq!(JsonKind::of(&json!(false)), JsonKind::Bool);
        assert_eq!(JsonKind::of(&Value::Null), JsonKind::Null);
    }

    #[test]
    fn test_decode_object() {
        let object: JsonObject =
            decode_body(br#"{"id": 1, "name": "Shirt", "tags": ["a", "b"]}"#)
                .expect("Object body should decode");

        assert_eq!(object.get("id"), Some(&json!(1)));
        assert_eq!(object.get("name"), Some(&json!("Shirt")));
        assert_eq!(object.get("tags"), Some(&json!(["a", "b"])));
    }

    #[test]
    fn test_decode_array_keeps_order() {
        let array: JsonArray =
            decode_body(br#"[3, "two", {"one": 1}, null]"#).expect("Array body should decode");

        assert_eq!(array, vec![json!(3), json!("two"), json!({"one": 1}), Value::Null]);
    }

    #[test]
    fn test_decode_object_rejects_array() {
        let result: Response<JsonObject> = decode_body(b"[1,2,3]");

        assert!(matches!(
            result,
            Err(HttpError::UnexpectedShape {
                expected: JsonKind::Object,
                found: JsonKind::Array,
            })
        ));
    }

    #[test]
    fn test_decode_array_rejects_object() {
        let result: Response<JsonArray> = decode_body(br#"{"id":1}"#);

        assert!(matches!(
            result,
            Err(HttpError::UnexpectedShape {
                expected: JsonKind::Array,
                found: JsonKind::Object,
            })
        ));
    }

    #[test]
    fn test_decode_object_rejects_scalars() {
        for (body, kind) in [
            (&b"\"text\""[..], JsonKind::String),
            (&b"42"[..], JsonKind::Number),
            (&b"true"[..], JsonKind::Bool),
            (&b"null"[..], JsonKind::Null),
        ] {
            let result: Response<JsonObject> = decode_body(body);
            match result {
                Err(HttpError::UnexpectedShape { found, .. }) => assert_eq!(found, kind),
                other => panic!("Expected UnexpectedShape, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_decode_empty_body() {
        let result: Response<JsonObject> = decode_body(b"");
        assert!(matches!(result, Err(HttpError::EmptyResponse)));

        let result: Response<JsonArray> = decode_body(b" \r\n\t");
        assert!(matches!(result, Err(HttpError::EmptyResponse)));
    }

    #[test]
    fn test_decode_invalid_json() {
        let result: Response<JsonObject> = decode_body(b"<html>Bad Gateway</html>");
        assert!(matches!(result, Err(HttpError::Decode(_))));
    }
}
