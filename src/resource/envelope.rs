//! Envelope unwrapping for API responses.

use serde_json::Value;

/// Pull the payload out of a response envelope.
///
/// The first key in `keys` present on an object response wins. Anything else
/// (bare arrays, scalars, objects without those keys) is returned unchanged.
pub fn unwrap_envelope(value: Value, keys: &[&str]) -> Value {
    match value {
        Value::Object(mut map) => {
            for key in keys {
                if let Some(inner) = map.remove(*key) {
                    return inner;
                }
            }
            Value::Object(map)
        }
        other => other,
    }
}
