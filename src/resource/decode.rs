//! Validated decoding at the boundary between raw payloads and typed state.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("expected an array, found {found}")]
    NotASequence { found: &'static str },

    #[error("malformed payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Decode an array payload. Elements that do not decode are skipped.
pub fn decode_sequence<T: DeserializeOwned>(value: Value) -> Result<Vec<T>, DecodeError> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(DecodeError::NotASequence {
                found: kind(&other),
            })
        }
    };

    let total = items.len();
    let decoded: Vec<T> = items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(entity) => Some(entity),
            Err(e) => {
                tracing::warn!(error = %e, "Skipping malformed element");
                None
            }
        })
        .collect();

    if decoded.len() != total {
        tracing::warn!(
            kept = decoded.len(),
            total,
            "Sequence payload contained malformed elements"
        );
    }

    Ok(decoded)
}

/// Decode an array payload, substituting an empty sequence for anything else.
pub fn sequence_or_empty<T: DeserializeOwned>(value: Value, operation: &str) -> Vec<T> {
    match decode_sequence(value) {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(operation = %operation, error = %e, "Coercing payload to empty sequence");
            Vec::new()
        }
    }
}

/// Decode a single-object payload.
pub fn decode_object<T: DeserializeOwned>(value: Value) -> Result<T, DecodeError> {
    Ok(serde_json::from_value(value)?)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
