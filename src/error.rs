//! Failures reported by the service collaborator and the normalized error
//! that slices store.
//!
//! A [`ServiceFailure`] never reaches slice state directly. It is run through
//! [`normalize`], which applies [`EXTRACTION_ORDER`] and falls back to a fixed
//! message naming the operation.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Normalized, human-readable error stored in slice state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(transparent)]
#[error("{0}")]
pub struct OperationError(String);

impl OperationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OperationError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for OperationError {
    fn from(message: String) -> Self {
        Self(message)
    }
}

/// Failure returned by an [`ApiService`](crate::api::ApiService) call.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceFailure {
    /// The server answered with a non-success status.
    Response {
        status: Option<u16>,
        /// Decoded response body, `Null` when absent or not JSON.
        data: Value,
        message: Option<String>,
    },
    /// The request never produced a response (connect, timeout, decode).
    Transport { message: String },
    /// The collaborator reported nothing usable.
    Unknown,
}

impl ServiceFailure {
    /// Build a failure from a loosely-shaped object of the form
    /// `{ "response": { "status": 404, "data": {..} }, "message": ".." }`.
    ///
    /// Every field is optional. A failure without a `response` object but with
    /// a message is treated as a transport failure.
    pub fn from_value(value: &Value) -> Self {
        let message = non_empty_str(value.get("message")).map(String::from);

        match value.get("response") {
            Some(response) if response.is_object() => ServiceFailure::Response {
                status: response
                    .get("status")
                    .and_then(Value::as_u64)
                    .and_then(|s| u16::try_from(s).ok()),
                data: response.get("data").cloned().unwrap_or(Value::Null),
                message,
            },
            _ => match message {
                Some(message) => ServiceFailure::Transport { message },
                None => ServiceFailure::Unknown,
            },
        }
    }

    /// HTTP status, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ServiceFailure::Response { status, .. } => *status,
            _ => None,
        }
    }

    /// Response body, when the server answered.
    pub fn data(&self) -> Option<&Value> {
        match self {
            ServiceFailure::Response { data, .. } => Some(data),
            _ => None,
        }
    }

    /// The failure's own flat message.
    pub fn message(&self) -> Option<&str> {
        match self {
            ServiceFailure::Response { message, .. } => message.as_deref(),
            ServiceFailure::Transport { message } => Some(message),
            ServiceFailure::Unknown => None,
        }
    }
}

/// One way of pulling a message out of a failure.
pub type ExtractionStrategy = fn(&ServiceFailure) -> Option<String>;

/// Strategies tried in order by [`normalize`]; the first hit wins.
pub const EXTRACTION_ORDER: &[ExtractionStrategy] = &[nested_error, flat_message];

/// `response.data.error`, either a string or an object carrying `message`.
pub fn nested_error(failure: &ServiceFailure) -> Option<String> {
    let error = failure.data()?.get("error")?;
    match error {
        Value::Object(map) => non_empty_str(map.get("message")).map(String::from),
        other => non_empty_str(Some(other)).map(String::from),
    }
}

/// The failure's own message.
pub fn flat_message(failure: &ServiceFailure) -> Option<String> {
    failure
        .message()
        .filter(|m| !m.is_empty())
        .map(String::from)
}

/// Reduce a failure to the single error value stored in state.
pub fn normalize(failure: &ServiceFailure, fallback: &str) -> OperationError {
    EXTRACTION_ORDER
        .iter()
        .find_map(|strategy| strategy(failure))
        .map(OperationError::from)
        .unwrap_or_else(|| OperationError::new(fallback))
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}
