//! The pending → fulfilled | rejected flow shared by every dispatcher.

use std::future::Future;

use serde_json::Value;

use crate::api::ServiceResult;
use crate::error::{normalize, OperationError};
use crate::mvi::Reducer;
use crate::resource::{AsyncPhase, DecodeError};

use super::cell::SliceCell;

/// Names an async operation for logs and for the fallback error message.
#[derive(Debug, Clone)]
pub struct Operation {
    pub name: String,
    pub fallback: String,
}

impl Operation {
    pub fn new(name: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fallback: fallback.into(),
        }
    }
}

/// Run one async operation against `cell`.
///
/// Dispatches the pending phase, awaits the service call, decodes the raw
/// payload and dispatches exactly one of fulfilled or rejected. Failures are
/// normalized before they reach state; the same value is returned to the caller.
pub async fn run_operation<R, T, W, Fut, D>(
    cell: &SliceCell<R>,
    operation: &Operation,
    wrap: W,
    call: Fut,
    decode: D,
) -> Result<T, OperationError>
where
    R: Reducer,
    T: Clone,
    W: Fn(AsyncPhase<T>) -> R::Intent,
    Fut: Future<Output = ServiceResult>,
    D: FnOnce(Value) -> Result<T, DecodeError>,
{
    tracing::debug!(operation = %operation.name, "Dispatching operation");
    cell.dispatch(wrap(AsyncPhase::Pending));

    let outcome = match call.await {
        Ok(raw) => decode(raw).map_err(|e| {
            OperationError::new(format!("Invalid response for {}: {}", operation.name, e))
        }),
        Err(failure) => {
            tracing::debug!(
                operation = %operation.name,
                status = ?failure.status(),
                "Service call failed"
            );
            Err(normalize(&failure, &operation.fallback))
        }
    };

    match outcome {
        Ok(payload) => {
            tracing::debug!(operation = %operation.name, "Operation fulfilled");
            cell.dispatch(wrap(AsyncPhase::Fulfilled(payload.clone())));
            Ok(payload)
        }
        Err(error) => {
            tracing::warn!(operation = %operation.name, error = %error, "Operation rejected");
            cell.dispatch(wrap(AsyncPhase::Rejected(error.clone())));
            Err(error)
        }
    }
}
