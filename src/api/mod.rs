//! The service collaborator slices call out to.
//!
//! Slices only depend on [`ApiService`]. [`HttpApi`] is the REST
//! implementation used by the binary; tests substitute scripted services.

mod error;
mod http;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ServiceFailure;

pub use error::HttpError;
pub use http::HttpApi;

/// Result of a single service call.
pub type ServiceResult = Result<Value, ServiceFailure>;

/// Transport-level access to the remote API.
///
/// Paths are relative to the API base (e.g. `/positions/3`). Successful calls
/// return the decoded JSON body, `Null` when the body is empty.
#[async_trait]
pub trait ApiService: Send + Sync {
    async fn get(&self, path: &str) -> ServiceResult;

    async fn post(&self, path: &str, body: Value) -> ServiceResult;

    async fn put(&self, path: &str, body: Value) -> ServiceResult;

    async fn delete(&self, path: &str) -> ServiceResult;
}
