//! Scripted in-memory `ApiService`.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;

use talent_store::api::{ApiService, ServiceResult};
use talent_store::ServiceFailure;

/// A call the service received.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

type Key = (&'static str, String);

/// Returns queued results per `(method, path)`; unscripted calls fail with
/// `ServiceFailure::Unknown`.
#[derive(Default)]
pub struct MockApi {
    responses: Mutex<HashMap<Key, VecDeque<ServiceResult>>>,
    calls: Mutex<Vec<Call>>,
}

impl MockApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, method: &'static str, path: &str, result: ServiceResult) {
        self.responses
            .lock()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(result);
    }

    /// Queue a successful response.
    pub fn ok(&self, method: &'static str, path: &str, body: Value) {
        self.respond(method, path, Ok(body));
    }

    /// Queue a failure described as `{ response: { status, data }, message }`.
    pub fn fail(&self, method: &'static str, path: &str, failure: Value) {
        self.respond(method, path, Err(ServiceFailure::from_value(&failure)));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    fn next(&self, method: &'static str, path: &str, body: Option<Value>) -> ServiceResult {
        self.calls.lock().push(Call {
            method,
            path: path.to_string(),
            body,
        });
        self.responses
            .lock()
            .get_mut(&(method, path.to_string()))
            .and_then(VecDeque::pop_front)
            .unwrap_or(Err(ServiceFailure::Unknown))
    }
}

#[async_trait]
impl ApiService for MockApi {
    async fn get(&self, path: &str) -> ServiceResult {
        self.next("GET", path, None)
    }

    async fn post(&self, path: &str, body: Value) -> ServiceResult {
        self.next("POST", path, Some(body))
    }

    async fn put(&self, path: &str, body: Value) -> ServiceResult {
        self.next("PUT", path, Some(body))
    }

    async fn delete(&self, path: &str) -> ServiceResult {
        self.next("DELETE", path, None)
    }
}
