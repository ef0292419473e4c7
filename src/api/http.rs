//! REST implementation of [`ApiService`] on top of `reqwest`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, Response};
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::ServiceFailure;

use super::error::HttpError;
use super::{ApiService, ServiceResult};

/// JSON-over-HTTP service client.
#[derive(Clone)]
pub struct HttpApi {
    client: Client,
    base_url: String,
    auth_token: Option<String>,
}

impl HttpApi {
    pub fn new(config: &ApiConfig) -> Result<Self, HttpError> {
        let base_url = config
            .normalized_base_url()
            .ok_or_else(|| HttpError::InvalidBaseUrl {
                url: config.base_url.clone(),
            })?
            .to_string();

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url,
            auth_token: config.auth_token.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send(&self, method: Method, path: &str, body: Option<Value>) -> ServiceResult {
        let url = self.url(path);
        tracing::debug!(method = %method, url = %url, "Sending API request");

        let mut request = self.client.request(method.clone(), &url);
        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(|e| {
            tracing::warn!(method = %method, url = %url, error = %e, "API request failed");
            ServiceFailure::Transport {
                message: e.to_string(),
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let data = read_json(response).await.unwrap_or(Value::Null);
            tracing::warn!(method = %method, url = %url, status = status.as_u16(), "API returned error status");
            return Err(ServiceFailure::Response {
                status: Some(status.as_u16()),
                data,
                message: Some(format!(
                    "Request failed with status code {}",
                    status.as_u16()
                )),
            });
        }

        read_json(response)
            .await
            .map_err(|message| ServiceFailure::Transport { message })
    }
}

/// Decode a JSON body; an empty body is `Null`.
async fn read_json(response: Response) -> Result<Value, String> {
    let bytes = response.bytes().await.map_err(|e| e.to_string())?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(&bytes).map_err(|e| format!("Invalid JSON response: {}", e))
}

#[async_trait]
impl ApiService for HttpApi {
    async fn get(&self, path: &str) -> ServiceResult {
        self.send(Method::GET, path, None).await
    }

    async fn post(&self, path: &str, body: Value) -> ServiceResult {
        self.send(Method::POST, path, Some(body)).await
    }

    async fn put(&self, path: &str, body: Value) -> ServiceResult {
        self.send(Method::PUT, path, Some(body)).await
    }

    async fn delete(&self, path: &str) -> ServiceResult {
        self.send(Method::DELETE, path, None).await
    }
}
