use thiserror::Error;

/// Errors raised while building the HTTP client.
#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Invalid base URL '{url}': must start with http:// or https://")]
    InvalidBaseUrl { url: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
