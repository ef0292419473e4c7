use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub logging: LoggingConfig,
}

/// Remote API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL all resource paths are joined onto (e.g. "http://localhost:3000/api").
    pub base_url: String,
    /// Total request timeout in seconds.
    pub timeout_seconds: u64,
    /// Connection timeout in seconds.
    pub connect_timeout_seconds: u64,
    /// Bearer token sent with every request.
    pub auth_token: Option<String>,
}

impl ApiConfig {
    /// `base_url` without surrounding whitespace or trailing slashes, or
    /// `None` when it is not an http(s) URL.
    pub fn normalized_base_url(&self) -> Option<&str> {
        let url = self.base_url.trim().trim_end_matches('/');
        (url.starts_with("http://") || url.starts_with("https://")).then_some(url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/api".to_string(),
            timeout_seconds: 30,
            connect_timeout_seconds: 5,
            auth_token: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. "info" or "talent_store=debug".
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}
