use std::env;
use std::time::Duration;

/// Environment variable holding the backend base URL
pub const BASE_URL_ENV: &str = "NOVA_API_URL";

/// Base URL used when nothing is configured
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Path of the chat endpoint, relative to the base URL
pub const CHAT_PATH: &str = "chat";

/// Timeout applied to every request, connect through body
pub const REQUEST_TIMEOUT: Duration = Duration::from_millis(30_000);

/// Transport configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend root, without trailing slash
    pub base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.as_ref()),
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Read the base URL from `NOVA_API_URL`, falling back to the loopback default
    pub fn from_env() -> Self {
        let value = env::var(BASE_URL_ENV).ok();
        Self::new(resolve_base_url(value.as_deref()))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Pick the configured base URL, or the default when unset or blank
pub fn resolve_base_url(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => DEFAULT_BASE_URL.to_string(),
    }
}

/// Strip surrounding whitespace and trailing slashes so paths can be appended
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
