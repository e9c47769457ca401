use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;
use std::sync::Arc;

use novachat_logging::{ConsoleLogger, RequestLogger};
use novachat_models::{
    ChatRequest, ChatResponse, HealthStatus, HistoryResponse, MemoriesResponse, ProfileResponse, StatusResponse,
};

use crate::client::ChatTransport;
use crate::config::{ClientConfig, CHAT_PATH};
use crate::error::{TransportError, TransportErrorKind};

/// reqwest based client for the Nova backend
pub struct HttpChatClient {
    config: ClientConfig,
    client: Client,
    logger: Arc<dyn RequestLogger>,
}

impl HttpChatClient {
    pub fn new(config: ClientConfig) -> Result<Self, TransportError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| TransportError::from(TransportErrorKind::RequestSetup(e.to_string())))?;

        Ok(Self {
            config,
            client,
            logger: Arc::new(ConsoleLogger::default()),
        })
    }

    /// Replace the diagnostics hook
    pub fn with_logger(mut self, logger: Arc<dyn RequestLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `GET /` - backend liveness
    pub async fn health(&self) -> Result<HealthStatus, TransportError> {
        let url = self.endpoint(&[])?;
        self.execute(Method::GET, url, None).await
    }

    /// `GET /history/{user_id}` - the server-side short-term memory
    pub async fn history(&self, user_id: &str) -> Result<HistoryResponse, TransportError> {
        let url = self.endpoint(&["history", user_id])?;
        self.execute(Method::GET, url, None).await
    }

    /// `GET /profile/{user_id}` - facts the backend has learned about the user
    pub async fn profile(&self, user_id: &str) -> Result<ProfileResponse, TransportError> {
        let url = self.endpoint(&["profile", user_id])?;
        self.execute(Method::GET, url, None).await
    }

    /// `GET /memories/{user_id}?limit=N` - newest long-term memory summaries
    pub async fn memories(&self, user_id: &str, limit: Option<usize>) -> Result<MemoriesResponse, TransportError> {
        let mut url = self.endpoint(&["memories", user_id])?;
        if let Some(limit) = limit {
            url.query_pairs_mut().append_pair("limit", &limit.to_string());
        }
        self.execute(Method::GET, url, None).await
    }

    /// `POST /clear-session/{user_id}` - forget the server-side short-term memory
    pub async fn clear_session(&self, user_id: &str) -> Result<StatusResponse, TransportError> {
        let url = self.endpoint(&["clear-session", user_id])?;
        self.execute(Method::POST, url, None).await
    }

    /// Join path segments onto the base URL, percent-encoding each one
    fn endpoint(&self, segments: &[&str]) -> Result<Url, TransportError> {
        let mut url = Url::parse(&self.config.base_url).map_err(|e| {
            let kind = TransportErrorKind::RequestSetup(format!("invalid base URL '{}': {}", self.config.base_url, e));
            self.logger.on_failure("-", &self.config.base_url, &kind.to_string());
            TransportError::from(kind)
        })?;

        if segments.is_empty() {
            return Ok(url);
        }

        url.path_segments_mut()
            .map_err(|_| {
                let kind = TransportErrorKind::RequestSetup(format!("base URL '{}' cannot carry a path", self.config.base_url));
                self.logger.on_failure("-", &self.config.base_url, &kind.to_string());
                TransportError::from(kind)
            })?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        body: Option<&ChatRequest>,
    ) -> Result<T, TransportError> {
        let method_name = method.as_str().to_string();
        let url_text = url.to_string();

        self.logger.on_request(&method_name, &url_text);

        let result = self.round_trip(method, url, body).await;
        if let Err(kind) = &result {
            self.logger.on_failure(&method_name, &url_text, &kind.to_string());
        }
        result.map_err(TransportError::from)
    }

    async fn round_trip<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        body: Option<&ChatRequest>,
    ) -> Result<T, TransportErrorKind> {
        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(classify)?;
        let status = response.status();

        if !status.is_success() {
            // A truncated error body still leaves the status to report
            let error_text = response.text().await.unwrap_or_default();
            return Err(TransportErrorKind::server(status.as_u16(), &error_text));
        }

        let text = response.text().await.map_err(classify)?;
        self.logger.on_response(status.as_u16(), &text);

        serde_json::from_str(&text)
            .map_err(|e| TransportErrorKind::InvalidResponse(format!("invalid response from server: {}", e)))
    }
}

#[async_trait]
impl ChatTransport for HttpChatClient {
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, TransportError> {
        let url = self.endpoint(&[CHAT_PATH])?;
        self.execute(Method::POST, url, Some(request)).await
    }
}

/// Sort a reqwest failure into "never got an answer" or "could not make the call"
fn classify(err: reqwest::Error) -> TransportErrorKind {
    if err.is_builder() {
        TransportErrorKind::RequestSetup(err.to_string())
    } else {
        log::debug!("request failed without a response: {}", err);
        TransportErrorKind::Network
    }
}
