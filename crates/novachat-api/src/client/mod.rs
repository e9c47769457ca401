use async_trait::async_trait;
use std::sync::Arc;

use novachat_models::{ChatRequest, ChatResponse};

use crate::error::TransportError;

pub mod http;
pub use http::HttpChatClient;

/// Anything able to deliver a chat message and bring back the reply.
///
/// The conversation controller only depends on this trait, so tests and
/// alternative backends can stand in for the HTTP client.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Deliver one message; exactly one attempt, no retries
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, TransportError>;
}

#[async_trait]
impl<T: ChatTransport + ?Sized> ChatTransport for Arc<T> {
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, TransportError> {
        (**self).send(request).await
    }
}
