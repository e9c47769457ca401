//! # novachat-api
//!
//! HTTP transport for the Nova chat backend.
//!
//! ## Features
//!
//! - **Single chat endpoint**: `POST {base_url}/chat` with a JSON `ChatRequest`
//! - **Fixed defaults**: JSON content type and a 30 second timeout on every call
//! - **Normalized failures**: every error, whatever its cause, surfaces as one
//!   `TransportError` carrying a message that can be shown to the user as is
//! - **Pluggable diagnostics**: request/response logging goes through a
//!   `RequestLogger` hook from `novachat-logging`
//!
//! ## Example
//!
//! ```rust,no_run
//! use novachat_api::{ChatTransport, ClientConfig, HttpChatClient};
//! use novachat_models::ChatRequest;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = HttpChatClient::new(ClientConfig::from_env())?;
//!
//!     match client.send(&ChatRequest::new("abhi", "Hello!")).await {
//!         Ok(reply) => println!("Nova: {}", reply.response),
//!         Err(e) => eprintln!("{}", e),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;


// Re-export commonly used types
pub use client::{
    ChatTransport,
    HttpChatClient,
};

pub use config::{
    ClientConfig,
    BASE_URL_ENV,
    CHAT_PATH,
    DEFAULT_BASE_URL,
    REQUEST_TIMEOUT,
    normalize_base_url,
    resolve_base_url,
};

pub use error::{
    TransportError,
    TransportErrorKind,
    message_for_status,
    server_message,
    NO_RESPONSE_MESSAGE,
    FALLBACK_NETWORK_MESSAGE,
};
