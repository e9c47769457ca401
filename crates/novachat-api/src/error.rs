use thiserror::Error;

/// Shown when the server never answered (timeout, refused, reset)
pub const NO_RESPONSE_MESSAGE: &str = "No response from server. Check your connection.";

/// Shown when a request failed to go out and there is nothing better to say
pub const FALLBACK_NETWORK_MESSAGE: &str = "Network error";

/// Why a request failed, before being flattened into a `TransportError`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportErrorKind {
    /// The server answered with a non-2xx status
    #[error("{message}")]
    Server { status: u16, message: String },
    /// Nothing came back: timeout or connection failure
    #[error("{}", NO_RESPONSE_MESSAGE)]
    Network,
    /// The request could not be built
    #[error("{}", setup_message(.0))]
    RequestSetup(String),
    /// A 2xx arrived but its body is not what the endpoint returns
    #[error("{}", setup_message(.0))]
    InvalidResponse(String),
}

fn setup_message(description: &str) -> &str {
    if description.trim().is_empty() {
        FALLBACK_NETWORK_MESSAGE
    } else {
        description
    }
}

impl TransportErrorKind {
    /// Build a server error from a status code and the raw response body
    pub fn server(status: u16, body: &str) -> Self {
        let provided = server_message(body);
        Self::Server {
            status,
            message: message_for_status(status, provided.as_deref()),
        }
    }
}

/// The single error type callers of the transport ever see.
///
/// It only carries the message meant for the user; the cause is logged and
/// then dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_message(self) -> String {
        self.message
    }
}

impl From<TransportErrorKind> for TransportError {
    fn from(kind: TransportErrorKind) -> Self {
        Self::new(kind.to_string())
    }
}

/// Translate a non-2xx status into the message shown to the user.
///
/// `provided` is the message the server put in its error body, if any; it is
/// only used for 400 and for statuses without a fixed text.
pub fn message_for_status(status: u16, provided: Option<&str>) -> String {
    match status {
        400 => provided
            .map(str::to_string)
            .unwrap_or_else(|| "Bad request. Check your input.".to_string()),
        401 => "Unauthorized. Please log in.".to_string(),
        403 => "Forbidden. You don't have access.".to_string(),
        404 => "Server endpoint not found.".to_string(),
        500 => "Server error. Please try again later.".to_string(),
        other => provided
            .map(str::to_string)
            .unwrap_or_else(|| format!("Error: {}", other)),
    }
}

/// Pull a human readable message out of an error body.
///
/// Looks at `message` first, then at the string form of `detail` that the
/// backend framework uses for its own errors. Blank strings are ignored.
pub fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;

    ["message", "detail"].iter().find_map(|field| {
        value
            .get(field)
            .and_then(|v| v.as_str())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    })
}
