// Logging module - request/response diagnostics for the transport client
pub mod request_logger;

use std::sync::Arc;

// Re-export request logging functions
pub use request_logger::{
    log_request,
    log_response,
    log_failure,
};

/// Hook invoked by the transport around every HTTP exchange.
///
/// Implementations are diagnostic only; nothing they do may influence the
/// outcome of a request.
pub trait RequestLogger: Send + Sync {
    /// Called right before a request leaves the client
    fn on_request(&self, method: &str, url: &str);

    /// Called after a successful (2xx) response has been read
    fn on_response(&self, status: u16, body: &str);

    /// Called once a request has been turned into a user-facing error
    fn on_failure(&self, _method: &str, _url: &str, _message: &str) {}
}

/// Writes to the `log` facade, and to stderr with colors when verbose
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLogger {
    pub verbose: bool,
}

impl ConsoleLogger {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn shared(verbose: bool) -> Arc<dyn RequestLogger> {
        Arc::new(Self::new(verbose))
    }
}

impl RequestLogger for ConsoleLogger {
    fn on_request(&self, method: &str, url: &str) {
        log::debug!("{} {}", method, url);
        log_request(method, url, self.verbose);
    }

    fn on_response(&self, status: u16, body: &str) {
        log::debug!("{} {}", status, safe_truncate(body, 200));
        log_response(status, body, self.verbose);
    }

    fn on_failure(&self, method: &str, url: &str, message: &str) {
        log::debug!("{} {} failed: {}", method, url, message);
        log_failure(method, url, message, self.verbose);
    }
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl RequestLogger for NullLogger {
    fn on_request(&self, _method: &str, _url: &str) {}
    fn on_response(&self, _status: u16, _body: &str) {}
}

/// Safely truncate a string to a maximum number of characters
pub fn safe_truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        // Reserve space for "..." suffix
        let trunc_chars = max_chars.saturating_sub(3);
        format!("{}...", s.chars().take(trunc_chars).collect::<String>())
    }
}
