#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::{json, Value};
use wiremock::matchers::*;
use wiremock::{Mock, MockServer, ResponseTemplate};

use novachat_logging::RequestLogger;

/// Mock Nova backend
pub struct NovaMockServer {
    server: MockServer,
}

impl NovaMockServer {
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Mock successful chat reply
    pub async fn mock_chat_success(&self, request_message: &str, response_text: &str) {
        Mock::given(method("POST"))
            .and(path("/chat"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({
                "user_id": "abhi",
                "message": request_message
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "response": response_text,
                "user_id": "abhi",
                "timestamp": "2024-05-01T10:00:00",
                "profile_updated": false
            })))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Mock chat endpoint answering with an arbitrary status and body
    pub async fn mock_chat_status(&self, status: u16, body: Option<Value>) {
        let template = match body {
            Some(body) => ResponseTemplate::new(status).set_body_json(body),
            None => ResponseTemplate::new(status),
        };

        Mock::given(method("POST"))
            .and(path("/chat"))
            .respond_with(template)
            .mount(&self.server)
            .await;
    }

    /// Mock chat endpoint returning a 200 with a body that is not a chat reply
    pub async fn mock_chat_garbage(&self) {
        Mock::given(method("POST"))
            .and(path("/chat"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&self.server)
            .await;
    }

    /// Mock a reply that arrives after `delay`
    pub async fn mock_slow_chat(&self, delay: Duration) {
        Mock::given(method("POST"))
            .and(path("/chat"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "response": "too late" }))
                    .set_delay(delay),
            )
            .mount(&self.server)
            .await;
    }

    pub async fn mock_health(&self) {
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "online",
                "bot": "Nova"
            })))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_history(&self, user_id: &str, messages: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/history/{}", user_id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "user_id": user_id,
                "messages": messages
            })))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_profile(&self, user_id: &str, profile: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/profile/{}", user_id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "user_id": user_id,
                "profile": profile
            })))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_memories(&self, user_id: &str, limit: usize, memories: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/memories/{}", user_id)))
            .and(query_param("limit", limit.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "user_id": user_id,
                "memories": memories
            })))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    pub async fn mock_clear_session(&self, user_id: &str) {
        Mock::given(method("POST"))
            .and(path(format!("/clear-session/{}", user_id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "cleared" })))
            .expect(1)
            .mount(&self.server)
            .await;
    }
}

/// Serve exactly one raw HTTP response, then hang up.
///
/// Reads the whole request first so closing the socket does not reset the
/// connection before the client has seen the response.
pub async fn serve_raw_once(response: &'static str) -> String {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];

        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);

            let text = String::from_utf8_lossy(&request).to_string();
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        if name.eq_ignore_ascii_case("content-length") {
                            value.trim().parse::<usize>().ok()
                        } else {
                            None
                        }
                    })
                    .unwrap_or(0);
                if request.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }

        socket.write_all(response.as_bytes()).await.unwrap();
        socket.flush().await.unwrap();
    });

    format!("http://{}", addr)
}

/// Event captured by `RecordingLogger`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEvent {
    Request { method: String, url: String },
    Response { status: u16, body: String },
    Failure { message: String },
}

/// Logger that remembers every call, for asserting on diagnostics
#[derive(Default)]
pub struct RecordingLogger {
    events: Mutex<Vec<LogEvent>>,
}

impl RecordingLogger {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<LogEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl RequestLogger for RecordingLogger {
    fn on_request(&self, method: &str, url: &str) {
        self.events.lock().unwrap().push(LogEvent::Request {
            method: method.to_string(),
            url: url.to_string(),
        });
    }

    fn on_response(&self, status: u16, body: &str) {
        self.events.lock().unwrap().push(LogEvent::Response {
            status,
            body: body.to_string(),
        });
    }

    fn on_failure(&self, _method: &str, _url: &str, message: &str) {
        self.events.lock().unwrap().push(LogEvent::Failure {
            message: message.to_string(),
        });
    }
}
