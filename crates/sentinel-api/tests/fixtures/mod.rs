use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sentinel_api::Endpoints;

/// Mock chat/browse backend for testing the HTTP client
pub struct SentinelMockServer {
    server: MockServer,
}

impl SentinelMockServer {
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints::from_base(&self.server.uri())
    }

    /// Mock a successful completion
    pub async fn mock_chat_success(&self, content: &str, model: Option<&str>) {
        let mut body = json!({
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }]
        });
        if let Some(model) = model {
            body["model"] = json!(model);
        }

        Mock::given(method("POST"))
            .and(path("/chat"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Mock a chat response with an arbitrary status and raw body
    pub async fn mock_chat_raw(&self, status: u16, body: &str) {
        Mock::given(method("POST"))
            .and(path("/chat"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Mock a chat error with a JSON error body
    pub async fn mock_chat_error(&self, status: u16) {
        Mock::given(method("POST"))
            .and(path("/chat"))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "error": "model overloaded"
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock a browse response; `None` omits the content field
    pub async fn mock_browse_success(&self, content: Option<&str>) {
        let body = match content {
            Some(content) => json!({ "content": content }),
            None => json!({}),
        };
        Mock::given(method("POST"))
            .and(path("/browse"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_browse_error(&self, status: u16) {
        Mock::given(method("POST"))
            .and(path("/browse"))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "error": "blocked"
            })))
            .mount(&self.server)
            .await;
    }

    /// JSON bodies of every request received so far
    pub async fn received_bodies(&self) -> Vec<serde_json::Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|request| serde_json::from_slice(&request.body).unwrap_or(serde_json::Value::Null))
            .collect()
    }
}

/// Endpoints nothing listens on
pub fn unreachable_endpoints() -> Endpoints {
    Endpoints::from_base("http://127.0.0.1:1")
}
