use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use sentinel_types::{messages, truncate_chars, BackendReply, Turn, PAGE_EXCERPT_LIMIT};

use crate::client::Backend;
use crate::endpoints::Endpoints;
use crate::error::BackendError;

/// Body of `POST /chat`
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub messages: &'a [Turn],
}

/// Success body of `POST /chat` (OpenAI-compatible subset)
#[derive(Debug, Default, Deserialize)]
pub struct ChatCompletion {
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub model: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletion {
    /// Trimmed content of the first choice, if it has any text
    pub fn reply_text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.as_ref())
            .and_then(|message| message.content.as_deref())
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }
}

/// Body of `POST /browse`
#[derive(Debug, Serialize)]
pub struct BrowseRequest<'a> {
    pub url: &'a str,
}

/// Success body of `POST /browse`
#[derive(Debug, Default, Deserialize)]
pub struct BrowseResponse {
    #[serde(default)]
    pub content: Option<String>,
}

/// reqwest implementation of [`Backend`]
pub struct HttpBackend {
    endpoints: Endpoints,
    timeout: Option<Duration>,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(endpoints: Endpoints) -> Self {
        Self {
            endpoints,
            timeout: None,
            client: reqwest::Client::new(),
        }
    }

    /// Give up on a request after `timeout`; the call then fails like an unreachable host
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    async fn post_json<T, R>(&self, url: &str, body: &T) -> Result<R, BackendError>
    where
        T: Serialize + ?Sized,
        R: for<'de> Deserialize<'de>,
    {
        let request = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .json(body);

        #[cfg(not(target_arch = "wasm32"))]
        let request = match self.timeout {
            Some(timeout) => request.timeout(timeout),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn request_chat(&self, turns: &[Turn]) -> Result<ChatCompletion, BackendError> {
        debug!("POST {} with {} turns", self.endpoints.chat_url, turns.len());
        self.post_json(&self.endpoints.chat_url, &ChatRequest { messages: turns })
            .await
    }

    async fn request_page(&self, url: &str) -> Result<BrowseResponse, BackendError> {
        debug!("POST {} for {}", self.endpoints.browse_url, url);
        self.post_json(&self.endpoints.browse_url, &BrowseRequest { url })
            .await
    }
}

/// Log the error body, decoded as JSON when possible
fn log_failure(service: &str, err: &BackendError) {
    match err {
        BackendError::Status { status, body } => {
            match serde_json::from_str::<serde_json::Value>(body) {
                Ok(json) => warn!("{} failed with HTTP {}: {}", service, status, json),
                Err(_) => warn!("{} failed with HTTP {} (no JSON body)", service, status),
            }
        }
        other => warn!("{} failed: {}", service, other),
    }
}

#[async_trait(?Send)]
impl Backend for HttpBackend {
    async fn send_chat(&self, turns: &[Turn]) -> BackendReply {
        match self.request_chat(turns).await {
            Ok(completion) => {
                let text = completion.reply_text().unwrap_or(messages::EMPTY_REPLY);
                let model = completion
                    .model
                    .as_deref()
                    .map(str::trim)
                    .filter(|model| !model.is_empty())
                    .map(str::to_string);
                debug!("Chat reply from {:?}: {} chars", model, text.len());
                BackendReply::success(text, model)
            }
            Err(err) => {
                log_failure("/chat", &err);
                if err.is_transport() {
                    BackendReply::failure(messages::BACKEND_UNREACHABLE)
                } else {
                    BackendReply::failure(messages::BACKEND_ERROR)
                }
            }
        }
    }

    async fn fetch_page(&self, url: &str) -> BackendReply {
        match self.request_page(url).await {
            Ok(page) => {
                let text = match page.content.as_deref() {
                    Some(content) if !content.is_empty() => {
                        truncate_chars(content, PAGE_EXCERPT_LIMIT)
                    }
                    _ => messages::PAGE_WITHOUT_CONTENT.to_string(),
                };
                BackendReply::success(text, None)
            }
            Err(err) => {
                log_failure("/browse", &err);
                if err.is_transport() {
                    BackendReply::failure(messages::BROWSE_UNREACHABLE)
                } else {
                    BackendReply::failure(messages::BROWSE_FAILED)
                }
            }
        }
    }
}
