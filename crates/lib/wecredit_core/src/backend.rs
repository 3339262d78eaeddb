//! Chat backend.
//!
//! Posts `{"user_message": ...}` to the configured endpoint and reads the
//! `response` field out of the JSON reply. Non-2xx bodies are kept as opaque
//! diagnostic text and never parsed.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::config::ChatConfig;
use crate::error::ChatError;

/// Answer extracted from a successful chat reply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatReply {
    /// The `response` field, if the backend sent one.
    pub response: Option<String>,
}

impl ChatReply {
    /// Parse a 2xx response body.
    ///
    /// A missing `response` or a falsy one (`null`, `false`, `0`, `""`)
    /// yields `None`. Other non-string values are kept as their JSON text.
    /// A top-level `null` has nothing to read the field from and is an error.
    pub fn from_body(raw: &str) -> Result<Self, ChatError> {
        let data: Value = serde_json::from_str(raw)?;

        let response = match data {
            Value::Null => return Err(ChatError::EmptyDocument),
            Value::Object(mut map) => match map.remove("response") {
                None | Some(Value::Null) | Some(Value::Bool(false)) => None,
                Some(Value::Number(n)) if n.as_f64() == Some(0.0) => None,
                Some(Value::String(text)) => (!text.is_empty()).then_some(text),
                Some(other) => Some(other.to_string()),
            },
            _ => None,
        };

        Ok(Self { response })
    }
}

/// Something that can answer a user's question.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Send one question and wait for the answer.
    async fn send(&self, user_message: &str) -> Result<ChatReply, ChatError>;
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    user_message: &'a str,
}

/// [`ChatBackend`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpChatBackend {
    client: Client,
    endpoint: Url,
}

impl HttpChatBackend {
    /// Build a backend with its own HTTP client.
    pub fn new(config: &ChatConfig) -> Result<Self, ChatError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self::with_client(builder.build()?, config.endpoint.clone()))
    }

    /// Build a backend around an existing client.
    pub fn with_client(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }
}

#[async_trait]
impl ChatBackend for HttpChatBackend {
    async fn send(&self, user_message: &str) -> Result<ChatReply, ChatError> {
        let resp = self
            .client
            .post(self.endpoint.clone())
            .json(&ChatRequest { user_message })
            .send()
            .await?;

        let status = resp.status();
        let raw = resp.text().await?;
        log::debug!("raw chat response ({status}): {raw}");

        if !status.is_success() {
            return Err(ChatError::Status { status, body: raw });
        }

        ChatReply::from_body(&raw)
    }
}
