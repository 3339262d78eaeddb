//! Chat backend configuration.
//!
//! Resolves the chat endpoint and the optional request timeout from
//! named settings, falling back to the local development backend.

use std::time::Duration;

use url::Url;

use crate::error::ChatError;

/// Endpoint used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/chat";

/// Environment variable overriding the chat endpoint.
pub const ENDPOINT_ENV: &str = "WECREDIT_CHAT_ENDPOINT";

/// Environment variable setting the request timeout in whole seconds.
pub const TIMEOUT_ENV: &str = "WECREDIT_CHAT_TIMEOUT_SECS";

/// Resolved configuration for the chat backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    /// Full URL the question is posted to.
    pub endpoint: Url,
    /// Request timeout; `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl ChatConfig {
    /// Build a config for `endpoint` with no timeout.
    ///
    /// Only `http` and `https` URLs are accepted.
    pub fn new(endpoint: &str) -> Result<Self, ChatError> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| ChatError::Config(format!("invalid chat endpoint {endpoint:?}: {e}")))?;

        match endpoint.scheme() {
            "http" | "https" => {}
            other => {
                return Err(ChatError::Config(format!(
                    "unsupported chat endpoint scheme: {other}"
                )));
            }
        }

        Ok(Self {
            endpoint,
            timeout: None,
        })
    }

    /// Replace the request timeout.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Resolve config through a variable lookup keyed by
    /// [`ENDPOINT_ENV`] and [`TIMEOUT_ENV`].
    ///
    /// A missing or blank endpoint falls back to [`DEFAULT_ENDPOINT`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ChatError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = lookup(ENDPOINT_ENV)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let timeout = match lookup(TIMEOUT_ENV) {
            Some(raw) => parse_timeout(&raw)?,
            None => None,
        };

        Ok(Self::new(endpoint.trim())?.with_timeout(timeout))
    }
}

/// Parse a timeout in whole seconds. `0` and blank disable the timeout.
pub fn parse_timeout(raw: &str) -> Result<Option<Duration>, ChatError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    let secs: u64 = raw
        .parse()
        .map_err(|_| ChatError::Config(format!("invalid {TIMEOUT_ENV}: {raw:?}")))?;

    Ok((secs > 0).then(|| Duration::from_secs(secs)))
}
