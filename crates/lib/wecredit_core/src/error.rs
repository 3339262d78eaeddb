//! Chat request error types.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised while configuring or performing a chat request.
///
/// None of these are shown to the user verbatim; the controller maps every
/// request failure to a fixed message and logs the detail.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Chat backend returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Chat request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Chat response parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Chat response was a JSON null document")]
    EmptyDocument,

    #[error("Config error: {0}")]
    Config(String),
}
