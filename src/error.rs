//! # Token Error Types
//!
//! `TokenError` tags why a token request failed; `TokenAcquisitionError` is the
//! single error `get_token` hands back, keeping the cause reachable via `kind()`.

use http::StatusCode;
use thiserror::Error;

/// Why a token request failed
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("empty response from server")]
    EmptyResponse,

    #[error("response is not valid JSON: {body}")]
    InvalidJson { body: String },

    #[error("{message}")]
    Server { status: StatusCode, message: String },

    #[error("response does not contain a token")]
    MissingTokenField,

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl TokenError {
    /// Build a server error from the `erro` field, falling back to the HTTP status
    pub fn server(status: StatusCode, erro: Option<String>) -> Self {
        let message = erro.unwrap_or_else(|| format!("HTTP status {}", status.as_u16()));
        Self::Server { status, message }
    }

    /// Short label used for metrics
    pub fn reason(&self) -> &'static str {
        match self {
            TokenError::EmptyResponse => "empty_response",
            TokenError::InvalidJson { .. } => "invalid_json",
            TokenError::Server { .. } => "server_error",
            TokenError::MissingTokenField => "missing_token_field",
            TokenError::Transport(_) => "transport",
        }
    }
}

/// The one error type `TokenClient::get_token` returns
#[derive(Debug, Error)]
#[error("could not obtain token: {cause}")]
pub struct TokenAcquisitionError {
    #[source]
    cause: TokenError,
}

impl TokenAcquisitionError {
    pub fn kind(&self) -> &TokenError {
        &self.cause
    }

    pub fn into_kind(self) -> TokenError {
        self.cause
    }
}

impl From<TokenError> for TokenAcquisitionError {
    fn from(cause: TokenError) -> Self {
        Self { cause }
    }
}
