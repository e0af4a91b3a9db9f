//! Client Errors

use thiserror::Error;

use crate::models::ApiFailure;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The base URL cannot address API routes.
    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    /// The server answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Api { status: u16, body: ApiFailure },

    /// The request never produced a response.
    #[error("http error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 2xx response whose body is not the expected envelope.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ClientError {
    /// HTTP status reported by the server, if a response arrived.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Field-level validation messages, in server order.
    #[must_use]
    pub fn validation_messages(&self) -> &[String] {
        match self {
            Self::Api { body, .. } => &body.errors,
            _ => &[],
        }
    }

    /// Text suitable for a user-facing notification.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { body, status } => body
                .message
                .clone()
                .unwrap_or_else(|| format!("Request failed with status {status}")),
            Self::InvalidBaseUrl(_) => "The API address is misconfigured".to_owned(),
            Self::Transport(_) => "Could not reach the server".to_owned(),
            Self::Decode(_) => "Unexpected response from the server".to_owned(),
        }
    }
}
