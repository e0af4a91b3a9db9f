//! JSON response envelope shared by every influencer endpoint.

use salvo::{
    http::StatusCode,
    oapi::ToSchema,
    prelude::{Json, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Response envelope
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ApiResponse<T: ToSchema + 'static> {
    /// Whether the request succeeded
    pub success: bool,

    /// Human-readable outcome
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Payload on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// One message per failed field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,

    /// Raw error text for unexpected failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: ToSchema + 'static> ApiResponse<T> {
    pub(crate) fn data(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            errors: None,
            error: None,
        }
    }

    pub(crate) fn message_with_data(message: &str, data: T) -> Self {
        Self {
            message: Some(message.to_owned()),
            ..Self::data(data)
        }
    }

    fn failure(message: String) -> Self {
        Self {
            success: false,
            message: Some(message),
            data: None,
            errors: None,
            error: None,
        }
    }
}

/// Failure resolved into a status code and envelope at the handler boundary.
#[derive(Debug, Error)]
pub(crate) enum ApiError {
    #[error("Request body cannot be empty")]
    EmptyBody,

    #[error("Request body is not valid JSON")]
    MalformedBody(String),

    #[error("Request body has fields of the wrong type")]
    InvalidBody(String),

    #[error("Validation failed")]
    Validation(Vec<String>),

    #[error("{0}")]
    NotFound(&'static str),

    #[error("{message}")]
    Internal { message: &'static str, error: String },
}

impl ApiError {
    pub(crate) fn status_code(&self) -> StatusCode {
        match self {
            Self::EmptyBody
            | Self::MalformedBody(_)
            | Self::InvalidBody(_)
            | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub(crate) fn into_response<T: ToSchema + 'static>(self) -> ApiResponse<T> {
        let message = self.to_string();

        match self {
            Self::EmptyBody | Self::NotFound(_) => ApiResponse::failure(message),
            Self::Validation(errors) => ApiResponse {
                errors: Some(errors),
                ..ApiResponse::failure(message)
            },
            Self::MalformedBody(error)
            | Self::InvalidBody(error)
            | Self::Internal { error, .. } => ApiResponse {
                error: Some(error),
                ..ApiResponse::failure(message)
            },
        }
    }
}

/// Outcome of a handler body: the success status and envelope, or a failure.
pub(crate) type ApiResult<T> = Result<(StatusCode, ApiResponse<T>), ApiError>;

/// Write the outcome's status code and return its envelope for rendering.
pub(crate) fn respond<T: ToSchema + 'static>(
    res: &mut Response,
    result: ApiResult<T>,
) -> Json<ApiResponse<T>> {
    let (status, body) = match result {
        Ok(success) => success,
        Err(error) => (error.status_code(), error.into_response()),
    };

    res.status_code(status);

    Json(body)
}
