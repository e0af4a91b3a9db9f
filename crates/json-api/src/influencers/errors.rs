//! Influencer Errors

use tracing::error;

use influencers_app::domain::influencers::InfluencersServiceError;

use crate::envelope::ApiError;

pub(crate) const NOT_FOUND: &str = "Influencer not found";

/// Map a service failure onto the envelope, using `message` for unexpected failures.
pub(crate) fn into_api_error(error: InfluencersServiceError, message: &'static str) -> ApiError {
    match error {
        InfluencersServiceError::Validation(errors) => ApiError::Validation(errors.messages()),
        InfluencersServiceError::NotFound => ApiError::NotFound(NOT_FOUND),
        other @ (InfluencersServiceError::AlreadyExists
        | InfluencersServiceError::InvalidData
        | InfluencersServiceError::Sql(_)) => {
            error!("{message}: {other}");

            ApiError::Internal {
                message,
                error: other.to_string(),
            }
        }
    }
}
