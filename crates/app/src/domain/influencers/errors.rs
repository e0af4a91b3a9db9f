//! Influencers service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::influencers::validation::ValidationErrors;

#[derive(Debug, Error)]
pub enum InfluencersServiceError {
    #[error("validation failed")]
    Validation(#[from] ValidationErrors),

    #[error("influencer not found")]
    NotFound,

    #[error("influencer already exists")]
    AlreadyExists,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error: {0}")]
    Sql(#[source] Error),
}

impl From<Error> for InfluencersServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::CheckViolation | ErrorKind::NotNullViolation) => Self::InvalidData,
            Some(ErrorKind::ForeignKeyViolation | ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        let error = InfluencersServiceError::from(Error::RowNotFound);

        assert!(
            matches!(error, InfluencersServiceError::NotFound),
            "expected NotFound, got {error:?}"
        );
    }

    #[test]
    fn pool_errors_map_to_sql() {
        let error = InfluencersServiceError::from(Error::PoolTimedOut);

        assert!(
            matches!(error, InfluencersServiceError::Sql(Error::PoolTimedOut)),
            "expected Sql, got {error:?}"
        );
    }
}
