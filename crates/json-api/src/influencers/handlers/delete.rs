//! Delete Influencer Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use influencers_app::domain::influencers::records::InfluencerUuid;

use crate::{
    envelope::{ApiError, ApiResponse, ApiResult, respond},
    extensions::*,
    influencers::{
        errors::{NOT_FOUND, into_api_error},
        models::InfluencerResponse,
    },
    observability::{InfluencerChange, record_influencer_change},
    state::State,
};

const DELETE_FAILED: &str = "Error deleting influencer";
const DELETED: &str = "Influencer deleted successfully";

/// Delete Influencer Handler
///
/// An identifier that is not a UUID cannot name a stored influencer and is
/// reported as not found.
#[endpoint(
    tags("influencers"),
    summary = "Delete Influencer",
    responses(
        (status_code = StatusCode::OK, description = "Influencer deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Influencer not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
    res: &mut Response,
) -> Json<ApiResponse<InfluencerResponse>> {
    respond(res, delete(&id.into_inner(), depot).await)
}

async fn delete(id: &str, depot: &Depot) -> ApiResult<InfluencerResponse> {
    let state = depot.obtain_or_500::<Arc<State>>(DELETE_FAILED)?;

    let Ok(uuid) = id.parse::<InfluencerUuid>() else {
        return Err(ApiError::NotFound(NOT_FOUND));
    };

    let deleted = state
        .app
        .influencers
        .delete_influencer(uuid)
        .await
        .map_err(|error| into_api_error(error, DELETE_FAILED))?;

    record_influencer_change(InfluencerChange::Deleted);

    Ok((
        StatusCode::OK,
        ApiResponse::message_with_data(DELETED, deleted.into()),
    ))
}
