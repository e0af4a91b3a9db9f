//! Influencer Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use influencers_app::domain::influencers::filter::NameFilter;

use crate::{
    envelope::{ApiError, ApiResponse, ApiResult, respond},
    extensions::*,
    influencers::{errors::into_api_error, models::InfluencerResponse},
    state::State,
};

const FETCH_FAILED: &str = "Error fetching influencers";
const NO_MATCHES: &str = "No influencers found matching the criteria";

/// Influencer Index Handler
///
/// Lists influencers in insertion order. `name` filters case-insensitively on
/// either name field; an empty result is reported as not found.
#[endpoint(
    tags("influencers"),
    summary = "List Influencers",
    responses(
        (status_code = StatusCode::OK, description = "Matching influencers"),
        (status_code = StatusCode::NOT_FOUND, description = "No influencers found matching the criteria"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    name: QueryParam<String, false>,
    depot: &mut Depot,
    res: &mut Response,
) -> Json<ApiResponse<Vec<InfluencerResponse>>> {
    respond(res, list(name.into_inner(), depot).await)
}

async fn list(name: Option<String>, depot: &Depot) -> ApiResult<Vec<InfluencerResponse>> {
    let state = depot.obtain_or_500::<Arc<State>>(FETCH_FAILED)?;

    let influencers = state
        .app
        .influencers
        .list_influencers(NameFilter::parse(name.as_deref()))
        .await
        .map_err(|error| into_api_error(error, FETCH_FAILED))?;

    if influencers.is_empty() {
        return Err(ApiError::NotFound(NO_MATCHES));
    }

    Ok((
        StatusCode::OK,
        ApiResponse::data(influencers.into_iter().map(Into::into).collect()),
    ))
}
