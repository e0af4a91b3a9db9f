//! Create Influencer Handler

use std::sync::Arc;

use salvo::prelude::*;
use serde_json::Value;

use crate::{
    envelope::{ApiError, ApiResponse, ApiResult, respond},
    extensions::*,
    influencers::{
        errors::into_api_error,
        models::{CreateInfluencerRequest, InfluencerResponse},
    },
    observability::{InfluencerChange, record_influencer_change},
    state::State,
};

const CREATE_FAILED: &str = "Error creating influencer";
const CREATED: &str = "Influencer created successfully";

/// Create Influencer Handler
///
/// Validates and normalises the names before storing the influencer.
#[endpoint(
    tags("influencers"),
    summary = "Create Influencer",
    request_body = CreateInfluencerRequest,
    responses(
        (status_code = StatusCode::CREATED, description = "Influencer created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Empty, malformed or invalid body"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Json<ApiResponse<InfluencerResponse>> {
    respond(res, create(req, depot).await)
}

async fn create(req: &mut Request, depot: &Depot) -> ApiResult<InfluencerResponse> {
    let state = depot.obtain_or_500::<Arc<State>>(CREATE_FAILED)?;
    let payload = req.payload().await.or_500(CREATE_FAILED)?;
    let request = parse_body(payload)?;

    let created = state
        .app
        .influencers
        .create_influencer(request.into())
        .await
        .map_err(|error| into_api_error(error, CREATE_FAILED))?;

    record_influencer_change(InfluencerChange::Created);

    Ok((
        StatusCode::CREATED,
        ApiResponse::message_with_data(CREATED, created.into()),
    ))
}

/// Blank bytes, `null` and `{}` all count as an empty body.
///
/// Text that is not JSON is malformed; JSON of the wrong shape is invalid.
fn parse_body(payload: &[u8]) -> Result<CreateInfluencerRequest, ApiError> {
    if payload.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::EmptyBody);
    }

    let value: Value = serde_json::from_slice(payload)
        .map_err(|error| ApiError::MalformedBody(error.to_string()))?;

    match &value {
        Value::Null => return Err(ApiError::EmptyBody),
        Value::Object(fields) if fields.is_empty() => return Err(ApiError::EmptyBody),
        _ => {}
    }

    serde_json::from_value(value).map_err(|error| ApiError::InvalidBody(error.to_string()))
}
