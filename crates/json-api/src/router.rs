//! App Router

use salvo::{
    Router,
    cors::{AllowOrigin, Cors, CorsHandler},
    http::Method,
};

use crate::{healthcheck, influencers, root};

pub(crate) fn app_router() -> Router {
    Router::new()
        .get(root::handler)
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("influencers")
                .get(influencers::index::handler)
                .post(influencers::create::handler)
                .push(Router::with_path("{id}").delete(influencers::delete::handler)),
        )
}

/// CORS policy for browser clients, `*` allowing any origin.
pub(crate) fn cors(allow_origin: &str) -> CorsHandler {
    let cors = if allow_origin == "*" {
        Cors::new().allow_origin(AllowOrigin::any())
    } else {
        Cors::new().allow_origin(allow_origin)
    };

    cors.allow_methods(vec![Method::GET, Method::POST, Method::DELETE])
        .allow_headers("content-type")
        .into_handler()
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::{
        affix_state::inject,
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use serde_json::{Value, json};
    use testresult::TestResult;

    use influencers_app::domain::influencers::{
        MockInfluencersService,
        data::Accounts,
        records::{InfluencerRecord, InfluencerUuid},
    };

    use crate::test_helpers::state_with_influencers;

    use super::*;

    fn make_service(influencers: MockInfluencersService) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(state_with_influencers(influencers)))
                .push(app_router()),
        )
        .hoop(cors("*"))
    }

    fn untouched() -> MockInfluencersService {
        let mut influencers = MockInfluencersService::new();

        influencers.expect_list_influencers().never();
        influencers.expect_create_influencer().never();
        influencers.expect_delete_influencer().never();

        influencers
    }

    fn ada(uuid: InfluencerUuid) -> InfluencerRecord {
        InfluencerRecord {
            uuid,
            name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
            accounts: Accounts::default(),
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[tokio::test]
    async fn test_routes_influencer_index() -> TestResult {
        let mut influencers = MockInfluencersService::new();

        influencers
            .expect_list_influencers()
            .once()
            .return_once(|_| Ok(vec![]));
        influencers.expect_create_influencer().never();
        influencers.expect_delete_influencer().never();

        let mut res = TestClient::get("http://example.com/influencers")
            .send(&make_service(influencers))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        let body: Value = res.take_json().await?;

        assert_eq!(
            body["message"], "No influencers found matching the criteria",
            "the list handler must have answered"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_routes_influencer_create() -> TestResult {
        let uuid = InfluencerUuid::new();

        let mut influencers = MockInfluencersService::new();

        influencers
            .expect_create_influencer()
            .once()
            .return_once(move |_| Ok(ada(uuid)));
        influencers.expect_list_influencers().never();
        influencers.expect_delete_influencer().never();

        let mut res = TestClient::post("http://example.com/influencers")
            .json(&json!({ "name": "ada", "lastName": "lovelace" }))
            .send(&make_service(influencers))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        let body: Value = res.take_json().await?;

        assert_eq!(body["data"]["id"], uuid.to_string());

        Ok(())
    }

    #[tokio::test]
    async fn test_routes_influencer_delete() -> TestResult {
        let uuid = InfluencerUuid::new();

        let mut influencers = MockInfluencersService::new();

        influencers
            .expect_delete_influencer()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(move |_| Ok(ada(uuid)));
        influencers.expect_list_influencers().never();
        influencers.expect_create_influencer().never();

        let mut res = TestClient::delete(format!("http://example.com/influencers/{uuid}"))
            .send(&make_service(influencers))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: Value = res.take_json().await?;

        assert_eq!(body["message"], "Influencer deleted successfully");

        Ok(())
    }

    #[tokio::test]
    async fn test_routes_root_redirects_to_influencers() {
        let res = TestClient::get("http://example.com/")
            .send(&make_service(untouched()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FOUND));
    }

    #[tokio::test]
    async fn test_cors_preflight_allows_any_origin() {
        let res = TestClient::options("http://example.com/influencers")
            .add_header("origin", "http://localhost:8080", true)
            .add_header("access-control-request-method", "POST", true)
            .send(&make_service(untouched()))
            .await;

        let allowed = res
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok());

        assert_eq!(allowed, Some("*"));
    }
}
