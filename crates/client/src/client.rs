//! Influencers API client.

use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    errors::ClientError,
    models::{ApiFailure, Envelope, Influencer, NewInfluencer},
};

/// HTTP client for the influencer endpoints.
#[derive(Debug, Clone)]
pub struct InfluencersClient {
    base_url: Url,
    http: Client,
}

impl InfluencersClient {
    /// Create a client rooted at `base_url`, e.g. `"http://localhost:3000"`.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute http(s) URL.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url =
            Url::parse(base_url).map_err(|error| ClientError::InvalidBaseUrl(error.to_string()))?;

        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(base_url.into()));
        }

        Ok(Self {
            base_url,
            http: Client::new(),
        })
    }

    /// List influencers whose first or last name contains `query`.
    ///
    /// A blank query lists everything. The server reports an empty result as
    /// a 404, which surfaces here as [`ClientError::Api`].
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    pub async fn list_influencers(&self, query: &str) -> Result<Vec<Influencer>, ClientError> {
        debug!(query, "listing influencers");

        let request = self
            .http
            .get(self.endpoint(&["influencers"])?)
            .query(&[("name", query)]);

        Ok(send::<Vec<Influencer>>(request)
            .await?
            .data
            .unwrap_or_default())
    }

    /// Create an influencer, returning the stored record.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response; validation
    /// failures carry their messages in [`ClientError::validation_messages`].
    pub async fn create_influencer(
        &self,
        influencer: &NewInfluencer,
    ) -> Result<Influencer, ClientError> {
        debug!("creating influencer");

        let request = self
            .http
            .post(self.endpoint(&["influencers"])?)
            .json(influencer);

        require_data(send(request).await?)
    }

    /// Delete an influencer, returning the removed record.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    pub async fn delete_influencer(&self, id: &str) -> Result<Influencer, ClientError> {
        debug!(id, "deleting influencer");

        let request = self.http.delete(self.endpoint(&["influencers", id])?);

        require_data(send(request).await?)
    }

    /// Append percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }
}

async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<Envelope<T>, ClientError> {
    let response = request.send().await?;
    let status = response.status().as_u16();
    let body = response.bytes().await?;

    decode(status, &body)
}

/// Split a response into its success envelope or an [`ClientError::Api`].
fn decode<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<Envelope<T>, ClientError> {
    if (200..300).contains(&status) {
        return serde_json::from_slice(body).map_err(|error| ClientError::Decode(error.to_string()));
    }

    let body = serde_json::from_slice(body).unwrap_or_else(|_| ApiFailure {
        error: Some(String::from_utf8_lossy(body).into_owned()),
        ..ApiFailure::default()
    });

    Err(ClientError::Api { status, body })
}

fn require_data<T>(envelope: Envelope<T>) -> Result<T, ClientError> {
    envelope
        .data
        .ok_or_else(|| ClientError::Decode("response carried no data".to_owned()))
}
