//! HTTP client for the influencers JSON API.
//!
//! Each operation performs exactly one request and hands back the decoded
//! payload, or the failure exactly as the server reported it.

mod client;
mod errors;
pub mod models;

pub use client::InfluencersClient;
pub use errors::ClientError;
