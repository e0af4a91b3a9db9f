//! Influencers

pub mod data;
pub mod errors;
pub mod filter;
pub mod records;
mod repository;
pub mod service;
pub mod validation;

pub use errors::InfluencersServiceError;
pub use service::*;
