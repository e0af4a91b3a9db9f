//! Influencer Records

use jiff::Timestamp;

use crate::{domain::influencers::data::Accounts, uuids::TypedUuid};

/// Influencer UUID
pub type InfluencerUuid = TypedUuid<InfluencerRecord>;

/// Influencer Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfluencerRecord {
    pub uuid: InfluencerUuid,
    pub name: String,
    pub last_name: String,
    pub accounts: Accounts,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
