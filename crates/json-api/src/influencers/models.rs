//! Influencer request and response bodies

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use influencers_app::domain::influencers::{
    data::{Accounts, InfluencerDraft},
    records::InfluencerRecord,
};

/// Handles grouped by platform
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct AccountsBody {
    /// TikTok handles, in submission order
    #[serde(default)]
    pub tiktok: Vec<String>,

    /// Instagram handles, in submission order
    #[serde(default)]
    pub instagram: Vec<String>,
}

impl From<Accounts> for AccountsBody {
    fn from(accounts: Accounts) -> Self {
        Self {
            tiktok: accounts.tiktok,
            instagram: accounts.instagram,
        }
    }
}

impl From<AccountsBody> for Accounts {
    fn from(body: AccountsBody) -> Self {
        Self {
            tiktok: body.tiktok,
            instagram: body.instagram,
        }
    }
}

/// Create Influencer Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateInfluencerRequest {
    /// First name, 2 to 50 characters after trimming
    pub name: Option<String>,

    /// Last name, 2 to 50 characters after trimming
    pub last_name: Option<String>,

    /// Social media handles
    #[serde(default)]
    pub accounts: AccountsBody,
}

impl From<CreateInfluencerRequest> for InfluencerDraft {
    fn from(request: CreateInfluencerRequest) -> Self {
        Self {
            name: request.name,
            last_name: request.last_name,
            accounts: request.accounts.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InfluencerResponse {
    /// The unique identifier of the influencer
    pub id: Uuid,

    /// First name
    pub name: String,

    /// Last name
    pub last_name: String,

    /// Social media handles
    pub accounts: AccountsBody,

    /// The date and time the influencer was created
    pub created_at: String,

    /// The date and time the influencer was last updated
    pub updated_at: String,
}

impl From<InfluencerRecord> for InfluencerResponse {
    fn from(influencer: InfluencerRecord) -> Self {
        Self {
            id: influencer.uuid.into(),
            name: influencer.name,
            last_name: influencer.last_name,
            accounts: influencer.accounts.into(),
            created_at: influencer.created_at.to_string(),
            updated_at: influencer.updated_at.to_string(),
        }
    }
}
