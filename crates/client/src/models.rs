//! Wire models

use serde::{Deserialize, Serialize};

/// Handles grouped by platform, in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accounts {
    #[serde(default)]
    pub tiktok: Vec<String>,

    #[serde(default)]
    pub instagram: Vec<String>,
}

/// Stored influencer as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Influencer {
    /// Opaque identifier
    pub id: String,
    pub name: String,
    pub last_name: String,
    #[serde(default)]
    pub accounts: Accounts,
    pub created_at: String,
    pub updated_at: String,
}

/// Body of a create request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInfluencer {
    pub name: String,
    pub last_name: String,
    pub accounts: Accounts,
}

/// Response envelope shared by every endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub success: bool,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub data: Option<T>,

    /// One message per failed field.
    #[serde(default)]
    pub errors: Vec<String>,

    /// Raw error text for unexpected failures.
    #[serde(default)]
    pub error: Option<String>,
}

/// Failure half of the envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiFailure {
    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub errors: Vec<String>,

    #[serde(default)]
    pub error: Option<String>,
}
