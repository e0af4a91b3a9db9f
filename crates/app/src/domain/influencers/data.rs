//! Influencer Data

/// Social media handles grouped by platform, in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accounts {
    pub tiktok: Vec<String>,
    pub instagram: Vec<String>,
}

/// Unvalidated influencer input as received from a caller.
///
/// `None` means the field was absent from the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfluencerDraft {
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub accounts: Accounts,
}

/// Validated, normalised influencer ready to be stored.
///
/// Only produced by [`validate`](crate::domain::influencers::validation::validate).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInfluencer {
    pub(crate) name: String,
    pub(crate) last_name: String,
    pub(crate) accounts: Accounts,
}

impl NewInfluencer {
    /// Trimmed, capitalised first name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Trimmed, capitalised last name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    #[must_use]
    pub fn accounts(&self) -> &Accounts {
        &self.accounts
    }
}
