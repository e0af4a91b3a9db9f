//! Name filter for influencer listings.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Case-insensitive substring filter applied to first and last names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameFilter(String);

impl NameFilter {
    /// Build a filter from raw query text.
    ///
    /// Returns `None` when the text is absent or blank, meaning "match everything".
    #[must_use]
    pub fn parse(query: Option<&str>) -> Option<Self> {
        let trimmed = query?.trim();

        (!trimmed.is_empty()).then(|| Self(trimmed.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for NameFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}
