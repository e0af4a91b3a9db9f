//! Influencer validation and normalisation.
//!
//! Applied on insert only. Both name fields are trimmed, checked against the
//! length bounds and then have their first character upper-cased.

use std::fmt::{Display, Formatter, Result as FmtResult};

use smallvec::SmallVec;
use thiserror::Error;

use crate::domain::influencers::data::{InfluencerDraft, NewInfluencer};

/// Minimum length of a name field, in characters, after trimming.
pub const MIN_NAME_LENGTH: usize = 2;

/// Maximum length of a name field, in characters, after trimming.
pub const MAX_NAME_LENGTH: usize = 50;

/// Name field subject to validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    LastName,
}

impl Field {
    fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::LastName => "Last name",
        }
    }
}

/// Constraint a field failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    Required,
    TooShort,
    TooLong,
}

/// One failed field constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub violation: Violation,
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let label = self.field.label();

        match self.violation {
            Violation::Required => write!(f, "{label} is required"),
            Violation::TooShort => {
                write!(f, "{label} must be at least {MIN_NAME_LENGTH} characters")
            }
            Violation::TooLong => write!(f, "{label} cannot exceed {MAX_NAME_LENGTH} characters"),
        }
    }
}

/// Every violated field, in field order (`name` before `lastName`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("validation failed")]
pub struct ValidationErrors(SmallVec<[FieldError; 2]>);

impl ValidationErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Human-readable message per violated field.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

impl FromIterator<FieldError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Validate and normalise a draft.
///
/// # Errors
///
/// Returns one [`FieldError`] per violated field.
pub fn validate(draft: InfluencerDraft) -> Result<NewInfluencer, ValidationErrors> {
    let name = draft.name.as_deref().map(str::trim);
    let last_name = draft.last_name.as_deref().map(str::trim);

    let errors: ValidationErrors = [
        check(Field::Name, name),
        check(Field::LastName, last_name),
    ]
    .into_iter()
    .flatten()
    .collect();

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(NewInfluencer {
        name: capitalize_first(name.unwrap_or_default()),
        last_name: capitalize_first(last_name.unwrap_or_default()),
        accounts: draft.accounts,
    })
}

fn check(field: Field, value: Option<&str>) -> Option<FieldError> {
    let length = value.map_or(0, |value| value.chars().count());

    let violation = match length {
        0 => Violation::Required,
        length if length < MIN_NAME_LENGTH => Violation::TooShort,
        length if length > MAX_NAME_LENGTH => Violation::TooLong,
        _ => return None,
    };

    Some(FieldError { field, violation })
}

/// Upper-case the first character, leaving the rest untouched.
///
/// An empty string stays empty.
#[must_use]
pub fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
