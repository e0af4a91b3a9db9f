//! Create form rules, independent of the view.

use influencers_client::models::{Accounts, NewInfluencer};

/// Longest name the form accepts, in characters.
pub const MAX_NAME_CHARS: usize = 50;

/// Longest handle the inputs accept.
pub const MAX_HANDLE_CHARS: usize = 30;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Platform {
    #[default]
    Tiktok,
    Instagram,
}

impl Platform {
    pub const ALL: [Self; 2] = [Self::Tiktok, Self::Instagram];

    pub fn value(self) -> &'static str {
        match self {
            Self::Tiktok => "tiktok",
            Self::Instagram => "instagram",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Tiktok => "TikTok",
            Self::Instagram => "Instagram",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|platform| platform.value() == value)
    }
}

/// One (platform, handle) row; `id` keys the row across edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountEntry {
    pub id: u64,
    pub platform: Platform,
    pub handle: String,
}

impl AccountEntry {
    pub fn empty(id: u64) -> Self {
        Self {
            id,
            platform: Platform::default(),
            handle: String::new(),
        }
    }
}

/// Why the pairs cannot be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountsError {
    BlankHandle,
    Duplicate(Platform),
}

impl AccountsError {
    pub fn message(self) -> &'static str {
        match self {
            Self::BlankHandle => "Username input cannot be empty.",
            Self::Duplicate(Platform::Tiktok) => "A tiktok account with same username already exists.",
            Self::Duplicate(Platform::Instagram) => {
                "An instagram account with same username already exists."
            }
        }
    }
}

/// Inline messages for the two name inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NameErrors {
    pub name: Option<&'static str>,
    pub last_name: Option<&'static str>,
}

impl NameErrors {
    pub fn is_empty(self) -> bool {
        self.name.is_none() && self.last_name.is_none()
    }
}

pub fn validate_names(name: &str, last_name: &str) -> NameErrors {
    NameErrors {
        name: check_name(
            name,
            "First name is a required field",
            "First name cannot be longer than 50 characters.",
        ),
        last_name: check_name(
            last_name,
            "Last name is a required field",
            "Last name cannot be longer than 50 characters.",
        ),
    }
}

fn check_name(value: &str, required: &'static str, too_long: &'static str) -> Option<&'static str> {
    let value = value.trim();

    if value.is_empty() {
        Some(required)
    } else if value.chars().count() > MAX_NAME_CHARS {
        Some(too_long)
    } else {
        None
    }
}

/// Split the rows into per-platform handle lists, keeping row order.
///
/// Any blank handle rejects the whole submission before duplicates are checked.
pub fn partition_accounts(entries: &[AccountEntry]) -> Result<Accounts, AccountsError> {
    if entries.iter().any(|entry| entry.handle.trim().is_empty()) {
        return Err(AccountsError::BlankHandle);
    }

    let handles = |platform: Platform| -> Vec<String> {
        entries
            .iter()
            .filter(|entry| entry.platform == platform)
            .map(|entry| entry.handle.clone())
            .collect()
    };

    let accounts = Accounts {
        tiktok: handles(Platform::Tiktok),
        instagram: handles(Platform::Instagram),
    };

    if has_duplicates(&accounts.tiktok) {
        return Err(AccountsError::Duplicate(Platform::Tiktok));
    }

    if has_duplicates(&accounts.instagram) {
        return Err(AccountsError::Duplicate(Platform::Instagram));
    }

    Ok(accounts)
}

fn has_duplicates(handles: &[String]) -> bool {
    handles
        .iter()
        .enumerate()
        .any(|(index, handle)| handles.iter().skip(index + 1).any(|other| other == handle))
}

/// Name checks first, then the account rows; the first failure wins.
pub fn build_submission(
    name: &str,
    last_name: &str,
    entries: &[AccountEntry],
) -> Result<NewInfluencer, SubmissionError> {
    let errors = validate_names(name, last_name);

    if !errors.is_empty() {
        return Err(SubmissionError::Names(errors));
    }

    let accounts = partition_accounts(entries).map_err(SubmissionError::Accounts)?;

    Ok(NewInfluencer {
        name: name.to_owned(),
        last_name: last_name.to_owned(),
        accounts,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionError {
    Names(NameErrors),
    Accounts(AccountsError),
}

/// Row list edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entries {
    rows: Vec<AccountEntry>,
    next_id: u64,
}

impl Entries {
    /// A single empty TikTok row.
    pub fn new() -> Self {
        Self {
            rows: vec![AccountEntry::empty(0)],
            next_id: 1,
        }
    }

    pub fn rows(&self) -> &[AccountEntry] {
        &self.rows
    }

    pub fn row(&self, id: u64) -> Option<&AccountEntry> {
        self.rows.iter().find(|row| row.id == id)
    }

    /// Back to a single empty row under a fresh id.
    pub fn reset(&mut self) {
        self.rows.clear();
        self.add();
    }

    pub fn add(&mut self) {
        self.rows.push(AccountEntry::empty(self.next_id));
        self.next_id = self.next_id.saturating_add(1);
    }

    pub fn remove(&mut self, id: u64) {
        self.rows.retain(|row| row.id != id);
    }

    pub fn set_platform(&mut self, id: u64, platform: Platform) {
        if let Some(row) = self.rows.iter_mut().find(|row| row.id == id) {
            row.platform = platform;
        }
    }

    pub fn set_handle(&mut self, id: u64, handle: String) {
        if let Some(row) = self.rows.iter_mut().find(|row| row.id == id) {
            row.handle = handle;
        }
    }
}

impl Default for Entries {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    // Test-only: lets `?` convert these errors into `TestResult` failures.
    impl std::fmt::Display for AccountsError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{self:?}")
        }
    }

    impl std::fmt::Display for SubmissionError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{self:?}")
        }
    }

    fn entry(id: u64, platform: Platform, handle: &str) -> AccountEntry {
        AccountEntry {
            id,
            platform,
            handle: handle.to_owned(),
        }
    }

    #[test]
    fn names_are_required() {
        let errors = validate_names("  ", "");

        assert_eq!(errors.name, Some("First name is a required field"));
        assert_eq!(errors.last_name, Some("Last name is a required field"));
    }

    #[test]
    fn names_are_capped_at_fifty_characters() {
        let fifty = "a".repeat(50);
        let fifty_one = "a".repeat(51);

        assert!(validate_names(&fifty, &fifty).is_empty());

        let errors = validate_names(&fifty_one, &fifty);

        assert_eq!(
            errors.name,
            Some("First name cannot be longer than 50 characters.")
        );
        assert_eq!(errors.last_name, None);
    }

    #[test]
    fn name_cap_ignores_surrounding_whitespace() {
        let padded = format!("  {}  ", "a".repeat(50));

        assert!(
            validate_names(&padded, &padded).is_empty(),
            "the server trims before measuring"
        );
    }

    #[test]
    fn partition_keeps_order_per_platform() -> TestResult {
        let accounts = partition_accounts(&[
            entry(0, Platform::Tiktok, "b"),
            entry(1, Platform::Instagram, "x"),
            entry(2, Platform::Tiktok, "a"),
        ])?;

        assert_eq!(accounts.tiktok, vec!["b".to_owned(), "a".to_owned()]);
        assert_eq!(accounts.instagram, vec!["x".to_owned()]);

        Ok(())
    }

    #[test]
    fn partition_allows_no_rows() -> TestResult {
        assert_eq!(partition_accounts(&[])?, Accounts::default());

        Ok(())
    }

    #[test]
    fn blank_handle_rejects_submission() {
        let result = partition_accounts(&[
            entry(0, Platform::Tiktok, "ada"),
            entry(1, Platform::Instagram, "   "),
        ]);

        assert_eq!(result, Err(AccountsError::BlankHandle));
    }

    #[test]
    fn blank_handle_is_reported_before_duplicates() {
        let result = partition_accounts(&[
            entry(0, Platform::Tiktok, "ada"),
            entry(1, Platform::Tiktok, "ada"),
            entry(2, Platform::Tiktok, ""),
        ]);

        assert_eq!(result, Err(AccountsError::BlankHandle));
    }

    #[test]
    fn duplicate_handles_name_their_platform() {
        let tiktok = partition_accounts(&[
            entry(0, Platform::Tiktok, "ada"),
            entry(1, Platform::Tiktok, "ada"),
        ]);
        let instagram = partition_accounts(&[
            entry(0, Platform::Instagram, "ada"),
            entry(1, Platform::Instagram, "ada"),
        ]);

        assert_eq!(
            tiktok.map_err(AccountsError::message),
            Err("A tiktok account with same username already exists.")
        );
        assert_eq!(
            instagram.map_err(AccountsError::message),
            Err("An instagram account with same username already exists.")
        );
    }

    #[test]
    fn same_handle_on_different_platforms_is_allowed() {
        let result = partition_accounts(&[
            entry(0, Platform::Tiktok, "ada"),
            entry(1, Platform::Instagram, "ada"),
        ]);

        assert!(result.is_ok(), "platforms are checked independently");
    }

    #[test]
    fn build_submission_checks_names_before_accounts() {
        let result = build_submission("", "lovelace", &[entry(0, Platform::Tiktok, "")]);

        assert!(matches!(result, Err(SubmissionError::Names(_))));
    }

    #[test]
    fn build_submission_sends_names_as_typed() -> TestResult {
        let influencer =
            build_submission("ada", "lovelace", &[entry(0, Platform::Tiktok, "ada")])?;

        assert_eq!(influencer.name, "ada");
        assert_eq!(influencer.last_name, "lovelace");
        assert_eq!(influencer.accounts.tiktok, vec!["ada".to_owned()]);

        Ok(())
    }

    #[test]
    fn entries_start_with_one_empty_tiktok_row() {
        let entries = Entries::new();

        assert_eq!(entries.rows(), [AccountEntry::empty(0)]);
    }

    #[test]
    fn entries_can_be_added_edited_and_removed() {
        let mut entries = Entries::new();

        entries.add();
        entries.set_platform(1, Platform::Instagram);
        entries.set_handle(1, "countess".to_owned());
        entries.remove(0);

        assert_eq!(
            entries.rows(),
            [entry(1, Platform::Instagram, "countess")]
        );

        entries.remove(1);

        assert!(entries.rows().is_empty(), "the list may become empty");
    }

    #[test]
    fn removed_ids_are_not_reused() {
        let mut entries = Entries::new();

        entries.remove(0);
        entries.add();

        assert_eq!(entries.rows().iter().map(|row| row.id).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn reset_leaves_one_row_with_a_fresh_id() {
        let mut entries = Entries::new();

        entries.set_handle(0, "ada".to_owned());
        entries.add();
        entries.reset();

        assert_eq!(entries.rows(), [AccountEntry::empty(2)]);
        assert_eq!(entries.row(0), None);
    }

    #[test]
    fn platform_parses_select_values() {
        assert_eq!(Platform::parse("instagram"), Some(Platform::Instagram));
        assert_eq!(Platform::parse("tiktok"), Some(Platform::Tiktok));
        assert_eq!(Platform::parse("myspace"), None);
    }
}
