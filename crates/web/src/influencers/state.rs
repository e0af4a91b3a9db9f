//! List state and fetch tickets.

use leptos::prelude::*;

use influencers_client::{ClientError, models::Influencer};

/// Records on screen plus the ticket of the newest fetch.
///
/// Only the newest fetch may write the list; older fetches that land later are
/// dropped.
#[derive(Debug, Clone, Copy)]
pub struct ListState {
    pub influencers: RwSignal<Vec<Influencer>>,
    pub loading: RwSignal<bool>,
    latest: RwSignal<u64>,
}

impl ListState {
    pub fn new() -> Self {
        Self {
            influencers: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            latest: RwSignal::new(0),
        }
    }

    /// Take a ticket for a new fetch.
    pub fn begin(self) -> u64 {
        self.latest.update(|latest| *latest = latest.saturating_add(1));
        self.loading.set(true);

        self.latest.get_untracked()
    }

    /// Apply a finished fetch, handing back its error if it should be reported.
    pub fn finish(
        self,
        ticket: u64,
        result: Result<Vec<Influencer>, ClientError>,
    ) -> Option<ClientError> {
        if ticket != self.latest.get_untracked() {
            return None;
        }

        self.loading.set(false);

        match result {
            Ok(influencers) => {
                self.influencers.set(influencers);
                None
            }
            Err(error) => {
                self.influencers.set(Vec::new());
                Some(error)
            }
        }
    }

    /// Placeholder rows while the first results are outstanding.
    pub fn show_skeleton(self) -> bool {
        self.loading.get() && self.influencers.with(Vec::is_empty)
    }

    pub fn find(self, id: &str) -> Option<Influencer> {
        self.influencers
            .with(|influencers| influencers.iter().find(|influencer| influencer.id == id).cloned())
    }
}

impl Default for ListState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use influencers_client::models::{Accounts, ApiFailure};

    use super::*;

    fn influencer(id: &str) -> Influencer {
        Influencer {
            id: id.to_owned(),
            name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
            accounts: Accounts::default(),
            created_at: "2026-01-01T00:00:00Z".to_owned(),
            updated_at: "2026-01-01T00:00:00Z".to_owned(),
        }
    }

    fn not_found() -> ClientError {
        ClientError::Api {
            status: 404,
            body: ApiFailure::default(),
        }
    }

    #[test]
    fn latest_fetch_replaces_the_list() {
        let state = ListState::new();

        let ticket = state.begin();

        assert!(state.loading.get_untracked(), "fetch in flight");
        assert!(state.finish(ticket, Ok(vec![influencer("a")])).is_none());
        assert!(!state.loading.get_untracked(), "fetch settled");
        assert_eq!(state.influencers.get_untracked(), vec![influencer("a")]);
    }

    #[test]
    fn stale_fetch_is_ignored() {
        let state = ListState::new();

        let stale = state.begin();
        let fresh = state.begin();

        state.finish(fresh, Ok(vec![influencer("fresh")]));

        assert!(state.finish(stale, Err(not_found())).is_none(), "stale errors are dropped");
        assert_eq!(state.influencers.get_untracked(), vec![influencer("fresh")]);
    }

    #[test]
    fn stale_fetch_keeps_loading_until_latest_lands() {
        let state = ListState::new();

        let stale = state.begin();
        let fresh = state.begin();

        state.finish(stale, Ok(vec![influencer("stale")]));

        assert!(state.loading.get_untracked(), "latest fetch still pending");
        assert!(state.influencers.get_untracked().is_empty());

        state.finish(fresh, Ok(vec![]));

        assert!(!state.loading.get_untracked(), "latest fetch settled");
    }

    #[test]
    fn failed_fetch_clears_the_list() {
        let state = ListState::new();

        let first = state.begin();
        state.finish(first, Ok(vec![influencer("a")]));

        let second = state.begin();
        let error = state.finish(second, Err(not_found()));

        assert_eq!(error.and_then(|error| error.status()), Some(404));
        assert!(state.influencers.get_untracked().is_empty());
    }

    #[test]
    fn find_looks_up_by_id() {
        let state = ListState::new();

        let ticket = state.begin();
        state.finish(ticket, Ok(vec![influencer("a"), influencer("b")]));

        assert_eq!(state.find("b").map(|found| found.id), Some("b".to_owned()));
        assert_eq!(state.find("c"), None);
    }
}
