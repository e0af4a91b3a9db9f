//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use influencers_app::{context::AppContext, domain::influencers::MockInfluencersService};

use crate::state::State;

pub(crate) fn state_with_influencers(influencers: MockInfluencersService) -> Arc<State> {
    State::from_app_context(AppContext::new(Arc::new(influencers)))
}

pub(crate) fn influencers_service(influencers: MockInfluencersService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_influencers(influencers)))
            .push(route),
    )
}
