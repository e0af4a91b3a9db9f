//! Test Helpers

use crate::{
    domain::influencers::{
        InfluencersService, InfluencersServiceError,
        data::{Accounts, InfluencerDraft},
        records::InfluencerRecord,
    },
    test::TestContext,
};

pub(crate) async fn create_influencer(
    ctx: &TestContext,
    name: &str,
    last_name: &str,
) -> Result<InfluencerRecord, InfluencersServiceError> {
    ctx.influencers
        .create_influencer(InfluencerDraft {
            name: Some(name.to_owned()),
            last_name: Some(last_name.to_owned()),
            accounts: Accounts::default(),
        })
        .await
}
