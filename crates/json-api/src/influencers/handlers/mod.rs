//! Influencer Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod index;

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use influencers_app::domain::influencers::{
        data::Accounts,
        records::{InfluencerRecord, InfluencerUuid},
    };

    pub(super) fn make_influencer(
        uuid: InfluencerUuid,
        name: &str,
        last_name: &str,
    ) -> InfluencerRecord {
        InfluencerRecord {
            uuid,
            name: name.to_owned(),
            last_name: last_name.to_owned(),
            accounts: Accounts {
                tiktok: vec![name.to_lowercase()],
                instagram: vec![],
            },
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }
}
